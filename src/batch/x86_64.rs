use crate::xxh64::{PRIME64_1, PRIME64_2, PRIME64_3, PRIME64_4, PRIME64_5};
use core::arch::x86_64::{
    __m128i, __m256i, _mm256_add_epi64, _mm256_cvtepu32_epi64, _mm256_loadu_si256,
    _mm256_mul_epu32, _mm256_or_si256, _mm256_set1_epi64x, _mm256_slli_epi64, _mm256_srli_epi64,
    _mm256_storeu_si256, _mm256_xor_si256, _mm_loadu_si128,
};

#[allow(unsafe_op_in_unsafe_fn)]
#[target_feature(enable = "avx2")]
unsafe fn mul_const_u64(x: __m256i, c: u64) -> __m256i {
    // x = a + (b << 32), c = c0 + (c1 << 32)
    // x*c mod 2^64 = a*c0 + ((a*c1 + b*c0) << 32)
    let c0 = _mm256_set1_epi64x((c as u32) as i64);
    let c1 = _mm256_set1_epi64x((c >> 32) as i64);

    let a_c0 = _mm256_mul_epu32(x, c0);
    let a_c1 = _mm256_mul_epu32(x, c1);
    let b = _mm256_srli_epi64(x, 32);
    let b_c0 = _mm256_mul_epu32(b, c0);
    let hi = _mm256_slli_epi64(_mm256_add_epi64(a_c1, b_c0), 32);
    _mm256_add_epi64(a_c0, hi)
}

// AVX2 has no 64-bit rotate; the shift pairs must sum to 64.
#[allow(unsafe_op_in_unsafe_fn)]
#[target_feature(enable = "avx2")]
unsafe fn rotl23(x: __m256i) -> __m256i {
    _mm256_or_si256(_mm256_slli_epi64(x, 23), _mm256_srli_epi64(x, 41))
}

#[allow(unsafe_op_in_unsafe_fn)]
#[target_feature(enable = "avx2")]
unsafe fn rotl27(x: __m256i) -> __m256i {
    _mm256_or_si256(_mm256_slli_epi64(x, 27), _mm256_srli_epi64(x, 37))
}

#[allow(unsafe_op_in_unsafe_fn)]
#[target_feature(enable = "avx2")]
unsafe fn rotl31(x: __m256i) -> __m256i {
    _mm256_or_si256(_mm256_slli_epi64(x, 31), _mm256_srli_epi64(x, 33))
}

#[allow(unsafe_op_in_unsafe_fn)]
#[target_feature(enable = "avx2")]
unsafe fn avalanche_vec(mut h: __m256i) -> __m256i {
    h = _mm256_xor_si256(h, _mm256_srli_epi64(h, 33));
    h = mul_const_u64(h, PRIME64_2);
    h = _mm256_xor_si256(h, _mm256_srli_epi64(h, 29));
    h = mul_const_u64(h, PRIME64_3);
    _mm256_xor_si256(h, _mm256_srli_epi64(h, 32))
}

#[allow(unsafe_op_in_unsafe_fn)]
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn hash_long_avx2(keys: &[u64], seed: u64, out: &mut [u64]) {
    debug_assert_eq!(keys.len(), out.len());
    let n = keys.len();
    let mut i = 0usize;
    let start = _mm256_set1_epi64x(seed.wrapping_add(PRIME64_5).wrapping_add(8) as i64);
    let prime4 = _mm256_set1_epi64x(PRIME64_4 as i64);

    while i + 4 <= n {
        let x = _mm256_loadu_si256(keys.as_ptr().add(i) as *const __m256i);
        let k = mul_const_u64(rotl31(mul_const_u64(x, PRIME64_2)), PRIME64_1);
        let mut h = rotl27(_mm256_xor_si256(start, k));
        h = _mm256_add_epi64(mul_const_u64(h, PRIME64_1), prime4);
        _mm256_storeu_si256(out.as_mut_ptr().add(i) as *mut __m256i, avalanche_vec(h));
        i += 4;
    }

    super::scalar::hash_long_scalar(&keys[i..], seed, &mut out[i..]);
}

#[allow(unsafe_op_in_unsafe_fn)]
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn hash_int_avx2(keys: &[u32], seed: u64, out: &mut [u64]) {
    debug_assert_eq!(keys.len(), out.len());
    let n = keys.len();
    let mut i = 0usize;
    let start = _mm256_set1_epi64x(seed.wrapping_add(PRIME64_5).wrapping_add(4) as i64);
    let prime3 = _mm256_set1_epi64x(PRIME64_3 as i64);

    while i + 4 <= n {
        let x = _mm256_cvtepu32_epi64(_mm_loadu_si128(keys.as_ptr().add(i) as *const __m128i));
        let mut h = rotl23(_mm256_xor_si256(start, mul_const_u64(x, PRIME64_1)));
        h = _mm256_add_epi64(mul_const_u64(h, PRIME64_2), prime3);
        _mm256_storeu_si256(out.as_mut_ptr().add(i) as *mut __m256i, avalanche_vec(h));
        i += 4;
    }

    super::scalar::hash_int_scalar(&keys[i..], seed, &mut out[i..]);
}
