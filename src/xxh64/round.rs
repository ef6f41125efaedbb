//! Mixing primitives shared by every xxHash64 entry path.

use crate::view::ByteView;

pub const PRIME64_1: u64 = 0x9E37_79B1_85EB_CA87;
pub const PRIME64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
pub const PRIME64_3: u64 = 0x1656_67B1_9E37_79F9;
pub const PRIME64_4: u64 = 0x85EB_CA77_C2B2_AE63;
pub const PRIME64_5: u64 = 0x27D4_EB2F_1656_67C5;

/// Bytes consumed by one pass over the four lanes.
pub const STRIPE: usize = 32;

#[inline(always)]
const fn round(acc: u64, word: u64) -> u64 {
    acc.wrapping_add(word.wrapping_mul(PRIME64_2))
        .rotate_left(31)
        .wrapping_mul(PRIME64_1)
}

#[inline(always)]
const fn merge_round(hash: u64, lane: u64) -> u64 {
    (hash ^ round(0, lane))
        .wrapping_mul(PRIME64_1)
        .wrapping_add(PRIME64_4)
}

/// Four independent accumulators for the 32-byte stripe loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lanes([u64; 4]);

impl Lanes {
    #[inline(always)]
    pub(crate) const fn new(seed: u64) -> Self {
        Self([
            seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
            seed.wrapping_add(PRIME64_2),
            seed,
            seed.wrapping_sub(PRIME64_1),
        ])
    }

    /// Mix one stripe starting at `offset`. Caller guarantees `offset + 32 <= view.len()`.
    #[inline(always)]
    pub(crate) fn consume<V: ByteView + ?Sized>(&mut self, view: &V, offset: usize) {
        let [v1, v2, v3, v4] = &mut self.0;
        *v1 = round(*v1, view.u64_at(offset));
        *v2 = round(*v2, view.u64_at(offset + 8));
        *v3 = round(*v3, view.u64_at(offset + 16));
        *v4 = round(*v4, view.u64_at(offset + 24));
    }

    #[inline]
    pub(crate) const fn fold(&self) -> u64 {
        let [v1, v2, v3, v4] = self.0;
        let mut hash = v1
            .rotate_left(1)
            .wrapping_add(v2.rotate_left(7))
            .wrapping_add(v3.rotate_left(12))
            .wrapping_add(v4.rotate_left(18));
        hash = merge_round(hash, v1);
        hash = merge_round(hash, v2);
        hash = merge_round(hash, v3);
        merge_round(hash, v4)
    }
}

/// Fold one little-endian 64-bit word into the running hash.
#[inline(always)]
pub(crate) const fn mix_word(hash: u64, word: u64) -> u64 {
    (hash ^ round(0, word))
        .rotate_left(27)
        .wrapping_mul(PRIME64_1)
        .wrapping_add(PRIME64_4)
}

/// Fold one little-endian 32-bit word, zero-extended.
#[inline(always)]
pub(crate) const fn mix_half(hash: u64, half: u32) -> u64 {
    (hash ^ (half as u64).wrapping_mul(PRIME64_1))
        .rotate_left(23)
        .wrapping_mul(PRIME64_2)
        .wrapping_add(PRIME64_3)
}

#[inline(always)]
pub(crate) const fn mix_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ (byte as u64).wrapping_mul(PRIME64_5))
        .rotate_left(11)
        .wrapping_mul(PRIME64_1)
}

/// Final avalanche. Must be the last step before a value leaves the crate.
#[inline(always)]
pub const fn avalanche(mut hash: u64) -> u64 {
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(PRIME64_2);
    hash ^= hash >> 29;
    hash = hash.wrapping_mul(PRIME64_3);
    hash ^= hash >> 32;
    hash
}
