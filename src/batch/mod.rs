//! Hashing many keys at once.
//!
//! Every path (AVX2, scalar, rayon chunks) writes exactly what the
//! per-value functions in [`crate::xxh64`] return.

use crate::xxh64::{hash_bytes, HashError};

pub(crate) mod scalar;

#[cfg(target_arch = "x86_64")]
mod x86_64;

/// Tuning for the `*_with` batch entries.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Inputs at least this long are split across the rayon pool.
    pub parallel_threshold: usize,
    /// Keys per parallel task.
    pub chunk_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        crate::cpu::detect_features().optimal_batch_config()
    }
}

/// `out[i] = hash_long(keys[i], seed)` on the calling thread.
pub fn hash_u64_batch(keys: &[u64], seed: u64, out: &mut [u64]) -> Result<(), HashError> {
    check_lengths(keys.len(), out.len())?;
    dispatch_u64(keys, seed, out);
    Ok(())
}

/// `out[i] = hash_int(keys[i], seed)` on the calling thread.
pub fn hash_u32_batch(keys: &[u32], seed: u64, out: &mut [u64]) -> Result<(), HashError> {
    check_lengths(keys.len(), out.len())?;
    dispatch_u32(keys, seed, out);
    Ok(())
}

pub fn hash_u64_batch_with(
    keys: &[u64],
    seed: u64,
    out: &mut [u64],
    cfg: &BatchConfig,
) -> Result<(), HashError> {
    check_lengths(keys.len(), out.len())?;
    run_chunked(keys, seed, out, cfg, dispatch_u64);
    Ok(())
}

pub fn hash_u32_batch_with(
    keys: &[u32],
    seed: u64,
    out: &mut [u64],
    cfg: &BatchConfig,
) -> Result<(), HashError> {
    check_lengths(keys.len(), out.len())?;
    run_chunked(keys, seed, out, cfg, dispatch_u32);
    Ok(())
}

pub fn hash_bytes_batch<K: AsRef<[u8]>>(keys: &[K], seed: u64) -> Vec<u64> {
    keys.iter().map(|k| hash_bytes(k.as_ref(), seed)).collect()
}

pub fn hash_bytes_batch_with<K>(keys: &[K], seed: u64, cfg: &BatchConfig) -> Vec<u64>
where
    K: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if keys.len() >= cfg.parallel_threshold {
            tracing::debug!(
                target: "xxh64::batch",
                keys = keys.len(),
                chunk_size = cfg.chunk_size,
                "batch.bytes.parallel"
            );
            return keys
                .par_iter()
                .with_min_len(cfg.chunk_size.max(1))
                .map(|k| hash_bytes(k.as_ref(), seed))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = cfg;
    hash_bytes_batch(keys, seed)
}

fn check_lengths(keys: usize, out: usize) -> Result<(), HashError> {
    if keys != out {
        tracing::trace!(target: "xxh64::input", keys, out, "batch.length_mismatch");
        return Err(HashError::LengthMismatch { keys, out });
    }
    Ok(())
}

fn run_chunked<K: Sync>(
    keys: &[K],
    seed: u64,
    out: &mut [u64],
    cfg: &BatchConfig,
    kernel: fn(&[K], u64, &mut [u64]),
) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if keys.len() >= cfg.parallel_threshold {
            let chunk = cfg.chunk_size.max(1);
            tracing::debug!(
                target: "xxh64::batch",
                keys = keys.len(),
                chunk_size = chunk,
                "batch.parallel"
            );
            keys.par_chunks(chunk)
                .zip(out.par_chunks_mut(chunk))
                .for_each(|(k, o)| kernel(k, seed, o));
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = cfg;
    kernel(keys, seed, out);
}

fn dispatch_u64(keys: &[u64], seed: u64, out: &mut [u64]) {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            return unsafe { x86_64::hash_long_avx2(keys, seed, out) };
        }
    }
    scalar::hash_long_scalar(keys, seed, out);
}

fn dispatch_u32(keys: &[u32], seed: u64, out: &mut [u64]) {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            return unsafe { x86_64::hash_int_avx2(keys, seed, out) };
        }
    }
    scalar::hash_int_scalar(keys, seed, out);
}
