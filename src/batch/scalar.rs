use crate::xxh64::{hash_int, hash_long};

pub fn hash_long_scalar(keys: &[u64], seed: u64, out: &mut [u64]) {
    for (slot, &key) in out.iter_mut().zip(keys) {
        *slot = hash_long(key, seed);
    }
}

pub fn hash_int_scalar(keys: &[u32], seed: u64, out: &mut [u64]) {
    for (slot, &key) in out.iter_mut().zip(keys) {
        *slot = hash_int(key, seed);
    }
}
