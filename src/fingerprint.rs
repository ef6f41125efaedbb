//! Typed value fingerprints for partitioning and join probing.
//!
//! Multi-column keys are hashed by chaining: each field is hashed with the
//! previous field's output as its seed. Absent values leave the seed as is.

use crate::xxh64::{hash_bytes, hash_int, hash_long, HashError};

pub trait Fingerprint {
    fn fingerprint(&self, seed: u64) -> u64;
}

macro_rules! fingerprint_as_int {
    ($($ty:ty),*) => {
        $(
            impl Fingerprint for $ty {
                #[inline]
                fn fingerprint(&self, seed: u64) -> u64 {
                    hash_int(*self as i32 as u32, seed)
                }
            }
        )*
    };
}

macro_rules! fingerprint_as_long {
    ($($ty:ty),*) => {
        $(
            impl Fingerprint for $ty {
                #[inline]
                fn fingerprint(&self, seed: u64) -> u64 {
                    hash_long(*self as i64 as u64, seed)
                }
            }
        )*
    };
}

fingerprint_as_int!(i8, i16, i32, u8, u16, u32);
fingerprint_as_long!(i64, u64, isize, usize);

impl Fingerprint for bool {
    #[inline]
    fn fingerprint(&self, seed: u64) -> u64 {
        hash_int(u32::from(*self), seed)
    }
}

impl Fingerprint for f32 {
    #[inline]
    fn fingerprint(&self, seed: u64) -> u64 {
        let bits = if *self == 0.0 {
            0
        } else if self.is_nan() {
            f32::NAN.to_bits()
        } else {
            self.to_bits()
        };
        hash_int(bits, seed)
    }
}

impl Fingerprint for f64 {
    #[inline]
    fn fingerprint(&self, seed: u64) -> u64 {
        let bits = if *self == 0.0 {
            0
        } else if self.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        };
        hash_long(bits, seed)
    }
}

impl Fingerprint for [u8] {
    #[inline]
    fn fingerprint(&self, seed: u64) -> u64 {
        hash_bytes(self, seed)
    }
}

impl Fingerprint for Vec<u8> {
    #[inline]
    fn fingerprint(&self, seed: u64) -> u64 {
        hash_bytes(self, seed)
    }
}

impl Fingerprint for str {
    #[inline]
    fn fingerprint(&self, seed: u64) -> u64 {
        hash_bytes(self.as_bytes(), seed)
    }
}

impl Fingerprint for String {
    #[inline]
    fn fingerprint(&self, seed: u64) -> u64 {
        hash_bytes(self.as_bytes(), seed)
    }
}

impl<T: Fingerprint> Fingerprint for Option<T> {
    #[inline]
    fn fingerprint(&self, seed: u64) -> u64 {
        match self {
            Some(value) => value.fingerprint(seed),
            None => seed,
        }
    }
}

impl<T: Fingerprint + ?Sized> Fingerprint for &T {
    #[inline]
    fn fingerprint(&self, seed: u64) -> u64 {
        (**self).fingerprint(seed)
    }
}

/// Chained hash of a row of fields, left to right.
pub fn hash_fields(fields: &[&dyn Fingerprint], seed: u64) -> u64 {
    fields
        .iter()
        .fold(seed, |acc, field| field.fingerprint(acc))
}

/// Maps a hash onto `[0, partitions)`.
#[inline]
pub fn partition_for(hash: u64, partitions: usize) -> Result<usize, HashError> {
    if partitions == 0 {
        return Err(HashError::ZeroPartitions);
    }
    Ok((hash % partitions as u64) as usize)
}
