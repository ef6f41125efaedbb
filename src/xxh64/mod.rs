//! Seeded xxHash64 over scalars and byte views.
//!
//! Every entry point is a pure function of `(seed, input bytes)`. Scalar
//! entries produce exactly the hash of the value's little-endian encoding,
//! without building a buffer.

use crate::view::ByteView;
use std::fmt;
use thiserror::Error;

pub(crate) mod round;

pub use round::{avalanche, PRIME64_1, PRIME64_2, PRIME64_3, PRIME64_4, PRIME64_5};
use round::{mix_byte, mix_half, mix_word, Lanes, STRIPE};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("word-aligned input must be a multiple of 8 bytes, got {len}")]
    Misaligned { len: usize },
    #[error("window {offset}+{len} exceeds buffer of {available} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },
    #[error("output holds {out} slots for {keys} keys")]
    LengthMismatch { keys: usize, out: usize },
    #[error("partition count must be positive")]
    ZeroPartitions,
}

/// An xxHash64 instance bound to one seed.
///
/// Holds nothing but the seed, so it is `Copy` and can be shared freely
/// across threads.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct XxHash64 {
    seed: u64,
}

impl XxHash64 {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub const fn hash_int(&self, value: u32) -> u64 {
        hash_int(value, self.seed)
    }

    #[inline]
    pub const fn hash_long(&self, value: u64) -> u64 {
        hash_long(value, self.seed)
    }

    #[inline]
    pub fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        hash_bytes(bytes, self.seed)
    }

    #[inline]
    pub fn hash_view<V: ByteView + ?Sized>(&self, view: &V) -> u64 {
        hash_view(view, self.seed)
    }

    #[inline]
    pub fn hash_words(&self, bytes: &[u8]) -> Result<u64, HashError> {
        hash_words(bytes, self.seed)
    }

    #[inline]
    pub fn hash_words_view<V: ByteView + ?Sized>(&self, view: &V) -> Result<u64, HashError> {
        hash_words_view(view, self.seed)
    }
}

impl fmt::Display for XxHash64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xxHash64(seed={})", self.seed)
    }
}

/// Hash of the 4-byte little-endian encoding of `value`.
#[inline]
pub const fn hash_int(value: u32, seed: u64) -> u64 {
    let hash = seed.wrapping_add(PRIME64_5).wrapping_add(4);
    avalanche(mix_half(hash, value))
}

/// Hash of the 8-byte little-endian encoding of `value`.
#[inline]
pub const fn hash_long(value: u64, seed: u64) -> u64 {
    let hash = seed.wrapping_add(PRIME64_5).wrapping_add(8);
    avalanche(mix_word(hash, value))
}

#[inline]
pub fn hash_bytes(bytes: &[u8], seed: u64) -> u64 {
    hash_view(bytes, seed)
}

/// General path: any length, including the 4-byte and single-byte tail.
pub fn hash_view<V: ByteView + ?Sized>(view: &V, seed: u64) -> u64 {
    let len = view.len();
    let hash = words_block(view, seed);
    avalanche(residual_tail(hash, view, len & !7))
}

/// Word-aligned path. Rejects lengths that are not a multiple of 8 instead
/// of truncating; accepted inputs hash exactly as through [`hash_bytes`].
#[inline]
pub fn hash_words(bytes: &[u8], seed: u64) -> Result<u64, HashError> {
    hash_words_view(bytes, seed)
}

pub fn hash_words_view<V: ByteView + ?Sized>(view: &V, seed: u64) -> Result<u64, HashError> {
    let len = view.len();
    if len % 8 != 0 {
        tracing::trace!(target: "xxh64::input", len, "words_block.misaligned");
        return Err(HashError::Misaligned { len });
    }
    Ok(avalanche(words_block(view, seed)))
}

/// Stripe loop, lane fold, length mix and whole 8-byte words. The result
/// still needs the sub-word tail and [`avalanche`].
fn words_block<V: ByteView + ?Sized>(view: &V, seed: u64) -> u64 {
    let len = view.len();
    let mut offset = 0usize;
    let mut hash = if len >= STRIPE {
        let mut lanes = Lanes::new(seed);
        while offset + STRIPE <= len {
            lanes.consume(view, offset);
            offset += STRIPE;
        }
        lanes.fold()
    } else {
        seed.wrapping_add(PRIME64_5)
    };
    hash = hash.wrapping_add(len as u64);
    word_tail(hash, view, offset)
}

/// Folds whole 8-byte words from `offset` to the last word boundary.
#[inline]
pub(crate) fn word_tail<V: ByteView + ?Sized>(mut hash: u64, view: &V, mut offset: usize) -> u64 {
    let len = view.len();
    while offset + 8 <= len {
        hash = mix_word(hash, view.u64_at(offset));
        offset += 8;
    }
    hash
}

/// Folds the final 0..=7 bytes starting at `offset`: one 4-byte word when
/// possible, then single bytes.
#[inline]
pub(crate) fn residual_tail<V: ByteView + ?Sized>(
    mut hash: u64,
    view: &V,
    mut offset: usize,
) -> u64 {
    let len = view.len();
    debug_assert!(len - offset < 8);
    if offset + 4 <= len {
        hash = mix_half(hash, view.u32_at(offset));
        offset += 4;
    }
    while offset < len {
        hash = mix_byte(hash, view.byte_at(offset));
        offset += 1;
    }
    hash
}
