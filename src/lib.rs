//! xxh64_fingerprint — seeded xxHash64 fingerprints.
//!
//! - Scalar fast paths (`hash_int`, `hash_long`) equal to hashing the value's little-endian bytes.
//! - Bulk hashing over any [`ByteView`]; a word-aligned entry rejects lengths not divisible by 8.
//! - Streaming digest, `std::hash` adapters, typed row fingerprints and batch hashing on top.
//!
//! Not a cryptographic hash. All outputs are pure functions of `(seed, bytes)`.

mod build_hasher;
pub mod batch;
pub mod cpu;
pub mod fingerprint;
pub mod stream;
pub mod view;
pub mod xxh64;

pub use batch::{
    hash_bytes_batch, hash_bytes_batch_with, hash_u32_batch, hash_u32_batch_with, hash_u64_batch,
    hash_u64_batch_with, BatchConfig,
};
pub use build_hasher::{XxHashMap, XxHashSet, Xxh64BuildHasher, Xxh64Hasher};
pub use fingerprint::{hash_fields, partition_for, Fingerprint};
pub use stream::Xxh64State;
pub use view::{ByteView, Window};
pub use xxh64::{
    hash_bytes, hash_int, hash_long, hash_view, hash_words, hash_words_view, HashError, XxHash64,
};
