use crate::stream::Xxh64State;
use std::hash::{BuildHasher, Hasher};

/// `std::hash::Hasher` backed by the streaming xxHash64 state.
///
/// Integer writes feed little-endian bytes, so `Hash` impls produce the same
/// value on every platform.
#[derive(Debug, Clone, Default)]
pub struct Xxh64Hasher {
    state: Xxh64State,
}

impl Xxh64Hasher {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: Xxh64State::new(seed),
        }
    }
}

impl Hasher for Xxh64Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state.update(bytes);
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.state.update(&[i]);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.state.update(&i.to_le_bytes());
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.state.update(&i.to_le_bytes());
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.state.update(&i.to_le_bytes());
    }

    #[inline]
    fn write_u128(&mut self, i: u128) {
        self.state.update(&i.to_le_bytes());
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state.digest()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Xxh64BuildHasher {
    seed: u64,
}

impl Xxh64BuildHasher {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl BuildHasher for Xxh64BuildHasher {
    type Hasher = Xxh64Hasher;

    #[inline]
    fn build_hasher(&self) -> Xxh64Hasher {
        Xxh64Hasher::with_seed(self.seed)
    }
}

pub type XxHashMap<K, V> = hashbrown::HashMap<K, V, Xxh64BuildHasher>;
pub type XxHashSet<K> = hashbrown::HashSet<K, Xxh64BuildHasher>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xxh64::{hash_bytes, hash_int, hash_long};
    use std::hash::Hash;

    #[test]
    fn fixed_width_writes_match_scalar_paths() {
        let mut h = Xxh64Hasher::with_seed(42);
        h.write_u32(0xDEAD_BEEF);
        assert_eq!(h.finish(), hash_int(0xDEAD_BEEF, 42));

        let mut h = Xxh64Hasher::with_seed(42);
        h.write_u64(0x0123_4567_89AB_CDEF);
        assert_eq!(h.finish(), hash_long(0x0123_4567_89AB_CDEF, 42));

        let mut h = Xxh64Hasher::with_seed(42);
        h.write_usize(99);
        assert_eq!(h.finish(), hash_long(99, 42));
    }

    #[test]
    fn split_writes_hash_the_concatenation() {
        let mut h = Xxh64Hasher::default();
        h.write(b"partition");
        h.write_u8(b'-');
        h.write(b"key-0000000000000000000000000042");
        assert_eq!(
            h.finish(),
            hash_bytes(b"partition-key-0000000000000000000000000042", 0)
        );
    }

    #[test]
    fn build_hasher_is_deterministic() {
        let build = Xxh64BuildHasher::new(7);
        assert_eq!(build.seed(), 7);
        assert_eq!(build.hash_one("join-key"), build.hash_one("join-key"));
        assert_ne!(
            build.hash_one("join-key"),
            Xxh64BuildHasher::new(8).hash_one("join-key")
        );
    }

    #[test]
    fn hash_impl_feeds_le_integers() {
        let build = Xxh64BuildHasher::new(3);
        let mut h = build.build_hasher();
        0xABCDu16.hash(&mut h);
        assert_eq!(h.finish(), hash_bytes(&0xABCDu16.to_le_bytes(), 3));
    }

    #[test]
    fn collections_work_with_seeded_builder() {
        let mut map: XxHashMap<String, u32> = XxHashMap::with_hasher(Xxh64BuildHasher::new(11));
        for i in 0..1_000u32 {
            map.insert(format!("key-{i}"), i);
        }
        assert_eq!(map.len(), 1_000);
        assert_eq!(map.get("key-512"), Some(&512));

        let mut set: XxHashSet<u64> = XxHashSet::default();
        assert!(set.insert(5));
        assert!(!set.insert(5));
    }
}
