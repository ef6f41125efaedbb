//! Incremental xxHash64 for input that arrives in pieces.

use crate::xxh64::round::{avalanche, Lanes, PRIME64_5, STRIPE};
use crate::xxh64::{residual_tail, word_tail};

/// Streaming digest. Feeding the same bytes in any chunking yields the same
/// value as the one-shot [`crate::hash_bytes`].
#[derive(Debug, Clone)]
pub struct Xxh64State {
    seed: u64,
    lanes: Lanes,
    buffer: [u8; STRIPE],
    buffered: usize,
    total_len: u64,
}

impl Xxh64State {
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            lanes: Lanes::new(seed),
            buffer: [0u8; STRIPE],
            buffered: 0,
            total_len: 0,
        }
    }

    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    pub fn update(&mut self, mut input: &[u8]) {
        self.total_len = self.total_len.wrapping_add(input.len() as u64);

        if self.buffered > 0 {
            let take = (STRIPE - self.buffered).min(input.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];
            if self.buffered < STRIPE {
                return;
            }
            self.lanes.consume(&self.buffer, 0);
            self.buffered = 0;
        }

        let mut stripes = input.chunks_exact(STRIPE);
        for stripe in &mut stripes {
            self.lanes.consume(stripe, 0);
        }
        let rest = stripes.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    pub fn digest(&self) -> u64 {
        let mut hash = if self.total_len >= STRIPE as u64 {
            self.lanes.fold()
        } else {
            self.seed.wrapping_add(PRIME64_5)
        };
        hash = hash.wrapping_add(self.total_len);

        let tail = &self.buffer[..self.buffered];
        hash = word_tail(hash, tail, 0);
        avalanche(residual_tail(hash, tail, tail.len() & !7))
    }
}

impl Default for Xxh64State {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xxh64::hash_bytes;
    use rand::rngs::StdRng;
    use rand::{Rng, RngCore, SeedableRng};

    #[test]
    fn empty_digest_matches_one_shot() {
        assert_eq!(Xxh64State::new(0).digest(), 0xEF46_DB37_51D8_E999);
        assert_eq!(Xxh64State::new(17).digest(), hash_bytes(&[], 17));
    }

    #[test]
    fn any_chunking_matches_one_shot() {
        let mut rng = StdRng::seed_from_u64(0xFEED);
        let mut bytes = vec![0u8; 300];
        rng.fill_bytes(&mut bytes);
        for len in [0usize, 1, 3, 4, 7, 8, 9, 31, 32, 33, 63, 64, 65, 100, 300] {
            let expected = hash_bytes(&bytes[..len], 0xBEEF);
            for _ in 0..8 {
                let mut state = Xxh64State::new(0xBEEF);
                let mut rest = &bytes[..len];
                while !rest.is_empty() {
                    let take = rng.gen_range(0..=rest.len().min(40));
                    state.update(&rest[..take]);
                    rest = &rest[take..];
                }
                assert_eq!(state.total_len(), len as u64);
                assert_eq!(state.digest(), expected, "len {len}");
            }
        }
    }

    #[test]
    fn digest_does_not_consume_state() {
        let mut state = Xxh64State::new(5);
        state.update(b"hello ");
        let partial = state.digest();
        assert_eq!(partial, hash_bytes(b"hello ", 5));
        state.update(b"world, this crosses one stripe boundary");
        assert_eq!(
            state.digest(),
            hash_bytes(b"hello world, this crosses one stripe boundary", 5)
        );
    }

    #[test]
    fn reset_switches_seed() {
        let mut state = Xxh64State::new(1);
        state.update(&[9u8; 70]);
        state.reset(2);
        assert_eq!(state.seed(), 2);
        assert_eq!(state.total_len(), 0);
        state.update(b"abc");
        assert_eq!(state.digest(), hash_bytes(b"abc", 2));
    }
}
