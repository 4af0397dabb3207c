//! Adapter bridging `rand_core` generators to [`NativeSource`].
//!
//! Any `RngCore + SeedableRng` generator (for example `rand::rngs::StdRng`
//! or a `rand_pcg` generator) can back a [`BitRandom`](crate::BitRandom).
//! Each native word is the top 31 bits of a `next_u32()` output.

use rand_core::{RngCore, SeedableRng};

use super::native_source::{NativeSource, NATIVE_WORD_BOUND};

/// Native source backed by a `rand_core` generator.
#[derive(Debug, Clone)]
pub struct RngCoreSource<R> {
    rng: R,
}

impl<R: RngCore + SeedableRng> RngCoreSource<R> {
    /// Wraps an already-initialized generator.
    pub fn new(rng: R) -> Self {
        RngCoreSource { rng }
    }

    /// Builds the wrapped generator from a 64-bit seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        RngCoreSource {
            rng: R::seed_from_u64(seed),
        }
    }

    /// Returns the wrapped generator.
    pub fn inner(&self) -> &R {
        &self.rng
    }

    /// Consumes the adapter, returning the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + SeedableRng> NativeSource for RngCoreSource<R> {
    fn next_word(&mut self) -> u32 {
        loop {
            let word = self.rng.next_u32() >> 1;
            if word < NATIVE_WORD_BOUND {
                return word;
            }
        }
    }

    /// Replaces the wrapped generator with `R::seed_from_u64(seed)`.
    fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn test_words_in_native_range() {
        let mut src = RngCoreSource::<StdRng>::seed_from_u64(42);
        for _ in 0..10_000 {
            assert!(src.next_word() < NATIVE_WORD_BOUND);
        }
    }

    #[test]
    fn test_reseed_matches_fresh_seed() {
        let mut reseeded = RngCoreSource::<StdRng>::seed_from_u64(1);
        reseeded.next_word();
        reseeded.reseed(99);

        let mut fresh = RngCoreSource::<StdRng>::seed_from_u64(99);
        for _ in 0..32 {
            assert_eq!(reseeded.next_word(), fresh.next_word());
        }
    }

    #[test]
    fn test_new_wraps_existing_rng() {
        let rng = StdRng::seed_from_u64(5);
        let mut expected = rng.clone();
        let mut src = RngCoreSource::new(rng);
        assert_eq!(src.next_word(), expected.next_u32() >> 1);
    }
}
