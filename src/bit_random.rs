//! BitRandom: bit-caching generator over a native random source.
//!
//! Serves bit-width and bounded-range requests from a pair of cached
//! entropy buffers, calling the native source only when a buffer runs dry
//! or when range rejection sampling is exhausted.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::random::bit_cache::BitCache;
use crate::random::mersenne_twister::MersenneTwister;
use crate::random::native_source::NativeSource;
use crate::random::range_sampler::{self, Acceptance};

/// Bit-caching pseudo-random number generator.
///
/// # Architecture
///
/// `BitRandom` owns its [`NativeSource`] and a [`BitCache`] of two entropy
/// buffers. Every top-level request toggles the active buffer before
/// drawing from it. Range requests go through
/// [`range_sampler`](crate::random::range_sampler), which peeks at cached
/// bits before committing to them and falls back to the native source
/// after a fixed number of rejections.
///
/// Not a cryptographic generator: output quality is that of the native
/// source.
///
/// # Re-seeding
///
/// [`set_seed`](Self::set_seed) only reseeds the native source. Bits already
/// cached when it is called are still served afterwards, up to two native
/// words' worth.
pub struct BitRandom<S> {
    source: S,
    cache: BitCache,
    config: GeneratorConfig,
}

impl Default for BitRandom<MersenneTwister> {
    fn default() -> Self {
        Self::new(MersenneTwister::new())
    }
}

impl BitRandom<MersenneTwister> {
    /// Creates a generator over a Mersenne Twister seeded with `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitrand::BitRandom;
    ///
    /// let mut a = BitRandom::with_seed(42);
    /// let mut b = BitRandom::with_seed(42);
    /// assert_eq!(a.random_range(10, 20), b.random_range(10, 20));
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self::new(MersenneTwister::with_seed(seed))
    }
}

impl<S: NativeSource> BitRandom<S> {
    /// Creates a generator with the default configuration.
    ///
    /// Draws one native word for each of the two entropy buffers.
    pub fn new(source: S) -> Self {
        Self::with_config(source, GeneratorConfig::default())
    }

    /// Creates a generator with a custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitrand::config::GeneratorConfig;
    /// use bitrand::BitRandom;
    /// use bitrand::random::mersenne_twister::MersenneTwister;
    ///
    /// let config = GeneratorConfig::with_max_bits(31).unwrap();
    /// let mut rng = BitRandom::with_config(MersenneTwister::with_seed(1), config);
    /// assert!(rng.random_bits(31) < 1 << 31);
    /// ```
    pub fn with_config(mut source: S, config: GeneratorConfig) -> Self {
        let cache = BitCache::new(&mut source);
        debug!(
            max_bits = config.max_bits_per_request(),
            "bit cache initialized"
        );
        BitRandom {
            source,
            cache,
            config,
        }
    }

    /// Reseeds the native source.
    ///
    /// Cached bits are kept and keep being served until consumed.
    pub fn set_seed(&mut self, seed: u64) {
        debug!(seed, "reseeding native source");
        self.source.reseed(seed);
    }

    /// Returns a value in `[0, 2^count)`.
    ///
    /// `count` is clamped to the configured maximum bits per request;
    /// `count == 0` returns 0 without touching the cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitrand::BitRandom;
    ///
    /// let mut rng = BitRandom::with_seed(7);
    /// assert!(rng.random_bits(6) < 64);
    /// assert_eq!(rng.random_bits(0), 0);
    /// ```
    pub fn random_bits(&mut self, count: u8) -> u32 {
        if count == 0 {
            return 0;
        }
        let count = count.min(self.config.max_bits_per_request());
        self.cache.draw(u32::from(count), &mut self.source)
    }

    /// Returns a value in `[offset, offset + 2^count)`.
    ///
    /// `count == 0` returns exactly `offset`.
    pub fn random_bits_with_offset(&mut self, count: u8, offset: i64) -> i64 {
        offset.wrapping_add(i64::from(self.random_bits(count)))
    }

    /// Returns a value in `[0, max)`, or 0 when `max <= 0`.
    pub fn random(&mut self, max: i64) -> i64 {
        self.random_range(0, max)
    }

    /// Returns a value in `[min, max)`, or 0 when `max - min <= 1`.
    ///
    /// Spans wider than the configured maximum value per request are
    /// silently clamped, so only the low end of such ranges is covered.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitrand::BitRandom;
    ///
    /// let mut rng = BitRandom::with_seed(3);
    /// let v = rng.random_range(-50, 50);
    /// assert!((-50..50).contains(&v));
    ///
    /// assert_eq!(rng.random_range(5, 5), 0);
    /// ```
    pub fn random_range(&mut self, min: i64, max: i64) -> i64 {
        self.random_range_traced(min, max).0
    }

    /// Like [`random_range`](Self::random_range), also reporting which
    /// rejection stage produced the value. Degenerate ranges report `None`.
    pub fn random_range_traced(&mut self, min: i64, max: i64) -> (i64, Option<Acceptance>) {
        let Some(span) = range_sampler::span(min, max, self.config.max_value_per_request()) else {
            return (0, None);
        };
        let (offset, stage) = range_sampler::sample_below(&mut self.cache, &mut self.source, span);
        (min + i64::from(offset), Some(stage))
    }

    /// Returns the generator configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the bit cache, for inspecting buffer state.
    pub fn cache(&self) -> &BitCache {
        &self.cache
    }

    /// Returns the native source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the native source mutably.
    ///
    /// Drawing from it directly does not affect cached bits.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the generator, returning the native source.
    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_BITS_PER_REQUEST;
    use crate::random::native_source::NATIVE_WORD_BITS;
    use crate::random::sequence::SequenceSource;

    #[test]
    fn test_new_draws_two_words() {
        let rng = BitRandom::new(SequenceSource::new(vec![1, 2, 3]));
        assert_eq!(rng.source().calls(), 2);
        assert_eq!(rng.cache().active_index(), 0);
    }

    #[test]
    fn test_random_bits_zero_is_noop() {
        let mut rng = BitRandom::new(SequenceSource::new(vec![0x55, 0xAA]));
        let before = rng.cache().clone();
        assert_eq!(rng.random_bits(0), 0);
        assert_eq!(rng.random_bits_with_offset(0, -17), -17);
        assert_eq!(rng.cache(), &before);
    }

    #[test]
    fn test_random_bits_toggles_buffers() {
        let mut rng = BitRandom::new(SequenceSource::new(vec![0x0F, 0xF0]));
        assert_eq!(rng.random_bits(4), 0x0);
        assert_eq!(rng.cache().active_index(), 1);
        assert_eq!(rng.random_bits(4), 0xF);
        assert_eq!(rng.cache().active_index(), 0);
        assert_eq!(rng.random_bits(4), 0xF);
        assert_eq!(rng.random_bits(4), 0x0);
    }

    #[test]
    fn test_random_bits_clamped_to_config() {
        let mut rng = BitRandom::new(SequenceSource::new(vec![0x7FFF_FFFE, 0x7FFF_FFFE]));
        let value = rng.random_bits(30);
        assert_eq!(value, (1 << MAX_BITS_PER_REQUEST) - 2);
        assert_eq!(
            rng.cache().buffers()[1].remaining(),
            NATIVE_WORD_BITS - u32::from(MAX_BITS_PER_REQUEST)
        );
    }

    #[test]
    fn test_random_bits_with_offset() {
        let mut rng = BitRandom::new(SequenceSource::new(vec![0, 5]));
        assert_eq!(rng.random_bits_with_offset(3, -10), -5);
    }

    #[test]
    fn test_random_range_degenerate() {
        let mut rng = BitRandom::new(SequenceSource::new(vec![9, 9]));
        assert_eq!(rng.random(0), 0);
        assert_eq!(rng.random(-5), 0);
        assert_eq!(rng.random(1), 0);
        assert_eq!(rng.random_range(10, 11), 0);
        assert_eq!(rng.random_range(10, 3), 0);
        assert_eq!(rng.random_range_traced(4, 4), (0, None));
        assert_eq!(rng.source().calls(), 2);
    }

    #[test]
    fn test_random_range_adds_min() {
        let mut rng = BitRandom::new(SequenceSource::new(vec![0xFF, 3]));
        assert_eq!(
            rng.random_range_traced(-100, 100),
            (-97, Some(Acceptance::FirstDraw))
        );
    }

    #[test]
    fn test_set_seed_reaches_source_only() {
        let mut rng = BitRandom::new(SequenceSource::new(vec![1, 2, 3, 4]));
        let before = rng.cache().clone();
        rng.set_seed(99);
        assert_eq!(rng.source().seeds(), &[99]);
        assert_eq!(rng.cache(), &before);
    }

    #[test]
    fn test_with_seed_is_deterministic() {
        let mut a = BitRandom::with_seed(2024);
        let mut b = BitRandom::with_seed(2024);
        for _ in 0..1000 {
            assert_eq!(a.random_range(0, 1000), b.random_range(0, 1000));
            assert_eq!(a.random_bits(13), b.random_bits(13));
        }
    }

    #[test]
    fn test_custom_config_widens_range() {
        let config = GeneratorConfig::with_max_bits(24).unwrap();
        let mut rng = BitRandom::with_config(MersenneTwister::with_seed(8), config);
        let mut saw_wide = false;
        for _ in 0..1000 {
            let v = rng.random(1 << 24);
            assert!((0..1 << 24).contains(&v));
            saw_wide |= v >= 1 << 20;
        }
        assert!(saw_wide);
    }

    #[test]
    fn test_borrowed_source() {
        let mut src = SequenceSource::new(vec![4, 6]);
        {
            let mut rng = BitRandom::new(&mut src);
            assert_eq!(rng.random_bits(3), 6);
        }
        assert_eq!(src.calls(), 2);
    }
}
