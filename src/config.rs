//! Per-generator tunables.
//!
//! The only knob is the per-request bit cap. It bounds both the widest
//! [`random_bits`](crate::BitRandom::random_bits) request and the widest
//! span the range sampler covers; wider requests are silently clamped.

use crate::error::{BitRandError, BitRandResult};
use crate::random::native_source::NATIVE_WORD_BITS;

/// Default cap on the number of bits served by a single request.
pub const MAX_BITS_PER_REQUEST: u8 = 20;

/// Largest span offset served by a single request with the default cap.
pub const MAX_VALUE_PER_REQUEST: u32 = (1 << MAX_BITS_PER_REQUEST) - 1;

/// Largest accepted per-request bit cap: one full native word.
pub const MAX_BITS_CEILING: u8 = NATIVE_WORD_BITS as u8;

/// Configuration for a [`BitRandom`](crate::BitRandom) generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    max_bits_per_request: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_bits_per_request: MAX_BITS_PER_REQUEST,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with a custom per-request bit cap.
    ///
    /// # Parameters
    /// - `max_bits`: Bit cap, in `1..=MAX_BITS_CEILING`.
    ///
    /// # Errors
    /// Returns [`BitRandError::MaxBitsOutOfRange`] if `max_bits` is zero or
    /// exceeds [`MAX_BITS_CEILING`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bitrand::config::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::with_max_bits(24).unwrap();
    /// assert_eq!(config.max_value_per_request(), (1 << 24) - 1);
    ///
    /// assert!(GeneratorConfig::with_max_bits(32).is_err());
    /// ```
    pub fn with_max_bits(max_bits: u8) -> BitRandResult<Self> {
        if !(1..=MAX_BITS_CEILING).contains(&max_bits) {
            return Err(BitRandError::MaxBitsOutOfRange {
                requested: max_bits,
                ceiling: MAX_BITS_CEILING,
            });
        }
        Ok(GeneratorConfig {
            max_bits_per_request: max_bits,
        })
    }

    /// Returns the per-request bit cap.
    pub fn max_bits_per_request(&self) -> u8 {
        self.max_bits_per_request
    }

    /// Returns `2^max_bits_per_request - 1`, the widest span offset served.
    pub fn max_value_per_request(&self) -> u32 {
        crate::utils::bits::mask(u32::from(self.max_bits_per_request))
    }
}
