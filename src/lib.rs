//! Bit-caching pseudo-random number generator.
//!
//! `bitrand` wraps a native uniform generator and caches the bits each
//! native call produces, serving narrow bit-width and bounded-range
//! requests from that cache. The native source is only called when a
//! buffer runs dry, which makes small requests several times cheaper than
//! drawing a fresh word each time.
//!
//! Not a cryptographic generator. Output quality is that of the native
//! source.
//!
//! # Architecture
//!
//! ```text
//! NativeSource  (trait: next_word() / reseed() / next_below())
//!     ↓ one word per refill
//! BitCache      (two entropy buffers, active one toggled per request)
//!     ↓ extract / peek
//! RangeSampler  (required bit width + staged rejection with fallback)
//!     ↓
//! BitRandom     (public entry points: random_bits, random, set_seed)
//! ```
//!
//! # Examples
//!
//! Draw bits and bounded values from a seeded generator:
//!
//! ```
//! use bitrand::BitRandom;
//!
//! let mut rng = BitRandom::with_seed(12345);
//!
//! let coin = rng.random_bits(1);
//! assert!(coin < 2);
//!
//! let die = rng.random_range(1, 7);
//! assert!((1..7).contains(&die));
//! ```
//!
//! Wrap any `rand_core` generator as the native source:
//!
//! ```
//! use bitrand::BitRandom;
//! use bitrand::random::rng_core_source::RngCoreSource;
//! use rand::rngs::StdRng;
//!
//! let mut rng = BitRandom::new(RngCoreSource::<StdRng>::seed_from_u64(7));
//! assert!(rng.random(100) < 100);
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod random;
pub mod utils;

mod bit_random;

pub use bit_random::BitRandom;
pub use config::GeneratorConfig;
pub use error::{BitRandError, BitRandResult};
pub use random::native_source::NativeSource;
pub use random::range_sampler::Acceptance;
