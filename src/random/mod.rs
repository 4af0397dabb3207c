//! Random generation subsystem.
//!
//! The [`native_source`] trait abstracts the wrapped uniform generator;
//! [`bit_cache`] and [`range_sampler`] implement the caching and rejection
//! logic driven by [`BitRandom`](crate::BitRandom).

pub mod bit_cache;
pub mod mersenne_twister;
pub mod native_source;
pub mod range_sampler;
pub mod rng_core_source;
pub mod sequence;
