//! Error types for the bitrand library.
//!
//! Drawing random values never fails; degenerate requests are clamped or
//! answered with zero. Errors only arise while building a
//! [`GeneratorConfig`](crate::config::GeneratorConfig).

use thiserror::Error;

/// Errors produced by the bitrand library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitRandError {
    /// The requested per-request bit cap is zero or wider than a native word.
    #[error("max bits per request must be between 1 and {ceiling}, got {requested}")]
    MaxBitsOutOfRange {
        /// The rejected bit cap.
        requested: u8,
        /// The largest accepted bit cap.
        ceiling: u8,
    },
}

/// Result alias used by fallible bitrand operations.
pub type BitRandResult<T> = Result<T, BitRandError>;
