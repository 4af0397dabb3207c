//! Low-level helpers.

pub mod bits;
