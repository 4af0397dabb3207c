//! NativeSource trait for the uniform generator wrapped by the bit cache.
//!
//! A native source produces independent uniformly-distributed words of a
//! fixed width. The bit cache treats each word as [`NATIVE_WORD_BITS`] bits
//! of entropy and only calls back into the source when a buffer runs dry.

/// Number of entropy bits carried by one native word.
pub const NATIVE_WORD_BITS: u32 = 31;

/// Exclusive upper bound of a native word: `[0, 2^31 - 1)`.
pub const NATIVE_WORD_BOUND: u32 = 0x7FFF_FFFF;

/// Trait for uniform random sources consumed by
/// [`BitRandom`](crate::BitRandom).
///
/// Implementations must be infallible and non-blocking: every call returns
/// a value. Failure handling, if the underlying generator can fail, belongs
/// inside the implementation.
pub trait NativeSource {
    /// Returns the next native word, uniform in `[0, NATIVE_WORD_BOUND)`.
    fn next_word(&mut self) -> u32;

    /// Reinitializes the source's internal state from `seed`.
    fn reseed(&mut self, seed: u64);

    /// Returns a value uniform in `[0, bound)`, or 0 when `bound` is 0.
    ///
    /// The default implementation rejects words from the incomplete top
    /// bucket so that every residue is equally likely.
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let zone = NATIVE_WORD_BOUND - NATIVE_WORD_BOUND % bound;
        loop {
            let word = self.next_word();
            if word < zone {
                return word % bound;
            }
        }
    }
}

impl<S: NativeSource + ?Sized> NativeSource for &mut S {
    fn next_word(&mut self) -> u32 {
        (**self).next_word()
    }

    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

impl<S: NativeSource + ?Sized> NativeSource for Box<S> {
    fn next_word(&mut self) -> u32 {
        (**self).next_word()
    }

    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}
