//! Double-buffered entropy cache.
//!
//! Holds two independent [`EntropyBuffer`]s, each filled from one native
//! word. Every top-level request toggles which buffer is active, so both
//! drain at a similar rate and the idle one usually still holds bits the
//! range sampler can peek at.

use tracing::trace;

use super::native_source::{NativeSource, NATIVE_WORD_BITS};
use crate::utils::bits;

/// One native word of cached entropy plus the count of unconsumed bits.
///
/// Unconsumed bits sit at the low end of `bits`. Anything above position
/// `remaining` is stale and is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntropyBuffer {
    bits: u32,
    remaining: u32,
}

impl EntropyBuffer {
    fn from_word(word: u32) -> Self {
        EntropyBuffer {
            bits: word,
            remaining: NATIVE_WORD_BITS,
        }
    }

    /// Number of unconsumed bits, in `0..=NATIVE_WORD_BITS`.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// The unconsumed bits, with stale high bits masked off.
    pub fn bits(&self) -> u32 {
        self.bits & bits::mask(self.remaining)
    }

    /// Low `count` unconsumed bits, without consuming them.
    fn peek(&self, count: u32) -> u32 {
        self.bits & bits::mask(count)
    }

    /// Removes and returns the low `count` bits. Caller guarantees
    /// `count <= remaining`.
    fn take(&mut self, count: u32) -> u32 {
        debug_assert!(count <= self.remaining);
        let value = self.peek(count);
        self.bits = self.bits.checked_shr(count).unwrap_or(0);
        self.remaining -= count;
        value
    }
}

/// Pair of entropy buffers and the index of the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitCache {
    buffers: [EntropyBuffer; 2],
    active: usize,
}

impl BitCache {
    /// Fills both buffers with one native word each. Buffer 0 is active.
    pub fn new<S: NativeSource + ?Sized>(source: &mut S) -> Self {
        let first = EntropyBuffer::from_word(source.next_word());
        let second = EntropyBuffer::from_word(source.next_word());
        BitCache {
            buffers: [first, second],
            active: 0,
        }
    }

    /// Index of the buffer serving the next extraction.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Both buffers, indexed 0 and 1.
    pub fn buffers(&self) -> &[EntropyBuffer; 2] {
        &self.buffers
    }

    /// The buffer serving the next extraction.
    pub fn active_buffer(&self) -> &EntropyBuffer {
        &self.buffers[self.active]
    }

    /// Makes the other buffer active.
    pub fn toggle(&mut self) {
        self.active ^= 1;
    }

    /// Toggles the active buffer, then extracts `count` bits from it.
    ///
    /// This is the draw behind every top-level bit request.
    pub fn draw<S: NativeSource + ?Sized>(&mut self, count: u32, source: &mut S) -> u32 {
        self.toggle();
        self.extract(count, source)
    }

    /// Extracts `count` bits from the active buffer.
    ///
    /// When the buffer holds fewer than `count` bits, its remaining bits
    /// become the high-order part of the result, the buffer is refilled from
    /// `source` and the shortfall is taken from the fresh word. A request
    /// never exceeds one native word, so one refill always suffices.
    ///
    /// `count == 0` returns 0 and leaves the buffer untouched.
    pub fn extract<S: NativeSource + ?Sized>(&mut self, count: u32, source: &mut S) -> u32 {
        debug_assert!(count <= NATIVE_WORD_BITS);
        let count = count.min(NATIVE_WORD_BITS);
        let index = self.active;
        let buffer = &mut self.buffers[index];

        if count <= buffer.remaining {
            return buffer.take(count);
        }

        let shortfall = count - buffer.remaining;
        let high = buffer.bits() << shortfall;
        trace!(buffer = index, shortfall, "refilling entropy buffer");
        *buffer = EntropyBuffer::from_word(source.next_word());
        high | buffer.take(shortfall)
    }

    /// Whether the active buffer could serve `width` bits forming a value
    /// below `bound` without a refill. Never mutates the cache.
    pub fn would_accept(&self, width: u32, bound: u32) -> bool {
        let buffer = self.active_buffer();
        buffer.remaining >= width && buffer.peek(width) < bound
    }

    /// Consumes `width` bits from the active buffer if
    /// [`would_accept`](Self::would_accept) holds; otherwise leaves the
    /// cache as it was.
    pub fn take_if_accepted<S: NativeSource + ?Sized>(
        &mut self,
        width: u32,
        bound: u32,
        source: &mut S,
    ) -> Option<u32> {
        if self.would_accept(width, bound) {
            Some(self.extract(width, source))
        } else {
            None
        }
    }
}
