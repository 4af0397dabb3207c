//! Bounded-range sampling over the bit cache.
//!
//! A range request is reduced to the narrowest bit width covering its span
//! and served by rejection sampling with a fixed number of stages:
//!
//! ```text
//! FirstDraw   toggle + extract, accept if < span
//! SecondDraw  toggle + extract, accept if < span
//! ActivePeek  peek active buffer, consume only if it would be accepted
//! OtherPeek   toggle, peek again
//! Fallback    native next_below(span), accepted unconditionally
//! ```
//!
//! The last stage always returns, so sampling never loops on the cache.

use tracing::{debug, trace};

use super::bit_cache::BitCache;
use super::native_source::NativeSource;
use crate::utils::bits;

/// Stage of the rejection ladder that produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Acceptance {
    /// The first top-level draw was in range.
    FirstDraw,
    /// The second top-level draw was in range.
    SecondDraw,
    /// Bits peeked from the buffer active after the second draw were in range.
    ActivePeek,
    /// Bits peeked from the other buffer were in range.
    OtherPeek,
    /// Every cached attempt was rejected; the native source answered directly.
    Fallback,
}

/// Computes the span of `[min, max)` clamped to `max_value`.
///
/// The span is `max - min - 1`. Returns `None` when it is not positive,
/// in which case the caller answers 0.
pub fn span(min: i64, max: i64, max_value: u32) -> Option<u32> {
    let span = i128::from(max) - i128::from(min) - 1;
    if span <= 0 {
        return None;
    }
    Some(span.min(i128::from(max_value)) as u32)
}

/// Draws a value uniform in `[0, span)` through the rejection ladder.
///
/// # Parameters
/// - `cache`: Cache to draw from; its active index is toggled per stage.
/// - `source`: Native source used for refills and the final fallback.
/// - `span`: Exclusive bound of the result; must be positive.
///
/// # Returns
/// The sampled value and the stage that accepted it.
pub fn sample_below<S: NativeSource + ?Sized>(
    cache: &mut BitCache,
    source: &mut S,
    span: u32,
) -> (u32, Acceptance) {
    debug_assert!(span > 0);
    let width = u32::from(bits::required_bits(span));

    let candidate = cache.draw(width, source);
    if candidate < span {
        return accepted(candidate, Acceptance::FirstDraw);
    }

    let candidate = cache.draw(width, source);
    if candidate < span {
        return accepted(candidate, Acceptance::SecondDraw);
    }

    if let Some(candidate) = cache.take_if_accepted(width, span, source) {
        return accepted(candidate, Acceptance::ActivePeek);
    }

    cache.toggle();
    if let Some(candidate) = cache.take_if_accepted(width, span, source) {
        return accepted(candidate, Acceptance::OtherPeek);
    }

    debug!(bound = span, width, "rejection sampling exhausted, using native source");
    (source.next_below(span), Acceptance::Fallback)
}

fn accepted(value: u32, stage: Acceptance) -> (u32, Acceptance) {
    trace!(?stage, value, "range sample accepted");
    (value, stage)
}
