//! Fixed-sequence native source for deterministic runs.
//!
//! Replays a caller-supplied list of words in a loop and keeps a tally of
//! how often the bit cache reached back into it. Intended for tests that
//! need exact control over every cached bit.

use super::native_source::{NativeSource, NATIVE_WORD_BOUND};

/// Native source that cycles through a fixed list of words.
///
/// Words at or above [`NATIVE_WORD_BOUND`] are reduced modulo the bound so
/// every returned word respects the native range. An empty list yields
/// zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSource {
    words: Vec<u32>,
    pos: usize,
    calls: usize,
    seeds: Vec<u64>,
}

impl SequenceSource {
    /// Creates a source that replays `words` from the start.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitrand::random::native_source::NativeSource;
    /// use bitrand::random::sequence::SequenceSource;
    ///
    /// let mut src = SequenceSource::new(vec![3, 5]);
    /// assert_eq!(src.next_word(), 3);
    /// assert_eq!(src.next_word(), 5);
    /// assert_eq!(src.next_word(), 3);
    /// assert_eq!(src.calls(), 3);
    /// ```
    pub fn new(words: Vec<u32>) -> Self {
        SequenceSource {
            words: words.into_iter().map(|w| w % NATIVE_WORD_BOUND).collect(),
            pos: 0,
            calls: 0,
            seeds: Vec::new(),
        }
    }

    /// Number of native words handed out so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Seeds passed to [`reseed`](NativeSource::reseed), oldest first.
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// Index of the word returned by the next call.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl NativeSource for SequenceSource {
    fn next_word(&mut self) -> u32 {
        self.calls += 1;
        if self.words.is_empty() {
            return 0;
        }
        let word = self.words[self.pos];
        self.pos = (self.pos + 1) % self.words.len();
        word
    }

    /// Restarts the replay at `seed % len`.
    fn reseed(&mut self, seed: u64) {
        self.seeds.push(seed);
        if !self.words.is_empty() {
            self.pos = (seed % self.words.len() as u64) as usize;
        }
    }
}
