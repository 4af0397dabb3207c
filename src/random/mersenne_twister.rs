//! 64-bit Mersenne Twister (MT19937-64) native source.
//!
//! Provides a high-period (2^19937 - 1) generator with deterministic output
//! for fixed seeds. Native words are taken from the top 31 bits of each
//! 64-bit output.

use super::native_source::{NativeSource, NATIVE_WORD_BOUND};

const NN: usize = 312;
const MM: usize = 156;
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;
const UM: u64 = 0xFFFF_FFFF_8000_0000; // upper 33 bits
const LM: u64 = 0x7FFF_FFFF; // lower 31 bits

/// Seed used by the reference MT19937-64 implementation.
pub const DEFAULT_SEED: u64 = 5489;

/// 64-bit Mersenne Twister with period 2^19937-1.
///
/// When constructed via [`with_seed`](Self::with_seed) the output sequence
/// is deterministic. [`reseed`](NativeSource::reseed) reinitializes the
/// state vector in place.
#[derive(Clone)]
pub struct MersenneTwister {
    mt: [u64; NN],
    mti: usize,
}

impl Default for MersenneTwister {
    fn default() -> Self {
        Self::new()
    }
}

impl MersenneTwister {
    /// Creates a new generator seeded from the system clock.
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(DEFAULT_SEED);
        Self::with_seed(seed)
    }

    /// Creates a new generator with a fixed, deterministic seed.
    ///
    /// # Parameters
    /// - `seed`: The seed value for deterministic output.
    pub fn with_seed(seed: u64) -> Self {
        let mut mt = MersenneTwister {
            mt: [0u64; NN],
            mti: NN + 1,
        };
        mt.init_genrand64(seed);
        mt
    }

    /// Initializes the state vector from the seed.
    fn init_genrand64(&mut self, seed: u64) {
        self.mt[0] = seed;
        for i in 1..NN {
            let prev = self.mt[i - 1];
            self.mt[i] = 6364136223846793005u64
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        self.mti = NN;
    }

    /// Regenerates the full state vector.
    fn twist(&mut self) {
        let mag01: [u64; 2] = [0, MATRIX_A];

        for i in 0..(NN - MM) {
            let x = (self.mt[i] & UM) | (self.mt[i + 1] & LM);
            self.mt[i] = self.mt[i + MM] ^ (x >> 1) ^ mag01[(x & 1) as usize];
        }
        for i in (NN - MM)..(NN - 1) {
            let x = (self.mt[i] & UM) | (self.mt[i + 1] & LM);
            self.mt[i] = self.mt[i + MM - NN] ^ (x >> 1) ^ mag01[(x & 1) as usize];
        }
        let x = (self.mt[NN - 1] & UM) | (self.mt[0] & LM);
        self.mt[NN - 1] = self.mt[MM - 1] ^ (x >> 1) ^ mag01[(x & 1) as usize];
        self.mti = 0;
    }

    /// Generates the next 64-bit pseudorandom value.
    pub fn next_u64(&mut self) -> u64 {
        if self.mti >= NN {
            self.twist();
        }

        let mut x = self.mt[self.mti];
        self.mti += 1;

        // Tempering
        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71D6_7FFF_EDA6_0000;
        x ^= (x << 37) & 0xFFF7_EEE0_0000_0000;
        x ^= x >> 43;
        x
    }

    /// Generates a 31-bit pseudorandom value from the top of a 64-bit output.
    pub fn next_u31(&mut self) -> u32 {
        (self.next_u64() >> 33) as u32
    }
}

impl NativeSource for MersenneTwister {
    /// Draws 31-bit values, skipping the single value equal to
    /// [`NATIVE_WORD_BOUND`].
    fn next_word(&mut self) -> u32 {
        loop {
            let word = self.next_u31();
            if word < NATIVE_WORD_BOUND {
                return word;
            }
        }
    }

    fn reseed(&mut self, seed: u64) {
        self.init_genrand64(seed);
    }
}
