//! Bit-width and mask helpers shared by the bit cache and range sampler.

/// Number of bits needed to represent each value in `0..=255`.
#[rustfmt::skip]
const REQUIRED_BITS: [u8; 256] = [
    0, 1, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
];

/// Returns the minimum number of bits needed to represent `num`.
///
/// Zero needs no bits. Values above 255 are resolved by shifting off one
/// byte at a time and adding 8 per shifted byte, so a 32-bit value takes at
/// most four table lookups.
///
/// # Parameters
/// - `num`: The value to measure.
///
/// # Returns
/// The number of significant bits, in `0..=32`.
pub fn required_bits(num: u32) -> u8 {
    let mut rest = num;
    let mut width = 0u8;
    while rest > 0xFF {
        rest >>= 8;
        width += 8;
    }
    width + REQUIRED_BITS[rest as usize]
}

/// Returns a mask selecting the low `count` bits of a 32-bit word.
///
/// `count` values of 32 or more select the whole word.
#[inline]
pub fn mask(count: u32) -> u32 {
    if count >= u32::BITS {
        u32::MAX
    } else {
        (1u32 << count) - 1
    }
}
