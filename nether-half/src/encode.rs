//! f32 -> packed16 encoder
//!
//! Narrowing truncates the fraction and clamps the re-biased exponent into the
//! 5-bit field. The clamp shares its bounds with the sentinel exponents, so an
//! overflowing value becomes the infinity or NaN pattern and an underflowing
//! value becomes the zero or pseudo-subnormal pattern, depending on which
//! fraction bits survive.

use crate::{
    EXPONENT_BIAS, EXPONENT_MAX, F32_EXPONENT_BIAS, F32_EXPONENT_MAX, F32_FRACTION_BITS,
    F32_FRACTION_MASK, FRACTION_SHIFT, compose, decode,
};

/// Encode an f32 into a packed16 bit pattern
///
/// | f32 exponent | f32 fraction | packed exponent | packed fraction |
/// |--------------|--------------|-----------------|-----------------|
/// | 255 | 0 | 31 | 0 |
/// | 255 | non-zero | 31 | `frac >> 13` |
/// | 0 | any | 0 | `frac >> 13` |
/// | 1..=254 | any | `clamp(e - 127 + 15, 0, 31)` | `frac >> 13` |
///
/// The sign bit is always copied. Never fails.
pub fn encode(value: f32) -> u16 {
    let n = value.to_bits();
    let negative = n >> 31 != 0;
    let src_exponent = (n >> F32_FRACTION_BITS) & F32_EXPONENT_MAX;
    let src_fraction = n & F32_FRACTION_MASK;

    // Top 10 fraction bits, no rounding
    let narrowed = (src_fraction >> FRACTION_SHIFT) as u16;

    let (exponent, fraction) = match (src_exponent, src_fraction) {
        (F32_EXPONENT_MAX, 0) => (EXPONENT_MAX, 0),
        (F32_EXPONENT_MAX, _) => (EXPONENT_MAX, narrowed),
        (0, 0) => (0, 0),
        (0, _) => (0, narrowed),
        (e, _) => (rebias(e), narrowed),
    };

    compose(negative, exponent, fraction)
}

/// Re-bias a normal f32 exponent and clamp it into the packed field
#[inline]
fn rebias(f32_exponent: u32) -> u16 {
    let e = f32_exponent as i32 - F32_EXPONENT_BIAS + EXPONENT_BIAS;
    e.clamp(0, EXPONENT_MAX as i32) as u16
}

/// True if `value` survives an encode/decode round trip bit for bit
///
/// NaN inputs count as lossless when the result is also NaN, since decode
/// never preserves payloads.
pub fn is_lossless(value: f32) -> bool {
    is_exact(value, decode(encode(value)))
}

/// True if `restored` reproduces `original` bit for bit, any NaN matching any NaN
pub fn is_exact(original: f32, restored: f32) -> bool {
    if original.is_nan() {
        restored.is_nan()
    } else {
        restored.to_bits() == original.to_bits()
    }
}
