//! Packed16 field access and classification
//!
//! All helpers are plain shifts and masks over the `u16` pattern.

use crate::{EXPONENT_MASK, EXPONENT_MAX, FRACTION_BITS, FRACTION_MASK, SIGN_MASK};
use std::fmt;

/// Numeric category of a packed value, decided by its exponent and fraction fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Exponent 0, fraction 0
    Zero,
    /// Exponent 0, fraction non-zero (decodes to zero)
    Subnormal,
    /// Exponent 1..=30
    Normal,
    /// Exponent 31, fraction 0
    Infinite,
    /// Exponent 31, fraction non-zero
    Nan,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Zero => "zero",
            Category::Subnormal => "subnormal",
            Category::Normal => "normal",
            Category::Infinite => "infinite",
            Category::Nan => "nan",
        };
        f.write_str(name)
    }
}

/// True if the sign bit (bit 15) is set
#[inline]
pub const fn sign(bits: u16) -> bool {
    bits & SIGN_MASK != 0
}

/// Biased exponent field (bits 14-10), in `0..=31`
#[inline]
pub const fn exponent(bits: u16) -> u16 {
    (bits & EXPONENT_MASK) >> FRACTION_BITS
}

/// Fraction field (bits 9-0), in `0..=1023`
#[inline]
pub const fn fraction(bits: u16) -> u16 {
    bits & FRACTION_MASK
}

/// Assemble a packed value from its fields
///
/// Out-of-range `exponent` and `fraction` values are masked to their field width.
#[inline]
pub const fn compose(sign: bool, exponent: u16, fraction: u16) -> u16 {
    let sign_bit = if sign { SIGN_MASK } else { 0 };
    sign_bit | ((exponent << FRACTION_BITS) & EXPONENT_MASK) | (fraction & FRACTION_MASK)
}

/// Classify a packed value
pub const fn classify(bits: u16) -> Category {
    match (exponent(bits), fraction(bits)) {
        (EXPONENT_MAX, 0) => Category::Infinite,
        (EXPONENT_MAX, _) => Category::Nan,
        (0, 0) => Category::Zero,
        (0, _) => Category::Subnormal,
        _ => Category::Normal,
    }
}
