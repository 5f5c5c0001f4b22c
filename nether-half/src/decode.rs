//! packed16 -> f32 decoder
//!
//! Normal values widen exactly. Every other category collapses: zero and
//! subnormal patterns both decode to `+0.0` (sign dropped), NaN patterns decode
//! to a generic NaN (sign and payload dropped), infinities keep their sign.

use crate::{
    Category, EXPONENT_BIAS, F32_EXPONENT_BIAS, F32_EXPONENT_MAX, F32_FRACTION_BITS,
    FRACTION_SHIFT, SIGN_MASK, classify, exponent, fraction, sign,
};

/// Decode a packed16 bit pattern into an f32
///
/// Total over all 65536 inputs. Never fails.
pub fn decode(bits: u16) -> f32 {
    match classify(bits) {
        Category::Infinite => {
            if sign(bits) {
                f32::NEG_INFINITY
            } else {
                f32::INFINITY
            }
        }
        Category::Nan => f32::NAN,
        Category::Zero | Category::Subnormal => 0.0,
        Category::Normal => {
            let sign_bit = ((bits & SIGN_MASK) as u32) << 16;
            let e = (exponent(bits) as i32 - EXPONENT_BIAS + F32_EXPONENT_BIAS) as u32;
            let exponent_bits = (e & F32_EXPONENT_MAX) << F32_FRACTION_BITS;
            let fraction_bits = (fraction(bits) as u32) << FRACTION_SHIFT;

            f32::from_bits(sign_bit | exponent_bits | fraction_bits)
        }
    }
}
