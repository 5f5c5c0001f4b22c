//! `Half` value type
//!
//! Stores only the packed16 bits. Every numeric use goes through [`decode`],
//! and every construction goes through [`encode`].

use crate::{Category, classify, decode, encode, sign};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 16-bit float stored as a packed16 bit pattern
///
/// Equality and hashing are bitwise: two NaN patterns with different payloads
/// are unequal, and a NaN pattern is equal to itself.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Half(u16);

impl Half {
    /// +0
    pub const ZERO: Half = Half(0x0000);
    /// -0 (decodes to +0.0)
    pub const NEG_ZERO: Half = Half(0x8000);
    /// 1.0
    pub const ONE: Half = Half(0x3C00);
    /// Largest finite value, 65504
    pub const MAX: Half = Half(0x7BFF);
    /// Most negative finite value, -65504
    pub const MIN: Half = Half(0xFBFF);
    /// +infinity
    pub const INFINITY: Half = Half(0x7C00);
    /// -infinity
    pub const NEG_INFINITY: Half = Half(0xFC00);
    /// NaN pattern produced by encoding a quiet f32 NaN
    pub const NAN: Half = Half(0x7E00);

    /// Wrap raw packed16 bits
    #[inline]
    pub const fn from_bits(bits: u16) -> Half {
        Half(bits)
    }

    /// Raw packed16 bits
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn from_f32(value: f32) -> Half {
        Half(encode(value))
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        decode(self.0)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(decode(self.0))
    }

    /// Rebuild this value in place from an f32
    #[inline]
    pub fn set_f32(&mut self, value: f32) {
        self.0 = encode(value);
    }

    pub const fn category(self) -> Category {
        classify(self.0)
    }

    pub const fn is_nan(self) -> bool {
        matches!(self.category(), Category::Nan)
    }

    pub const fn is_infinite(self) -> bool {
        matches!(self.category(), Category::Infinite)
    }

    /// True if the stored sign bit is set, including for -0 and NaN patterns
    pub const fn is_sign_negative(self) -> bool {
        sign(self.0)
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Half({:?} @ {:#06x})", self.to_f32(), self.0)
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f32> for Half {
    fn from(value: f32) -> Half {
        Half::from_f32(value)
    }
}

impl From<f64> for Half {
    fn from(value: f64) -> Half {
        Half::from_f32(value as f32)
    }
}

impl From<i16> for Half {
    fn from(value: i16) -> Half {
        Half::from_f32(f32::from(value))
    }
}

impl From<i32> for Half {
    fn from(value: i32) -> Half {
        Half::from_f32(value as f32)
    }
}

impl From<Half> for f32 {
    fn from(value: Half) -> f32 {
        value.to_f32()
    }
}

impl From<Half> for f64 {
    fn from(value: Half) -> f64 {
        value.to_f64()
    }
}

/// Truncates toward zero; NaN becomes 0 and infinities saturate.
impl From<Half> for i32 {
    fn from(value: Half) -> i32 {
        value.to_f32() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_positive_zero() {
        assert_eq!(Half::default().to_bits(), 0);
        assert_eq!(Half::default(), Half::ZERO);
    }

    #[test]
    fn test_constants_match_encoder() {
        assert_eq!(Half::from(1.0f32), Half::ONE);
        assert_eq!(Half::from(65504.0f32), Half::MAX);
        assert_eq!(Half::from(-65504.0f32), Half::MIN);
        assert_eq!(Half::from(f32::INFINITY), Half::INFINITY);
        assert_eq!(Half::from(f32::NEG_INFINITY), Half::NEG_INFINITY);
        assert_eq!(Half::from(-0.0f32), Half::NEG_ZERO);
        assert_eq!(Half::from(f32::NAN), Half::NAN);
    }

    #[test]
    fn test_integer_constructors() {
        assert_eq!(Half::from(3i16).to_bits(), 0x4200);
        assert_eq!(Half::from(-2i32).to_bits(), 0xC000);
        assert_eq!(Half::from(1024i32).to_f32(), 1024.0);
        // 2049 needs 11 fraction bits, truncates to 2048
        assert_eq!(Half::from(2049i32).to_f32(), 2048.0);
    }

    #[test]
    fn test_f64_constructor_narrows_through_f32() {
        assert_eq!(Half::from(1.5f64), Half::from(1.5f32));
        assert_eq!(Half::from(1.0e300f64), Half::INFINITY);
    }

    #[test]
    fn test_numeric_conversions() {
        let h = Half::from(-2.5f32);
        assert_eq!(f32::from(h), -2.5);
        assert_eq!(f64::from(h), -2.5);
        assert_eq!(i32::from(h), -2);
        assert_eq!(i32::from(Half::NAN), 0);
        assert_eq!(i32::from(Half::INFINITY), i32::MAX);
    }

    #[test]
    fn test_set_f32() {
        let mut h = Half::ZERO;
        h.set_f32(0.5);
        assert_eq!(h.to_bits(), 0x3800);
    }

    #[test]
    fn test_predicates() {
        assert!(Half::NAN.is_nan());
        assert!(!Half::NAN.is_infinite());
        assert!(Half::NEG_INFINITY.is_infinite());
        assert!(Half::NEG_INFINITY.is_sign_negative());
        assert!(Half::NEG_ZERO.is_sign_negative());
        assert!(!Half::ONE.is_sign_negative());
        assert_eq!(Half::from_bits(0x0001).category(), Category::Subnormal);
    }

    #[test]
    fn test_nan_equality_is_bitwise() {
        assert_eq!(Half::NAN, Half::NAN);
        assert_ne!(Half::from_bits(0x7E00), Half::from_bits(0x7C01));
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format!("{}", Half::from(1.5f32)), "1.5");
        assert_eq!(format!("{:?}", Half::from(1.5f32)), "Half(1.5 @ 0x3e00)");
        assert_eq!(format!("{}", Half::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_pod_cast() {
        let values = [Half::ONE, Half::MAX];
        let raw: &[u16] = bytemuck::cast_slice(&values);
        assert_eq!(raw, &[0x3C00, 0x7BFF]);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Half::ONE).unwrap();
        assert_eq!(json, "15360");
        let back: Half = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Half::ONE);
    }
}
