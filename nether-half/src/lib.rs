//! Nether-Half: truncating 16-bit float codec for Nethercore
//!
//! This is a **simplified** half-float format. The bit layout matches IEEE 754
//! binary16, but the conversions do NOT follow IEEE rounding or subnormal rules.
//! Stored data produced by this codec must be read back with this codec.
//!
//! **The codec is a pair of pure functions** - [`encode`] and [`decode`]. The
//! [`Half`] value type is a thin facade that decodes, computes in `f32`, and
//! re-encodes.
//!
//! # Differences from IEEE 754 binary16
//!
//! | Feature | IEEE binary16 | Nether-Half |
//! |---------|---------------|-------------|
//! | Fraction narrowing | Round to nearest even | Truncate (`frac >> 13`) |
//! | Exponent overflow | Rounds to infinity | Clamped to 31 (infinity *or* NaN pattern) |
//! | Exponent underflow | Gradual (subnormals) | Clamped to 0 (zero *or* pseudo-subnormal pattern) |
//! | Decode of -0 | -0.0 | +0.0 |
//! | Decode of subnormal | Exact magnitude | +0.0 |
//! | Decode of NaN | Payload kept | Generic NaN |
//!
//! # Bit Layout
//!
//! ```text
//! packed16 (u16):
//!   bit 15:      sign
//!   bits 14-10:  exponent (5 bits, bias 15)
//!   bits 9-0:    fraction (10 bits)
//!
//! f32 (u32 via to_bits):
//!   bit 31:      sign
//!   bits 30-23:  exponent (8 bits, bias 127)
//!   bits 22-0:   fraction (23 bits)
//! ```
//!
//! Byte order is not part of the format. Serialized streams pick one
//! explicitly with [`ByteOrder`].
//!
//! # Usage
//!
//! ```
//! use nether_half::{decode, encode, Half};
//!
//! assert_eq!(encode(1.5), 0x3E00);
//! assert_eq!(decode(0x3E00), 1.5);
//!
//! let a = Half::from(1.5f32);
//! let b = Half::from(2i32);
//! assert_eq!(f32::from(a * b), 3.0);
//! ```

mod bulk;
mod decode;
mod encode;
mod half;
mod layout;
mod ops;

pub use bulk::{
    ByteOrder, decode_into, decode_slice, encode_into, encode_slice, read_bytes, write_bytes,
};
pub use decode::decode;
pub use encode::{encode, is_exact, is_lossless};
pub use half::Half;
pub use layout::{Category, classify, compose, exponent, fraction, sign};

// =============================================================================
// Constants
// =============================================================================

/// Sign bit of a packed value
pub const SIGN_MASK: u16 = 0x8000;

/// Exponent field of a packed value (bits 14-10)
pub const EXPONENT_MASK: u16 = 0x7C00;

/// Fraction field of a packed value (bits 9-0)
pub const FRACTION_MASK: u16 = 0x03FF;

/// Width of the packed exponent field
pub const EXPONENT_BITS: u32 = 5;

/// Width of the packed fraction field
pub const FRACTION_BITS: u32 = 10;

/// Packed exponent bias
pub const EXPONENT_BIAS: i32 = 15;

/// Packed exponent reserved for infinity and NaN
pub const EXPONENT_MAX: u16 = 0x1F;

/// f32 exponent bias
pub const F32_EXPONENT_BIAS: i32 = 127;

/// f32 exponent reserved for infinity and NaN
pub const F32_EXPONENT_MAX: u32 = 0xFF;

/// f32 fraction width
pub const F32_FRACTION_BITS: u32 = 23;

/// f32 fraction field
pub const F32_FRACTION_MASK: u32 = 0x007F_FFFF;

/// Fraction bits discarded when narrowing f32 -> packed16
pub const FRACTION_SHIFT: u32 = F32_FRACTION_BITS - FRACTION_BITS;

// =============================================================================
// Error Type
// =============================================================================

/// Errors from the bulk conversion helpers
///
/// The scalar codec never fails; only buffer handling can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HalfError {
    /// Byte buffer does not hold a whole number of packed values
    #[error("byte length {0} is not a multiple of 2")]
    OddByteLength(usize),

    /// Destination slice has a different length than the source
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Unrecognized byte order name
    #[error("unknown byte order '{0}' (expected 'little' or 'big')")]
    UnknownByteOrder(String),
}
