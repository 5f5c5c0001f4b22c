//! Per-value inspection for the `encode` and `decode` commands

use crate::config::DisplayFormat;
use anyhow::{Context, Result};
use nether_half::{Category, classify, decode, encode, exponent, fraction, is_lossless, sign};

/// Breakdown of one packed16 value
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    /// Source f32, when the value came from `encode`
    pub input: Option<f32>,
    pub bits: u16,
    pub category: Category,
    pub decoded: f32,
}

impl Inspection {
    /// Inspect the packed form of an f32
    pub fn from_value(value: f32) -> Self {
        let bits = encode(value);
        Self {
            input: Some(value),
            ..Self::from_bits(bits)
        }
    }

    /// Inspect a raw packed16 pattern
    pub fn from_bits(bits: u16) -> Self {
        Self {
            input: None,
            bits,
            category: classify(bits),
            decoded: decode(bits),
        }
    }

    /// `Some(true)` if the source f32 survives the round trip
    pub fn lossless(&self) -> Option<bool> {
        self.input.map(is_lossless)
    }

    /// One line, e.g. `1.5 -> 0x3e00 normal sign=0 exp=15 frac=512 -> 1.5 (exact)`
    pub fn render(&self, format: DisplayFormat) -> String {
        let mut line = String::new();
        if let Some(input) = self.input {
            line.push_str(&format!("{input:?} -> "));
        }
        line.push_str(&format!(
            "{} {} sign={} exp={} frac={} -> {:?}",
            format_bits(self.bits, format),
            self.category,
            u8::from(sign(self.bits)),
            exponent(self.bits),
            fraction(self.bits),
            self.decoded,
        ));
        match self.lossless() {
            Some(true) => line.push_str(" (exact)"),
            Some(false) => line.push_str(" (lossy)"),
            None => {}
        }
        line
    }
}

/// Render a bit pattern in the requested format
pub fn format_bits(bits: u16, format: DisplayFormat) -> String {
    match format {
        DisplayFormat::Hex => format!("{bits:#06x}"),
        DisplayFormat::Binary => format!(
            "0b{}_{:05b}_{:010b}",
            u8::from(sign(bits)),
            exponent(bits),
            fraction(bits)
        ),
        DisplayFormat::Decimal => bits.to_string(),
    }
}

/// Parse a packed16 pattern written as `0x` hex, `0b` binary, or decimal
///
/// Underscores are ignored, so `0b0_01111_0000000000` is accepted.
pub fn parse_bits(text: &str) -> Result<u16> {
    let cleaned = text.trim().replace('_', "");
    let lower = cleaned.to_ascii_lowercase();

    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u16::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u16::from_str_radix(bin, 2)
    } else {
        lower.parse::<u16>()
    };

    parsed.with_context(|| format!("Invalid packed16 value: {text:?}"))
}
