//! nether-half.toml parsing
//!
//! Every field is optional. Command-line flags override file values.

use anyhow::{Context, Result};
use clap::ValueEnum;
use nether_half::ByteOrder;
use serde::Deserialize;
use std::path::Path;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "nether-half.toml";

/// nether-half.toml structure
#[derive(Debug, Default, Deserialize)]
pub struct HalfConfig {
    #[serde(default)]
    pub output: OutputSection,
}

/// Output settings section
#[derive(Debug, Default, Deserialize)]
pub struct OutputSection {
    /// Byte order of packed16 streams written by `pack` and read by `unpack`.
    /// Default: little
    #[serde(default)]
    pub byte_order: ByteOrder,

    /// How bit patterns are printed by `encode` and `decode`.
    /// Default: hex
    #[serde(default)]
    pub format: DisplayFormat,
}

/// Rendering of a packed16 bit pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// `0x3c00`
    #[default]
    Hex,
    /// `0b0_01111_0000000000` (sign, exponent, fraction groups)
    Binary,
    /// `15360`
    Decimal,
}

impl HalfConfig {
    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse config from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse nether-half.toml")
    }

    /// Load `explicit` if given, otherwise `dir/nether-half.toml` if it exists,
    /// otherwise defaults
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!("Using config {}", fallback.display());
            Self::load(&fallback)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let config = HalfConfig::parse("").unwrap();
        assert_eq!(config.output.byte_order, ByteOrder::Little);
        assert_eq!(config.output.format, DisplayFormat::Hex);
    }

    #[test]
    fn test_parse_full() {
        let config = HalfConfig::parse(
            r#"
[output]
byte_order = "big"
format = "binary"
"#,
        )
        .unwrap();
        assert_eq!(config.output.byte_order, ByteOrder::Big);
        assert_eq!(config.output.format, DisplayFormat::Binary);
    }

    #[test]
    fn test_parse_rejects_unknown_byte_order() {
        let result = HalfConfig::parse("[output]\nbyte_order = \"middle\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_missing_default_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let config = HalfConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.output.format, DisplayFormat::Hex);
    }

    #[test]
    fn test_discover_reads_default_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[output]\nformat = \"decimal\"\n",
        )
        .unwrap();
        let config = HalfConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.output.format, DisplayFormat::Decimal);
    }

    #[test]
    fn test_discover_missing_explicit_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = HalfConfig::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
