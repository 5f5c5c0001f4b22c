//! File conversion between raw f32 buffers and packed16 streams
//!
//! f32 files are always little-endian. Packed16 streams use the configured
//! [`ByteOrder`].

use anyhow::{Context, Result, bail};
use nether_half::{ByteOrder, Half, decode_slice, encode_slice, is_exact, read_bytes, write_bytes};
use std::path::Path;

/// File extension for packed16 streams
pub const PACKED_EXT: &str = "f16";

/// File extension for raw f32 buffers
pub const RAW_EXT: &str = "f32";

/// Split a little-endian f32 buffer into values
pub fn read_f32_le(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        bail!(
            "f32 buffer length {} is not a multiple of 4 bytes",
            bytes.len()
        );
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Join values into a little-endian f32 buffer
pub fn write_f32_le(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Convert a raw f32 file to a packed16 stream
///
/// Returns the number of values written.
pub fn pack_file(input: &Path, output: &Path, order: ByteOrder) -> Result<usize> {
    let bytes = std::fs::read(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let values =
        read_f32_le(&bytes).with_context(|| format!("Invalid f32 file {}", input.display()))?;

    let packed = encode_slice(&values);
    let lossy = count_lossy(&values, &packed);
    if lossy > 0 {
        tracing::warn!("{} of {} values lost precision or range", lossy, values.len());
    }

    std::fs::write(output, write_bytes(&packed, order))
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::debug!("Packed {} values ({:?})", packed.len(), order);

    Ok(packed.len())
}

/// Number of values whose packed form does not decode back to them
pub fn count_lossy(values: &[f32], packed: &[Half]) -> usize {
    values
        .iter()
        .zip(packed)
        .filter(|&(&value, half)| !is_exact(value, half.to_f32()))
        .count()
}

/// Convert a packed16 stream back to a raw f32 file
///
/// Returns the number of values written.
pub fn unpack_file(input: &Path, output: &Path, order: ByteOrder) -> Result<usize> {
    let bytes = std::fs::read(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let packed = read_bytes(&bytes, order)
        .with_context(|| format!("Invalid packed16 file {}", input.display()))?;

    let values = decode_slice(&packed);
    std::fs::write(output, write_f32_le(&values))
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::debug!("Unpacked {} values ({:?})", values.len(), order);

    Ok(values.len())
}
