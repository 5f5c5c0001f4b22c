//! Slice conversion and byte serialization
//!
//! The packed16 layout fixes bit positions only. Byte streams written here
//! store each value as 2 bytes in an explicit [`ByteOrder`].

use crate::{Half, HalfError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Byte order of a serialized packed16 stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl FromStr for ByteOrder {
    type Err = HalfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(ByteOrder::Little),
            "big" | "be" => Ok(ByteOrder::Big),
            _ => Err(HalfError::UnknownByteOrder(s.to_string())),
        }
    }
}

/// Encode every element of `values`
pub fn encode_slice(values: &[f32]) -> Vec<Half> {
    let packed: Vec<Half> = values.iter().copied().map(Half::from_f32).collect();
    tracing::trace!("encoded {} values", packed.len());
    packed
}

/// Decode every element of `values`
pub fn decode_slice(values: &[Half]) -> Vec<f32> {
    let decoded: Vec<f32> = values.iter().map(|h| h.to_f32()).collect();
    tracing::trace!("decoded {} values", decoded.len());
    decoded
}

/// Encode `src` into an equally sized `dst`
pub fn encode_into(src: &[f32], dst: &mut [Half]) -> Result<(), HalfError> {
    check_lengths(src.len(), dst.len())?;
    for (out, &value) in dst.iter_mut().zip(src) {
        *out = Half::from_f32(value);
    }
    tracing::trace!("encoded {} values", src.len());
    Ok(())
}

/// Decode `src` into an equally sized `dst`
pub fn decode_into(src: &[Half], dst: &mut [f32]) -> Result<(), HalfError> {
    check_lengths(src.len(), dst.len())?;
    for (out, value) in dst.iter_mut().zip(src) {
        *out = value.to_f32();
    }
    tracing::trace!("decoded {} values", src.len());
    Ok(())
}

fn check_lengths(expected: usize, actual: usize) -> Result<(), HalfError> {
    if expected != actual {
        tracing::debug!("slice length mismatch: {} vs {}", expected, actual);
        return Err(HalfError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Serialize packed values, 2 bytes each
pub fn write_bytes(values: &[Half], order: ByteOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * 2);
    for value in values {
        let bits = value.to_bits();
        let bytes = match order {
            ByteOrder::Little => bits.to_le_bytes(),
            ByteOrder::Big => bits.to_be_bytes(),
        };
        out.extend_from_slice(&bytes);
    }
    out
}

/// Deserialize packed values written by [`write_bytes`]
pub fn read_bytes(bytes: &[u8], order: ByteOrder) -> Result<Vec<Half>, HalfError> {
    if bytes.len() % 2 != 0 {
        tracing::debug!("rejecting {}-byte packed16 buffer", bytes.len());
        return Err(HalfError::OddByteLength(bytes.len()));
    }

    let values = bytes
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            let bits = match order {
                ByteOrder::Little => u16::from_le_bytes(pair),
                ByteOrder::Big => u16::from_be_bytes(pair),
            };
            Half::from_bits(bits)
        })
        .collect();

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_encode_decode_slice() {
        let halves = encode_slice(&[1.0, -2.0, f32::INFINITY]);
        assert_eq!(
            halves.iter().map(|h| h.to_bits()).collect::<Vec<_>>(),
            vec![0x3C00, 0xC000, 0x7C00]
        );
        assert_eq!(decode_slice(&halves), vec![1.0, -2.0, f32::INFINITY]);
    }

    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_slice_conversions_trace() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || CaptureWriter(sink.clone()))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            encode_slice(&[1.0, 2.0]);
            decode_slice(&[Half::ONE]);
        });

        let output = String::from_utf8(captured.lock().unwrap().clone()).unwrap();
        assert!(output.contains("encoded 2 values"), "{output}");
        assert!(output.contains("decoded 1 values"), "{output}");
    }

    #[test]
    fn test_encode_into_length_mismatch() {
        let mut dst = [Half::ZERO; 2];
        let err = encode_into(&[1.0, 2.0, 3.0], &mut dst).unwrap_err();
        assert_eq!(
            err,
            HalfError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
        // Destination untouched on error
        assert_eq!(dst, [Half::ZERO; 2]);
    }

    #[test]
    fn test_decode_into() {
        let src = [Half::ONE, Half::from_bits(0x8001)];
        let mut dst = [f32::NAN; 2];
        decode_into(&src, &mut dst).unwrap();
        assert_eq!(dst, [1.0, 0.0]);
    }

    #[test]
    fn test_byte_order_layout() {
        let values = [Half::from_bits(0x3C01)];
        assert_eq!(write_bytes(&values, ByteOrder::Little), vec![0x01, 0x3C]);
        assert_eq!(write_bytes(&values, ByteOrder::Big), vec![0x3C, 0x01]);
    }

    #[test]
    fn test_read_bytes() {
        let le = read_bytes(&[0x00, 0x3C, 0xFF, 0x7B], ByteOrder::Little).unwrap();
        assert_eq!(le, vec![Half::ONE, Half::MAX]);
        let be = read_bytes(&[0x3C, 0x00], ByteOrder::Big).unwrap();
        assert_eq!(be, vec![Half::ONE]);
        assert!(read_bytes(&[], ByteOrder::Big).unwrap().is_empty());
    }

    #[test]
    fn test_read_bytes_odd_length() {
        assert_eq!(
            read_bytes(&[0x00, 0x3C, 0x00], ByteOrder::Little),
            Err(HalfError::OddByteLength(3))
        );
    }

    #[test]
    fn test_byte_order_parse() {
        assert_eq!("little".parse::<ByteOrder>(), Ok(ByteOrder::Little));
        assert_eq!("BE".parse::<ByteOrder>(), Ok(ByteOrder::Big));
        assert_eq!(
            "middle".parse::<ByteOrder>(),
            Err(HalfError::UnknownByteOrder("middle".to_string()))
        );
        assert_eq!(ByteOrder::default(), ByteOrder::Little);
    }
}
