//! Resource (de)compression with algorithm auto-detection.
//!
//! Static lookup tables ship either as plain text or compressed with zstd or
//! gzip. [`decode_resource`] sniffs the magic bytes and hands back plain bytes.

use std::borrow::Cow;
use std::io::{Read, Write};

use crate::{KripoError, Result};

/// Supported compression algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Zstd,
    Gzip,
}

/// Compress data using zstd at the given level (1–22).
pub fn zstd_compress(data: &[u8], level: i32) -> Result<Vec<u8>> {
    zstd::encode_all(data, level).map_err(|e| KripoError::Resource(e.to_string()))
}

/// Decompress zstd data.
pub fn zstd_decompress(data: &[u8]) -> Result<Vec<u8>> {
    zstd::decode_all(data).map_err(|e| KripoError::Resource(format!("zstd: {e}")))
}

/// Compress data using gzip at the given level (0–9).
pub fn gzip_compress(data: &[u8], level: u32) -> Result<Vec<u8>> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(data)
        .map_err(|e| KripoError::Resource(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| KripoError::Resource(e.to_string()))
}

/// Decompress gzip data.
pub fn gzip_decompress(data: &[u8]) -> Result<Vec<u8>> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| KripoError::Resource(format!("gzip: {e}")))?;
    Ok(decompressed)
}

/// Detect the compression algorithm from the magic bytes of `data`.
///
/// Returns `None` if the data does not match a known format.
pub fn detect_algorithm(data: &[u8]) -> Option<Algorithm> {
    if data.len() >= 4 && data[..4] == [0x28, 0xB5, 0x2F, 0xFD] {
        Some(Algorithm::Zstd)
    } else if data.len() >= 2 && data[..2] == [0x1F, 0x8B] {
        Some(Algorithm::Gzip)
    } else {
        None
    }
}

/// Decode a static resource, decompressing it when the magic bytes say so.
///
/// Unrecognised data is assumed to be plain text and is borrowed unchanged.
pub fn decode_resource(data: &[u8]) -> Result<Cow<'_, [u8]>> {
    match detect_algorithm(data) {
        Some(Algorithm::Zstd) => zstd_decompress(data).map(Cow::Owned),
        Some(Algorithm::Gzip) => gzip_decompress(data).map(Cow::Owned),
        None => Ok(Cow::Borrowed(data)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[u8] = b"H 0\nP 1\nHPRabc 2\n";

    #[test]
    fn test_detect_zstd() {
        let compressed = zstd_compress(TABLE, 3).unwrap();
        assert_eq!(detect_algorithm(&compressed), Some(Algorithm::Zstd));
    }

    #[test]
    fn test_detect_gzip() {
        let compressed = gzip_compress(TABLE, 6).unwrap();
        assert_eq!(detect_algorithm(&compressed), Some(Algorithm::Gzip));
    }

    #[test]
    fn test_detect_plain() {
        assert_eq!(detect_algorithm(TABLE), None);
    }

    #[test]
    fn test_decode_plain_is_borrowed() {
        let decoded = decode_resource(TABLE).unwrap();
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(&*decoded, TABLE);
    }

    #[test]
    fn test_decode_zstd() {
        let compressed = zstd_compress(TABLE, 3).unwrap();
        assert_eq!(&*decode_resource(&compressed).unwrap(), TABLE);
    }

    #[test]
    fn test_decode_gzip() {
        let compressed = gzip_compress(TABLE, 6).unwrap();
        assert_eq!(&*decode_resource(&compressed).unwrap(), TABLE);
    }

    #[test]
    fn test_truncated_gzip_is_resource_error() {
        let compressed = gzip_compress(TABLE, 6).unwrap();
        let truncated = &compressed[..compressed.len() / 2];
        let err = decode_resource(truncated).unwrap_err();
        assert!(matches!(err, KripoError::Resource(_)));
    }
}
