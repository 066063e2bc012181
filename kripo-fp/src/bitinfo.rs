//! The bit dictionary: canonical key to fingerprint bit position.
//!
//! The dictionary is a static resource of `key<whitespace>bit` lines, plain
//! or compressed with gzip or zstd. It is loaded once, never mutated, and
//! shared by every encode call.

use std::collections::HashMap;
use std::io::BufRead;

use kripo_core::{KripoError, Result, Summarizable};

use crate::key::BitKey;

/// Immutable mapping from serialized [`BitKey`]s to bit positions.
#[derive(Debug, Clone, Default)]
pub struct BitDictionary {
    bits: HashMap<String, u32>,
}

impl BitDictionary {
    /// Parse a plain-text resource.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut bits = HashMap::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                KripoError::Resource(format!("line {}: {}", line_no + 1, e))
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut fields = trimmed.split_whitespace();
            let (key, value) = match (fields.next(), fields.next(), fields.next()) {
                (Some(key), Some(value), None) => (key, value),
                _ => {
                    return Err(KripoError::Resource(format!(
                        "line {}: expected 'key bit', got '{trimmed}'",
                        line_no + 1
                    )))
                }
            };
            let bit: u32 = value.parse().map_err(|_| {
                KripoError::Resource(format!(
                    "line {}: invalid bit position '{value}'",
                    line_no + 1
                ))
            })?;
            if bits.insert(key.to_string(), bit).is_some() {
                return Err(KripoError::Resource(format!(
                    "line {}: duplicate key '{key}'",
                    line_no + 1
                )));
            }
        }

        if bits.is_empty() {
            return Err(KripoError::Resource("bit dictionary is empty".into()));
        }

        log::debug!("loaded bit dictionary with {} keys", bits.len());
        Ok(Self { bits })
    }

    /// Parse a resource held in memory, decompressing it if needed.
    #[cfg(feature = "std")]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let text = kripo_core::compress::decode_resource(data)?;
        Self::from_reader(&text[..])
    }

    /// Load a resource file from disk.
    #[cfg(feature = "std")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let mapped = kripo_core::mmap::MappedFile::open(path)?;
        Self::from_bytes(mapped.as_bytes()).map_err(|e| match e {
            KripoError::Resource(msg) => KripoError::Resource(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Bit position of a key.
    ///
    /// A miss means the key was built with a bin scheme this dictionary was
    /// not generated for, so it is an error rather than a skipped bit.
    pub fn get(&self, key: &BitKey) -> Result<u32> {
        self.get_str(&key.to_string())
    }

    /// Bit position of an already serialized key.
    pub fn get_str(&self, key: &str) -> Result<u32> {
        self.bits
            .get(key)
            .copied()
            .ok_or_else(|| KripoError::UnknownKey(key.to_string()))
    }

    /// Whether the dictionary holds `key`.
    pub fn contains(&self, key: &BitKey) -> bool {
        self.bits.contains_key(&key.to_string())
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether there are no keys.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Highest bit position, i.e. the fingerprint width minus one.
    pub fn max_bit(&self) -> Option<u32> {
        self.bits.values().copied().max()
    }
}

impl FromIterator<(String, u32)> for BitDictionary {
    /// Later entries win on duplicate keys. Use the loaders for untrusted
    /// input.
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Summarizable for BitDictionary {
    fn summary(&self) -> String {
        format!(
            "BitDictionary — {} key(s), max bit {}",
            self.len(),
            self.max_bit().map_or("-".to_string(), |b| b.to_string())
        )
    }
}

/// Load the bit dictionary resource at `path`.
#[cfg(feature = "std")]
pub fn load_bit_dictionary(path: impl AsRef<std::path::Path>) -> Result<BitDictionary> {
    BitDictionary::from_path(path)
}
