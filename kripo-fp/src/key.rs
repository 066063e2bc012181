//! Canonical bit keys.
//!
//! A key names one 1-, 2- or 3-point feature combination together with its
//! binned distances. Keys are built as typed values and serialized only for
//! the bit dictionary lookup:
//!
//! - singleton: the feature tag, e.g. `H`
//! - pair: tag, bin, tag, e.g. `HcP`
//! - triple: three tags then three bins, e.g. `HPRcfh`
//!
//! Bin `i` is written as the character `'a' + i`.

use core::fmt;

/// Character that bin index 0 is written as.
pub const BIN_CHAR_BASE: u8 = b'a';

/// A feature tag paired with the distance bin associated with it.
///
/// Ordering is by bin, then tag: the canonical order of triple keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Observation {
    pub bin: usize,
    pub tag: u8,
}

impl Observation {
    pub fn new(tag: u8, bin: usize) -> Self {
        Self { bin, tag }
    }
}

/// A typed dictionary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitKey {
    /// One feature, no distance.
    Single(u8),
    /// Two features and the bin of the distance between them, in enumeration
    /// order. Pair keys are not re-sorted.
    Pair { left: u8, bin: usize, right: u8 },
    /// Three observations in canonical `(bin, tag)` order.
    Triple([Observation; 3]),
}

impl BitKey {
    /// Triple key from observations in any order.
    pub fn triple(mut observations: [Observation; 3]) -> Self {
        observations.sort_unstable();
        BitKey::Triple(observations)
    }
}

fn bin_char(bin: usize) -> char {
    u32::try_from(bin)
        .ok()
        .and_then(|b| char::from_u32(BIN_CHAR_BASE as u32 + b))
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl fmt::Display for BitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        match *self {
            BitKey::Single(tag) => f.write_char(tag as char),
            BitKey::Pair { left, bin, right } => {
                f.write_char(left as char)?;
                f.write_char(bin_char(bin))?;
                f.write_char(right as char)
            }
            BitKey::Triple(obs) => {
                for o in &obs {
                    f.write_char(o.tag as char)?;
                }
                for o in &obs {
                    f.write_char(bin_char(o.bin))?;
                }
                Ok(())
            }
        }
    }
}
