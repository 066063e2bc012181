//! Sparse fingerprint bit sets.

use std::collections::BTreeSet;

use kripo_core::Summarizable;

/// A set of fingerprint bit positions.
///
/// Iteration is in ascending bit order, so two equal fingerprints always
/// serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fingerprint {
    bits: BTreeSet<u32>,
}

impl Fingerprint {
    /// An empty fingerprint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a bit. Returns whether it was newly set.
    pub fn insert(&mut self, bit: u32) -> bool {
        self.bits.insert(bit)
    }

    /// Whether a bit is set.
    pub fn contains(&self, bit: u32) -> bool {
        self.bits.contains(&bit)
    }

    /// Number of set bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether no bit is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Set bits in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.bits.iter().copied()
    }

    /// Set bits as an ascending vector.
    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}

impl FromIterator<u32> for Fingerprint {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<u32> for Fingerprint {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

impl Summarizable for Fingerprint {
    fn summary(&self) -> String {
        match (self.bits.first(), self.bits.last()) {
            (Some(lo), Some(hi)) => {
                format!("Fingerprint — {} bit(s) set, range {lo}..={hi}", self.len())
            }
            _ => "Fingerprint — 0 bit(s) set".to_string(),
        }
    }
}
