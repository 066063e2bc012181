//! Three-point pharmacophore fingerprints.
//!
//! Every combination of one, two or three features becomes a canonical
//! [`BitKey`] whose bit position is looked up in the [`BitDictionary`]:
//!
//! - singletons: one bit per feature type present (optional)
//! - pairs: tag, distance bin, tag, fuzzed along the single bin axis (optional)
//! - triples: the three tags and the bins of the opposite triangle sides,
//!   fuzzed by [`fuzzy_offsets`]
//!
//! Features are enumerated in tag order and triple keys are sorted by
//! `(bin, tag)`, so the fingerprint does not depend on the order in which
//! features were supplied, nor on rigid motions of the pharmacophore.

use kripo_core::Result;

use crate::bins::{bin_distance, BinConfig, BinTable};
use crate::bitinfo::BitDictionary;
use crate::distance::distance_matrix;
use crate::feature::Pharmacophore;
use crate::fingerprint::Fingerprint;
use crate::fuzzy::{fuzzy_offsets, pair_fuzz_radius};
use crate::key::{BitKey, Observation};

/// Per-call encoding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeOptions {
    /// Include the 1-point and 2-point bits.
    pub include_subs: bool,
    /// Number of bins below/above the actual bin to include, or one of the
    /// special modes `-1` and `-2`. See [`fuzzy_offsets`].
    pub fuzzy_factor: i32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            include_subs: true,
            fuzzy_factor: 1,
        }
    }
}

/// A bin table with the bit dictionary generated for it.
///
/// Built once and shared, by reference or `Arc`, between any number of
/// threads encoding pharmacophores.
#[derive(Debug, Clone)]
pub struct ThreePointScheme {
    bins: BinTable,
    bits: BitDictionary,
}

impl ThreePointScheme {
    pub fn new(bins: BinTable, bits: BitDictionary) -> Self {
        Self { bins, bits }
    }

    /// Build the bin table from `config` and pair it with `bits`.
    pub fn from_config(config: &BinConfig, bits: BitDictionary) -> Result<Self> {
        Ok(Self::new(config.build()?, bits))
    }

    pub fn bins(&self) -> &BinTable {
        &self.bins
    }

    pub fn bits(&self) -> &BitDictionary {
        &self.bits
    }

    /// Fingerprint of one pharmacophore.
    pub fn encode(
        &self,
        pharmacophore: &Pharmacophore,
        options: &EncodeOptions,
    ) -> Result<Fingerprint> {
        encode(
            pharmacophore,
            options.include_subs,
            options.fuzzy_factor,
            &self.bins,
            &self.bits,
        )
    }

    /// Fingerprints of many pharmacophores, in input order.
    ///
    /// The first failure aborts the batch. Runs on the rayon pool with the
    /// `parallel` feature.
    pub fn encode_batch(
        &self,
        pharmacophores: &[Pharmacophore],
        options: &EncodeOptions,
    ) -> Result<Vec<Fingerprint>> {
        #[cfg(feature = "parallel")]
        let fingerprints = {
            use rayon::prelude::*;
            pharmacophores
                .par_iter()
                .map(|p| self.encode(p, options))
                .collect::<Result<Vec<_>>>()
        };

        #[cfg(not(feature = "parallel"))]
        let fingerprints = pharmacophores
            .iter()
            .map(|p| self.encode(p, options))
            .collect::<Result<Vec<_>>>();

        fingerprints
    }
}

/// `bin + offset`, or `None` when that would be negative.
fn shift(bin: usize, offset: i32) -> Option<usize> {
    usize::try_from(bin as i64 + offset as i64).ok()
}

/// Build the fingerprint of `pharmacophore`.
///
/// Fails with [`kripo_core::KripoError::InvalidArgument`] for an unsupported
/// `fuzzy_factor` and with [`kripo_core::KripoError::UnknownKey`] as soon as a key is
/// missing from `bits`; no partial fingerprint is returned.
pub fn encode(
    pharmacophore: &Pharmacophore,
    include_subs: bool,
    fuzzy_factor: i32,
    bins: &BinTable,
    bits: &BitDictionary,
) -> Result<Fingerprint> {
    let ordered = pharmacophore.ordered_features();
    let n = ordered.len();
    let nr_bins = bins.len();
    // no offset wider than the table can land a bin back inside it
    let max_radius = i32::try_from(nr_bins).unwrap_or(i32::MAX);
    let offsets = fuzzy_offsets(fuzzy_factor)?.clamped(max_radius);
    let dist = distance_matrix(&ordered);

    let mut fp = Fingerprint::new();

    if include_subs {
        for feature in &ordered {
            fp.insert(bits.get(&BitKey::Single(feature.kind.tag()))?);
        }

        let radius = pair_fuzz_radius(fuzzy_factor).min(max_radius);
        for a in 0..n {
            for b in (a + 1)..n {
                let bin = bin_distance(dist.get(a, b), bins);
                let left = ordered[a].kind.tag();
                let right = ordered[b].kind.tag();
                fp.insert(bits.get(&BitKey::Pair { left, bin, right })?);

                // the overflow bin nr_bins is a valid pair bin
                for i in -radius..=radius {
                    if let Some(bin) = shift(bin, i).filter(|&b| b <= nr_bins) {
                        fp.insert(bits.get(&BitKey::Pair { left, bin, right })?);
                    }
                }
            }
        }
    }

    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                // each feature is paired with the triangle side opposite it
                let bin_ab = bin_distance(dist.get(a, b), bins);
                let bin_ac = bin_distance(dist.get(a, c), bins);
                let bin_bc = bin_distance(dist.get(b, c), bins);
                let mut sorted = [
                    Observation::new(ordered[c].kind.tag(), bin_ab),
                    Observation::new(ordered[b].kind.tag(), bin_ac),
                    Observation::new(ordered[a].kind.tag(), bin_bc),
                ];
                sorted.sort_unstable();
                fp.insert(bits.get(&BitKey::Triple(sorted))?);

                for (i, j, k) in offsets.iter() {
                    let fuzzed = match (
                        shift(sorted[0].bin, i),
                        shift(sorted[1].bin, j),
                        shift(sorted[2].bin, k),
                    ) {
                        (Some(x), Some(y), Some(z))
                            if x < nr_bins && y < nr_bins && z < nr_bins =>
                        {
                            [
                                Observation::new(sorted[0].tag, x),
                                Observation::new(sorted[1].tag, y),
                                Observation::new(sorted[2].tag, z),
                            ]
                        }
                        _ => continue,
                    };
                    fp.insert(bits.get(&BitKey::triple(fuzzed))?);
                }
            }
        }
    }

    log::trace!("encoded {} feature(s) into {} bit(s)", n, fp.len());
    Ok(fp)
}
