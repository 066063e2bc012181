//! Distance binning.
//!
//! A [`BinTable`] partitions distances into discrete bins by a strictly
//! increasing list of thresholds. Bin `i` covers `[bins[i-1], bins[i])`, and
//! the overflow bin `bins.len()` covers everything past the last threshold.

use kripo_core::{KripoError, Result, Summarizable};

/// Bin table parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinConfig {
    /// Width of the first bin, in Angstroms.
    pub fp_width: f64,
    /// Factor applied to the running bin width for each next bin.
    pub fp_multiplier: f64,
    /// Maximum number of thresholds.
    pub max_bins: usize,
    /// No threshold may exceed this distance.
    pub max_distance: f64,
}

impl Default for BinConfig {
    /// Twenty 0.8 Å bins, the scheme the shipped bit dictionaries were built for.
    fn default() -> Self {
        Self {
            fp_width: 0.8,
            fp_multiplier: 1.0,
            max_bins: 20,
            max_distance: 23.0,
        }
    }
}

impl BinConfig {
    /// Build the bin table described by this config.
    pub fn build(&self) -> Result<BinTable> {
        build_bins(
            self.fp_width,
            self.fp_multiplier,
            self.max_bins,
            self.max_distance,
        )
    }
}

/// Strictly increasing distance thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct BinTable {
    thresholds: Vec<f64>,
}

impl BinTable {
    /// The thresholds, ascending.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Number of thresholds. Also the index of the overflow bin.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Always false for a table built by [`build_bins`].
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Bin index of a distance. See [`bin_distance`].
    pub fn bin(&self, distance: f64) -> usize {
        bin_distance(distance, self)
    }
}

impl Summarizable for BinTable {
    fn summary(&self) -> String {
        match (self.thresholds.first(), self.thresholds.last()) {
            (Some(first), Some(last)) => format!(
                "BinTable — {} bin(s), {first:.3} .. {last:.3} Å",
                self.len()
            ),
            _ => "BinTable — empty".to_string(),
        }
    }
}

/// Build a bin table.
///
/// The first threshold is `width`. Each next threshold adds the running bin
/// width, multiplied by `multiplier` at every step, to the previous one. Stops
/// after `max_bins` thresholds or before a threshold would exceed
/// `max_distance`.
pub fn build_bins(
    width: f64,
    multiplier: f64,
    max_bins: usize,
    max_distance: f64,
) -> Result<BinTable> {
    if !width.is_finite() || width <= 0.0 {
        return Err(KripoError::Config(format!(
            "bin width must be positive, got {width}"
        )));
    }
    if !max_distance.is_finite() || max_distance <= 0.0 {
        return Err(KripoError::Config(format!(
            "max distance must be positive, got {max_distance}"
        )));
    }
    if !multiplier.is_finite() || multiplier <= 0.0 {
        return Err(KripoError::Config(format!(
            "bin multiplier must be positive, got {multiplier}"
        )));
    }
    if max_bins == 0 {
        return Err(KripoError::Config("max bins must be at least 1".into()));
    }

    let mut thresholds = vec![width];
    let mut bin_width = width;
    let mut last = width;
    while thresholds.len() < max_bins {
        bin_width *= multiplier;
        let next = last + bin_width;
        // a shrinking width can stop adding anything before max_bins is reached
        if next > max_distance || next <= last {
            break;
        }
        thresholds.push(next);
        last = next;
    }

    Ok(BinTable { thresholds })
}

/// Bin index of `distance`: the number of thresholds `<= distance`.
///
/// Distances past the last threshold land in the overflow bin `bins.len()`.
pub fn bin_distance(distance: f64, bins: &BinTable) -> usize {
    bins.thresholds.partition_point(|&t| t <= distance)
}
