//! Fuzzy bin offsets.
//!
//! Fuzzing spreads each 3-point observation over neighbouring bins, so small
//! coordinate noise does not flip bits.

use kripo_core::{KripoError, Result};

/// Offset set of the first kripo release. Tuned by hand; kept verbatim.
const LEGACY_OFFSETS: [(i32, i32, i32); 7] = [
    (1, 2, 1),
    (1, 1, -1),
    (1, -1, -1),
    (1, 0, -1),
    (0, -1, -1),
    (-1, -1, -1),
    (1, 2, 0),
];

/// One axis at a time, one step in either direction.
const AXIS_OFFSETS: [(i32, i32, i32); 7] = [
    (0, 0, 0),
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// A finite, restartable sequence of offsets for the three sorted bins of a
/// triple key.
///
/// Offsets are produced on demand, so a large fuzzy factor costs nothing
/// until it is iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzyOffsets {
    /// Every `(i, j, k)` in `-f..=f`, outermost axis slowest.
    Cube(i32),
    /// A fixed list, emitted in order.
    Fixed(&'static [(i32, i32, i32)]),
}

impl FuzzyOffsets {
    /// The offsets, in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, i32)> {
        let (cube, fixed): (Option<i32>, &'static [(i32, i32, i32)]) = match *self {
            FuzzyOffsets::Cube(f) => (Some(f), &[]),
            FuzzyOffsets::Fixed(offsets) => (None, offsets),
        };
        cube.into_iter()
            .flat_map(|f| {
                (-f..=f).flat_map(move |i| {
                    (-f..=f).flat_map(move |j| (-f..=f).map(move |k| (i, j, k)))
                })
            })
            .chain(fixed.iter().copied())
    }

    /// Number of offsets, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        match *self {
            FuzzyOffsets::Cube(f) if f < 0 => 0,
            FuzzyOffsets::Cube(f) => {
                let side = (f as usize).saturating_mul(2).saturating_add(1);
                side.saturating_mul(side).saturating_mul(side)
            }
            FuzzyOffsets::Fixed(offsets) => offsets.len(),
        }
    }

    /// Whether no offset is produced.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Limit a cube to `radius`. Fixed sets are returned unchanged.
    ///
    /// An offset larger than the bin count moves every bin out of range, so
    /// clamping a cube to the bin count leaves the emitted keys unchanged.
    pub fn clamped(self, radius: i32) -> Self {
        match self {
            FuzzyOffsets::Cube(f) => FuzzyOffsets::Cube(f.min(radius.max(0))),
            fixed => fixed,
        }
    }

    /// The offsets as a vector.
    pub fn to_vec(&self) -> Vec<(i32, i32, i32)> {
        self.iter().collect()
    }
}

/// Offsets applied to the three sorted bins of a triple key.
///
/// - `fuzzy_factor >= 0`: every `(i, j, k)` in `-f..=f`, outermost axis
///   slowest, `(2f + 1)³` offsets
/// - `-1`: the legacy offset set
/// - `-2`: single-step offsets along one axis at a time
///
/// Any other value is an [`KripoError::InvalidArgument`].
pub fn fuzzy_offsets(fuzzy_factor: i32) -> Result<FuzzyOffsets> {
    match fuzzy_factor {
        f if f >= 0 => Ok(FuzzyOffsets::Cube(f)),
        -1 => Ok(FuzzyOffsets::Fixed(&LEGACY_OFFSETS)),
        -2 => Ok(FuzzyOffsets::Fixed(&AXIS_OFFSETS)),
        f => Err(KripoError::InvalidArgument(format!(
            "invalid fuzzy factor {f}, expected >= -2"
        ))),
    }
}

/// Radius of the 1-D fuzz applied to pair bins. Negative factors mean 1.
pub fn pair_fuzz_radius(fuzzy_factor: i32) -> i32 {
    if fuzzy_factor < 0 {
        1
    } else {
        fuzzy_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_identity() {
        assert_eq!(fuzzy_offsets(0).unwrap().to_vec(), vec![(0, 0, 0)]);
    }

    #[test]
    fn one_is_full_cube() {
        let offsets = fuzzy_offsets(1).unwrap().to_vec();
        assert_eq!(offsets.len(), 27);
        assert_eq!(offsets[0], (-1, -1, -1));
        assert_eq!(offsets[1], (-1, -1, 0));
        assert_eq!(offsets[13], (0, 0, 0));
        assert_eq!(offsets[26], (1, 1, 1));
    }

    #[test]
    fn two_has_125() {
        let offsets = fuzzy_offsets(2).unwrap().to_vec();
        assert_eq!(offsets.len(), 125);
        assert!(offsets.contains(&(2, -2, 0)));
    }

    #[test]
    fn legacy_set_verbatim() {
        assert_eq!(
            fuzzy_offsets(-1).unwrap().to_vec(),
            vec![
                (1, 2, 1),
                (1, 1, -1),
                (1, -1, -1),
                (1, 0, -1),
                (0, -1, -1),
                (-1, -1, -1),
                (1, 2, 0),
            ]
        );
    }

    #[test]
    fn axis_set_order() {
        assert_eq!(
            fuzzy_offsets(-2).unwrap().to_vec(),
            vec![
                (0, 0, 0),
                (-1, 0, 0),
                (1, 0, 0),
                (0, -1, 0),
                (0, 1, 0),
                (0, 0, -1),
                (0, 0, 1),
            ]
        );
    }

    #[test]
    fn other_negatives_rejected() {
        for f in [-3, -10, i32::MIN] {
            let err = fuzzy_offsets(f).unwrap_err();
            assert!(matches!(err, KripoError::InvalidArgument(_)));
        }
    }

    #[test]
    fn lengths() {
        assert_eq!(fuzzy_offsets(0).unwrap().len(), 1);
        assert_eq!(fuzzy_offsets(1).unwrap().len(), 27);
        assert_eq!(fuzzy_offsets(-1).unwrap().len(), 7);
        assert_eq!(fuzzy_offsets(-2).unwrap().len(), 7);
        assert!(!fuzzy_offsets(0).unwrap().is_empty());
    }

    #[test]
    fn huge_factor_is_lazy() {
        let offsets = fuzzy_offsets(i32::MAX).unwrap();
        assert_eq!(offsets.len(), usize::MAX);
        let first: Vec<_> = offsets.iter().take(2).collect();
        let m = -i32::MAX;
        assert_eq!(first, vec![(m, m, m), (m, m, m + 1)]);
    }

    #[test]
    fn restartable() {
        let offsets = fuzzy_offsets(1).unwrap();
        assert_eq!(offsets.to_vec(), offsets.iter().collect::<Vec<_>>());
    }

    #[test]
    fn clamping() {
        assert_eq!(fuzzy_offsets(1_000_000).unwrap().clamped(2), FuzzyOffsets::Cube(2));
        assert_eq!(fuzzy_offsets(1).unwrap().clamped(2), FuzzyOffsets::Cube(1));
        let legacy = fuzzy_offsets(-1).unwrap();
        assert_eq!(legacy.clamped(0), legacy);
    }

    #[test]
    fn pair_radius() {
        assert_eq!(pair_fuzz_radius(-1), 1);
        assert_eq!(pair_fuzz_radius(-2), 1);
        assert_eq!(pair_fuzz_radius(0), 0);
        assert_eq!(pair_fuzz_radius(3), 3);
    }
}
