//! Pairwise feature distances.

use crate::feature::Feature;

/// Symmetric N×N matrix of Euclidean distances, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    /// Distance between features `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "index out of range");
        self.distances[i * self.size + j]
    }

    /// Row `i`: the distances from feature `i` to every feature.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.distances[i * self.size..(i + 1) * self.size]
    }

    /// Number of features (rows).
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Compute all pairwise distances between `features`.
///
/// Row and column indices are indices into `features`.
pub fn distance_matrix(features: &[Feature]) -> DistanceMatrix {
    let n = features.len();
    let mut distances = vec![0.0f64; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = features[i].distance(&features[j]);
            distances[i * n + j] = d;
            distances[j * n + i] = d;
        }
    }
    DistanceMatrix { size: n, distances }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{FeatureKind, Point3D};

    fn feature(x: f64, y: f64, z: f64) -> Feature {
        Feature::new(FeatureKind::Lipo, Point3D::new(x, y, z))
    }

    #[test]
    fn empty_input() {
        let m = distance_matrix(&[]);
        assert_eq!(m.size(), 0);
    }

    #[test]
    fn symmetric_with_zero_diagonal() {
        let features = [
            feature(0.0, 0.0, 0.0),
            feature(3.0, 4.0, 0.0),
            feature(0.0, 0.0, 2.0),
        ];
        let m = distance_matrix(&features);
        assert_eq!(m.size(), 3);
        for i in 0..3 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert!((m.get(0, 1) - 5.0).abs() < 1e-12);
        assert!((m.get(0, 2) - 2.0).abs() < 1e-12);
        assert!((m.get(1, 2) - 29.0f64.sqrt()).abs() < 1e-12);
        assert_eq!(m.row(0).len(), 3);
        assert_eq!(m.row(1)[0], m.get(1, 0));
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn out_of_range_panics() {
        let m = distance_matrix(&[feature(0.0, 0.0, 0.0)]);
        m.get(0, 1);
    }
}
