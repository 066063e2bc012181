//! Pharmacophore features and the 3D points they sit on.

use core::fmt;
use core::str::FromStr;

use kripo_core::{KripoError, Result, Summarizable};

/// A point in 3D Cartesian space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// Create a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point3D) -> f64 {
        let d = self.sub(other);
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }

    /// Vector addition.
    pub fn add(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Vector subtraction.
    pub fn sub(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// The closed set of pharmacophore feature types.
///
/// Each kind has a one-letter tag used in bit dictionary keys. Features are
/// ordered by that tag, not by declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum FeatureKind {
    /// Hydrophobe (`H`).
    Lipo,
    /// Positive charge (`P`).
    Posc,
    /// Negative charge (`N`).
    Negc,
    /// Hydrogen bond donor (`O`).
    Hdon,
    /// Hydrogen bond acceptor (`A`).
    Hacc,
    /// Aromatic ring (`R`).
    Arom,
}

impl FeatureKind {
    /// All feature kinds.
    pub const ALL: [FeatureKind; 6] = [
        FeatureKind::Lipo,
        FeatureKind::Posc,
        FeatureKind::Negc,
        FeatureKind::Hdon,
        FeatureKind::Hacc,
        FeatureKind::Arom,
    ];

    /// One-letter tag used in bit keys.
    pub fn tag(self) -> u8 {
        match self {
            FeatureKind::Lipo => b'H',
            FeatureKind::Posc => b'P',
            FeatureKind::Negc => b'N',
            FeatureKind::Hdon => b'O',
            FeatureKind::Hacc => b'A',
            FeatureKind::Arom => b'R',
        }
    }

    /// Inverse of [`FeatureKind::tag`].
    pub fn from_tag(tag: u8) -> Option<FeatureKind> {
        FeatureKind::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// Long name as written by the structural layer (e.g. `"HDON"`).
    pub fn name(self) -> &'static str {
        match self {
            FeatureKind::Lipo => "LIPO",
            FeatureKind::Posc => "POSC",
            FeatureKind::Negc => "NEGC",
            FeatureKind::Hdon => "HDON",
            FeatureKind::Hacc => "HACC",
            FeatureKind::Arom => "AROM",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureKind {
    type Err = KripoError;

    fn from_str(s: &str) -> Result<Self> {
        FeatureKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KripoError::InvalidArgument(format!("unknown feature kind '{s}'")))
    }
}

/// A typed, positioned interaction point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    pub kind: FeatureKind,
    pub position: Point3D,
}

impl Feature {
    /// Create a new feature.
    pub fn new(kind: FeatureKind, position: Point3D) -> Self {
        Self { kind, position }
    }

    /// Euclidean distance between two features.
    pub fn distance(&self, other: &Feature) -> f64 {
        self.position.distance_to(&other.position)
    }
}

/// An unordered collection of features, e.g. the interaction points of one
/// fragment in its binding site.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pharmacophore {
    /// Optional identifier (fragment or site name).
    pub id: Option<String>,
    features: Vec<Feature>,
}

impl Pharmacophore {
    /// Create a pharmacophore from its features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self { id: None, features }
    }

    /// Attach an identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The features, in the order they were supplied.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Iterate over the features.
    pub fn iter(&self) -> core::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether there are no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Features stably sorted by tag, the enumeration order of the encoder.
    pub fn ordered_features(&self) -> Vec<Feature> {
        let mut ordered = self.features.clone();
        ordered.sort_by_key(|f| f.kind.tag());
        ordered
    }
}

impl FromIterator<Feature> for Pharmacophore {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Pharmacophore::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Pharmacophore {
    type Item = &'a Feature;
    type IntoIter = core::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

impl Summarizable for Pharmacophore {
    fn summary(&self) -> String {
        let tags: String = self
            .ordered_features()
            .iter()
            .map(|f| f.kind.tag() as char)
            .collect();
        format!(
            "Pharmacophore {} — {} feature(s) [{}]",
            self.id.as_deref().unwrap_or("<unnamed>"),
            self.len(),
            tags,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_features() {
        let a = Feature::new(FeatureKind::Lipo, Point3D::new(0.0, 0.0, 0.0));
        let b = Feature::new(FeatureKind::Hacc, Point3D::new(3.0, 4.0, 0.0));
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_length_of_difference() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        let q = Point3D::new(-1.0, 5.0, 9.0);
        assert_eq!(q.sub(&p), Point3D::new(-2.0, 3.0, 6.0));
        assert!((p.distance_to(&q) - 7.0).abs() < 1e-12);
        assert_eq!(p.add(&q.sub(&p)), q);
    }

    #[test]
    fn tags_are_distinct() {
        let mut tags: Vec<u8> = FeatureKind::ALL.iter().map(|k| k.tag()).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags, b"AHNOPR".to_vec());
    }

    #[test]
    fn tag_roundtrip() {
        for kind in FeatureKind::ALL {
            assert_eq!(FeatureKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(FeatureKind::from_tag(b'X'), None);
    }

    #[test]
    fn parse_long_names() {
        assert_eq!("HDON".parse::<FeatureKind>().unwrap(), FeatureKind::Hdon);
        assert_eq!("arom".parse::<FeatureKind>().unwrap(), FeatureKind::Arom);
        assert_eq!(FeatureKind::Negc.to_string(), "NEGC");
        let err = "METAL".parse::<FeatureKind>().unwrap_err();
        assert!(matches!(err, KripoError::InvalidArgument(_)));
    }

    #[test]
    fn ordered_features_sort_by_tag_stably() {
        let p: Pharmacophore = vec![
            Feature::new(FeatureKind::Arom, Point3D::new(1.0, 0.0, 0.0)),
            Feature::new(FeatureKind::Lipo, Point3D::new(2.0, 0.0, 0.0)),
            Feature::new(FeatureKind::Hacc, Point3D::new(3.0, 0.0, 0.0)),
            Feature::new(FeatureKind::Lipo, Point3D::new(4.0, 0.0, 0.0)),
        ]
        .into_iter()
        .collect();

        let ordered = p.ordered_features();
        let tags: Vec<u8> = ordered.iter().map(|f| f.kind.tag()).collect();
        assert_eq!(tags, b"AHHR".to_vec());
        // the two hydrophobes keep their input order
        assert_eq!(ordered[1].position.x, 2.0);
        assert_eq!(ordered[2].position.x, 4.0);
    }

    #[test]
    fn summary_lists_tags() {
        let p = Pharmacophore::new(vec![
            Feature::new(FeatureKind::Posc, Point3D::zero()),
            Feature::new(FeatureKind::Hdon, Point3D::zero()),
        ])
        .with_id("3HEG_BAX_frag1");
        let s = p.summary();
        assert!(s.contains("3HEG_BAX_frag1"));
        assert!(s.contains("2 feature(s)"));
        assert!(s.contains("[OP]"));
    }
}
