//! Three-point pharmacophore fingerprints for binding-site comparison.
//!
//! Encodes the 3D arrangement of pharmacophore features (hydrophobes,
//! charges, hydrogen bond donors/acceptors, aromatic rings) into a sparse bit
//! set. Each bit stands for one feature combination with binned distances,
//! looked up in a precomputed bit dictionary.
//!
//! - **Binning**: [`bins::build_bins`] and [`bins::bin_distance`]
//! - **Bit dictionary**: [`BitDictionary`], loaded once from a static resource
//! - **Fuzzing**: [`fuzzy::fuzzy_offsets`] spreads observations over nearby bins
//! - **Encoding**: [`encode`] or a shared [`ThreePointScheme`]
//!
//! # Example
//!
//! ```
//! use kripo_fp::{BinConfig, BitDictionary, EncodeOptions, Feature, FeatureKind,
//!                Pharmacophore, Point3D, ThreePointScheme};
//!
//! let bits = BitDictionary::from_bytes(b"H 0\nP 1\nHcP 2\nHdP 3\nHeP 4\n").unwrap();
//! let scheme = ThreePointScheme::from_config(&BinConfig::default(), bits).unwrap();
//!
//! // a hydrophobe and a positive charge 2.5 Å apart
//! let site = Pharmacophore::new(vec![
//!     Feature::new(FeatureKind::Posc, Point3D::new(2.5, 0.0, 0.0)),
//!     Feature::new(FeatureKind::Lipo, Point3D::new(0.0, 0.0, 0.0)),
//! ]);
//!
//! let fp = scheme.encode(&site, &EncodeOptions::default()).unwrap();
//! assert_eq!(fp.to_vec(), vec![0, 1, 2, 3, 4]);
//! ```

pub mod bins;
pub mod bitinfo;
pub mod distance;
pub mod feature;
pub mod fingerprint;
pub mod fuzzy;
pub mod key;
pub mod threepoint;

#[doc(hidden)]
pub mod testing;

pub use bins::{bin_distance, build_bins, BinConfig, BinTable};
pub use bitinfo::BitDictionary;
pub use distance::{distance_matrix, DistanceMatrix};
pub use feature::{Feature, FeatureKind, Pharmacophore, Point3D};
pub use fingerprint::Fingerprint;
pub use fuzzy::{fuzzy_offsets, pair_fuzz_radius, FuzzyOffsets};
pub use key::{BitKey, Observation};
pub use threepoint::{encode, EncodeOptions, ThreePointScheme};

#[cfg(feature = "std")]
pub use bitinfo::load_bit_dictionary;
