//! Fixtures shared by the unit tests and the benches.

use std::collections::HashSet;

use crate::bitinfo::BitDictionary;
use crate::feature::FeatureKind;
use crate::key::{BitKey, Observation};

/// Every key the encoder can build with `nr_bins` bins, numbered from 0 in
/// enumeration order.
pub fn complete_dictionary(nr_bins: usize) -> BitDictionary {
    let tags: Vec<u8> = FeatureKind::ALL.iter().map(|k| k.tag()).collect();
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    let mut push = |key: BitKey| {
        let s = key.to_string();
        if seen.insert(s.clone()) {
            keys.push(s);
        }
    };
    for &t in &tags {
        push(BitKey::Single(t));
    }
    for &left in &tags {
        for &right in &tags {
            for bin in 0..=nr_bins {
                push(BitKey::Pair { left, bin, right });
            }
        }
    }
    for &x in &tags {
        for &y in &tags {
            for &z in &tags {
                for bx in 0..=nr_bins {
                    for by in 0..=nr_bins {
                        for bz in 0..=nr_bins {
                            push(BitKey::triple([
                                Observation::new(x, bx),
                                Observation::new(y, by),
                                Observation::new(z, bz),
                            ]));
                        }
                    }
                }
            }
        }
    }
    keys.into_iter().zip(0u32..).collect()
}
