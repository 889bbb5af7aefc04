//! Core string similarity algorithms
//!
//! Each algorithm is a standalone function over grapheme-cluster units, with a
//! `&str` convenience wrapper. The `*_score` and `*_units` functions share the
//! [`crate::registry::Calculator`] signature so the registry can hold them as
//! plain function pointers.

pub mod damerau;
pub mod jaro;
pub mod levenshtein;
pub mod normalize;
pub mod units;

pub use damerau::{
    damerau_levenshtein_distance, damerau_levenshtein_score, optimal_string_alignment,
    optimal_string_alignment_score,
};
pub use jaro::{
    jaro_similarity, jaro_winkler_similarity, jaro_winkler_units, jaro_winkler_with_config,
    JaroWinklerConfig,
};
pub use levenshtein::{
    levenshtein_distance, levenshtein_distance_score, levenshtein_similarity,
    levenshtein_similarity_units,
};
pub use units::{unit_count, units, Units};

/// Turn an edit count into a score where larger means closer.
///
/// Zero maps to `+0.0` so identical inputs score exactly zero.
#[inline]
pub(crate) fn negated(distance: usize) -> f64 {
    0.0 - distance as f64
}
