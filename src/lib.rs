//! FuzzyRank - string similarity metrics and closest-match ranking
//!
//! Pairwise metrics over extended grapheme clusters, a named registry of
//! them, and a small layer that sorts or picks the closest of a candidate
//! collection against a sample.
//!
//! # Features
//! - Levenshtein as a normalized similarity and as a raw edit count
//! - Damerau-Levenshtein (plus the restricted OSA variant)
//! - Jaro-Winkler with symmetric operand ordering
//! - Parallel scoring of large candidate collections
//!
//! # Score polarity
//! Every metric reports "larger is closer". Similarities are in `[0.0, 1.0]`;
//! edit distances are returned negated, so identical inputs score `0.0` and an
//! edit count of 3 scores `-3.0`. One comparator therefore works for all metrics.
//!
//! ```
//! use fuzzyrank::{closest, sorted_by_closeness, Metric};
//!
//! let candidates = ["colour", "colr", "collar", "xyz"];
//! assert_eq!(closest(&candidates, "color", Metric::LevenshteinSimilarity), Some(&"colour"));
//!
//! let ranked = sorted_by_closeness(&candidates, "color", Metric::DamerauLevenshtein);
//! assert_eq!(ranked.last(), Some(&&"xyz"));
//! ```

pub mod algorithms;
pub mod config;
pub mod registry;
pub mod search;

pub use algorithms::normalize::NormalizationMode;
pub use algorithms::JaroWinklerConfig;
pub use config::{MatcherConfig, DEFAULT_PARALLEL_THRESHOLD};
pub use registry::{
    lookup, make_comparator, make_ordering, Calculator, Metric, MetricError, ScoreKind,
};
pub use search::{closest, score_all, sorted_by_closeness, Matcher};
