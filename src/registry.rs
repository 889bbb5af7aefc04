//! Metric registry and comparator builder
//!
//! A fixed strategy table maps each [`Metric`] to its calculator. Every
//! calculator follows one polarity rule: a larger value means a closer match.
//! Similarity metrics already satisfy it. Edit-distance metrics return their
//! raw count negated, so `-0` (exactly zero) for identical inputs and `-3`
//! for "kitten"/"sitting".
//!
//! [`make_comparator`] binds a metric to a fixed sample and answers "does the
//! left candidate sort before the right one", i.e. `score(lhs) > score(rhs)`.

use crate::algorithms::{damerau, jaro, levenshtein, units};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A pure metric over grapheme-cluster sequences.
pub type Calculator = fn(&[&str], &[&str]) -> f64;

/// Errors from resolving a metric by name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    #[error(
        "Unknown metric: '{0}'. Valid: levenshtein, levenshtein_distance, \
         damerau_levenshtein, optimal_string_alignment, jaro_winkler"
    )]
    UnknownMetric(String),
}

/// Which numeric shape a metric produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    /// In [0.0, 1.0], 1.0 for identical inputs
    Similarity,
    /// A non-negative edit count, negated; 0.0 for identical inputs
    NegatedDistance,
}

/// Metric identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Normalized Levenshtein similarity
    #[default]
    #[serde(rename = "levenshtein", alias = "levenshtein_similarity")]
    LevenshteinSimilarity,
    /// Raw Levenshtein edit count, negated
    LevenshteinDistance,
    /// Unrestricted Damerau-Levenshtein edit count, negated (not OSA)
    #[serde(alias = "damerau")]
    DamerauLevenshtein,
    /// Restricted Damerau-Levenshtein edit count, negated
    #[serde(alias = "osa")]
    OptimalStringAlignment,
    /// Jaro-Winkler similarity
    JaroWinkler,
}

struct MetricEntry {
    metric: Metric,
    name: &'static str,
    aliases: &'static [&'static str],
    kind: ScoreKind,
    calculator: Calculator,
}

// Indexed by `Metric as usize`
static REGISTRY: [MetricEntry; 5] = [
    MetricEntry {
        metric: Metric::LevenshteinSimilarity,
        name: "levenshtein",
        aliases: &["levenshtein_similarity"],
        kind: ScoreKind::Similarity,
        calculator: levenshtein::levenshtein_similarity_units,
    },
    MetricEntry {
        metric: Metric::LevenshteinDistance,
        name: "levenshtein_distance",
        aliases: &[],
        kind: ScoreKind::NegatedDistance,
        calculator: levenshtein::levenshtein_distance_score,
    },
    MetricEntry {
        metric: Metric::DamerauLevenshtein,
        name: "damerau_levenshtein",
        aliases: &["damerau"],
        kind: ScoreKind::NegatedDistance,
        calculator: damerau::damerau_levenshtein_score,
    },
    MetricEntry {
        metric: Metric::OptimalStringAlignment,
        name: "optimal_string_alignment",
        aliases: &["osa"],
        kind: ScoreKind::NegatedDistance,
        calculator: damerau::optimal_string_alignment_score,
    },
    MetricEntry {
        metric: Metric::JaroWinkler,
        name: "jaro_winkler",
        aliases: &["jarowinkler"],
        kind: ScoreKind::Similarity,
        calculator: jaro::jaro_winkler_units,
    },
];

impl Metric {
    /// Every registered metric, in registry order.
    pub const ALL: [Metric; 5] = [
        Metric::LevenshteinSimilarity,
        Metric::LevenshteinDistance,
        Metric::DamerauLevenshtein,
        Metric::OptimalStringAlignment,
        Metric::JaroWinkler,
    ];

    fn entry(self) -> &'static MetricEntry {
        &REGISTRY[self as usize]
    }

    /// Canonical name used for parsing and display
    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    #[must_use]
    pub fn kind(self) -> ScoreKind {
        self.entry().kind
    }

    #[must_use]
    pub fn calculator(self) -> Calculator {
        self.entry().calculator
    }

    /// Score two pre-segmented sequences.
    #[inline]
    #[must_use]
    pub fn score_units(self, a: &[&str], b: &[&str]) -> f64 {
        (self.calculator())(a, b)
    }

    /// Score two strings.
    ///
    /// # Example
    /// ```
    /// use fuzzyrank::Metric;
    ///
    /// assert_eq!(Metric::LevenshteinDistance.score("kitten", "sitting"), -3.0);
    /// assert_eq!(Metric::LevenshteinSimilarity.score("", ""), 1.0);
    /// ```
    #[must_use]
    pub fn score(self, a: &str, b: &str) -> f64 {
        self.score_units(&units(a), &units(b))
    }

    /// Score of a string compared with itself.
    #[must_use]
    pub fn identity(self) -> f64 {
        match self.kind() {
            ScoreKind::Similarity => 1.0,
            ScoreKind::NegatedDistance => 0.0,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        REGISTRY
            .iter()
            .find(|e| e.name == key || e.aliases.iter().any(|alias| *alias == key))
            .map(|e| e.metric)
            .ok_or_else(|| MetricError::UnknownMetric(s.to_string()))
    }
}

/// Resolve a metric name to its calculator.
pub fn lookup(name: &str) -> Result<Calculator, MetricError> {
    name.parse::<Metric>().map(Metric::calculator)
}

/// Build a "sorts before" predicate bound to `sample`.
///
/// `cmp(lhs, rhs)` is true when `lhs` scores strictly higher than `rhs`
/// against the sample. The sample is segmented once, up front.
///
/// # Example
/// ```
/// use fuzzyrank::{make_comparator, Metric};
///
/// let closer = make_comparator(Metric::LevenshteinDistance, "color");
/// assert!(closer("colour", "xyz"));
/// assert!(!closer("xyz", "colour"));
/// ```
pub fn make_comparator(
    metric: Metric,
    sample: &str,
) -> impl Fn(&str, &str) -> bool + Send + Sync + '_ {
    let calculator = metric.calculator();
    let sample_units = units(sample);
    move |lhs: &str, rhs: &str| {
        calculator(&sample_units, &units(lhs)) > calculator(&sample_units, &units(rhs))
    }
}

/// Same ordering as [`make_comparator`], shaped for `sort_by`.
///
/// Returns `Less` exactly when the comparator would return true for `(lhs, rhs)`.
pub fn make_ordering(
    metric: Metric,
    sample: &str,
) -> impl Fn(&str, &str) -> Ordering + Send + Sync + '_ {
    let calculator = metric.calculator();
    let sample_units = units(sample);
    move |lhs: &str, rhs: &str| {
        let l = calculator(&sample_units, &units(lhs));
        let r = calculator(&sample_units, &units(rhs));
        r.partial_cmp(&l).unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_indexed_by_discriminant() {
        for metric in Metric::ALL {
            assert_eq!(REGISTRY[metric as usize].metric, metric);
        }
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("levenshtein".parse::<Metric>(), Ok(Metric::LevenshteinSimilarity));
        assert_eq!("Levenshtein-Distance".parse::<Metric>(), Ok(Metric::LevenshteinDistance));
        assert_eq!("damerau".parse::<Metric>(), Ok(Metric::DamerauLevenshtein));
        assert_eq!("osa".parse::<Metric>(), Ok(Metric::OptimalStringAlignment));
        assert_eq!(" jaro_winkler ".parse::<Metric>(), Ok(Metric::JaroWinkler));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "soundex".parse::<Metric>().unwrap_err();
        assert_eq!(err, MetricError::UnknownMetric("soundex".to_string()));
        assert!(err.to_string().contains("jaro_winkler"));
        assert!(lookup("nope").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for metric in Metric::ALL {
            assert_eq!(metric.to_string().parse::<Metric>(), Ok(metric));
        }
    }

    #[test]
    fn test_lookup_returns_calculator() {
        let calc = lookup("levenshtein_distance").unwrap();
        let a = units("kitten");
        let b = units("sitting");
        assert_eq!(calc(&a, &b), -3.0);
    }

    #[test]
    fn test_sign_convention() {
        assert_eq!(Metric::LevenshteinDistance.score("kitten", "sitting"), -3.0);
        assert_eq!(Metric::DamerauLevenshtein.score("ab", "ba"), -1.0);
        assert_eq!(Metric::LevenshteinDistance.score("ab", "ba"), -2.0);
        assert_eq!(Metric::OptimalStringAlignment.score("ab", "ba"), -1.0);
        // similarity metrics are never negated
        assert!(Metric::LevenshteinSimilarity.score("ab", "ba") >= 0.0);
        assert!(Metric::JaroWinkler.score("ab", "ba") >= 0.0);
    }

    #[test]
    fn test_identity_values() {
        for metric in Metric::ALL {
            assert_eq!(metric.score("", ""), metric.identity(), "{metric}");
            assert_eq!(metric.score("héllo", "héllo"), metric.identity(), "{metric}");
        }
    }

    #[test]
    fn test_one_side_empty() {
        for metric in [
            Metric::LevenshteinDistance,
            Metric::DamerauLevenshtein,
            Metric::OptimalStringAlignment,
        ] {
            assert_eq!(metric.score("", "abcd"), -4.0);
            assert_eq!(metric.score("abcd", ""), -4.0);
        }
        assert_eq!(Metric::LevenshteinSimilarity.score("", "abcd"), 0.0);
        assert_eq!(Metric::JaroWinkler.score("", "abcd"), 0.0);
    }

    #[test]
    fn test_comparator_polarity() {
        for metric in Metric::ALL {
            let closer = make_comparator(metric, "color");
            assert!(closer("colour", "xyz"), "{metric}");
            assert!(!closer("xyz", "colour"), "{metric}");
            // strict: equal scores never sort before each other
            assert!(!closer("colour", "colour"), "{metric}");
        }
    }

    #[test]
    fn test_ordering_agrees_with_comparator() {
        let candidates = ["colour", "colr", "collar", "xyz", "color"];
        for metric in Metric::ALL {
            let closer = make_comparator(metric, "color");
            let ordering = make_ordering(metric, "color");
            for a in candidates {
                for b in candidates {
                    assert_eq!(
                        closer(a, b),
                        ordering(a, b) == Ordering::Less,
                        "{metric}: {a} {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Metric::DamerauLevenshtein).unwrap();
        assert_eq!(json, "\"damerau_levenshtein\"");
        let parsed: Metric = serde_json::from_str("\"levenshtein\"").unwrap();
        assert_eq!(parsed, Metric::LevenshteinSimilarity);
    }
}
