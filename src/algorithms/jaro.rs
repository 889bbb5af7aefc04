//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.
//!
//! Operands are put in a canonical order before matching: the shorter sequence
//! is scanned against the longer one, and equal-length sequences are ordered
//! lexicographically. This keeps `sim(a, b) == sim(b, a)` exact.
//!
//! The matching window is `len(longer) / 2` units on either side. A
//! transposition is counted whenever a match lands at an earlier position in
//! the longer sequence than the previous match did.

use super::units::units;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Configuration for Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinklerConfig {
    /// Prefix weight (typically 0.1, max 0.25)
    pub prefix_weight: f64,
    /// Maximum prefix length to consider (typically 4)
    pub max_prefix_length: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_weight: 0.1,
            max_prefix_length: 4,
        }
    }
}

impl JaroWinklerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Weights above 0.25 can push scores past 1.0, so the weight is clamped to [0.0, 0.25].
    #[must_use]
    pub fn with_prefix_weight(mut self, weight: f64) -> Self {
        if !(0.0..=0.25).contains(&weight) {
            log::warn!("prefix_weight {} clamped to [0.0, 0.25]", weight);
        }
        self.prefix_weight = weight.clamp(0.0, 0.25);
        self
    }

    #[must_use]
    pub fn with_max_prefix_length(mut self, length: usize) -> Self {
        self.max_prefix_length = length;
        self
    }
}

/// Order operands so the shorter (or lexicographically smaller) comes first.
#[inline]
fn canonical<'s, 'u>(a: &'s [&'u str], b: &'s [&'u str]) -> (&'s [&'u str], &'s [&'u str]) {
    match a.len().cmp(&b.len()) {
        std::cmp::Ordering::Less => (a, b),
        std::cmp::Ordering::Greater => (b, a),
        std::cmp::Ordering::Equal if a <= b => (a, b),
        std::cmp::Ordering::Equal => (b, a),
    }
}

/// Jaro similarity over pre-segmented units.
#[must_use]
pub fn jaro_similarity_units(a: &[&str], b: &[&str]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let (short, long) = canonical(a, b);
    let short_len = short.len();
    let long_len = long.len();

    let window = long_len / 2;

    let mut long_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; long_len];

    let mut matches = 0usize;
    let mut transpositions = 0usize;
    let mut last_match: Option<usize> = None;

    for (i, unit) in short.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(long_len);

        for j in start..end {
            if long_matched[j] || long[j] != *unit {
                continue;
            }
            long_matched[j] = true;
            matches += 1;
            if matches!(last_match, Some(prev) if j < prev) {
                transpositions += 1;
            }
            last_match = Some(j);
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let m = matches as f64;
    let t = transpositions as f64;
    (m / short_len as f64 + m / long_len as f64 + (m - t) / m) / 3.0
}

/// Jaro similarity (0.0 to 1.0), comparing grapheme clusters.
#[inline]
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    jaro_similarity_units(&units(a), &units(b))
}

/// Jaro-Winkler similarity over pre-segmented units with custom parameters.
#[must_use]
pub fn jaro_winkler_units_with_config(a: &[&str], b: &[&str], config: &JaroWinklerConfig) -> f64 {
    let jaro_sim = jaro_similarity_units(a, b);

    if jaro_sim == 0.0 {
        return 0.0;
    }

    let prefix_weight = config.prefix_weight.clamp(0.0, 0.25);
    // prefix_len * prefix_weight must not exceed 1.0 or the score leaves [0, 1]
    let max_prefix = if prefix_weight > 0.0 {
        config.max_prefix_length.min((1.0 / prefix_weight) as usize)
    } else {
        config.max_prefix_length
    };

    let prefix_len = a
        .iter()
        .zip(b.iter())
        .take(max_prefix)
        .take_while(|(au, bu)| au == bu)
        .count();

    // min absorbs rounding when floor(1 / weight) * weight lands a hair above 1
    (jaro_sim + (prefix_len as f64 * prefix_weight * (1.0 - jaro_sim))).min(1.0)
}

/// Jaro-Winkler similarity over pre-segmented units (prefix weight 0.1, prefix up to 4).
#[inline]
#[must_use]
pub fn jaro_winkler_units(a: &[&str], b: &[&str]) -> f64 {
    jaro_winkler_units_with_config(a, b, &JaroWinklerConfig::default())
}

/// Jaro-Winkler similarity with default parameters.
///
/// # Example
/// ```
/// use fuzzyrank::algorithms::jaro::jaro_winkler_similarity;
///
/// let score = jaro_winkler_similarity("MARTHA", "MARHTA");
/// assert!((score - 0.961).abs() < 0.001);
/// ```
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    jaro_winkler_units(&units(a), &units(b))
}

/// Jaro-Winkler similarity with custom parameters.
#[inline]
#[must_use]
pub fn jaro_winkler_with_config(a: &str, b: &str, config: &JaroWinklerConfig) -> f64 {
    jaro_winkler_units_with_config(&units(a), &units(b), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_jaro_basic() {
        assert!(approx_eq(jaro_similarity("", ""), 1.0));
        assert!(approx_eq(jaro_similarity("abc", "abc"), 1.0));
        assert!(approx_eq(jaro_similarity("abc", "xyz"), 0.0));
        assert_eq!(jaro_similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_jaro_martha() {
        // 6 matches, H/T swap counted once
        assert!(approx_eq(jaro_similarity("MARTHA", "MARHTA"), 0.944));
    }

    #[test]
    fn test_jaro_winkler_martha() {
        assert!(approx_eq(jaro_winkler_similarity("MARTHA", "MARHTA"), 0.961));
    }

    #[test]
    fn test_jaro_winkler_boost() {
        let jaro = jaro_similarity("MARTHA", "MARHTA");
        let jaro_winkler = jaro_winkler_similarity("MARTHA", "MARHTA");
        assert!(jaro_winkler > jaro);
    }

    #[test]
    fn test_jaro_winkler_empty() {
        assert_eq!(jaro_winkler_similarity("", ""), 1.0);
        assert_eq!(jaro_winkler_similarity("", "abc"), 0.0);
        assert_eq!(jaro_winkler_similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_window_is_half_longer_length() {
        // "ab" vs "xxab": window is 2, so both units match from position 0 and 1
        let score = jaro_similarity("ab", "xxab");
        let expected = (1.0 + 0.5 + 1.0) / 3.0;
        assert!(approx_eq(score, expected));
    }

    #[test]
    fn test_symmetric_for_equal_lengths() {
        let pairs = [("DWAYNE", "DUANEX"), ("abcd", "dcba"), ("crate", "trace")];
        for (a, b) in pairs {
            assert_eq!(jaro_winkler_similarity(a, b), jaro_winkler_similarity(b, a));
        }
    }

    #[test]
    fn test_grapheme_units() {
        let a = "cafe\u{301}";
        assert_eq!(jaro_winkler_similarity(a, a), 1.0);
        // the combining mark is part of the last unit, so only 3 of 4 units match
        let score = jaro_similarity("cafe\u{301}", "cafe");
        assert!(approx_eq(score, (0.75 + 0.75 + 1.0) / 3.0));
    }

    #[test]
    fn test_config_clamps_weight() {
        let config = JaroWinklerConfig::new().with_prefix_weight(0.9);
        assert_eq!(config.prefix_weight, 0.25);
        let score = jaro_winkler_with_config("prefixA", "prefixB", &config);
        assert!(score <= 1.0);
    }

    #[test]
    fn test_long_prefix_stays_in_range() {
        let config = JaroWinklerConfig::new()
            .with_prefix_weight(0.25)
            .with_max_prefix_length(8);
        let score = jaro_winkler_with_config("abcdefgX", "abcdefgY", &config);
        assert!((0.0..=1.0).contains(&score), "{score}");

        // only 4 units of prefix count at weight 0.25
        let capped = JaroWinklerConfig::new()
            .with_prefix_weight(0.25)
            .with_max_prefix_length(4);
        assert_eq!(score, jaro_winkler_with_config("abcdefgX", "abcdefgY", &capped));
    }

    #[test]
    fn test_deserialized_config_stays_in_range() {
        let config: JaroWinklerConfig =
            serde_json::from_str(r#"{"prefix_weight": 0.2, "max_prefix_length": 10}"#).unwrap();
        for (a, b) in [("abcdefgX", "abcdefgY"), ("prefixes", "prefixed"), ("ab", "ab")] {
            let score = jaro_winkler_with_config(a, b, &config);
            assert!((0.0..=1.0).contains(&score), "{a} {b}: {score}");
        }
    }

    #[test]
    fn test_config_zero_weight_is_plain_jaro() {
        let config = JaroWinklerConfig::new().with_prefix_weight(0.0);
        let jw = jaro_winkler_with_config("MARTHA", "MARHTA", &config);
        assert_eq!(jw, jaro_similarity("MARTHA", "MARHTA"));
    }
}
