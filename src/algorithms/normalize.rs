//! Caller-side string normalization
//!
//! Metrics never fold case or strip anything on their own. Callers that want
//! case-insensitive or punctuation-insensitive matching preprocess both sides
//! with one of these modes first, or configure a [`crate::Matcher`] to do it.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Normalization mode for string preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Convert to lowercase only
    Lowercase,
    /// Apply Unicode NFKD normalization
    UnicodeNfkd,
    /// Remove ASCII punctuation characters
    RemovePunctuation,
    /// Remove all whitespace
    RemoveWhitespace,
    /// NFKD, lowercase, then drop punctuation and whitespace
    Strict,
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    use unicode_normalization::UnicodeNormalization;

    match mode {
        NormalizationMode::Lowercase => s.to_lowercase(),
        NormalizationMode::UnicodeNfkd => s.nfkd().collect(),
        NormalizationMode::RemovePunctuation => {
            s.chars().filter(|c| !c.is_ascii_punctuation()).collect()
        }
        NormalizationMode::RemoveWhitespace => s.chars().filter(|c| !c.is_whitespace()).collect(),
        NormalizationMode::Strict => STRICT_STEPS
            .iter()
            .fold(s.to_string(), |acc, &step| normalize_string(&acc, step)),
    }
}

// The modes `Strict` chains, in order
const STRICT_STEPS: [NormalizationMode; 4] = [
    NormalizationMode::UnicodeNfkd,
    NormalizationMode::Lowercase,
    NormalizationMode::RemovePunctuation,
    NormalizationMode::RemoveWhitespace,
];

/// Apply an optional mode, borrowing the input when there is nothing to do.
#[must_use]
pub fn maybe_normalize(s: &str, mode: Option<NormalizationMode>) -> Cow<'_, str> {
    match mode {
        None => Cow::Borrowed(s),
        Some(mode) => Cow::Owned(normalize_string(s, mode)),
    }
}
