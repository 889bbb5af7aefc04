//! Comparison units
//!
//! Every metric in this crate compares strings as sequences of extended
//! grapheme clusters, so a base letter with combining marks or a multi-scalar
//! emoji counts as a single unit. Segmentation is deterministic, total and
//! linear in the input length. No case folding or trimming happens here; see
//! [`crate::algorithms::normalize`] for caller-side preprocessing.

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// A string split into grapheme clusters, borrowed from the source string.
///
/// Inline capacity covers typical names and identifiers without touching the heap.
pub type Units<'a> = SmallVec<[&'a str; 64]>;

/// Split a string into extended grapheme clusters.
///
/// # Example
/// ```
/// use fuzzyrank::algorithms::units::units;
///
/// assert_eq!(units("e\u{301}a").len(), 2);
/// assert!(units("").is_empty());
/// ```
#[inline]
#[must_use]
pub fn units(s: &str) -> Units<'_> {
    s.graphemes(true).collect()
}

/// Number of grapheme clusters in `s`.
#[inline]
#[must_use]
pub fn unit_count(s: &str) -> usize {
    s.graphemes(true).count()
}
