//! Damerau-Levenshtein distance implementation
//!
//! Extends Levenshtein with adjacent transpositions (cost 1).
//! Particularly useful for typo detection where letter swaps are common.
//!
//! `damerau_levenshtein` is the unrestricted distance, not optimal string
//! alignment; OSA is available separately as [`optimal_string_alignment`].
//!
//! [`damerau_levenshtein_distance`] uses the last-row bookkeeping table and a
//! `(m+2) x (n+2)` matrix whose borders hold the sentinel `m + n`, so the
//! transposition lookup never leaves the matrix.
//! [`optimal_string_alignment`] is the restricted variant that never edits a
//! substring more than once.
//!
//! Example where the two differ:
//! - "CA" -> "ABC": OSA = 3, Damerau-Levenshtein = 2

use super::units::units;
use ahash::AHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

/// Damerau-Levenshtein distance over pre-segmented units.
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(m*n) plus one table entry per distinct unit of `a`
#[must_use]
pub fn damerau_levenshtein_distance_units<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    if a == b {
        return 0;
    }

    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let max_dist = m + n;

    // Last row (1-based) at which each unit of `a` was seen
    let mut last_row: AHashMap<&T, usize> = AHashMap::with_capacity(m.min(64));

    let mut d: Vec<Vec<usize>> = vec![vec![0; n + 2]; m + 2];

    d[0][0] = max_dist;
    for i in 0..=m {
        d[i + 1][0] = max_dist;
        d[i + 1][1] = i;
    }
    for j in 0..=n {
        d[0][j + 1] = max_dist;
        d[1][j + 1] = j;
    }

    for i in 1..=m {
        // Last column in this row where a[i-1] matched
        let mut last_col = 0usize;

        for j in 1..=n {
            let i1 = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let j1 = last_col;

            let cost = if a[i - 1] == b[j - 1] {
                last_col = j;
                0
            } else {
                1
            };

            d[i + 1][j + 1] = (d[i][j] + cost) // substitution
                .min(d[i + 1][j] + 1) // insertion
                .min(d[i][j + 1] + 1) // deletion
                .min(d[i1][j1] + (i - i1 - 1) + 1 + (j - j1 - 1)); // transposition
        }

        last_row.insert(&a[i - 1], i);
    }

    d[m + 1][n + 1]
}

/// Damerau-Levenshtein distance between two strings, counted in grapheme clusters.
///
/// # Example
/// ```
/// use fuzzyrank::algorithms::damerau::damerau_levenshtein_distance;
///
/// assert_eq!(damerau_levenshtein_distance("ab", "ba"), 1);
/// assert_eq!(damerau_levenshtein_distance("", "abc"), 3);
/// ```
#[inline]
#[must_use]
pub fn damerau_levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    damerau_levenshtein_distance_units(&units(a), &units(b))
}

/// Negated Damerau-Levenshtein distance; larger means closer.
#[inline]
#[must_use]
pub fn damerau_levenshtein_score(a: &[&str], b: &[&str]) -> f64 {
    super::negated(damerau_levenshtein_distance_units(a, b))
}

/// Optimal string alignment distance over pre-segmented units.
///
/// Restricted Damerau-Levenshtein with three rolling rows.
#[must_use]
pub fn optimal_string_alignment_units<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a == b {
        return 0;
    }

    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev2_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                curr_row[j] = curr_row[j].min(prev2_row[j - 2] + 1);
            }
        }

        // Rotate rows
        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Optimal String Alignment (OSA) distance - restricted Damerau-Levenshtein.
#[inline]
#[must_use]
pub fn optimal_string_alignment(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    optimal_string_alignment_units(&units(a), &units(b))
}

/// Negated OSA distance; larger means closer.
#[inline]
#[must_use]
pub fn optimal_string_alignment_score(a: &[&str], b: &[&str]) -> f64 {
    super::negated(optimal_string_alignment_units(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::levenshtein::levenshtein_distance;

    #[test]
    fn test_damerau_basic() {
        assert_eq!(damerau_levenshtein_distance("", ""), 0);
        assert_eq!(damerau_levenshtein_distance("abc", "abc"), 0);
        assert_eq!(damerau_levenshtein_distance("ab", "ba"), 1); // transposition
        assert_eq!(damerau_levenshtein_distance("abc", "acb"), 1); // transposition
        assert_eq!(damerau_levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_empty_fast_paths() {
        assert_eq!(damerau_levenshtein_distance("", "hello"), 5);
        assert_eq!(damerau_levenshtein_distance("hello", ""), 5);
        assert_eq!(optimal_string_alignment("", "hello"), 5);
    }

    #[test]
    fn test_transposition_vs_levenshtein() {
        assert_eq!(damerau_levenshtein_distance("ca", "ac"), 1);
        assert_eq!(levenshtein_distance("ca", "ac"), 2);
    }

    #[test]
    fn test_unrestricted_vs_osa() {
        assert_eq!(damerau_levenshtein_distance("CA", "ABC"), 2);
        assert_eq!(optimal_string_alignment("CA", "ABC"), 3);
        assert_eq!(damerau_levenshtein_distance("00210000", "001020000"), 2);
        assert_eq!(optimal_string_alignment("00210000", "001020000"), 3);
    }

    #[test]
    fn test_osa_basic() {
        assert_eq!(optimal_string_alignment("", ""), 0);
        assert_eq!(optimal_string_alignment("abc", "abc"), 0);
        assert_eq!(optimal_string_alignment("ab", "ba"), 1);
        assert_eq!(optimal_string_alignment("abc", "acb"), 1);
    }

    #[test]
    fn test_grapheme_transposition() {
        // swapping two multi-scalar clusters is a single transposition
        assert_eq!(damerau_levenshtein_distance("e\u{301}👍🏽", "👍🏽e\u{301}"), 1);
        assert_eq!(optimal_string_alignment("e\u{301}👍🏽", "👍🏽e\u{301}"), 1);
    }

    #[test]
    fn test_scores_are_negated() {
        let a = units("ab");
        let b = units("ba");
        assert_eq!(damerau_levenshtein_score(&a, &b), -1.0);
        assert_eq!(optimal_string_alignment_score(&a, &b), -1.0);
        assert_eq!(damerau_levenshtein_score(&a, &a), 0.0);
    }
}
