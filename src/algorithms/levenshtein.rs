//! Levenshtein (edit) distance implementation
//!
//! Two variants with the same recurrence (insertion, deletion and substitution
//! all cost 1, no transpositions) but different output shapes:
//! - [`levenshtein_similarity`]: rolling two-row DP, `O(min(m,n))` extra space,
//!   normalized to a similarity in `[0.0, 1.0]`
//! - [`levenshtein_distance`]: full `(m+1) x (n+1)` matrix, raw edit count
//!
//! Both operate on grapheme clusters (see [`super::units`]).

use super::units::units;
use smallvec::SmallVec;

// ============================================================================
// Rolling-row DP
// ============================================================================

/// Two-row DP distance for generic comparable slices.
///
/// The shorter slice goes on the column axis so the rows stay as small as possible.
fn rolling_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (source, target) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let n = target.len();

    if n == 0 {
        return source.len();
    }

    let mut prev: SmallVec<[usize; 128]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 128]> = SmallVec::with_capacity(n + 1);

    for (i, sc) in source.iter().enumerate() {
        curr.clear();
        curr.push(i + 1);

        for j in 1..=n {
            let cost = usize::from(*sc != target[j - 1]);
            let val = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
            curr.push(val);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalized Levenshtein similarity over pre-segmented units.
///
/// `1 - distance / max(len(a), len(b))`, with two empty inputs scoring `1.0`.
#[inline]
#[must_use]
pub fn levenshtein_similarity_units(a: &[&str], b: &[&str]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }
    if a == b {
        return 1.0;
    }

    let dist = rolling_distance(a, b);
    1.0 - (dist as f64 / max_len as f64)
}

/// Normalized Levenshtein similarity (0.0 to 1.0)
///
/// # Example
/// ```
/// use fuzzyrank::algorithms::levenshtein::levenshtein_similarity;
///
/// assert_eq!(levenshtein_similarity("", ""), 1.0);
/// assert_eq!(levenshtein_similarity("abc", "abd"), 1.0 - 1.0 / 3.0);
/// ```
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    levenshtein_similarity_units(&units(a), &units(b))
}

// ============================================================================
// Full-matrix DP
// ============================================================================

/// Raw Levenshtein distance over pre-segmented units, full-matrix DP.
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(m*n)
#[must_use]
pub fn levenshtein_distance_units<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut d: Vec<Vec<usize>> = vec![vec![0; n + 1]; m + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1) // deletion
                .min(d[i][j - 1] + 1) // insertion
                .min(d[i - 1][j - 1] + cost); // substitution
        }
    }

    d[m][n]
}

/// Raw Levenshtein distance between two strings, counted in grapheme clusters.
///
/// # Example
/// ```
/// use fuzzyrank::algorithms::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
#[inline]
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    levenshtein_distance_units(&units(a), &units(b))
}

/// Negated raw distance, so that a larger score always means a closer match.
///
/// This is the value the registry exposes for the raw-count variant.
#[inline]
#[must_use]
pub fn levenshtein_distance_score(a: &[&str], b: &[&str]) -> f64 {
    super::negated(levenshtein_distance_units(a, b))
}
