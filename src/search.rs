//! Collection search and sort
//!
//! Ranks caller-owned candidates against a sample. Candidates are never
//! mutated; results borrow from the input slice.
//!
//! Ordering follows the registry rule: higher score first. The sort is
//! stable, so candidates with equal scores keep their input order, and
//! [`closest`] picks the earliest of the best-scoring candidates.

use crate::algorithms::normalize::maybe_normalize;
use crate::algorithms::units;
use crate::config::MatcherConfig;
use crate::registry::Metric;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Sort candidates by closeness to `sample`, closest first.
///
/// # Example
/// ```
/// use fuzzyrank::{sorted_by_closeness, Metric};
///
/// let candidates = ["xyz", "colour", "collar"];
/// let sorted = sorted_by_closeness(&candidates, "color", Metric::LevenshteinDistance);
/// assert_eq!(sorted, vec![&"colour", &"collar", &"xyz"]);
/// ```
#[must_use]
pub fn sorted_by_closeness<'c, S>(candidates: &'c [S], sample: &str, metric: Metric) -> Vec<&'c S>
where
    S: AsRef<str> + Sync,
{
    Matcher::new(MatcherConfig::new(metric)).sorted_by_closeness(candidates, sample)
}

/// The closest candidate to `sample`, or `None` for an empty collection.
///
/// # Example
/// ```
/// use fuzzyrank::{closest, Metric};
///
/// let candidates = vec!["apple".to_string(), "maple".to_string()];
/// let best = closest(&candidates, "appel", Metric::DamerauLevenshtein);
/// assert_eq!(best.map(String::as_str), Some("apple"));
/// assert_eq!(closest::<String>(&[], "appel", Metric::JaroWinkler), None);
/// ```
#[must_use]
pub fn closest<'c, S>(candidates: &'c [S], sample: &str, metric: Metric) -> Option<&'c S>
where
    S: AsRef<str> + Sync,
{
    Matcher::new(MatcherConfig::new(metric)).closest(candidates, sample)
}

/// Every candidate paired with its score against `sample`, in input order.
#[must_use]
pub fn score_all<'c, S>(candidates: &'c [S], sample: &str, metric: Metric) -> Vec<(&'c S, f64)>
where
    S: AsRef<str> + Sync,
{
    Matcher::new(MatcherConfig::new(metric)).score_all(candidates, sample)
}

/// Higher score wins; NaN never occurs but compares equal.
#[inline]
fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Ranks candidates with a fixed [`MatcherConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    #[must_use]
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    #[must_use]
    pub fn metric(&self) -> Metric {
        self.config.metric
    }

    /// Score a single pair, applying the configured normalization.
    #[must_use]
    pub fn score(&self, a: &str, b: &str) -> f64 {
        let a = maybe_normalize(a, self.config.normalization);
        let b = maybe_normalize(b, self.config.normalization);
        self.config.metric.score(&a, &b)
    }

    /// Score every candidate against the sample, in input order.
    fn scores<S>(&self, candidates: &[S], sample: &str) -> Vec<f64>
    where
        S: AsRef<str> + Sync,
    {
        let mode = self.config.normalization;
        let calculator = self.config.metric.calculator();
        let sample = maybe_normalize(sample, mode);
        let sample_units = units(&sample);
        let sample_units = sample_units.as_slice();

        let score_one = |candidate: &S| {
            let text = maybe_normalize(candidate.as_ref(), mode);
            let candidate_units = units(&text);
            calculator(sample_units, &candidate_units)
        };

        if self.config.use_parallel(candidates.len()) {
            log::debug!(
                "scoring {} candidates with {} on the rayon pool",
                candidates.len(),
                self.config.metric
            );
            candidates.par_iter().map(score_one).collect()
        } else {
            log::trace!(
                "scoring {} candidates with {}",
                candidates.len(),
                self.config.metric
            );
            candidates.iter().map(score_one).collect()
        }
    }

    /// Every candidate paired with its score, in input order.
    #[must_use]
    pub fn score_all<'c, S>(&self, candidates: &'c [S], sample: &str) -> Vec<(&'c S, f64)>
    where
        S: AsRef<str> + Sync,
    {
        candidates
            .iter()
            .zip(self.scores(candidates, sample))
            .collect()
    }

    /// All candidates, closest first. Ties keep input order.
    #[must_use]
    pub fn sorted_by_closeness<'c, S>(&self, candidates: &'c [S], sample: &str) -> Vec<&'c S>
    where
        S: AsRef<str> + Sync,
    {
        let scores = self.scores(candidates, sample);
        let mut order: Vec<usize> = (0..candidates.len()).collect();

        if self.config.use_parallel(candidates.len()) {
            order.par_sort_by(|&i, &j| by_score_desc(scores[i], scores[j]));
        } else {
            order.sort_by(|&i, &j| by_score_desc(scores[i], scores[j]));
        }

        order.into_iter().map(|i| &candidates[i]).collect()
    }

    /// The first element of [`Matcher::sorted_by_closeness`], without sorting.
    #[must_use]
    pub fn closest<'c, S>(&self, candidates: &'c [S], sample: &str) -> Option<&'c S>
    where
        S: AsRef<str> + Sync,
    {
        let scores = self.scores(candidates, sample);

        // Prefer the higher score, then the earlier index
        let better = |a: (usize, f64), b: (usize, f64)| match by_score_desc(a.1, b.1) {
            Ordering::Greater => b,
            Ordering::Equal if b.0 < a.0 => b,
            _ => a,
        };

        let best = if self.config.use_parallel(candidates.len()) {
            scores
                .par_iter()
                .copied()
                .enumerate()
                .reduce_with(better)
        } else {
            scores.iter().copied().enumerate().reduce(better)
        };

        best.map(|(i, _)| &candidates[i])
    }
}
