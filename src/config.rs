//! Matcher configuration

use crate::algorithms::normalize::NormalizationMode;
use crate::registry::Metric;
use serde::{Deserialize, Serialize};

/// Minimum collection size for parallel scoring.
///
/// Below this, the thread pool coordination costs more than scoring the
/// candidates sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Configuration for a [`crate::Matcher`]
///
/// Missing fields take their defaults when deserialized, so `{}` is a valid config.
///
/// # Example
/// ```
/// use fuzzyrank::{MatcherConfig, Metric};
/// use fuzzyrank::algorithms::normalize::NormalizationMode;
///
/// let config = MatcherConfig::new(Metric::JaroWinkler)
///     .with_normalization(NormalizationMode::Lowercase);
/// assert_eq!(config.metric, Metric::JaroWinkler);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Metric used for scoring and ordering
    pub metric: Metric,
    /// Applied to the sample and every candidate before scoring
    pub normalization: Option<NormalizationMode>,
    /// Collections at least this large are scored on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            normalization: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl MatcherConfig {
    #[must_use]
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_normalization(mut self, mode: NormalizationMode) -> Self {
        self.normalization = Some(mode);
        self
    }

    /// `usize::MAX` keeps scoring on the calling thread.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    #[must_use]
    pub fn sequential(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }

    pub(crate) fn use_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold && len > 1
    }
}
