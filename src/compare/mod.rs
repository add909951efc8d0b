//! Similarity aggregator
//!
//! Runs every metric a [`ComparisonConfiguration`] selects, turns each into a
//! difference in [0, 1] through [`Metric::difference`], and averages them.
//! The mean is checked against a [`ToleranceBand`].
//!
//! Policies:
//! - either input empty: difference 1.0, no metric runs
//! - no metric selected: difference 1.0
//! - Hamming on inputs of unequal length: contributes 1.0
//!
//! # Complexity
//! The sum of the selected metrics; the quadratic ones dominate at O(n*m).

mod config;
mod tolerance;

pub use config::{ComparisonConfiguration, ComparisonOptions};
pub use tolerance::ToleranceBand;

use crate::algorithms::normalize::fold_pair;
use crate::error::{Result, SimilarityError};
use crate::metric::{Metric, MetricOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Outcome of [`compare`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Mean difference over the selected metrics, 0 = identical
    pub diff_percent: f64,
    /// `diff_percent <= band.upper_bound()`
    pub is_similar: bool,
}

/// Compare `source` and `target` and classify the result against `band`.
///
/// # Example
/// ```
/// use fuzzycompare::{compare, ComparisonConfiguration, ComparisonOptions, ToleranceBand};
///
/// let config = ComparisonConfiguration::new(
///     ComparisonOptions::USE_LEVENSHTEIN_DISTANCE | ComparisonOptions::USE_JARO_WINKLER_DISTANCE,
/// );
/// let result = compare("Hello", "hello", &config, ToleranceBand::Normal).unwrap();
/// assert_eq!(result.diff_percent, 0.0);
/// assert!(result.is_similar);
/// ```
pub fn compare(
    source: &str,
    target: &str,
    config: &ComparisonConfiguration,
    band: ToleranceBand,
) -> Result<Comparison> {
    let diff_percent = diff_percent(source, target, config)?;
    let is_similar = band.accepts(diff_percent);
    debug!(diff_percent, %band, is_similar, "comparison decided");
    Ok(Comparison {
        diff_percent,
        is_similar,
    })
}

/// Mean difference in [0, 1] over the selected metrics.
///
/// # Example
/// ```
/// use fuzzycompare::{diff_percent, ComparisonOptions};
///
/// let config = ComparisonOptions::USE_JACCARD_DISTANCE.into();
/// assert_eq!(diff_percent("", "anything", &config).unwrap(), 1.0);
/// ```
pub fn diff_percent(source: &str, target: &str, config: &ComparisonConfiguration) -> Result<f64> {
    if source.is_empty() || target.is_empty() {
        debug!("empty input, reporting maximal difference");
        return Ok(1.0);
    }

    let (a, b) = fold_pair(source, target, config.is_case_sensitive());
    let options = config.metric_options();

    let mut total = 0.0;
    let mut evaluated = 0usize;
    for metric in config.metrics() {
        let difference = metric_difference(metric, &a, &b, &options)?;
        trace!(%metric, difference, "metric evaluated");
        total += difference;
        evaluated += 1;
    }

    if evaluated == 0 {
        debug!(options = config.options.bits(), "no metric selected, reporting maximal difference");
        return Ok(1.0);
    }
    Ok((total / evaluated as f64).clamp(0.0, 1.0))
}

/// Difference of one metric, with the aggregator's length-mismatch policy.
fn metric_difference(
    metric: Metric,
    a: &str,
    b: &str,
    options: &MetricOptions,
) -> Result<f64> {
    match metric.difference(a, b, options) {
        Err(SimilarityError::LengthMismatch { left, right }) => {
            debug!(%metric, left, right, "length mismatch counts as maximal difference");
            Ok(1.0)
        }
        other => other,
    }
}

/// Whether `source` and `target` fall inside `band`.
///
/// # Example
/// ```
/// use fuzzycompare::{is_similar, ComparisonOptions, ToleranceBand};
///
/// let config = ComparisonOptions::USE_LEVENSHTEIN_DISTANCE.into();
/// assert!(is_similar("hello", "hello", &config, ToleranceBand::Normal).unwrap());
/// assert!(!is_similar("hello", "world", &config, ToleranceBand::Strong).unwrap());
/// ```
pub fn is_similar(
    source: &str,
    target: &str,
    config: &ComparisonConfiguration,
    band: ToleranceBand,
) -> Result<bool> {
    compare(source, target, config, band).map(|comparison| comparison.is_similar)
}
