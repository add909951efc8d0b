//! One query against many candidates.
//!
//! Above [`PARALLEL_THRESHOLD`] candidates the work fans out over the rayon
//! pool; below it runs inline. Results always come back in candidate order.

use crate::compare::{diff_percent, ComparisonConfiguration, ToleranceBand};
use crate::error::Result;
use crate::metric::{Metric, MetricOptions};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Candidate count from which batch calls go parallel.
pub const PARALLEL_THRESHOLD: usize = 100;

/// Aggregate difference of one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Position in the candidate slice
    pub index: usize,
    pub text: String,
    pub diff_percent: f64,
    pub is_similar: bool,
}

fn map_candidates<S, T, F>(candidates: &[S], f: F) -> Result<Vec<T>>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(usize, &str) -> Result<T> + Sync + Send,
{
    if candidates.len() >= PARALLEL_THRESHOLD {
        candidates
            .par_iter()
            .enumerate()
            .map(|(i, s)| f(i, s.as_ref()))
            .collect()
    } else {
        candidates
            .iter()
            .enumerate()
            .map(|(i, s)| f(i, s.as_ref()))
            .collect()
    }
}

/// Compare `query` with every candidate.
///
/// # Example
/// ```
/// use fuzzycompare::batch::compare_many;
/// use fuzzycompare::{ComparisonOptions, ToleranceBand};
///
/// let config = ComparisonOptions::USE_LEVENSHTEIN_DISTANCE.into();
/// let scored = compare_many("apple", &["apple", "apply", "orange"], &config, ToleranceBand::Strong).unwrap();
/// assert_eq!(scored.len(), 3);
/// assert!(scored[0].is_similar && scored[1].is_similar && !scored[2].is_similar);
/// ```
pub fn compare_many<S>(
    query: &str,
    candidates: &[S],
    config: &ComparisonConfiguration,
    band: ToleranceBand,
) -> Result<Vec<ScoredCandidate>>
where
    S: AsRef<str> + Sync,
{
    debug!(candidates = candidates.len(), %band, "batch comparison");
    map_candidates(candidates, |index, text| {
        let diff_percent = diff_percent(query, text, config)?;
        Ok(ScoredCandidate {
            index,
            text: text.to_string(),
            diff_percent,
            is_similar: band.accepts(diff_percent),
        })
    })
}

/// Only the candidates inside `band`, in candidate order.
pub fn similar_candidates<S>(
    query: &str,
    candidates: &[S],
    config: &ComparisonConfiguration,
    band: ToleranceBand,
) -> Result<Vec<ScoredCandidate>>
where
    S: AsRef<str> + Sync,
{
    let mut scored = compare_many(query, candidates, config, band)?;
    scored.retain(|candidate| candidate.is_similar);
    Ok(scored)
}

/// Candidate with the smallest aggregate difference.
///
/// Ties go to the earlier candidate. `None` for an empty slice.
///
/// # Example
/// ```
/// use fuzzycompare::batch::best_match;
/// use fuzzycompare::{ComparisonOptions, ToleranceBand};
///
/// let config = ComparisonOptions::USE_JARO_WINKLER_DISTANCE.into();
/// let best = best_match("martha", &["mark", "marhta", "mary"], &config, ToleranceBand::Normal)
///     .unwrap()
///     .unwrap();
/// assert_eq!(best.text, "marhta");
/// ```
pub fn best_match<S>(
    query: &str,
    candidates: &[S],
    config: &ComparisonConfiguration,
    band: ToleranceBand,
) -> Result<Option<ScoredCandidate>>
where
    S: AsRef<str> + Sync,
{
    let scored = compare_many(query, candidates, config, band)?;
    Ok(scored.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.diff_percent <= candidate.diff_percent => Some(current),
        _ => Some(candidate),
    }))
}

/// Native score of `metric` between `query` and each candidate.
///
/// # Example
/// ```
/// use fuzzycompare::batch::distances;
/// use fuzzycompare::Metric;
///
/// let d = distances(Metric::Levenshtein, "kitten", &["sitting", "kitten"]).unwrap();
/// assert_eq!(d, vec![3.0, 0.0]);
/// ```
pub fn distances<S>(metric: Metric, query: &str, candidates: &[S]) -> Result<Vec<f64>>
where
    S: AsRef<str> + Sync,
{
    let options = MetricOptions::default();
    map_candidates(candidates, |_, text| metric.compute_with(query, text, &options))
}
