//! Aggregator configuration: which metrics run, case handling and the
//! parameters of the metrics that take any.

use crate::algorithms::{HammingNormalization, JaroWinklerConfig};
use crate::metric::{Metric, MetricOptions};
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bit set of aggregator switches.
///
/// Serializes as its raw `u16`. Unknown bits are carried but ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonOptions(u16);

impl ComparisonOptions {
    pub const NONE: Self = Self(0);
    pub const USE_HAMMING_DISTANCE: Self = Self(1 << 0);
    pub const USE_JACCARD_DISTANCE: Self = Self(1 << 1);
    pub const USE_JARO_DISTANCE: Self = Self(1 << 2);
    pub const USE_JARO_WINKLER_DISTANCE: Self = Self(1 << 3);
    pub const USE_LEVENSHTEIN_DISTANCE: Self = Self(1 << 4);
    pub const USE_NORMALIZED_LEVENSHTEIN_DISTANCE: Self = Self(1 << 5);
    pub const USE_LONGEST_COMMON_SUBSEQUENCE: Self = Self(1 << 6);
    pub const USE_LONGEST_COMMON_SUBSTRING: Self = Self(1 << 7);
    pub const USE_OVERLAP_COEFFICIENT: Self = Self(1 << 8);
    pub const USE_RATCLIFF_OBERSHELP_SIMILARITY: Self = Self(1 << 9);
    pub const USE_SORENSEN_DICE_DISTANCE: Self = Self(1 << 10);
    pub const USE_TANIMOTO_COEFFICIENT: Self = Self(1 << 11);
    /// Compare without lowercasing first
    pub const CASE_SENSITIVE: Self = Self(1 << 12);

    /// Metric switches in evaluation order.
    const METRIC_FLAGS: [(ComparisonOptions, Metric); 12] = [
        (Self::USE_HAMMING_DISTANCE, Metric::Hamming),
        (Self::USE_JACCARD_DISTANCE, Metric::Jaccard),
        (Self::USE_JARO_DISTANCE, Metric::Jaro),
        (Self::USE_JARO_WINKLER_DISTANCE, Metric::JaroWinkler),
        (Self::USE_LEVENSHTEIN_DISTANCE, Metric::Levenshtein),
        (Self::USE_NORMALIZED_LEVENSHTEIN_DISTANCE, Metric::NormalizedLevenshtein),
        (Self::USE_LONGEST_COMMON_SUBSEQUENCE, Metric::LongestCommonSubsequence),
        (Self::USE_LONGEST_COMMON_SUBSTRING, Metric::LongestCommonSubstring),
        (Self::USE_OVERLAP_COEFFICIENT, Metric::Overlap),
        (Self::USE_RATCLIFF_OBERSHELP_SIMILARITY, Metric::RatcliffObershelp),
        (Self::USE_SORENSEN_DICE_DISTANCE, Metric::SorensenDice),
        (Self::USE_TANIMOTO_COEFFICIENT, Metric::Tanimoto),
    ];

    /// Every metric switch, without `CASE_SENSITIVE`.
    pub const ALL_METRICS: Self = Self((1 << 12) - 1);

    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// The selected metrics, in a fixed order.
    pub fn metrics(self) -> impl Iterator<Item = Metric> {
        Self::METRIC_FLAGS
            .into_iter()
            .filter(move |&(flag, _)| self.contains(flag))
            .map(|(_, metric)| metric)
    }

    /// The switch that selects `metric`, if the aggregator offers one.
    #[must_use]
    pub fn for_metric(metric: Metric) -> Option<Self> {
        Self::METRIC_FLAGS
            .into_iter()
            .find(|&(_, m)| m == metric)
            .map(|(flag, _)| flag)
    }
}

impl BitOr for ComparisonOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ComparisonOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ComparisonOptions {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Everything [`compare`](super::compare) needs besides the inputs and the band.
///
/// # Example
/// ```
/// use fuzzycompare::{ComparisonConfiguration, ComparisonOptions, HammingNormalization};
///
/// let config = ComparisonConfiguration::new(
///     ComparisonOptions::USE_HAMMING_DISTANCE | ComparisonOptions::USE_JARO_WINKLER_DISTANCE,
/// )
/// .with_hamming_normalization(HammingNormalization::SharedLength);
/// assert_eq!(config.metrics().count(), 2);
/// assert!(!config.is_case_sensitive());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfiguration {
    pub options: ComparisonOptions,
    pub hamming: HammingNormalization,
    pub jaro_winkler: JaroWinklerConfig,
}

impl ComparisonConfiguration {
    #[must_use]
    pub fn new(options: ComparisonOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replace the switches.
    #[must_use]
    pub fn with_options(mut self, options: ComparisonOptions) -> Self {
        self.options = options;
        self
    }

    /// Set `options` on top of the current switches.
    #[must_use]
    pub fn with_added_options(mut self, options: ComparisonOptions) -> Self {
        self.options |= options;
        self
    }

    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        if case_sensitive {
            self.options.insert(ComparisonOptions::CASE_SENSITIVE);
        } else {
            self.options.remove(ComparisonOptions::CASE_SENSITIVE);
        }
        self
    }

    #[must_use]
    pub fn with_hamming_normalization(mut self, mode: HammingNormalization) -> Self {
        self.hamming = mode;
        self
    }

    #[must_use]
    pub fn with_jaro_winkler(mut self, config: JaroWinklerConfig) -> Self {
        self.jaro_winkler = config;
        self
    }

    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.options.contains(ComparisonOptions::CASE_SENSITIVE)
    }

    pub fn metrics(&self) -> impl Iterator<Item = Metric> {
        self.options.metrics()
    }

    /// Parameters handed to each [`Metric`].
    #[must_use]
    pub fn metric_options(&self) -> MetricOptions {
        MetricOptions {
            hamming: self.hamming,
            jaro_winkler: self.jaro_winkler,
            ..MetricOptions::default()
        }
    }
}

impl From<ComparisonOptions> for ComparisonConfiguration {
    fn from(options: ComparisonOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_distinct() {
        let mut seen = 0u16;
        for (flag, _) in ComparisonOptions::METRIC_FLAGS {
            assert_eq!(flag.bits().count_ones(), 1);
            assert_eq!(seen & flag.bits(), 0);
            seen |= flag.bits();
        }
        assert_eq!(seen, ComparisonOptions::ALL_METRICS.bits());
        assert!(!ComparisonOptions::ALL_METRICS.contains(ComparisonOptions::CASE_SENSITIVE));
    }

    #[test]
    fn test_metrics_follow_flags() {
        let options = ComparisonOptions::USE_TANIMOTO_COEFFICIENT
            | ComparisonOptions::USE_LEVENSHTEIN_DISTANCE
            | ComparisonOptions::CASE_SENSITIVE;
        let metrics: Vec<Metric> = options.metrics().collect();
        assert_eq!(metrics, vec![Metric::Levenshtein, Metric::Tanimoto]);
        assert_eq!(ComparisonOptions::NONE.metrics().count(), 0);
        assert_eq!(ComparisonOptions::ALL_METRICS.metrics().count(), 12);
    }

    #[test]
    fn test_for_metric() {
        assert_eq!(
            ComparisonOptions::for_metric(Metric::Jaro),
            Some(ComparisonOptions::USE_JARO_DISTANCE)
        );
        assert_eq!(ComparisonOptions::for_metric(Metric::Cosine), None);
    }

    #[test]
    fn test_insert_remove() {
        let mut options = ComparisonOptions::NONE;
        options.insert(ComparisonOptions::USE_JARO_DISTANCE);
        assert!(options.contains(ComparisonOptions::USE_JARO_DISTANCE));
        options.remove(ComparisonOptions::USE_JARO_DISTANCE);
        assert!(options.is_empty());
    }

    #[test]
    fn test_with_options_replaces() {
        let config = ComparisonConfiguration::new(ComparisonOptions::USE_JARO_DISTANCE)
            .with_options(ComparisonOptions::USE_HAMMING_DISTANCE);
        assert_eq!(config.options, ComparisonOptions::USE_HAMMING_DISTANCE);
        let none = config.with_options(ComparisonOptions::NONE);
        assert_eq!(none.metrics().count(), 0);
    }

    #[test]
    fn test_with_added_options_merges() {
        let config = ComparisonConfiguration::new(ComparisonOptions::USE_JARO_DISTANCE)
            .with_added_options(ComparisonOptions::USE_HAMMING_DISTANCE);
        let metrics: Vec<Metric> = config.metrics().collect();
        assert_eq!(metrics, vec![Metric::Hamming, Metric::Jaro]);
    }

    #[test]
    fn test_case_sensitive_toggle() {
        let config = ComparisonConfiguration::default().with_case_sensitive(true);
        assert!(config.is_case_sensitive());
        assert!(!config.with_case_sensitive(false).is_case_sensitive());
    }

    #[test]
    fn test_metric_options_carry_parameters() {
        let jw = JaroWinklerConfig {
            prefix_weight: 0.2,
            max_prefix_length: 3,
        };
        let config = ComparisonConfiguration::default()
            .with_hamming_normalization(HammingNormalization::SharedLength)
            .with_jaro_winkler(jw);
        let options = config.metric_options();
        assert_eq!(options.hamming, HammingNormalization::SharedLength);
        assert_eq!(options.jaro_winkler, jw);
    }

    #[test]
    fn test_deserialize() {
        let config: ComparisonConfiguration =
            serde_json::from_str(r#"{"options": 17, "hamming": "SharedLength"}"#).unwrap();
        assert!(config.options.contains(ComparisonOptions::USE_HAMMING_DISTANCE));
        assert!(config.options.contains(ComparisonOptions::USE_LEVENSHTEIN_DISTANCE));
        assert_eq!(config.hamming, HammingNormalization::SharedLength);
        assert_eq!(config.jaro_winkler, JaroWinklerConfig::default());

        let json = serde_json::to_string(&config).unwrap();
        let back: ComparisonConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
