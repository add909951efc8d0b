//! Metric registry
//!
//! One tagged enum names every string metric in the crate. Each metric has a
//! native score (`compute`), a rescaling of that score into [0, 1]
//! (`normalized`) and a fixed orientation (`convention`) saying whether 0 or
//! 1 means "identical". The aggregator only ever goes through
//! [`Metric::difference`], so the orientation table lives here and nowhere
//! else.

use crate::algorithms::{
    cosine_similarity, damerau_levenshtein, hamming_distance, jaccard_distance,
    jaro_similarity, jaro_winkler_similarity_params, lcs_length, levenshtein,
    levenshtein_percentage, longest_common_substring_length, ngram_distance,
    normalized_hamming, normalized_levenshtein, overlap_coefficient, ratcliff_obershelp,
    sorensen_dice, tanimoto_coefficient, weighted_levenshtein, EditCosts,
    HammingNormalization, JaroWinklerConfig,
};
use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which end of the [0, 1] scale means "identical" for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Convention {
    /// 0 = identical; used as-is by the aggregator
    Distance,
    /// 1 = identical; the aggregator uses `1 - score`
    Similarity,
}

/// Every string metric the crate can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Levenshtein,
    NormalizedLevenshtein,
    LevenshteinPercentage,
    DamerauLevenshtein,
    WeightedLevenshtein,
    Hamming,
    Jaccard,
    SorensenDice,
    Overlap,
    Tanimoto,
    Cosine,
    NgramDistance,
    LongestCommonSubsequence,
    LongestCommonSubstring,
    Jaro,
    JaroWinkler,
    RatcliffObershelp,
}

/// Parameters for the metrics that take any.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricOptions {
    pub hamming: HammingNormalization,
    pub jaro_winkler: JaroWinklerConfig,
    pub ngram_size: usize,
    pub edit_costs: EditCosts,
}

impl Default for MetricOptions {
    fn default() -> Self {
        Self {
            hamming: HammingNormalization::default(),
            jaro_winkler: JaroWinklerConfig::default(),
            ngram_size: 2,
            edit_costs: EditCosts::default(),
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// `part / whole` with an empty whole meaning "nothing to lose".
fn ratio(part: f64, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part / whole as f64
    }
}

/// `length / min(len)`; equal strings are 1.0, an empty side 0.0.
fn shared_fraction(length: usize, a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let shorter = char_len(a).min(char_len(b));
    if shorter == 0 {
        0.0
    } else {
        length as f64 / shorter as f64
    }
}

impl Metric {
    pub const ALL: [Metric; 17] = [
        Self::Levenshtein,
        Self::NormalizedLevenshtein,
        Self::LevenshteinPercentage,
        Self::DamerauLevenshtein,
        Self::WeightedLevenshtein,
        Self::Hamming,
        Self::Jaccard,
        Self::SorensenDice,
        Self::Overlap,
        Self::Tanimoto,
        Self::Cosine,
        Self::NgramDistance,
        Self::LongestCommonSubsequence,
        Self::LongestCommonSubstring,
        Self::Jaro,
        Self::JaroWinkler,
        Self::RatcliffObershelp,
    ];

    /// Identifier accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Levenshtein => "levenshtein",
            Self::NormalizedLevenshtein => "normalized_levenshtein",
            Self::LevenshteinPercentage => "levenshtein_percentage",
            Self::DamerauLevenshtein => "damerau_levenshtein",
            Self::WeightedLevenshtein => "weighted_levenshtein",
            Self::Hamming => "hamming",
            Self::Jaccard => "jaccard",
            Self::SorensenDice => "sorensen_dice",
            Self::Overlap => "overlap",
            Self::Tanimoto => "tanimoto",
            Self::Cosine => "cosine",
            Self::NgramDistance => "ngram_distance",
            Self::LongestCommonSubsequence => "longest_common_subsequence",
            Self::LongestCommonSubstring => "longest_common_substring",
            Self::Jaro => "jaro",
            Self::JaroWinkler => "jaro_winkler",
            Self::RatcliffObershelp => "ratcliff_obershelp",
        }
    }

    /// Orientation of [`Metric::normalized`].
    #[must_use]
    pub fn convention(self) -> Convention {
        match self {
            Self::Levenshtein
            | Self::NormalizedLevenshtein
            | Self::DamerauLevenshtein
            | Self::WeightedLevenshtein
            | Self::Hamming
            | Self::Jaccard
            | Self::NgramDistance => Convention::Distance,
            Self::LevenshteinPercentage
            | Self::SorensenDice
            | Self::Overlap
            | Self::Tanimoto
            | Self::Cosine
            | Self::LongestCommonSubsequence
            | Self::LongestCommonSubstring
            | Self::Jaro
            | Self::JaroWinkler
            | Self::RatcliffObershelp => Convention::Similarity,
        }
    }

    /// Native score with default options.
    pub fn compute(self, a: &str, b: &str) -> Result<f64> {
        self.compute_with(a, b, &MetricOptions::default())
    }

    /// Native score: edit counts and costs, subsequence and substring
    /// lengths, or the metric's own [0, 1] value.
    pub fn compute_with(self, a: &str, b: &str, options: &MetricOptions) -> Result<f64> {
        Ok(match self {
            Self::Levenshtein => levenshtein(a, b) as f64,
            Self::NormalizedLevenshtein => normalized_levenshtein(a, b),
            Self::LevenshteinPercentage => levenshtein_percentage(a, b),
            Self::DamerauLevenshtein => damerau_levenshtein(a, b) as f64,
            Self::WeightedLevenshtein => weighted_levenshtein(a, b, &options.edit_costs)?,
            Self::Hamming => hamming_distance(a, b)? as f64,
            Self::Jaccard => jaccard_distance(a, b),
            Self::SorensenDice => sorensen_dice(a, b),
            Self::Overlap => overlap_coefficient(a, b),
            Self::Tanimoto => tanimoto_coefficient(a, b),
            Self::Cosine => cosine_similarity(a, b),
            Self::NgramDistance => ngram_distance(a, b, options.ngram_size)?,
            Self::LongestCommonSubsequence => lcs_length(a, b) as f64,
            Self::LongestCommonSubstring => longest_common_substring_length(a, b) as f64,
            Self::Jaro => jaro_similarity(a, b),
            Self::JaroWinkler => jaro_winkler_similarity_params(
                a,
                b,
                options.jaro_winkler.prefix_weight,
                options.jaro_winkler.max_prefix_length,
            ),
            Self::RatcliffObershelp => ratcliff_obershelp(a, b),
        })
    }

    /// Native score rescaled into [0, 1], orientation per [`Metric::convention`].
    ///
    /// - Levenshtein, Damerau: `count / max(len)`
    /// - Weighted: `cost / (max(len) * max(cost))`
    /// - Hamming: per [`HammingNormalization`]
    /// - LCS, longest common substring: `length / min(len)`
    pub fn normalized(self, a: &str, b: &str, options: &MetricOptions) -> Result<f64> {
        let value = match self {
            Self::Levenshtein => ratio(levenshtein(a, b) as f64, char_len(a).max(char_len(b))),
            Self::DamerauLevenshtein => {
                ratio(damerau_levenshtein(a, b) as f64, char_len(a).max(char_len(b)))
            }
            Self::WeightedLevenshtein => {
                let costs = &options.edit_costs;
                let cost = weighted_levenshtein(a, b, costs)?;
                let worst = costs.deletion.max(costs.insertion).max(costs.substitution);
                let ceiling = char_len(a).max(char_len(b)) as f64 * worst;
                if ceiling == 0.0 {
                    0.0
                } else {
                    cost / ceiling
                }
            }
            Self::Hamming => normalized_hamming(a, b, options.hamming)?,
            Self::LongestCommonSubsequence => shared_fraction(lcs_length(a, b), a, b),
            Self::LongestCommonSubstring => {
                shared_fraction(longest_common_substring_length(a, b), a, b)
            }
            other => other.compute_with(a, b, options)?,
        };
        Ok(value.clamp(0.0, 1.0))
    }

    /// Difference in [0, 1]: 0 = identical, 1 = maximally dissimilar.
    pub fn difference(self, a: &str, b: &str, options: &MetricOptions) -> Result<f64> {
        let value = self.normalized(a, b, options)?;
        Ok(match self.convention() {
            Convention::Distance => value,
            Convention::Similarity => 1.0 - value,
        })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = SimilarityError;

    /// Case-insensitive; `-` and `_` are interchangeable, and `lcs` names
    /// the longest common subsequence.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        if wanted == "lcs" {
            return Ok(Self::LongestCommonSubsequence);
        }
        Self::ALL
            .into_iter()
            .find(|metric| metric.name() == wanted)
            .ok_or_else(|| SimilarityError::invalid(format!("unsupported metric '{s}'")))
    }
}

/// Native score of `metric` with default options.
///
/// # Example
/// ```
/// use fuzzycompare::{distance, Metric, SimilarityError};
///
/// assert_eq!(distance(Metric::Levenshtein, "kitten", "sitting").unwrap(), 3.0);
/// assert!(matches!(
///     distance(Metric::Hamming, "abc", "ab"),
///     Err(SimilarityError::LengthMismatch { .. })
/// ));
/// ```
pub fn distance(metric: Metric, source: &str, target: &str) -> Result<f64> {
    metric.compute(source, target)
}

/// [`distance`] with the metric looked up by identifier.
///
/// # Example
/// ```
/// use fuzzycompare::distance_by_name;
///
/// assert_eq!(distance_by_name("hamming", "karolin", "kathrin").unwrap(), 3.0);
/// assert!(distance_by_name("soundex_distance", "a", "b").is_err());
/// ```
pub fn distance_by_name(metric: &str, source: &str, target: &str) -> Result<f64> {
    distance(metric.parse()?, source, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_from_str() {
        assert_eq!("levenshtein".parse::<Metric>().unwrap(), Metric::Levenshtein);
        assert_eq!("Jaro-Winkler".parse::<Metric>().unwrap(), Metric::JaroWinkler);
        assert_eq!("LCS".parse::<Metric>().unwrap(), Metric::LongestCommonSubsequence);
        assert!(matches!(
            "soundex".parse::<Metric>(),
            Err(SimilarityError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(metric.to_string().parse::<Metric>().unwrap(), metric);
        }
    }

    #[test]
    fn test_native_scores() {
        assert_eq!(distance(Metric::Levenshtein, "kitten", "sitting").unwrap(), 3.0);
        assert_eq!(distance(Metric::Hamming, "karolin", "kathrin").unwrap(), 3.0);
        assert_eq!(distance(Metric::DamerauLevenshtein, "ab", "ba").unwrap(), 1.0);
        assert_eq!(distance(Metric::LongestCommonSubsequence, "AGGTAB", "GXTXAYB").unwrap(), 4.0);
        assert!(approx_eq(distance(Metric::Jaccard, "abc", "bcd").unwrap(), 0.5));
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            distance(Metric::Hamming, "abc", "abcd"),
            Err(SimilarityError::LengthMismatch { left: 3, right: 4 })
        ));
        let options = MetricOptions {
            ngram_size: 0,
            ..MetricOptions::default()
        };
        assert!(Metric::NgramDistance.compute_with("a", "b", &options).is_err());
        let options = MetricOptions {
            edit_costs: EditCosts::new(-1.0, 1.0, 1.0),
            ..MetricOptions::default()
        };
        assert!(Metric::WeightedLevenshtein.difference("a", "b", &options).is_err());
    }

    #[test]
    fn test_conventions() {
        let options = MetricOptions::default();
        // similarities report 1 for identical input, distances 0
        for metric in Metric::ALL {
            let value = metric.normalized("night", "night", &options).unwrap();
            match metric.convention() {
                Convention::Distance => assert_eq!(value, 0.0, "{metric}"),
                Convention::Similarity => assert_eq!(value, 1.0, "{metric}"),
            }
            assert_eq!(metric.difference("night", "night", &options).unwrap(), 0.0, "{metric}");
        }
    }

    #[test]
    fn test_differences_stay_in_unit_range() {
        let options = MetricOptions::default();
        for metric in Metric::ALL {
            for (a, b) in [("kitten", "sitting"), ("abc", "xyz"), ("a", "abcdefgh")] {
                match metric.difference(a, b, &options) {
                    Ok(d) => assert!((0.0..=1.0).contains(&d), "{metric} {a} {b} {d}"),
                    Err(SimilarityError::LengthMismatch { .. }) => assert_eq!(metric, Metric::Hamming),
                    Err(e) => panic!("{metric}: {e}"),
                }
            }
        }
    }

    #[test]
    fn test_normalizations() {
        let options = MetricOptions::default();
        assert!(approx_eq(Metric::Levenshtein.difference("kitten", "sitting", &options).unwrap(), 3.0 / 7.0));
        assert!(approx_eq(
            Metric::NormalizedLevenshtein.difference("kitten", "sitting", &options).unwrap(),
            2.0 / 6.0
        ));
        // combined length: 3 / 14
        assert!(approx_eq(Metric::Hamming.difference("karolin", "kathrin", &options).unwrap(), 3.0 / 14.0));
        let shared = MetricOptions {
            hamming: HammingNormalization::SharedLength,
            ..options
        };
        assert!(approx_eq(Metric::Hamming.difference("karolin", "kathrin", &shared).unwrap(), 3.0 / 7.0));
        // LCS "ADH" over the shorter length 6
        assert!(approx_eq(
            Metric::LongestCommonSubsequence.difference("ABCDGH", "AEDFHR", &options).unwrap(),
            0.5
        ));
        assert!(approx_eq(
            Metric::LongestCommonSubstring.difference("abcdef", "zbcdf", &options).unwrap(),
            1.0 - 3.0 / 5.0
        ));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: MetricOptions = serde_json::from_str(r#"{"ngram_size": 3}"#).unwrap();
        assert_eq!(options.ngram_size, 3);
        assert_eq!(options.hamming, HammingNormalization::CombinedLength);
    }
}
