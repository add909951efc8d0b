//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.
//!
//! This is the canonical windowed algorithm: a character only matches an
//! equal character of the other string within `max(len)/2 - 1` positions,
//! and transpositions are counted over the matched characters in order.
//! Character-set intersection shortcuts give different answers as soon as a
//! letter repeats, so they are not used here.
//!
//! ASCII inputs are compared as bytes; anything else as chars.

use super::Similarity;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Upper bound for the prefix weight that keeps scores within [0, 1].
pub const MAX_PREFIX_WEIGHT: f64 = 0.25;

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*w) where w is the match window
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Jaro {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Configuration for Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JaroWinklerConfig {
    /// Prefix weight (typically 0.1, max 0.25)
    pub prefix_weight: f64,
    /// Maximum prefix length to consider (typically 4)
    pub max_prefix_length: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_weight: 0.1,
            max_prefix_length: 4,
        }
    }
}

/// Jaro-Winkler similarity calculator
///
/// # Parameters
/// - `prefix_weight`: How much to boost prefix matches (0.0-0.25, typically 0.1)
/// - `max_prefix_length`: Maximum prefix length to consider (typically 4)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinkler {
    pub prefix_weight: f64,
    pub max_prefix_length: usize,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self::from_config(JaroWinklerConfig::default())
    }
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: JaroWinklerConfig) -> Self {
        Self {
            prefix_weight: 0.1,
            max_prefix_length: 4,
        }
        .with_prefix_weight(config.prefix_weight)
        .with_max_prefix_length(config.max_prefix_length)
    }

    #[must_use]
    pub fn config(&self) -> JaroWinklerConfig {
        JaroWinklerConfig {
            prefix_weight: self.prefix_weight,
            max_prefix_length: self.max_prefix_length,
        }
    }

    /// Weights outside [0, 0.25] are clamped.
    #[must_use]
    pub fn with_prefix_weight(mut self, weight: f64) -> Self {
        let clamped = clamp_prefix_weight(weight);
        if clamped != weight {
            tracing::warn!(weight, clamped, "jaro-winkler prefix weight clamped");
        }
        self.prefix_weight = clamped;
        self
    }

    #[must_use]
    pub fn with_max_prefix_length(mut self, length: usize) -> Self {
        self.max_prefix_length = length;
        self
    }
}

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler_similarity_params(a, b, self.prefix_weight, self.max_prefix_length)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

fn clamp_prefix_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, MAX_PREFIX_WEIGHT)
    }
}

/// Calculate Jaro similarity between two strings.
/// Returns a value between 0.0 and 1.0.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::jaro::jaro_similarity;
///
/// assert!((jaro_similarity("MARTHA", "MARHTA") - 0.944).abs() < 0.001);
/// assert_eq!(jaro_similarity("", ""), 1.0);
/// assert_eq!(jaro_similarity("abc", ""), 0.0);
/// ```
#[inline]
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    if a.is_ascii() && b.is_ascii() {
        return jaro_slices(a.as_bytes(), b.as_bytes());
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    jaro_slices(&a_chars, &b_chars)
}

/// Windowed Jaro over any comparable slices.
fn jaro_slices<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 && b_len == 0 {
        return 1.0;
    }
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    let window = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matches: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matches: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];
    let mut matches = 0usize;

    for i in 0..a_len {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b_len);

        for j in start..end {
            if b_matches[j] || a[i] != b[j] {
                continue;
            }
            a_matches[i] = true;
            b_matches[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Matched characters of `b` in order, paired against those of `a`
    let mut half_transpositions = 0usize;
    let mut b_matched = (0..b_len).filter(|&j| b_matches[j]);
    for i in (0..a_len).filter(|&i| a_matches[i]) {
        if let Some(j) = b_matched.next() {
            if a[i] != b[j] {
                half_transpositions += 1;
            }
        }
    }

    let m = matches as f64;
    let t = (half_transpositions / 2) as f64;

    (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
}

/// Length of the shared prefix, capped at `max_len`.
fn common_prefix_length(a: &str, b: &str, max_len: usize) -> usize {
    a.chars()
        .zip(b.chars())
        .take(max_len)
        .take_while(|(x, y)| x == y)
        .count()
}

/// Jaro-Winkler similarity with custom parameters.
///
/// `jaro + prefix * weight * (1 - jaro)`; the weight is clamped to
/// [0.0, 0.25] so the result stays in [0.0, 1.0].
#[inline]
#[must_use]
pub fn jaro_winkler_similarity_params(
    a: &str,
    b: &str,
    prefix_weight: f64,
    max_prefix_len: usize,
) -> f64 {
    let jaro = jaro_similarity(a, b);
    if jaro == 0.0 || jaro == 1.0 {
        return jaro;
    }

    let prefix = common_prefix_length(a, b, max_prefix_len) as f64;
    let weight = clamp_prefix_weight(prefix_weight);

    (jaro + prefix * weight * (1.0 - jaro)).min(1.0)
}

/// Jaro-Winkler similarity with standard parameters (weight 0.1, prefix up to 4).
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::jaro::jaro_winkler_similarity;
///
/// assert!((jaro_winkler_similarity("MARTHA", "MARHTA") - 0.961).abs() < 0.001);
/// ```
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler_similarity_params(a, b, 0.1, 4)
}
