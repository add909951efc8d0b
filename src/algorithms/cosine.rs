//! Cosine similarity implementation
//!
//! Treats strings as term-frequency vectors and computes the cosine of the
//! angle between them. Terms are regex word tokens (`\w+`) or n-grams.
//!
//! A vector with zero magnitude (no tokens at all) scores 0.0 against
//! anything, including another empty vector, instead of dividing by zero.
//!
//! # Complexity
//! - Time: O(m+n) for building frequency maps and computing similarity
//! - Space: O(unique_tokens) for frequency maps

use super::ngram::NgramTokenizer;
use super::Similarity;
use crate::error::Result;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::hash::Hash;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

/// Cosine similarity calculator
///
/// # Configuration
/// - `ngram_size`: Use character n-grams instead of words (None = words)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CosineSimilarity {
    pub ngram_size: Option<usize>,
}

impl CosineSimilarity {
    #[must_use]
    pub fn word_based() -> Self {
        Self { ngram_size: None }
    }

    #[must_use]
    pub fn ngram_based(n: usize) -> Self {
        Self {
            ngram_size: Some(n),
        }
    }
}

/// An n-gram size of 0 scores 0.0 through this interface.
impl Similarity for CosineSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        match self.ngram_size {
            Some(n) => cosine_similarity_ngrams(a, b, n).unwrap_or(0.0),
            None => cosine_similarity(a, b),
        }
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}

/// Split on non-word characters.
#[must_use]
pub fn word_tokens(s: &str) -> Vec<&str> {
    WORD_RE.find_iter(s).map(|m| m.as_str()).collect()
}

/// Builds a frequency map from an iterator of items.
fn build_frequency_map<T, I>(iter: I) -> AHashMap<T, usize>
where
    T: Hash + Eq,
    I: Iterator<Item = T>,
{
    let mut map = AHashMap::new();
    for item in iter {
        *map.entry(item).or_insert(0) += 1;
    }
    map
}

/// Calculate cosine similarity between two frequency maps.
fn cosine_from_maps<T: Hash + Eq>(map_a: &AHashMap<T, usize>, map_b: &AHashMap<T, usize>) -> f64 {
    let mut dot_product = 0.0f64;
    let mut magnitude_a = 0.0f64;
    let mut magnitude_b = 0.0f64;

    for (key, &count_a) in map_a {
        let count_a = count_a as f64;
        magnitude_a += count_a * count_a;

        if let Some(&count_b) = map_b.get(key) {
            dot_product += count_a * count_b as f64;
        }
    }

    for &count_b in map_b.values() {
        let count_b = count_b as f64;
        magnitude_b += count_b * count_b;
    }

    let magnitude = (magnitude_a * magnitude_b).sqrt();

    if magnitude == 0.0 {
        0.0
    } else {
        (dot_product / magnitude).min(1.0)
    }
}

/// Word-level cosine similarity over term frequencies.
///
/// Case-sensitive; fold case beforehand if needed.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::cosine::cosine_similarity;
///
/// assert!((cosine_similarity("red fish, fish", "fish") - 0.894).abs() < 0.001);
/// assert_eq!(cosine_similarity("!!!", "???"), 0.0);
/// ```
#[must_use]
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    let map_a = build_frequency_map(WORD_RE.find_iter(a).map(|m| m.as_str()));
    let map_b = build_frequency_map(WORD_RE.find_iter(b).map(|m| m.as_str()));
    cosine_from_maps(&map_a, &map_b)
}

/// N-gram-level cosine similarity using the shared tokenizer.
pub fn cosine_similarity_ngrams(a: &str, b: &str, n: usize) -> Result<f64> {
    let tokenizer = NgramTokenizer::new(n)?;
    let map_a = build_frequency_map(tokenizer.tokenize(a).into_iter());
    let map_b = build_frequency_map(tokenizer.tokenize(b).into_iter());
    Ok(cosine_from_maps(&map_a, &map_b))
}
