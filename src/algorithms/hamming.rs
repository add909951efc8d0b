//! Hamming distance implementation
//!
//! Counts positions where characters differ.
//! Only defined on strings of equal length (counted in chars).
//!
//! # Length Mismatch Behavior
//!
//! - **`hamming_distance` / `FallibleEditDistance`**: `Err(LengthMismatch)`
//! - **`Similarity`**: `0.0` for unequal lengths ("no similarity")
//!
//! If you need Hamming-like behavior on unequal strings, use `hamming_distance_padded()`.
//!
//! # Normalization
//!
//! Two conventions coexist and are selected with [`HammingNormalization`]:
//! dividing by the combined length of both inputs (the established behaviour,
//! which caps the normalized value at 0.5) or by the shared length.

use super::{FallibleEditDistance, Similarity};
use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};

/// Denominator used when normalizing a Hamming count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HammingNormalization {
    /// `count / (len(a) + len(b))`
    #[default]
    CombinedLength,
    /// `count / len(a)`
    SharedLength,
}

/// Hamming distance calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FallibleEditDistance for Hamming {
    fn distance(&self, a: &str, b: &str) -> Result<usize> {
        hamming_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Unequal-length strings return `0.0`; use [`FallibleEditDistance`] to
/// distinguish "no similarity" from "undefined comparison".
impl Similarity for Hamming {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        FallibleEditDistance::similarity(self, a, b).unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Calculate Hamming distance between two strings.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::hamming::hamming_distance;
/// use fuzzycompare::SimilarityError;
///
/// assert_eq!(hamming_distance("karolin", "kathrin"), Ok(3));
/// assert_eq!(
///     hamming_distance("abc", "ab"),
///     Err(SimilarityError::LengthMismatch { left: 3, right: 2 })
/// );
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Result<usize> {
    let left = a.chars().count();
    let right = b.chars().count();

    if left != right {
        return Err(SimilarityError::LengthMismatch { left, right });
    }

    Ok(a.chars().zip(b.chars()).filter(|(ac, bc)| ac != bc).count())
}

/// Hamming distance that counts every position past the shorter string as a mismatch.
#[must_use]
pub fn hamming_distance_padded(a: &str, b: &str) -> usize {
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();
    let mut distance = 0;

    loop {
        match (a_chars.next(), b_chars.next()) {
            (None, None) => return distance,
            (Some(ac), Some(bc)) if ac == bc => {}
            _ => distance += 1,
        }
    }
}

/// Hamming count divided according to `mode`.
///
/// Two empty strings have a normalized distance of 0.0.
pub fn normalized_hamming(a: &str, b: &str, mode: HammingNormalization) -> Result<f64> {
    let dist = hamming_distance(a, b)?;
    let len = a.chars().count();
    let denominator = match mode {
        HammingNormalization::CombinedLength => len * 2,
        HammingNormalization::SharedLength => len,
    };

    if denominator == 0 {
        Ok(0.0)
    } else {
        Ok(dist as f64 / denominator as f64)
    }
}

/// Normalized Hamming similarity (0.0 to 1.0) over the shared length.
pub fn hamming_similarity(a: &str, b: &str) -> Result<f64> {
    normalized_hamming(a, b, HammingNormalization::SharedLength).map(|d| 1.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_basic() {
        assert_eq!(hamming_distance("", ""), Ok(0));
        assert_eq!(hamming_distance("abc", "abc"), Ok(0));
        assert_eq!(hamming_distance("abc", "axc"), Ok(1));
        assert_eq!(hamming_distance("karolin", "kathrin"), Ok(3));
        assert_eq!(hamming_distance("1011101", "1001001"), Ok(2));
    }

    #[test]
    fn test_hamming_different_lengths() {
        assert_eq!(
            hamming_distance("abc", "ab"),
            Err(SimilarityError::LengthMismatch { left: 3, right: 2 })
        );
        assert_eq!(hamming_distance_padded("abc", "ab"), 1);
        assert_eq!(hamming_distance_padded("ab", "xbcd"), 3);
        assert_eq!(Similarity::similarity(&Hamming::new(), "abc", "ab"), 0.0);
    }

    #[test]
    fn test_hamming_counts_chars_not_bytes() {
        assert_eq!(hamming_distance("café", "cafe"), Ok(1));
    }

    #[test]
    fn test_normalization_modes() {
        let combined = normalized_hamming("karolin", "kathrin", HammingNormalization::CombinedLength);
        assert!((combined.unwrap() - 3.0 / 14.0).abs() < 1e-9);
        let shared = normalized_hamming("karolin", "kathrin", HammingNormalization::SharedLength);
        assert!((shared.unwrap() - 3.0 / 7.0).abs() < 1e-9);
        assert_eq!(normalized_hamming("", "", HammingNormalization::SharedLength), Ok(0.0));
        assert!(normalized_hamming("a", "ab", HammingNormalization::SharedLength).is_err());
    }

    #[test]
    fn test_similarity() {
        assert_eq!(hamming_similarity("abcd", "abcx"), Ok(0.75));
        assert_eq!(
            FallibleEditDistance::similarity(&Hamming::new(), "abcd", "abcx"),
            Ok(0.75)
        );
    }
}
