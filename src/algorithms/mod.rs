//! Core string similarity algorithms
//!
//! Each algorithm is implemented as a standalone function for composability,
//! plus a trait-based interface for extensibility.

pub mod cosine;
pub mod damerau;
pub mod hamming;
pub mod jaro;
pub mod lcs;
pub mod levenshtein;
pub mod ngram;
pub mod normalize;
pub mod ratcliff;
pub mod token;
pub mod weighted;

pub use cosine::*;
pub use damerau::*;
pub use hamming::*;
pub use jaro::*;
pub use lcs::*;
pub use levenshtein::*;
pub use ngram::*;
pub use ratcliff::*;
pub use token::*;
pub use weighted::*;

/// Trait for all similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that return integer distances
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Convert to normalized similarity score (0.0 to 1.0)
    fn similarity(&self, a: &str, b: &str) -> f64 {
        ratio_from_distance(self.distance(a, b), a, b)
    }

    fn name(&self) -> &'static str;
}

/// Blanket implementation: any EditDistance is also a Similarity
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}

/// Trait for edit distance algorithms with a precondition on their inputs.
///
/// Hamming requires equal-length strings, so its distance is a
/// `Result` carrying [`crate::SimilarityError::LengthMismatch`].
pub trait FallibleEditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> crate::Result<usize>;

    /// Convert to normalized similarity score (0.0 to 1.0)
    fn similarity(&self, a: &str, b: &str) -> crate::Result<f64> {
        self.distance(a, b).map(|dist| ratio_from_distance(dist, a, b))
    }

    fn name(&self) -> &'static str;
}

/// `1 - dist / max_len`, with two empty strings counting as identical.
#[inline]
pub(crate) fn ratio_from_distance(dist: usize, a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        1.0 - (dist as f64 / max_len as f64)
    }
}
