//! N-gram tokenizer and n-gram based metrics
//!
//! The tokenizer is shared by the n-gram Jaccard/Dice coefficients, the
//! n-gram cosine similarity and Kondrak's positional n-gram distance.
//!
//! # N-gram Size Limits
//!
//! Sizes outside `1..=`[`MAX_NGRAM_SIZE`] are rejected with `InvalidArgument`.

use super::Similarity;
use crate::error::{Result, SimilarityError};
use ahash::AHashSet;
use smallvec::SmallVec;

/// Maximum valid n-gram size.
pub const MAX_NGRAM_SIZE: usize = 32;

/// Filler used by Kondrak's distance to pad the front of both strings.
const KONDRAK_PAD: char = '\0';

/// Accept only sizes in `1..=MAX_NGRAM_SIZE`.
pub(crate) fn validate_ngram_size(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(SimilarityError::invalid("n-gram size must be at least 1, got 0"));
    }
    if n > MAX_NGRAM_SIZE {
        return Err(SimilarityError::invalid(format!(
            "n-gram size must be at most {}, got {}",
            MAX_NGRAM_SIZE, n
        )));
    }
    Ok(n)
}

/// Splits strings into overlapping n-grams.
///
/// # Parameters
/// - `n`: Size of n-grams (2 for bigram, 3 for trigram)
/// - `boundaries`: Also emit the shorter fragments at the start and end
///   (`"ab"` with n=3 gives `a`, `ab`, `ab`, `b`), as padding would without
///   adding pad characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramTokenizer {
    n: usize,
    boundaries: bool,
}

impl Default for NgramTokenizer {
    fn default() -> Self {
        Self {
            n: 2,
            boundaries: false,
        }
    }
}

impl NgramTokenizer {
    /// Fails with `InvalidArgument` when `n` is 0 or above [`MAX_NGRAM_SIZE`].
    pub fn new(n: usize) -> Result<Self> {
        Ok(Self {
            n: validate_ngram_size(n)?,
            boundaries: false,
        })
    }

    #[must_use]
    pub fn with_boundaries(mut self, boundaries: bool) -> Self {
        self.boundaries = boundaries;
        self
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Tokens in order of appearance.
    ///
    /// A non-empty string shorter than `n` still yields one token: the
    /// string itself.
    #[must_use]
    pub fn tokenize(&self, s: &str) -> Vec<String> {
        let chars: SmallVec<[char; 64]> = s.chars().collect();
        let len = chars.len();
        let n = self.n;

        if len == 0 {
            return Vec::new();
        }

        if !self.boundaries {
            if len < n {
                return vec![s.to_string()];
            }
            return chars.windows(n).map(|w| w.iter().collect()).collect();
        }

        // Equivalent to padding both ends with n-1 fillers and stripping them
        // back off every window.
        let mut tokens = Vec::with_capacity(len + n - 1);
        for start in (1 - n as isize)..(len as isize) {
            let from = start.max(0) as usize;
            let to = ((start + n as isize) as usize).min(len);
            tokens.push(chars[from..to].iter().collect());
        }
        tokens
    }

    /// Distinct tokens.
    #[must_use]
    pub fn token_set(&self, s: &str) -> AHashSet<String> {
        self.tokenize(s).into_iter().collect()
    }
}

/// Convenience: plain n-grams of size `n`.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::ngram::ngrams;
///
/// assert_eq!(ngrams("abcd", 2).unwrap(), vec!["ab", "bc", "cd"]);
/// assert_eq!(ngrams("ab", 3).unwrap(), vec!["ab"]);
/// assert!(ngrams("abc", 0).is_err());
/// ```
pub fn ngrams(s: &str, n: usize) -> Result<Vec<String>> {
    Ok(NgramTokenizer::new(n)?.tokenize(s))
}

/// Jaccard index over n-gram sets.
///
/// Two strings without any n-grams (both empty) are identical.
pub fn ngram_jaccard(a: &str, b: &str, n: usize) -> Result<f64> {
    let tokenizer = NgramTokenizer::new(n)?;
    let a_set = tokenizer.token_set(a);
    let b_set = tokenizer.token_set(b);
    Ok(super::token::jaccard_of_sets(&a_set, &b_set))
}

/// Sørensen-Dice coefficient over n-gram sets.
pub fn ngram_dice(a: &str, b: &str, n: usize) -> Result<f64> {
    let tokenizer = NgramTokenizer::new(n)?;
    let a_set = tokenizer.token_set(a);
    let b_set = tokenizer.token_set(b);
    Ok(super::token::dice_of_sets(&a_set, &b_set))
}

/// Kondrak's n-gram distance calculator (normalized, 0.0 = identical)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramDistance {
    pub n: usize,
}

impl Default for NgramDistance {
    fn default() -> Self {
        Self { n: 2 }
    }
}

impl NgramDistance {
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

/// An invalid size scores 0.0 similarity through this interface.
impl Similarity for NgramDistance {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        ngram_distance(a, b, self.n).map_or(0.0, |d| 1.0 - d)
    }

    fn name(&self) -> &'static str {
        "ngram_distance"
    }
}

/// Kondrak (2005) positional n-gram distance, normalized to [0, 1].
///
/// Both strings get `n - 1` leading null characters so the first real
/// character is covered by as many n-grams as interior ones. Comparing two
/// n-grams costs the fraction of mismatching positions, where positions in
/// which both sides are padding do not count toward the total. The costs feed
/// a Levenshtein-style DP and the result is divided by the longer length.
///
/// Strings shorter than `n` have no complete n-gram; they fall back to the
/// positional mismatch ratio `(mismatches + length difference) / max(len)`.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::ngram::ngram_distance;
///
/// assert_eq!(ngram_distance("abcd", "abcd", 2).unwrap(), 0.0);
/// assert_eq!(ngram_distance("", "abcd", 2).unwrap(), 1.0);
/// assert!(ngram_distance("abc", "abd", 0).is_err());
/// ```
pub fn ngram_distance(a: &str, b: &str, n: usize) -> Result<f64> {
    let n = validate_ngram_size(n)?;

    if a == b {
        return Ok(0.0);
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    let sl = a_chars.len();
    let tl = b_chars.len();

    if sl == 0 || tl == 0 {
        return Ok(1.0);
    }

    let max_len = sl.max(tl) as f64;

    if sl < n || tl < n {
        let mismatches = a_chars
            .iter()
            .zip(b_chars.iter())
            .filter(|(x, y)| x != y)
            .count();
        return Ok((mismatches + sl.abs_diff(tl)) as f64 / max_len);
    }

    let padded = |chars: &[char]| -> Vec<char> {
        std::iter::repeat(KONDRAK_PAD)
            .take(n - 1)
            .chain(chars.iter().copied())
            .collect()
    };
    let sa = padded(&a_chars);
    let ta = padded(&b_chars);

    let mut prev: Vec<f64> = (0..=sl).map(|i| i as f64).collect();
    let mut curr: Vec<f64> = vec![0.0; sl + 1];

    for j in 1..=tl {
        // n-gram of b ending at its j-th real character
        let t_gram = &ta[j - 1..j - 1 + n];
        curr[0] = j as f64;

        for i in 1..=sl {
            let s_gram = &sa[i - 1..i - 1 + n];
            let mut cost = 0usize;
            let mut counted = n;
            for (x, y) in s_gram.iter().zip(t_gram) {
                if x != y {
                    cost += 1;
                } else if *x == KONDRAK_PAD {
                    counted -= 1;
                }
            }
            let partial = cost as f64 / counted as f64;
            curr[i] = (curr[i - 1] + 1.0)
                .min(prev[i] + 1.0)
                .min(prev[i - 1] + partial);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[sl] / max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_windows() {
        let tokenizer = NgramTokenizer::new(2).unwrap();
        assert_eq!(tokenizer.tokenize("abc"), vec!["ab", "bc"]);
        assert_eq!(tokenizer.tokenize("a"), vec!["a"]);
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_boundaries() {
        let tokenizer = NgramTokenizer::new(2).unwrap().with_boundaries(true);
        assert_eq!(tokenizer.tokenize("abc"), vec!["a", "ab", "bc", "c"]);

        let tri = NgramTokenizer::new(3).unwrap().with_boundaries(true);
        assert_eq!(tri.tokenize("ab"), vec!["a", "ab", "ab", "b"]);
        assert_eq!(tri.tokenize("abcd"), vec!["a", "ab", "abc", "bcd", "cd", "d"]);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            NgramTokenizer::new(0),
            Err(SimilarityError::InvalidArgument(_))
        ));
        assert!(ngram_jaccard("a", "b", 0).is_err());
        assert!(ngram_dice("a", "b", 0).is_err());
    }

    #[test]
    fn test_oversized_rejected() {
        assert_eq!(NgramTokenizer::new(MAX_NGRAM_SIZE).unwrap().size(), MAX_NGRAM_SIZE);
        assert!(matches!(
            NgramTokenizer::new(MAX_NGRAM_SIZE + 1),
            Err(SimilarityError::InvalidArgument(_))
        ));
        let a = "x".repeat(35);
        let b = "x".repeat(36);
        assert!(ngram_jaccard(&a, &b, 40).is_err());
        assert!(ngram_distance(&a, &b, 40).is_err());
    }

    #[test]
    fn test_ngram_coefficients() {
        // "night" -> ni ig gh ht, "nacht" -> na ac ch ht: one shared bigram
        assert!((ngram_jaccard("night", "nacht", 2).unwrap() - 1.0 / 7.0).abs() < 1e-9);
        assert!((ngram_dice("night", "nacht", 2).unwrap() - 2.0 / 8.0).abs() < 1e-9);
        assert_eq!(ngram_jaccard("", "", 2).unwrap(), 1.0);
        assert_eq!(ngram_dice("abc", "", 2).unwrap(), 0.0);
    }

    #[test]
    fn test_kondrak_distance() {
        assert_eq!(ngram_distance("abc", "abc", 2).unwrap(), 0.0);
        let d = ngram_distance("abcd", "abcx", 2).unwrap();
        assert!(d > 0.0 && d < 0.5);
        let far = ngram_distance("abcd", "wxyz", 2).unwrap();
        assert!(far > d);
        assert!(far <= 1.0);
    }

    #[test]
    fn test_kondrak_short_inputs() {
        // both shorter than n: one mismatch out of two positions
        assert_eq!(ngram_distance("ab", "ax", 3).unwrap(), 0.5);
        assert_eq!(ngram_distance("a", "abcd", 2).unwrap(), 0.75);
    }

    #[test]
    fn test_similarity_trait() {
        let metric = NgramDistance::new(2);
        assert_eq!(metric.similarity("same", "same"), 1.0);
        assert_eq!(NgramDistance::new(0).similarity("a", "b"), 0.0);
    }
}
