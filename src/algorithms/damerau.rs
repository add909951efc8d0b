//! Damerau-Levenshtein distance implementation
//!
//! Extends Levenshtein with transposition of two adjacent characters.
//! Particularly useful for typo detection where letter swaps are common.
//!
//! This is the "restricted" variant (optimal string alignment): a substring
//! is never edited more than once, so the DP only needs to look two rows back.

use super::EditDistance;
use smallvec::SmallVec;

/// Damerau-Levenshtein distance calculator
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(n) using three rolling rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein;

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        damerau_levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}

/// Compute optimal string alignment distance.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::damerau::damerau_levenshtein;
///
/// assert_eq!(damerau_levenshtein("ab", "ba"), 1);
/// assert_eq!(damerau_levenshtein("ca", "abc"), 3);
/// ```
#[must_use]
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Rows i-2, i-1 and i of the full table
    let mut two_back: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut prev: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            let mut cell = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);

            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                cell = cell.min(two_back[j - 2] + 1);
            }

            curr[j] = cell;
        }
        std::mem::swap(&mut two_back, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalized Damerau-Levenshtein similarity (0.0 to 1.0)
#[inline]
#[must_use]
pub fn damerau_levenshtein_similarity(a: &str, b: &str) -> f64 {
    super::ratio_from_distance(damerau_levenshtein(a, b), a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::levenshtein::levenshtein;

    #[test]
    fn test_damerau_basic() {
        assert_eq!(damerau_levenshtein("", ""), 0);
        assert_eq!(damerau_levenshtein("abc", ""), 3);
        assert_eq!(damerau_levenshtein("", "abc"), 3);
        assert_eq!(damerau_levenshtein("abc", "abc"), 0);
        assert_eq!(damerau_levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_transposition() {
        assert_eq!(damerau_levenshtein("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein("abcdef", "abdcef"), 1);
        assert_eq!(levenshtein("abcdef", "abdcef"), 2);
        assert_eq!(damerau_levenshtein("teh", "the"), 1);
    }

    #[test]
    fn test_restricted_variant() {
        // OSA forbids editing the transposed pair again
        assert_eq!(damerau_levenshtein("ca", "abc"), 3);
    }

    #[test]
    fn test_similarity() {
        assert_eq!(damerau_levenshtein_similarity("ab", "ab"), 1.0);
        assert_eq!(damerau_levenshtein_similarity("ab", "ba"), 0.5);
        assert_eq!(DamerauLevenshtein::new().distance("teh", "the"), 1);
    }
}
