//! Set-based coefficients over characters
//!
//! Strings are compared as **sets** of characters: duplicates collapse, so
//! "aab" and "ab" are identical here. The n-gram module reuses the set
//! helpers for token-based variants.
//!
//! Empty-set conventions: two empty strings are identical (1.0), exactly one
//! empty string shares nothing with the other (0.0).

use super::Similarity;
use ahash::AHashSet;
use std::hash::Hash;

/// Which set coefficient a [`SetSimilarity`] computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetCoefficient {
    Jaccard,
    SorensenDice,
    Overlap,
    Tanimoto,
}

/// Character-set similarity calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetSimilarity {
    pub coefficient: SetCoefficient,
}

impl SetSimilarity {
    #[must_use]
    pub fn new(coefficient: SetCoefficient) -> Self {
        Self { coefficient }
    }
}

impl Similarity for SetSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        match self.coefficient {
            SetCoefficient::Jaccard => jaccard_index(a, b),
            SetCoefficient::SorensenDice => sorensen_dice(a, b),
            SetCoefficient::Overlap => overlap_coefficient(a, b),
            SetCoefficient::Tanimoto => tanimoto_coefficient(a, b),
        }
    }

    fn name(&self) -> &'static str {
        match self.coefficient {
            SetCoefficient::Jaccard => "jaccard",
            SetCoefficient::SorensenDice => "sorensen_dice",
            SetCoefficient::Overlap => "overlap",
            SetCoefficient::Tanimoto => "tanimoto",
        }
    }
}

fn char_set(s: &str) -> AHashSet<char> {
    s.chars().collect()
}

/// `|A∩B| / |A∪B|`
pub(crate) fn jaccard_of_sets<T: Hash + Eq>(a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// `2|A∩B| / (|A|+|B|)`
pub(crate) fn dice_of_sets<T: Hash + Eq>(a: &AHashSet<T>, b: &AHashSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    (2.0 * intersection as f64) / (a.len() + b.len()) as f64
}

/// Jaccard index of the two character sets.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::token::jaccard_index;
///
/// // {a, b, c} vs {b, c, d}
/// assert_eq!(jaccard_index("abc", "bcd"), 0.5);
/// ```
#[must_use]
pub fn jaccard_index(a: &str, b: &str) -> f64 {
    jaccard_of_sets(&char_set(a), &char_set(b))
}

/// `1 - jaccard_index`
#[must_use]
pub fn jaccard_distance(a: &str, b: &str) -> f64 {
    1.0 - jaccard_index(a, b)
}

/// Sørensen-Dice coefficient of the two character sets.
#[must_use]
pub fn sorensen_dice(a: &str, b: &str) -> f64 {
    dice_of_sets(&char_set(a), &char_set(b))
}

/// `1 - sorensen_dice`
#[must_use]
pub fn sorensen_dice_distance(a: &str, b: &str) -> f64 {
    1.0 - sorensen_dice(a, b)
}

/// Overlap (Szymkiewicz-Simpson) coefficient: `|A∩B| / min(|A|,|B|)`.
#[must_use]
pub fn overlap_coefficient(a: &str, b: &str) -> f64 {
    let a_set = char_set(a);
    let b_set = char_set(b);

    let smaller = a_set.len().min(b_set.len());
    if smaller == 0 {
        return if a_set.is_empty() && b_set.is_empty() { 1.0 } else { 0.0 };
    }
    a_set.intersection(&b_set).count() as f64 / smaller as f64
}

/// Tanimoto coefficient: `|A∩B| / (|A|+|B|-|A∩B|)`.
///
/// Over sets this equals the Jaccard index; it is kept as its own metric
/// because callers select it by name.
#[must_use]
pub fn tanimoto_coefficient(a: &str, b: &str) -> f64 {
    let a_set = char_set(a);
    let b_set = char_set(b);

    let common = a_set.intersection(&b_set).count();
    let denominator = a_set.len() + b_set.len() - common;
    if denominator == 0 {
        1.0
    } else {
        common as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaccard() {
        assert_eq!(jaccard_index("abc", "abc"), 1.0);
        assert_eq!(jaccard_index("abc", "xyz"), 0.0);
        assert_eq!(jaccard_index("abc", "bcd"), 0.5);
        assert_eq!(jaccard_distance("abc", "bcd"), 0.5);
        assert_eq!(jaccard_index("", ""), 1.0);
        assert_eq!(jaccard_index("abc", ""), 0.0);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(jaccard_index("aab", "ab"), 1.0);
        assert_eq!(sorensen_dice("aaaa", "a"), 1.0);
        assert_eq!(overlap_coefficient("abab", "ba"), 1.0);
    }

    #[test]
    fn test_sorensen_dice() {
        // {n,i,g,h,t} vs {n,a,c,h,t}: 3 shared of 5 + 5
        assert!((sorensen_dice("night", "nacht") - 0.6).abs() < 1e-9);
        assert!((sorensen_dice_distance("night", "nacht") - 0.4).abs() < 1e-9);
        assert_eq!(sorensen_dice("", ""), 1.0);
    }

    #[test]
    fn test_overlap() {
        assert_eq!(overlap_coefficient("ab", "abcdef"), 1.0);
        assert_eq!(overlap_coefficient("ax", "abcdef"), 0.5);
        assert_eq!(overlap_coefficient("", "abc"), 0.0);
        assert_eq!(overlap_coefficient("", ""), 1.0);
    }

    #[test]
    fn test_tanimoto_matches_jaccard_on_sets() {
        for (a, b) in [("abc", "bcd"), ("night", "nacht"), ("aab", "b"), ("", "x")] {
            assert!((tanimoto_coefficient(a, b) - jaccard_index(a, b)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_trait_dispatch() {
        let dice = SetSimilarity::new(SetCoefficient::SorensenDice);
        assert_eq!(dice.name(), "sorensen_dice");
        assert!((dice.similarity("night", "nacht") - 0.6).abs() < 1e-9);
    }
}
