//! Levenshtein (edit) distance implementation
//!
//! Classic dynamic programming over Unicode scalar values:
//! - Single-row DP table, the shorter string on the column axis
//! - Bounded variant with early termination past a max distance
//! - Percentage and bound-normalized scores
//! - Grapheme-cluster mode for emoji and combining sequences

use super::EditDistance;
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// Levenshtein distance calculator with optional early termination
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(min(m,n)) using single-row DP optimization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    /// Maximum distance to compute (for early termination)
    pub max_distance: Option<usize>,
}

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self { max_distance: None }
    }

    #[must_use]
    pub fn with_max_distance(max_distance: usize) -> Self {
        Self {
            max_distance: Some(max_distance),
        }
    }

    /// Returns `None` if the distance exceeds `max_distance`.
    #[must_use]
    pub fn compute(&self, a: &str, b: &str) -> Option<usize> {
        match self.max_distance {
            Some(max_d) => levenshtein_distance_bounded(a, b, max_d),
            None => Some(levenshtein(a, b)),
        }
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        // Past the threshold report max_distance + 1 ("greater than threshold")
        match self.max_distance {
            Some(max_d) => {
                levenshtein_distance_bounded(a, b, max_d).unwrap_or(max_d.saturating_add(1))
            }
            None => levenshtein(a, b),
        }
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Single-row DP over any comparable slices.
///
/// The shorter input is placed on the column axis so the row stays small.
pub(crate) fn dp_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let (target, source) = if a.len() < b.len() { (a, b) } else { (b, a) };
    let n = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n).collect();

    for (i, sc) in source.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for j in 0..n {
            let cost = usize::from(*sc != target[j]);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = diagonal + cost;

            diagonal = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n]
}

/// Levenshtein distance between two strings, counted in chars.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::levenshtein::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    dp_distance(&a_chars, &b_chars)
}

/// Levenshtein distance with early termination.
///
/// Returns `None` as soon as every cell in a row exceeds `max_distance`.
#[must_use]
pub fn levenshtein_distance_bounded(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    if a == b {
        return Some(0);
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    if a_chars.len().abs_diff(b_chars.len()) > max_distance {
        return None;
    }

    let (target, source) = if a_chars.len() < b_chars.len() {
        (&a_chars[..], &b_chars[..])
    } else {
        (&b_chars[..], &a_chars[..])
    };
    let n = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for j in 0..n {
            let cost = usize::from(sc != target[j]);
            let cell = (diagonal + cost).min(row[j + 1] + 1).min(row[j] + 1);
            diagonal = row[j + 1];
            row[j + 1] = cell;
            row_min = row_min.min(cell);
        }

        if row_min > max_distance {
            return None;
        }
    }

    Some(row[n]).filter(|&d| d <= max_distance)
}

/// Largest possible Levenshtein distance: the longer string's length.
#[inline]
#[must_use]
pub fn levenshtein_upper_bound(a: &str, b: &str) -> usize {
    a.chars().count().max(b.chars().count())
}

/// Smallest possible Levenshtein distance: the length difference.
#[inline]
#[must_use]
pub fn levenshtein_lower_bound(a: &str, b: &str) -> usize {
    a.chars().count().abs_diff(b.chars().count())
}

/// Percentage similarity: `1 - distance / max(len)`.
///
/// Two empty strings are identical (1.0).
#[inline]
#[must_use]
pub fn levenshtein_percentage(a: &str, b: &str) -> f64 {
    super::ratio_from_distance(levenshtein(a, b), a, b)
}

/// Levenshtein distance rescaled into the range between its bounds.
///
/// Subtracts the lower bound (`|len(a) - len(b)|`) and divides by
/// `upper - lower`. When the bounds coincide (one side empty) the distance
/// is fully explained by the length difference and the result is 0.0.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::levenshtein::normalized_levenshtein;
///
/// // distance 3, bounds [1, 7]
/// assert!((normalized_levenshtein("kitten", "sitting") - 2.0 / 6.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn normalized_levenshtein(a: &str, b: &str) -> f64 {
    let upper = levenshtein_upper_bound(a, b);
    let lower = levenshtein_lower_bound(a, b);
    if upper == lower {
        return 0.0;
    }
    let excess = levenshtein(a, b) - lower;
    excess as f64 / (upper - lower) as f64
}

/// Levenshtein distance treating grapheme clusters as single units.
///
/// # Examples
/// ```
/// use fuzzycompare::algorithms::levenshtein::levenshtein_grapheme;
///
/// // 👨‍👩‍👧‍👦 is 7 code points but 1 grapheme cluster
/// assert_eq!(levenshtein_grapheme("👨‍👩‍👧‍👦", "👨"), 1);
/// ```
#[must_use]
pub fn levenshtein_grapheme(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_graphemes: SmallVec<[&str; 64]> = a.graphemes(true).collect();
    let b_graphemes: SmallVec<[&str; 64]> = b.graphemes(true).collect();
    dp_distance(&a_graphemes, &b_graphemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
        assert_eq!(levenshtein("intention", "execution"), 5);
        assert_eq!(levenshtein("ab", "ba"), 2);
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
    }

    #[test]
    fn test_bounded_returns_none_when_exceeded() {
        assert_eq!(levenshtein_distance_bounded("abcdef", "ghijkl", 3), None);
        assert_eq!(levenshtein_distance_bounded("abc", "abd", 2), Some(1));
        assert_eq!(levenshtein_distance_bounded("abc", "abc", 0), Some(0));
        assert_eq!(levenshtein_distance_bounded("a", "abcdef", 2), None);
    }

    #[test]
    fn test_struct_compute() {
        let lev = Levenshtein::with_max_distance(2);
        assert_eq!(lev.compute("abc", "abd"), Some(1));
        assert_eq!(lev.compute("abc", "xyz"), None);
        assert_eq!(EditDistance::distance(&lev, "abc", "xyz"), 3);
        assert_eq!(Levenshtein::new().compute("abc", "xyz"), Some(3));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(levenshtein_upper_bound("kitten", "sitting"), 7);
        assert_eq!(levenshtein_lower_bound("kitten", "sitting"), 1);
        assert_eq!(levenshtein_lower_bound("", "abc"), 3);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(levenshtein_percentage("", ""), 1.0);
        assert_eq!(levenshtein_percentage("abc", "abc"), 1.0);
        assert_eq!(levenshtein_percentage("abc", "xyz"), 0.0);
        assert!((levenshtein_percentage("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_normalized() {
        assert_eq!(normalized_levenshtein("abc", "abc"), 0.0);
        // only insertions needed: distance equals the lower bound
        assert_eq!(normalized_levenshtein("abc", "abcdef"), 0.0);
        assert_eq!(normalized_levenshtein("", "abc"), 0.0);
        assert_eq!(normalized_levenshtein("abc", "xyz"), 1.0);
    }

    #[test]
    fn test_grapheme_mode() {
        assert_eq!(levenshtein_grapheme("e\u{301}", "e"), 1);
        assert_eq!(levenshtein("e\u{301}", "e"), 1);
        assert_eq!(levenshtein_grapheme("e\u{301}x", "e"), 2);
    }
}
