//! Longest Common Subsequence and Longest Common Substring
//!
//! # Complexity
//! - Time: O(m*n)
//! - Space: O(n) for `lcs_length`, O(m*n) for the string-returning functions
//!
//! # String Length Limits
//!
//! Functions that need the full O(m*n) table (`longest_common_subsequence`,
//! `longest_common_substring`) return `None` for inputs longer than
//! [`MAX_QUADRATIC_STRING_LENGTH`] characters. The length-only functions run
//! in O(n) space and have no limit.

use super::Similarity;
use smallvec::SmallVec;

/// Maximum string length for O(m*n) space algorithms.
pub const MAX_QUADRATIC_STRING_LENGTH: usize = 10_000;

/// LCS-based similarity calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lcs;

impl Lcs {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Lcs {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        lcs_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "lcs"
    }
}

/// Calculate the length of the Longest Common Subsequence.
#[must_use]
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let n = b_chars.len();
    if a_chars.is_empty() || n == 0 {
        return 0;
    }

    let mut prev: Vec<usize> = vec![0; n + 1];
    let mut curr: Vec<usize> = vec![0; n + 1];

    for &ac in &a_chars {
        for j in 1..=n {
            curr[j] = if ac == b_chars[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// The Longest Common Subsequence itself.
///
/// Backtracking walks from the bottom-right cell: on a character match it
/// moves diagonally, otherwise it moves left only when the left cell is
/// strictly larger than the upper one, and up on ties.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::lcs::longest_common_subsequence;
///
/// assert_eq!(longest_common_subsequence("AGGTAB", "GXTXAYB").as_deref(), Some("GTAB"));
/// ```
#[must_use]
pub fn longest_common_subsequence(a: &str, b: &str) -> Option<String> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m > MAX_QUADRATIC_STRING_LENGTH || n > MAX_QUADRATIC_STRING_LENGTH {
        return None;
    }
    if m == 0 || n == 0 {
        return Some(String::new());
    }

    let mut table: Vec<Vec<usize>> = vec![vec![0; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a_chars[i - 1] == b_chars[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    let mut lcs = Vec::with_capacity(table[m][n]);
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if a_chars[i - 1] == b_chars[j - 1] {
            lcs.push(a_chars[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[i][j - 1] > table[i - 1][j] {
            j -= 1;
        } else {
            i -= 1;
        }
    }

    Some(lcs.into_iter().rev().collect())
}

/// LCS similarity over the shorter string: `|LCS| / min(len(a), len(b))`.
///
/// Two empty strings are identical; one empty string scores 0.0.
#[must_use]
pub fn lcs_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let shorter = a.chars().count().min(b.chars().count());
    if shorter == 0 {
        return 0.0;
    }
    lcs_length(a, b) as f64 / shorter as f64
}

/// Longest contiguous run shared by both strings.
///
/// Scans the DP table row by row. Whenever a run grows past the longest seen
/// so far, a run starting where the current best starts extends it by one
/// character; a run starting elsewhere replaces it. Runs that only tie the
/// current best are ignored, so the first maximal substring found wins.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::lcs::longest_common_substring;
///
/// assert_eq!(longest_common_substring("abcdef", "zbcdf").as_deref(), Some("bcd"));
/// assert_eq!(longest_common_substring("abxcd", "cdyab").as_deref(), Some("ab"));
/// ```
#[must_use]
pub fn longest_common_substring(a: &str, b: &str) -> Option<String> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m > MAX_QUADRATIC_STRING_LENGTH || n > MAX_QUADRATIC_STRING_LENGTH {
        return None;
    }
    if m == 0 || n == 0 {
        return Some(String::new());
    }

    let mut prev: Vec<usize> = vec![0; n];
    let mut curr: Vec<usize> = vec![0; n];
    let mut longest = 0usize;
    let mut best_start = 0usize;
    let mut builder = String::new();

    for i in 0..m {
        for j in 0..n {
            if a_chars[i] != b_chars[j] {
                curr[j] = 0;
                continue;
            }
            curr[j] = if j == 0 { 1 } else { prev[j - 1] + 1 };

            if curr[j] > longest {
                longest = curr[j];
                let start = i + 1 - curr[j];
                if start == best_start && !builder.is_empty() {
                    builder.push(a_chars[i]);
                } else {
                    best_start = start;
                    builder.clear();
                    builder.extend(&a_chars[start..=i]);
                }
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Some(builder)
}

/// Length of the longest common substring, O(n) space.
#[must_use]
pub fn longest_common_substring_length(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let n = b_chars.len();
    let mut prev: Vec<usize> = vec![0; n + 1];
    let mut curr: Vec<usize> = vec![0; n + 1];
    let mut max_len = 0;

    for &ac in &a_chars {
        for j in 1..=n {
            if ac == b_chars[j - 1] {
                curr[j] = prev[j - 1] + 1;
                max_len = max_len.max(curr[j]);
            } else {
                curr[j] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    max_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_length() {
        assert_eq!(lcs_length("", ""), 0);
        assert_eq!(lcs_length("abc", "abc"), 3);
        assert_eq!(lcs_length("abc", "def"), 0);
        assert_eq!(lcs_length("ABCDGH", "AEDFHR"), 3);
        assert_eq!(lcs_length("AGGTAB", "GXTXAYB"), 4);
    }

    #[test]
    fn test_lcs_string() {
        assert_eq!(longest_common_subsequence("ABCDGH", "AEDFHR").as_deref(), Some("ADH"));
        assert_eq!(longest_common_subsequence("AGGTAB", "GXTXAYB").as_deref(), Some("GTAB"));
        assert_eq!(longest_common_subsequence("", "abc").as_deref(), Some(""));
    }

    #[test]
    fn test_lcs_tie_break_prefers_moving_up() {
        // "ab" vs "ba": both "a" and "b" are valid; ties move up in the table
        assert_eq!(longest_common_subsequence("ab", "ba").as_deref(), Some("a"));
        assert_eq!(longest_common_subsequence("ba", "ab").as_deref(), Some("b"));
    }

    #[test]
    fn test_lcs_similarity() {
        assert_eq!(lcs_similarity("", ""), 1.0);
        assert_eq!(lcs_similarity("abc", ""), 0.0);
        assert_eq!(lcs_similarity("abc", "aXbXc"), 1.0);
        assert!((lcs_similarity("ABCDGH", "AEDFHR") - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_longest_common_substring() {
        assert_eq!(longest_common_substring_length("abcdef", "zbcdf"), 3);
        assert_eq!(longest_common_substring("abcdef", "zbcdf").as_deref(), Some("bcd"));
        assert_eq!(longest_common_substring("abc", "xyz").as_deref(), Some(""));
        assert_eq!(longest_common_substring("", "xyz").as_deref(), Some(""));
    }

    #[test]
    fn test_longest_common_substring_keeps_first_maximal() {
        assert_eq!(longest_common_substring("abxcd", "cdyab").as_deref(), Some("ab"));
        assert_eq!(longest_common_substring("xyzabc", "abcxyz").as_deref(), Some("xyz"));
    }

    #[test]
    fn test_longest_common_substring_unicode() {
        assert_eq!(longest_common_substring("naïve café", "café au lait").as_deref(), Some("café"));
    }

    #[test]
    fn test_quadratic_functions_refuse_oversized_input() {
        let long = "a".repeat(MAX_QUADRATIC_STRING_LENGTH + 1);
        assert_eq!(longest_common_subsequence(&long, "a"), None);
        assert_eq!(longest_common_substring("a", &long), None);
        assert_eq!(lcs_length(&long, "aa"), 2);
        assert_eq!(longest_common_substring_length(&long, "aa"), 2);

        let at_limit = "a".repeat(MAX_QUADRATIC_STRING_LENGTH);
        assert_eq!(longest_common_substring(&at_limit, "b").as_deref(), Some(""));
    }
}
