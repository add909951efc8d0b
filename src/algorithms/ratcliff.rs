//! Ratcliff/Obershelp pattern matching ("gestalt" similarity)
//!
//! Finds the longest common substring, then recurses into the unmatched
//! pieces to its left and right. The score is `2·M / (|a| + |b|)` where `M`
//! is the total number of matched characters.
//!
//! # Complexity
//! - Time: O(m*n) per anchor, O(m*n*k) overall for k anchors (worst case cubic)
//! - Space: O(n) per anchor search

use super::Similarity;
use smallvec::SmallVec;

/// Ratcliff/Obershelp similarity calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatcliffObershelp;

impl RatcliffObershelp {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for RatcliffObershelp {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        ratcliff_obershelp(a, b)
    }

    fn name(&self) -> &'static str {
        "ratcliff_obershelp"
    }
}

/// Longest common run of `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
///
/// Returns `(start_in_a, start_in_b, length)`. Among runs of equal length the
/// one starting leftmost in `a` wins, then leftmost in `b`.
fn longest_anchor(
    a: &[char],
    b: &[char],
    (a_lo, a_hi): (usize, usize),
    (b_lo, b_hi): (usize, usize),
) -> (usize, usize, usize) {
    let width = b_hi - b_lo;
    let mut prev: SmallVec<[usize; 64]> = smallvec::smallvec![0; width + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; width + 1];
    let mut best = (a_lo, b_lo, 0usize);

    for i in a_lo..a_hi {
        for j in 0..width {
            if a[i] == b[b_lo + j] {
                curr[j + 1] = prev[j] + 1;
                let run = curr[j + 1];
                let start_a = i + 1 - run;
                let start_b = b_lo + j + 1 - run;
                // strictly longer, or as long but further left in a
                if run > best.2 || (run == best.2 && start_a < best.0) {
                    best = (start_a, start_b, run);
                }
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Total characters matched by the recursive anchor decomposition.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![((0, a.len()), (0, b.len()))];

    while let Some((a_range, b_range)) = pending.pop() {
        if a_range.0 >= a_range.1 || b_range.0 >= b_range.1 {
            continue;
        }
        let (sa, sb, len) = longest_anchor(a, b, a_range, b_range);
        if len == 0 {
            continue;
        }
        total += len;
        pending.push(((a_range.0, sa), (b_range.0, sb)));
        pending.push(((sa + len, a_range.1), (sb + len, b_range.1)));
    }

    total
}

/// Ratcliff/Obershelp similarity in [0, 1].
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::ratcliff::ratcliff_obershelp;
///
/// // WIKIM + IA matched: 2 * 7 / 18
/// assert!((ratcliff_obershelp("WIKIMEDIA", "WIKIMANIA") - 0.7778).abs() < 0.001);
/// assert_eq!(ratcliff_obershelp("", ""), 1.0);
/// ```
#[must_use]
pub fn ratcliff_obershelp(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }

    let matched = matching_characters(&a_chars, &b_chars);
    (2 * matched) as f64 / total as f64
}
