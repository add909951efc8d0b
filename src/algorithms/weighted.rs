//! Weighted Levenshtein distance
//!
//! Levenshtein with caller-supplied costs per operation. The alphabetic
//! variant scales substitutions by how far apart two letters are in the
//! alphabet, which suits OCR and keyboard-slip correction where near letters
//! are confused more often than distant ones.

use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of steps between 'a' and 'z'.
const ALPHABET_SPAN: f64 = 25.0;

/// Per-operation costs for [`weighted_levenshtein`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditCosts {
    pub deletion: f64,
    pub insertion: f64,
    pub substitution: f64,
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            deletion: 1.0,
            insertion: 1.0,
            substitution: 1.0,
        }
    }
}

impl EditCosts {
    #[must_use]
    pub fn new(deletion: f64, insertion: f64, substitution: f64) -> Self {
        Self {
            deletion,
            insertion,
            substitution,
        }
    }

    /// Every cost must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("deletion", self.deletion),
            ("insertion", self.insertion),
            ("substitution", self.substitution),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimilarityError::invalid(format!(
                    "{} cost must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Levenshtein distance with custom operation costs.
///
/// Deletions remove a character of `a`, insertions add a character of `b`.
///
/// # Example
/// ```
/// use fuzzycompare::algorithms::weighted::{weighted_levenshtein, EditCosts};
///
/// let cheap_subs = EditCosts::new(1.0, 1.0, 0.5);
/// assert_eq!(weighted_levenshtein("kitten", "sitting", &cheap_subs).unwrap(), 2.0);
/// ```
pub fn weighted_levenshtein(a: &str, b: &str, costs: &EditCosts) -> Result<f64> {
    costs.validate()?;
    Ok(weighted_dp(a, b, costs, |_, _| costs.substitution))
}

/// Weighted Levenshtein where substitutions between ASCII letters cost
/// `substitution * max(distance, 1) / 25`, with `distance` measured between
/// lowercase letters. Any other substitution pays the full cost.
pub fn weighted_levenshtein_alphabetic(a: &str, b: &str, costs: &EditCosts) -> Result<f64> {
    costs.validate()?;
    Ok(weighted_dp(a, b, costs, |x, y| {
        costs.substitution * alphabetic_scale(x, y)
    }))
}

/// Fraction of the alphabet separating two letters, 1.0 for anything else.
fn alphabetic_scale(x: char, y: char) -> f64 {
    if x.is_ascii_alphabetic() && y.is_ascii_alphabetic() {
        let gap = (x.to_ascii_lowercase() as u8).abs_diff(y.to_ascii_lowercase() as u8);
        f64::from(gap.max(1)) / ALPHABET_SPAN
    } else {
        1.0
    }
}

fn weighted_dp<F>(a: &str, b: &str, costs: &EditCosts, substitution: F) -> f64
where
    F: Fn(char, char) -> f64,
{
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    let n = b_chars.len();

    let mut prev: SmallVec<[f64; 64]> = (0..=n).map(|j| j as f64 * costs.insertion).collect();
    let mut curr: SmallVec<[f64; 64]> = smallvec::smallvec![0.0; n + 1];

    for (i, &ac) in a_chars.iter().enumerate() {
        curr[0] = (i + 1) as f64 * costs.deletion;
        for (j, &bc) in b_chars.iter().enumerate() {
            let replace = if ac == bc { 0.0 } else { substitution(ac, bc) };
            curr[j + 1] = (prev[j + 1] + costs.deletion)
                .min(curr[j] + costs.insertion)
                .min(prev[j] + replace);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
