//! Caverphone 2.0
//!
//! Lowercase a–z only, then a cascade of ordered rewrites, then padded with
//! `1` to exactly ten characters. Input without letters encodes to
//! `"1111111111"`.

use super::rules::RuleSet;
use super::PhoneticEncoder;
use crate::algorithms::normalize::ascii_letters_lower;
use once_cell::sync::Lazy;

/// Length of every Caverphone 2 code.
pub const CAVERPHONE_LENGTH: usize = 10;

const PADDING: &str = "1111111111";

#[rustfmt::skip]
const CAVERPHONE2_RULES: &[(&str, &str, usize)] = &[
    // final e
    ("e$", "", 0),
    // starts
    ("^cough", "cou2f", 0),
    ("^rough", "rou2f", 0),
    ("^tough", "tou2f", 0),
    ("^enough", "enou2f", 0),
    ("^trough", "trou2f", 0),
    ("^gn", "2n", 0),
    // ends
    ("mb$", "m2", 0),
    // replacements
    ("cq", "2q", 0),
    ("ci", "si", 0),
    ("ce", "se", 0),
    ("cy", "sy", 0),
    ("tch", "2ch", 0),
    ("c", "k", 0),
    ("q", "k", 0),
    ("x", "k", 0),
    ("v", "f", 0),
    ("dg", "2g", 0),
    ("tio", "sio", 0),
    ("tia", "sia", 0),
    ("d", "t", 0),
    ("ph", "fh", 0),
    ("b", "p", 0),
    ("sh", "s2", 0),
    ("z", "s", 0),
    ("^[aeiou]", "A", 0),
    ("[aeiou]", "3", 0),
    ("j", "y", 0),
    ("^y3", "Y3", 0),
    ("^y", "A", 0),
    ("y", "3", 0),
    ("3gh3", "3kh3", 0),
    ("gh", "22", 0),
    ("g", "k", 0),
    ("s+", "S", 0),
    ("t+", "T", 0),
    ("p+", "P", 0),
    ("k+", "K", 0),
    ("f+", "F", 0),
    ("m+", "M", 0),
    ("n+", "N", 0),
    ("w3", "W3", 0),
    ("wh3", "Wh3", 0),
    ("w$", "3", 0),
    ("w", "2", 0),
    ("^h", "A", 0),
    ("h", "2", 0),
    ("r3", "R3", 0),
    ("r$", "3", 0),
    ("r", "2", 0),
    ("l3", "L3", 0),
    ("l$", "3", 0),
    ("l", "2", 0),
    // removals
    ("2", "", 0),
    ("3$", "A", 0),
    ("3", "", 0),
];

static RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::compile(CAVERPHONE2_RULES).expect("caverphone rule table is valid regex")
});

/// Caverphone 2 encoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caverphone2;

impl Caverphone2 {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PhoneticEncoder for Caverphone2 {
    fn encode(&self, s: &str) -> String {
        caverphone2(s)
    }

    fn name(&self) -> &'static str {
        "caverphone2"
    }
}

/// Encode `s` with Caverphone 2.
///
/// # Example
/// ```
/// use fuzzycompare::phonetic::caverphone::caverphone2;
///
/// assert_eq!(caverphone2("Stevenson"), "STFNSN1111");
/// assert_eq!(caverphone2(""), "1111111111");
/// ```
#[must_use]
pub fn caverphone2(s: &str) -> String {
    let letters = ascii_letters_lower(s);
    let mut code = RULES.apply(&letters);
    code.push_str(PADDING);
    code.truncate(CAVERPHONE_LENGTH);
    code
}
