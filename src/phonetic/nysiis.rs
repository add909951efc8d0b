//! NYSIIS and Refined NYSIIS
//!
//! The New York State Identification and Intelligence System code maps a
//! name to a string of letters. Prefix and suffix rewrites run first as an
//! ordered rule cascade, then a left-to-right scan rewrites the remaining
//! letters in place, appending each one that differs from its predecessor.
//!
//! The refined (modified) variant adds prefix, suffix and scan rules, keeps
//! the original leading vowel and truncates to six letters.
//!
//! Input is folded to unaccented uppercase ASCII letters; anything else is
//! dropped. No letters encodes to `""`.

use super::rules::RuleSet;
use super::PhoneticEncoder;
use crate::algorithms::normalize::{ascii_letters_upper, strip_diacritics};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Letters kept before truncation applies.
pub const NYSIIS_CODE_LENGTH: usize = 6;

/// How a NYSIIS code longer than [`NYSIIS_CODE_LENGTH`] is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NysiisTruncation {
    /// Overflow kept inside brackets: `FALAPS[AN]`
    #[default]
    Bracket,
    /// Overflow dropped: `FALAPS`
    Truncate,
    /// Full key: `FALAPSAN`
    Full,
}

#[rustfmt::skip]
const PREFIX_RULES: &[(&str, &str, usize)] = &[
    ("^MAC", "MCC", 1),
    ("^KN", "NN", 1),
    ("^K", "C", 1),
    ("^(?:PH|PF)", "FF", 1),
    ("^SCH", "SSS", 1),
];

#[rustfmt::skip]
const SUFFIX_RULES: &[(&str, &str, usize)] = &[
    ("(?:EE|IE)$", "Y", 1),
    ("(?:DT|RT|RD|NT|ND)$", "D", 1),
];

static PREFIXES: Lazy<RuleSet> =
    Lazy::new(|| RuleSet::compile(PREFIX_RULES).expect("nysiis prefix rules are valid regex"));
static SUFFIXES: Lazy<RuleSet> =
    Lazy::new(|| RuleSet::compile(SUFFIX_RULES).expect("nysiis suffix rules are valid regex"));

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

fn folded_letters(s: &str) -> String {
    ascii_letters_upper(&strip_diacritics(s))
}

/// NYSIIS encoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nysiis {
    pub truncation: NysiisTruncation,
}

impl Nysiis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_truncation(mut self, truncation: NysiisTruncation) -> Self {
        self.truncation = truncation;
        self
    }
}

impl PhoneticEncoder for Nysiis {
    fn encode(&self, s: &str) -> String {
        nysiis_with(s, self.truncation)
    }

    fn name(&self) -> &'static str {
        "nysiis"
    }
}

/// Rewrite of the letter at `curr` given its neighbours.
///
/// Multi-letter results overwrite the letters that follow `curr`.
fn transcode(prev: char, curr: char, next: Option<char>, after_next: Option<char>) -> SmallVec<[char; 3]> {
    match curr {
        'E' if next == Some('V') => smallvec!['A', 'F'],
        c if is_vowel(c) => smallvec!['A'],
        'Q' => smallvec!['G'],
        'Z' => smallvec!['S'],
        'M' => smallvec!['N'],
        'K' if next == Some('N') => smallvec!['N', 'N'],
        'K' => smallvec!['C'],
        'S' if next == Some('C') && after_next == Some('H') => smallvec!['S', 'S', 'S'],
        'P' if next == Some('H') => smallvec!['F', 'F'],
        'H' if !is_vowel(prev) || !next.is_some_and(is_vowel) => smallvec![prev],
        'W' if is_vowel(prev) => smallvec![prev],
        c => smallvec![c],
    }
}

/// Full, untruncated NYSIIS key.
fn nysiis_key(s: &str) -> String {
    let letters = folded_letters(s);
    if letters.is_empty() {
        return String::new();
    }

    let word = SUFFIXES.apply(&PREFIXES.apply(&letters));
    let mut chars: Vec<char> = word.chars().collect();

    let mut key = String::with_capacity(chars.len());
    key.push(chars[0]);

    for i in 1..chars.len() {
        let next = chars.get(i + 1).copied();
        let after_next = chars.get(i + 2).copied();
        let replacement = transcode(chars[i - 1], chars[i], next, after_next);
        for (offset, &c) in replacement.iter().enumerate() {
            if let Some(slot) = chars.get_mut(i + offset) {
                *slot = c;
            }
        }
        if chars[i] != chars[i - 1] {
            key.push(chars[i]);
        }
    }

    if key.len() > 1 {
        if key.ends_with('S') {
            key.pop();
        }
        if key.len() > 2 && key.ends_with("AY") {
            key.remove(key.len() - 2);
        } else if key.len() > 1 && key.ends_with('A') {
            key.pop();
        }
    }

    key
}

fn render(key: String, truncation: NysiisTruncation) -> String {
    if key.len() <= NYSIIS_CODE_LENGTH {
        return key;
    }
    let (head, tail) = key.split_at(NYSIIS_CODE_LENGTH);
    match truncation {
        NysiisTruncation::Full => key,
        NysiisTruncation::Truncate => head.to_string(),
        NysiisTruncation::Bracket => format!("{head}[{tail}]"),
    }
}

/// NYSIIS with the default bracket rendering.
///
/// # Example
/// ```
/// use fuzzycompare::phonetic::nysiis::nysiis;
///
/// assert_eq!(nysiis("Knight"), "NAGT");
/// assert_eq!(nysiis("Phillipson"), "FALAPS[AN]");
/// assert_eq!(nysiis(""), "");
/// ```
#[must_use]
pub fn nysiis(s: &str) -> String {
    nysiis_with(s, NysiisTruncation::default())
}

/// NYSIIS with an explicit truncation mode.
#[must_use]
pub fn nysiis_with(s: &str, truncation: NysiisTruncation) -> String {
    render(nysiis_key(s), truncation)
}

/// Refined (modified) NYSIIS encoder
///
/// # Parameters
/// - `max_length`: Code length cap (default 6, `None` keeps the full key)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefinedNysiis {
    pub max_length: Option<usize>,
}

impl Default for RefinedNysiis {
    fn default() -> Self {
        Self {
            max_length: Some(NYSIIS_CODE_LENGTH),
        }
    }
}

impl RefinedNysiis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }
}

impl PhoneticEncoder for RefinedNysiis {
    fn encode(&self, s: &str) -> String {
        refined_nysiis_with(s, self.max_length)
    }

    fn name(&self) -> &'static str {
        "refined_nysiis"
    }
}

fn starts_with_at(word: &[char], at: usize, pattern: &str) -> bool {
    let mut index = at;
    for p in pattern.chars() {
        if word.get(index) != Some(&p) {
            return false;
        }
        index += 1;
    }
    true
}

fn ends_with_any(word: &[char], patterns: &[&str]) -> bool {
    patterns.iter().any(|p| {
        let len = p.chars().count();
        word.len() >= len && starts_with_at(word, word.len() - len, p)
    })
}

/// Replace `word[at..at + len]` with `with`.
fn splice(word: &mut Vec<char>, at: usize, len: usize, with: &str) {
    let end = (at + len).min(word.len());
    word.splice(at..end, with.chars());
}

fn refined_prefix(word: &mut Vec<char>) {
    let rewrites: [(&str, &str); 9] = [
        ("MAC", "MCC"),
        ("KN", "NN"),
        ("K", "C"),
        ("PH", "FF"),
        ("PF", "FF"),
        ("SCH", "SSS"),
        ("WR", "RR"),
        ("RH", "RR"),
        ("DG", "GG"),
    ];
    for (from, to) in rewrites {
        if starts_with_at(word, 0, from) {
            splice(word, 0, from.len(), to);
            return;
        }
    }
    if word.first().copied().is_some_and(is_vowel) {
        word[0] = 'A';
    }
}

/// Never strips the word below one letter.
fn refined_suffix(word: &mut Vec<char>) {
    if word.len() > 1 && matches!(word.last(), Some('S' | 'Z')) {
        word.pop();
    }
    let len = word.len();
    if ends_with_any(word, &["EE", "IE", "YE"]) {
        splice(word, len - 2, 2, "Y");
    } else if ends_with_any(word, &["DT", "RT", "RD"]) {
        splice(word, len - 2, 2, "D");
    } else if ends_with_any(word, &["NT", "ND"]) {
        splice(word, len - 2, 2, "N");
    } else if ends_with_any(word, &["IX"]) {
        splice(word, len - 2, 2, "ICK");
    } else if ends_with_any(word, &["EX"]) {
        splice(word, len - 2, 2, "ECK");
    } else if ends_with_any(word, &["JR", "SR"]) {
        word.truncate(len.saturating_sub(2).max(1));
    }
}

/// Rewrite at position `i` of the refined scan.
///
/// Returns how many letters starting at `i` belong to this step.
fn refined_step(word: &mut Vec<char>, i: usize) -> usize {
    let len = word.len();
    let c = word[i];

    if starts_with_at(word, i, "EV") {
        splice(word, i, 2, "AF");
        return 2;
    }
    if is_vowel(c) {
        word[i] = 'A';
        return 1;
    }
    if c == 'Y' && i != len - 1 {
        word[i] = 'A';
        return 1;
    }
    match c {
        'Q' => word[i] = 'G',
        'Z' => word[i] = 'S',
        'M' => word[i] = 'N',
        'K' if word.get(i + 1) == Some(&'N') => splice(word, i, 2, "N"),
        'K' => word[i] = 'C',
        _ if i + 3 == len && starts_with_at(word, i, "SCH") => {
            splice(word, i, 3, "SSA");
            return 3;
        }
        _ if starts_with_at(word, i, "SCH") => {
            splice(word, i, 3, "SSS");
            return 3;
        }
        _ if i + 2 == len && starts_with_at(word, i, "SH") => {
            splice(word, i, 2, "SA");
            return 2;
        }
        _ if starts_with_at(word, i, "SH") => {
            splice(word, i, 2, "SS");
            return 2;
        }
        _ if starts_with_at(word, i, "PH") => {
            splice(word, i, 2, "FF");
            return 2;
        }
        _ if starts_with_at(word, i, "GHT") => {
            splice(word, i, 3, "TTT");
            return 3;
        }
        _ if starts_with_at(word, i, "DG") => {
            splice(word, i, 2, "GG");
            return 2;
        }
        _ if starts_with_at(word, i, "WR") => {
            splice(word, i, 2, "RR");
            return 2;
        }
        'H' if !is_vowel(word[i - 1]) || !word.get(i + 1).copied().is_some_and(is_vowel) => {
            word[i] = word[i - 1];
        }
        'W' if is_vowel(word[i - 1]) => word[i] = word[i - 1],
        _ => {}
    }
    1
}

/// Full, untruncated refined NYSIIS key.
fn refined_nysiis_key(s: &str) -> String {
    let letters = folded_letters(s);
    let Some(original_first) = letters.chars().next() else {
        return String::new();
    };

    let mut word: Vec<char> = letters.chars().collect();
    refined_prefix(&mut word);
    refined_suffix(&mut word);
    if word.is_empty() {
        return String::new();
    }

    let mut key: Vec<char> = vec![word[0]];
    let mut i = 1;
    while i < word.len() {
        let step = refined_step(&mut word, i);
        let end = (i + step).min(word.len());
        key.extend_from_slice(&word[i..end]);
        i = end.max(i + 1);
    }
    key.dedup();

    if key.len() > 1 && key.last() == Some(&'S') {
        key.pop();
    }
    if key.ends_with(&['A', 'Y']) {
        key.remove(key.len() - 2);
    }
    if key.len() > 1 && key.last() == Some(&'A') {
        key.pop();
    }
    if key.first() == Some(&'A') {
        key[0] = original_first;
    }

    key.into_iter().collect()
}

/// Refined NYSIIS truncated to six letters.
///
/// # Example
/// ```
/// use fuzzycompare::phonetic::nysiis::refined_nysiis;
///
/// assert_eq!(refined_nysiis("Wright"), "RAT");
/// assert_eq!(refined_nysiis("Edwards"), "EDWAD");
/// ```
#[must_use]
pub fn refined_nysiis(s: &str) -> String {
    refined_nysiis_with(s, Some(NYSIIS_CODE_LENGTH))
}

/// Refined NYSIIS with an explicit length cap.
#[must_use]
pub fn refined_nysiis_with(s: &str, max_length: Option<usize>) -> String {
    let mut key = refined_nysiis_key(s);
    if let Some(max) = max_length {
        key.truncate(max);
    }
    key
}
