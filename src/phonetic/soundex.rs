//! Soundex and Reverse Soundex
//!
//! Both produce a fixed 4-character code: one letter and three digits.
//! Reverse Soundex runs the same coding over the letters read backwards,
//! which groups names that share an ending rather than a beginning.

use super::PhoneticEncoder;
use crate::algorithms::normalize::{ascii_letters_upper, strip_diacritics};

const CODE_LENGTH: usize = 4;

/// Classic Soundex encoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Soundex;

impl Soundex {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PhoneticEncoder for Soundex {
    fn encode(&self, s: &str) -> String {
        soundex(s)
    }

    fn name(&self) -> &'static str {
        "soundex"
    }
}

/// Reverse Soundex encoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseSoundex;

impl ReverseSoundex {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PhoneticEncoder for ReverseSoundex {
    fn encode(&self, s: &str) -> String {
        reverse_soundex(s)
    }

    fn name(&self) -> &'static str {
        "reverse_soundex"
    }
}

fn digit(c: char) -> char {
    match c {
        'B' | 'F' | 'P' | 'V' => '1',
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => '2',
        'D' | 'T' => '3',
        'L' => '4',
        'M' | 'N' => '5',
        'R' => '6',
        _ => '0', // A, E, I, O, U, H, W, Y
    }
}

/// Shared coding over uppercase ASCII letters.
///
/// H and W are transparent: they neither emit a digit nor separate two equal
/// digits. Vowels emit nothing but do separate them.
fn encode_letters(letters: &[char]) -> String {
    let Some((&first, rest)) = letters.split_first() else {
        return String::new();
    };

    let mut code = String::with_capacity(CODE_LENGTH);
    code.push(first);
    let mut prev_digit = digit(first);

    for &c in rest {
        if code.len() >= CODE_LENGTH {
            break;
        }
        if matches!(c, 'H' | 'W') {
            continue;
        }
        let d = digit(c);
        if d != '0' && d != prev_digit {
            code.push(d);
        }
        prev_digit = d;
    }

    while code.len() < CODE_LENGTH {
        code.push('0');
    }
    code
}

fn letters_of(s: &str) -> Vec<char> {
    ascii_letters_upper(&strip_diacritics(s)).chars().collect()
}

/// Encode a string using Soundex.
///
/// Returns an empty string when the input has no letters.
///
/// # Example
/// ```
/// use fuzzycompare::phonetic::soundex::soundex;
///
/// assert_eq!(soundex("Robert"), "R163");
/// assert_eq!(soundex("Rupert"), "R163");
/// assert_eq!(soundex(""), "");
/// ```
#[must_use]
pub fn soundex(s: &str) -> String {
    encode_letters(&letters_of(s))
}

/// Encode a string using Reverse Soundex.
///
/// The first character of the code is the last letter of the input.
///
/// # Example
/// ```
/// use fuzzycompare::phonetic::soundex::reverse_soundex;
///
/// assert_eq!(reverse_soundex("Robert"), "T616");
/// assert_eq!(reverse_soundex(""), "");
/// ```
#[must_use]
pub fn reverse_soundex(s: &str) -> String {
    let mut letters = letters_of(s);
    letters.reverse();
    encode_letters(&letters)
}
