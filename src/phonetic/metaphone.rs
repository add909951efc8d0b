//! Metaphone
//!
//! A left-to-right scanner over uppercase letters with one letter of
//! lookbehind and two of lookahead. Vowels are kept only in first position;
//! `0` stands for the "th" sound.

use super::PhoneticEncoder;
use crate::algorithms::normalize::{ascii_letters_upper, strip_diacritics};

/// Metaphone phonetic encoder
///
/// # Parameters
/// - `max_length`: Maximum code length (`None` = unlimited, the default)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metaphone {
    pub max_length: Option<usize>,
}

impl Metaphone {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
        }
    }
}

impl PhoneticEncoder for Metaphone {
    fn encode(&self, s: &str) -> String {
        metaphone_with(s, self.max_length)
    }

    fn name(&self) -> &'static str {
        "metaphone"
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

fn is_front_vowel(c: Option<char>) -> bool {
    matches!(c, Some('E' | 'I' | 'Y'))
}

/// Metaphone without a length limit.
///
/// # Example
/// ```
/// use fuzzycompare::phonetic::metaphone::metaphone;
///
/// assert_eq!(metaphone("Knight"), "NT");
/// assert_eq!(metaphone("Thumb"), "0M");
/// assert_eq!(metaphone(""), "");
/// ```
#[must_use]
pub fn metaphone(s: &str) -> String {
    metaphone_with(s, None)
}

/// Metaphone, stopping once the code reaches `max_length`.
#[must_use]
pub fn metaphone_with(s: &str, max_length: Option<usize>) -> String {
    let chars: Vec<char> = ascii_letters_upper(&strip_diacritics(s)).chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let limit = max_length.unwrap_or(usize::MAX);
    let len = chars.len();
    let mut result = String::with_capacity(len.min(limit));
    let mut i = 0;

    // Initial letter combinations
    if len >= 2 {
        match (chars[0], chars[1]) {
            ('K', 'N') | ('G', 'N') | ('P', 'N') | ('A', 'E') | ('W', 'R') => {
                i = 1;
            }
            ('W', 'H') => {
                result.push('W');
                i = 2;
            }
            _ => {}
        }
    }

    if i == 0 && chars[0] == 'X' {
        result.push('S');
        i = 1;
    }

    let start = i;
    while i < len && result.len() < limit {
        let c = chars[i];
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let next2 = chars.get(i + 2).copied();

        // Doubled letters count once, except C
        if prev == Some(c) && c != 'C' {
            i += 1;
            continue;
        }

        match c {
            'A' | 'E' | 'I' | 'O' | 'U' => {
                if i == start && result.is_empty() {
                    result.push(c);
                }
            }
            'B' => {
                // silent in a final MB ("dumb", "lamb")
                if prev != Some('M') || i != len - 1 {
                    result.push('B');
                }
            }
            'C' => {
                if next == Some('I') && next2 == Some('A') {
                    result.push('X');
                    i += 2;
                } else if next == Some('H') {
                    result.push(if prev == Some('S') { 'K' } else { 'X' });
                    i += 1;
                } else if is_front_vowel(next) {
                    if prev != Some('S') {
                        result.push('S');
                    }
                } else {
                    result.push('K');
                }
            }
            'D' => {
                if next == Some('G') && is_front_vowel(next2) {
                    result.push('J');
                    i += 2;
                } else {
                    result.push('T');
                }
            }
            'G' => {
                if next == Some('H') {
                    if i + 2 < len && !is_vowel(chars[i + 2]) {
                        i += 1;
                    } else if i == 0 {
                        result.push('K');
                        i += 1;
                    }
                } else if next == Some('N') {
                    // silent in a final GN or GNED ("sign", "signed")
                    let rest = &chars[i + 1..];
                    if rest != ['N'] && rest != ['N', 'E', 'D'] {
                        result.push('K');
                    }
                } else if is_front_vowel(next) {
                    result.push('J');
                } else {
                    result.push('K');
                }
            }
            'H' => {
                if !prev.is_some_and(is_vowel) && next.is_some_and(is_vowel) {
                    result.push('H');
                }
            }
            'K' => {
                if prev != Some('C') {
                    result.push('K');
                }
            }
            'P' => {
                if next == Some('H') {
                    result.push('F');
                    i += 1;
                } else {
                    result.push('P');
                }
            }
            'Q' => result.push('K'),
            'S' => {
                if next == Some('H') {
                    result.push('X');
                    i += 1;
                } else if next == Some('I') && matches!(next2, Some('O' | 'A')) {
                    result.push('X');
                    i += 2;
                } else {
                    result.push('S');
                }
            }
            'T' => {
                if next == Some('I') && matches!(next2, Some('O' | 'A')) {
                    result.push('X');
                    i += 2;
                } else if next == Some('H') {
                    result.push('0');
                    i += 1;
                } else if next != Some('C') || next2 != Some('H') {
                    result.push('T');
                }
            }
            'V' => result.push('F'),
            'W' | 'Y' => {
                if next.is_some_and(is_vowel) {
                    result.push(c);
                }
            }
            'X' => {
                result.push('K');
                if result.len() < limit {
                    result.push('S');
                }
            }
            'Z' => result.push('S'),
            'F' | 'J' | 'L' | 'M' | 'N' | 'R' => result.push(c),
            _ => {}
        }

        i += 1;
    }

    result
}
