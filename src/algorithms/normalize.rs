//! String normalization utilities
//!
//! Preprocessing shared by the aggregator (case folding) and the phonetic
//! encoders (letter filtering, diacritic folding).

use std::borrow::Cow;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, borrowing when the input has nothing to fold.
#[must_use]
pub fn fold_case(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_uppercase) {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

/// Fold both strings, or pass them through untouched when case matters.
#[must_use]
pub fn fold_pair<'a>(a: &'a str, b: &'a str, case_sensitive: bool) -> (Cow<'a, str>, Cow<'a, str>) {
    if case_sensitive {
        (Cow::Borrowed(a), Cow::Borrowed(b))
    } else {
        (fold_case(a), fold_case(b))
    }
}

/// NFKD decomposition with combining marks removed ("Müller" -> "Muller").
#[must_use]
pub fn strip_diacritics(s: &str) -> String {
    s.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Uppercased ASCII letters only; everything else is dropped.
#[must_use]
pub fn ascii_letters_upper(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Lowercased ASCII letters only; everything else is dropped.
#[must_use]
pub fn ascii_letters_lower(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
