//! Phonetic encoding algorithms
//!
//! These encode strings by how they sound, useful for name matching
//! and handling spelling variations of the same pronunciation.
//!
//! # Algorithms
//! - **NYSIIS** and **Refined NYSIIS**: letter codes, six significant letters
//! - **Caverphone 2**: ten characters, padded with `1`
//! - **Metaphone**: variable-length consonant skeleton
//! - **Soundex** / **Reverse Soundex**: letter + 3 digits
//! - **Daitch-Mokotoff**: one or more six-digit codes
//!
//! The encoders are rule cascades whose order matters; each module keeps its
//! rules in the order they must run.

pub mod caverphone;
pub mod daitch_mokotoff;
pub mod metaphone;
pub mod nysiis;
pub mod rules;
pub mod soundex;

pub use caverphone::{caverphone2, Caverphone2};
pub use daitch_mokotoff::{daitch_mokotoff, DaitchMokotoff};
pub use metaphone::{metaphone, metaphone_with, Metaphone};
pub use nysiis::{
    nysiis, nysiis_with, refined_nysiis, refined_nysiis_with, Nysiis, NysiisTruncation,
    RefinedNysiis,
};
pub use soundex::{reverse_soundex, soundex, ReverseSoundex, Soundex};

use crate::algorithms::Similarity;
use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trait for all phonetic encoders.
pub trait PhoneticEncoder: Send + Sync {
    /// The code of `s`.
    fn encode(&self, s: &str) -> String;

    /// Every code of `s`; a single element unless the encoder branches.
    fn encode_all(&self, s: &str) -> Vec<String> {
        vec![self.encode(s)]
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Registry of the phonetic encoders, selectable by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneticAlgorithm {
    Nysiis,
    RefinedNysiis,
    Caverphone2,
    Metaphone,
    Soundex,
    ReverseSoundex,
    DaitchMokotoff,
}

impl PhoneticAlgorithm {
    pub const ALL: [PhoneticAlgorithm; 7] = [
        Self::Nysiis,
        Self::RefinedNysiis,
        Self::Caverphone2,
        Self::Metaphone,
        Self::Soundex,
        Self::ReverseSoundex,
        Self::DaitchMokotoff,
    ];

    /// Encoder with default settings.
    #[must_use]
    pub fn encoder(self) -> Box<dyn PhoneticEncoder> {
        match self {
            Self::Nysiis => Box::new(Nysiis::new()),
            Self::RefinedNysiis => Box::new(RefinedNysiis::new()),
            Self::Caverphone2 => Box::new(Caverphone2::new()),
            Self::Metaphone => Box::new(Metaphone::new()),
            Self::Soundex => Box::new(Soundex::new()),
            Self::ReverseSoundex => Box::new(ReverseSoundex::new()),
            Self::DaitchMokotoff => Box::new(DaitchMokotoff::new()),
        }
    }

    /// Identifier accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Nysiis => "nysiis",
            Self::RefinedNysiis => "refined_nysiis",
            Self::Caverphone2 => "caverphone2",
            Self::Metaphone => "metaphone",
            Self::Soundex => "soundex",
            Self::ReverseSoundex => "reverse_soundex",
            Self::DaitchMokotoff => "daitch_mokotoff",
        }
    }

    /// Code produced for input without any encodable letters.
    #[must_use]
    pub fn empty_code(self) -> &'static str {
        match self {
            Self::Caverphone2 => "1111111111",
            Self::DaitchMokotoff => "000000",
            _ => "",
        }
    }

    /// The code of `s`; Daitch-Mokotoff codes are joined by spaces.
    #[must_use]
    pub fn encode(self, s: &str) -> String {
        match self {
            Self::Nysiis => nysiis(s),
            Self::RefinedNysiis => refined_nysiis(s),
            Self::Caverphone2 => caverphone2(s),
            Self::Metaphone => metaphone(s),
            Self::Soundex => soundex(s),
            Self::ReverseSoundex => reverse_soundex(s),
            Self::DaitchMokotoff => daitch_mokotoff(s).join(" "),
        }
    }

    /// Every code of `s`.
    #[must_use]
    pub fn encode_all(self, s: &str) -> Vec<String> {
        match self {
            Self::DaitchMokotoff => daitch_mokotoff(s),
            other => vec![other.encode(s)],
        }
    }
}

impl fmt::Display for PhoneticAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PhoneticAlgorithm {
    type Err = SimilarityError;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| SimilarityError::invalid(format!("unknown phonetic algorithm '{s}'")))
    }
}

/// Encode `s` with `algorithm`.
///
/// # Example
/// ```
/// use fuzzycompare::phonetic::{encode, PhoneticAlgorithm};
///
/// assert_eq!(encode(PhoneticAlgorithm::Soundex, "Robert"), "R163");
/// ```
#[must_use]
pub fn encode(algorithm: PhoneticAlgorithm, s: &str) -> String {
    algorithm.encode(s)
}

/// All codes of `s` under `algorithm`.
#[must_use]
pub fn encode_all(algorithm: PhoneticAlgorithm, s: &str) -> Vec<String> {
    algorithm.encode_all(s)
}

/// Whether `a` and `b` share a code.
///
/// For Daitch-Mokotoff any shared branch counts. Inputs that only produce
/// the empty code never match anything.
///
/// # Example
/// ```
/// use fuzzycompare::phonetic::{sounds_like, PhoneticAlgorithm};
///
/// assert!(sounds_like("Robert", "Rupert", PhoneticAlgorithm::Soundex));
/// assert!(!sounds_like("", "", PhoneticAlgorithm::Soundex));
/// ```
#[must_use]
pub fn sounds_like(a: &str, b: &str, algorithm: PhoneticAlgorithm) -> bool {
    let empty = algorithm.empty_code();
    let codes_a = algorithm.encode_all(a);
    let codes_b = algorithm.encode_all(b);
    codes_a
        .iter()
        .filter(|code| code.as_str() != empty)
        .any(|code| codes_b.contains(code))
}

/// Phonetic match as a similarity: 1.0 when the codes agree, else 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneticMatch {
    pub algorithm: PhoneticAlgorithm,
}

impl PhoneticMatch {
    #[must_use]
    pub fn new(algorithm: PhoneticAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl Similarity for PhoneticMatch {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if sounds_like(a, b, self.algorithm) {
            1.0
        } else {
            0.0
        }
    }

    fn name(&self) -> &'static str {
        self.algorithm.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("nysiis".parse::<PhoneticAlgorithm>().unwrap(), PhoneticAlgorithm::Nysiis);
        assert_eq!(
            "Daitch-Mokotoff".parse::<PhoneticAlgorithm>().unwrap(),
            PhoneticAlgorithm::DaitchMokotoff
        );
        assert!(matches!(
            "double_metaphone".parse::<PhoneticAlgorithm>(),
            Err(SimilarityError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_names_round_trip() {
        for algorithm in PhoneticAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<PhoneticAlgorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.encoder().name(), algorithm.name());
        }
    }

    #[test]
    fn test_empty_sentinels() {
        for algorithm in PhoneticAlgorithm::ALL {
            assert_eq!(algorithm.encode(""), algorithm.empty_code(), "{algorithm}");
        }
    }

    #[test]
    fn test_encoder_and_registry_agree() {
        for algorithm in PhoneticAlgorithm::ALL {
            let encoder = algorithm.encoder();
            for name in ["Schwarzenegger", "Peters", "Knight"] {
                assert_eq!(encoder.encode(name), algorithm.encode(name));
                assert_eq!(encoder.encode_all(name), algorithm.encode_all(name));
            }
        }
    }

    #[test]
    fn test_sounds_like() {
        assert!(sounds_like("Stevenson", "Stephenson", PhoneticAlgorithm::Caverphone2));
        assert!(sounds_like("Brian", "Brown", PhoneticAlgorithm::Nysiis));
        assert!(!sounds_like("Robert", "Smith", PhoneticAlgorithm::Metaphone));
        assert!(!sounds_like("", "123", PhoneticAlgorithm::Caverphone2));
    }

    #[test]
    fn test_sounds_like_any_daitch_mokotoff_branch() {
        // kommunication only has the 5-initial branches of communication
        let a = encode_all(PhoneticAlgorithm::DaitchMokotoff, "communication");
        let b = encode_all(PhoneticAlgorithm::DaitchMokotoff, "kommunication");
        assert!(a.len() > b.len());
        assert!(sounds_like("communication", "kommunication", PhoneticAlgorithm::DaitchMokotoff));
    }

    #[test]
    fn test_phonetic_match_similarity() {
        let matcher = PhoneticMatch::new(PhoneticAlgorithm::Soundex);
        assert_eq!(matcher.similarity("Robert", "Rupert"), 1.0);
        assert_eq!(matcher.similarity("Robert", "Smith"), 0.0);
        assert_eq!(matcher.distance("Robert", "Smith"), 1.0);
    }
}
