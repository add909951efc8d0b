//! fuzzycompare - string similarity metrics and phonetic encoders
//!
//! Pure functions that measure how alike two strings are, plus an aggregator
//! that combines several of them into one similar / not-similar decision.
//!
//! # Features
//! - Edit distances: Levenshtein, Damerau-Levenshtein, Hamming, weighted
//! - Set coefficients: Jaccard, Sørensen-Dice, Overlap, Tanimoto, Cosine
//! - Sequence metrics: LCS, longest common substring, Jaro, Jaro-Winkler,
//!   Ratcliff/Obershelp
//! - Phonetic encoders: NYSIIS, Refined NYSIIS, Caverphone 2, Metaphone,
//!   Soundex, Reverse Soundex, Daitch-Mokotoff
//! - A configurable aggregator with tolerance bands, and parallel batch helpers
//!
//! Everything operates on Unicode scalar values (`char`), not bytes.
//!
//! # Example
//! ```
//! use fuzzycompare::{compare, distance, ComparisonConfiguration, ComparisonOptions, Metric, ToleranceBand};
//!
//! assert_eq!(distance(Metric::Levenshtein, "kitten", "sitting").unwrap(), 3.0);
//!
//! let config = ComparisonConfiguration::new(
//!     ComparisonOptions::USE_JARO_WINKLER_DISTANCE | ComparisonOptions::USE_LEVENSHTEIN_DISTANCE,
//! );
//! let result = compare("Martha", "Marhta", &config, ToleranceBand::Strong).unwrap();
//! assert!(result.is_similar);
//! ```
//!
//! # Logging
//! Emits [`tracing`] events (`trace` per metric, `debug` for decisions and
//! fallbacks). No subscriber is installed by the library.

pub mod algorithms;
pub mod batch;
pub mod compare;
pub mod error;
pub mod metric;
pub mod phonetic;

pub use algorithms::{
    EditCosts, EditDistance, FallibleEditDistance, HammingNormalization, JaroWinklerConfig,
    Similarity,
};
pub use compare::{
    compare, diff_percent, is_similar, Comparison, ComparisonConfiguration, ComparisonOptions,
    ToleranceBand,
};
pub use error::{Result, SimilarityError};
pub use metric::{distance, distance_by_name, Convention, Metric, MetricOptions};
pub use phonetic::{encode, encode_all, sounds_like, PhoneticAlgorithm, PhoneticEncoder};
