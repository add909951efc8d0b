//! Property-based tests for the metric registry, the aggregator and the
//! phonetic encoders.
//!
//! Invariants checked for arbitrary input:
//! - Identity: every metric reports zero difference for equal strings
//! - Symmetry: the symmetric metrics ignore argument order
//! - Range: every difference lies in [0, 1]
//! - Triangle inequality for Levenshtein
//! - Encoders are deterministic and keep their code shapes

use fuzzycompare::algorithms::{hamming_distance, levenshtein};
use fuzzycompare::batch::compare_many;
use fuzzycompare::phonetic::daitch_mokotoff::daitch_mokotoff;
use fuzzycompare::phonetic::metaphone::metaphone_with;
use fuzzycompare::phonetic::nysiis::{nysiis_with, NysiisTruncation};
use fuzzycompare::{
    diff_percent, distance, encode, encode_all, is_similar, ComparisonConfiguration,
    ComparisonOptions, Metric, MetricOptions, PhoneticAlgorithm, PhoneticEncoder,
    SimilarityError, ToleranceBand,
};
use proptest::prelude::*;

const SYMMETRIC: [Metric; 6] = [
    Metric::Levenshtein,
    Metric::Hamming,
    Metric::Jaccard,
    Metric::SorensenDice,
    Metric::Tanimoto,
    Metric::Overlap,
];

/// Two strings of the same length over a small alphabet.
fn equal_length_pair() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec((prop::char::range('a', 'd'), prop::char::range('a', 'd')), 0..16)
        .prop_map(|pairs| {
            let (a, b): (String, String) = pairs.into_iter().unzip();
            (a, b)
        })
}

// ============================================================================
// Literal scenarios
// ============================================================================

#[test]
fn levenshtein_kitten_sitting() {
    assert_eq!(distance(Metric::Levenshtein, "kitten", "sitting").unwrap(), 3.0);
}

#[test]
fn hamming_karolin_kathrin() {
    assert_eq!(distance(Metric::Hamming, "karolin", "kathrin").unwrap(), 3.0);
}

#[test]
fn jaro_winkler_martha_marhta() {
    let score = distance(Metric::JaroWinkler, "MARTHA", "MARHTA").unwrap();
    assert!((score - 0.961).abs() < 1e-3, "{score}");
}

#[test]
fn aggregator_scenarios() {
    let levenshtein = ComparisonOptions::USE_LEVENSHTEIN_DISTANCE.into();
    assert!(is_similar("hello", "hello", &levenshtein, ToleranceBand::Normal).unwrap());
    let jaccard = ComparisonOptions::USE_JACCARD_DISTANCE.into();
    assert_eq!(diff_percent("", "anything", &jaccard).unwrap(), 1.0);
}

#[test]
fn daitch_mokotoff_scenarios() {
    assert_eq!(daitch_mokotoff("worships"), vec!["794740"]);
    let mut codes = encode_all(PhoneticAlgorithm::DaitchMokotoff, "communication");
    codes.sort();
    assert_eq!(codes, vec!["466436", "466536", "566436", "566536"]);
}

#[test]
fn unsupported_identifiers() {
    assert!(matches!(
        "edit_distance".parse::<Metric>(),
        Err(SimilarityError::InvalidArgument(_))
    ));
    assert!(matches!(
        "double_metaphone".parse::<PhoneticAlgorithm>(),
        Err(SimilarityError::InvalidArgument(_))
    ));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_identity(s in "[a-z]{1,12}") {
        let options = MetricOptions::default();
        for metric in Metric::ALL {
            let d = metric.difference(&s, &s, &options).unwrap();
            prop_assert!(d.abs() < 1e-12, "{} on {:?}: {}", metric, s, d);
        }
    }

    #[test]
    fn prop_symmetry((a, b) in equal_length_pair()) {
        for metric in SYMMETRIC {
            let ab = distance(metric, &a, &b).unwrap();
            let ba = distance(metric, &b, &a).unwrap();
            prop_assert_eq!(ab, ba, "{} on {:?} {:?}", metric, a, b);
        }
    }

    #[test]
    fn prop_levenshtein_triangle(a in "[a-c]{0,8}", b in "[a-c]{0,8}", c in "[a-c]{0,8}") {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    #[test]
    fn prop_levenshtein_bounds(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        let d = levenshtein(&a, &b);
        let (la, lb) = (a.chars().count(), b.chars().count());
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    #[test]
    fn prop_differences_in_range(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        let options = MetricOptions::default();
        for metric in Metric::ALL {
            match metric.difference(&a, &b, &options) {
                Ok(d) => prop_assert!((0.0..=1.0).contains(&d), "{} gave {}", metric, d),
                Err(SimilarityError::LengthMismatch { .. }) => prop_assert_eq!(metric, Metric::Hamming),
                Err(e) => prop_assert!(false, "{} failed: {}", metric, e),
            }
        }
        let all = ComparisonConfiguration::new(ComparisonOptions::ALL_METRICS);
        let d = diff_percent(&a, &b, &all).unwrap();
        prop_assert!((0.0..=1.0).contains(&d));
    }

    #[test]
    fn prop_hamming_precondition(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        let result = hamming_distance(&a, &b);
        if a.len() == b.len() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(SimilarityError::LengthMismatch { left: a.len(), right: b.len() }));
        }
    }

    #[test]
    fn prop_encoders_deterministic(s in "\\PC{0,16}") {
        for algorithm in PhoneticAlgorithm::ALL {
            prop_assert_eq!(encode(algorithm, &s), encode(algorithm, &s));
            prop_assert_eq!(algorithm.encoder().encode(&s), encode(algorithm, &s));
        }
    }

    #[test]
    fn prop_code_shapes(s in "[A-Za-z ]{0,20}") {
        prop_assert_eq!(encode(PhoneticAlgorithm::Caverphone2, &s).len(), 10);

        let soundex = encode(PhoneticAlgorithm::Soundex, &s);
        prop_assert!(soundex.is_empty() || soundex.len() == 4, "{:?}", soundex);
        let reverse = encode(PhoneticAlgorithm::ReverseSoundex, &s);
        prop_assert!(reverse.is_empty() || reverse.len() == 4, "{:?}", reverse);

        for code in daitch_mokotoff(&s) {
            prop_assert_eq!(code.len(), 6);
            prop_assert!(code.chars().all(|c| c.is_ascii_digit()));
        }

        prop_assert!(nysiis_with(&s, NysiisTruncation::Truncate).len() <= 6);
    }

    #[test]
    fn prop_metaphone_respects_limit(s in "[A-Za-z]{0,20}", limit in 1usize..8) {
        prop_assert!(metaphone_with(&s, Some(limit)).len() <= limit);
    }

    #[test]
    fn prop_case_insensitive_by_default(s in "[A-Za-z]{1,12}") {
        let config = ComparisonConfiguration::new(ComparisonOptions::ALL_METRICS);
        prop_assert_eq!(diff_percent(&s, &s.to_uppercase(), &config).unwrap(), 0.0);
    }

    #[test]
    fn prop_batch_matches_single(query in "[a-z]{1,8}", candidates in prop::collection::vec("[a-z]{1,8}", 0..20)) {
        let config = ComparisonConfiguration::new(
            ComparisonOptions::USE_LEVENSHTEIN_DISTANCE | ComparisonOptions::USE_RATCLIFF_OBERSHELP_SIMILARITY,
        );
        let scored = compare_many(&query, &candidates, &config, ToleranceBand::Normal).unwrap();
        prop_assert_eq!(scored.len(), candidates.len());
        for (candidate, text) in scored.iter().zip(&candidates) {
            prop_assert_eq!(&candidate.text, text);
            prop_assert_eq!(candidate.diff_percent, diff_percent(&query, text, &config).unwrap());
        }
    }
}
