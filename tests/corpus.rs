//! Reference corpus shared by both normalizers.

use tgpc::{naive_normalize, normalize, DirectiveError, NaiveNormalizer, Normalizer};

/// `(delta, theta)` and the expected `(delta', theta', unchanged)`.
const CORPUS: &[(&str, &str, (&str, &str, bool))] = &[
    ("0011", "00RR", ("0011", "00RR", true)),
    ("0012", "0020", ("00120", "00210", false)),
    ("0210", "0122", ("021021", "012012", false)),
    ("0112", "0211", ("011201", "021021", false)),
    ("0102110", "02R0121", ("01021102", "02R01201", false)),
    ("00210", "00122", ("0021021", "0012012", false)),
    ("010", "022", ("0101", "02R2", false)),
    ("011", "R11", ("01211", "021R1", false)),
    ("01202", "02100", ("012021", "0210R0", false)),
    ("0121", "0212", ("01212", "021R2", false)),
    ("012111", "021R12", ("0121112", "021R1R2", false)),
    ("01", "0R", ("010", "02R", false)),
    ("011", "020", ("0112", "0210", false)),
    ("011", "022", ("0110", "02R2", false)),
    ("01", "01", ("012", "021", false)),
    ("0101", "02R1", ("01012", "02R21", false)),
    ("010101", "02R2R1", ("0101012", "02R2R21", false)),
    ("0101", "02RR", ("01010", "02R2R", false)),
    ("010221", "02R011", ("01022102", "02R01201", false)),
    ("00112", "00211", ("0011201", "0021021", false)),
    ("010212", "02R100", ("01021201", "02R10210", false)),
    ("0121202", "021R200", ("012120210", "021R20120", false)),
    ("012111202", "021R1R200", ("01211120210", "021R1R20120", false)),
    ("21022101", "RR021210", ("21202210210", "20R02120120", false)),
    ("01022101", "RR021210", ("01002210210", "02R02120120", false)),
    ("22222", "11112", ("2020202021", "21R1R1R1R2", false)),
];

#[test]
fn rule_based_normalizer_matches_corpus() {
    let normalizer = Normalizer::new();
    for &(delta, theta, expected) in CORPUS {
        let result = normalizer.normalize(delta, theta).unwrap();
        assert_eq!(result.as_tuple(), expected, "problem: ({}, {})", delta, theta);
    }
}

#[test]
fn naive_normalizer_matches_corpus() {
    let normalizer = NaiveNormalizer::new();
    for &(delta, theta, expected) in CORPUS {
        let result = normalizer.normalize(delta, theta).unwrap();
        assert_eq!(result.as_tuple(), expected, "problem: ({}, {})", delta, theta);
    }
}

#[test]
fn corpus_outputs_are_fixpoints() {
    for &(_, _, (delta, theta, _)) in CORPUS {
        let again = normalize(delta, theta).unwrap();
        assert_eq!(again.as_tuple(), (delta, theta, true));
    }
}

#[test]
fn invalid_input_is_rejected_by_both() {
    for entry in [normalize, naive_normalize] {
        assert!(matches!(entry("3", "0"), Err(DirectiveError::InvalidAlphabet { .. })));
        assert!(matches!(entry("0", "0X"), Err(DirectiveError::InvalidAlphabet { .. })));
        assert!(matches!(
            entry("01", "0"),
            Err(DirectiveError::LengthMismatch { delta: 2, theta: 1 })
        ));
    }
}

#[test]
fn error_messages_name_the_alphabet() {
    let err = normalize("3", "0").unwrap_err();
    assert_eq!(err.to_string(), "\"3\" is not in A = {0,1,2}");
    let err = normalize("0", "X").unwrap_err();
    assert_eq!(err.to_string(), "\"X\" is not in A = {0,1,2,R}");
}
