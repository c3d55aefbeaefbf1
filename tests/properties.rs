//! Algebraic properties of the normalizers.

use proptest::prelude::*;
use tgpc::{
    canonicalize, decanonicalize, ei, make_word012, naive_normalize, normalize,
    DirectiveBiSequence, Letter,
};

const LETTERS: [char; 3] = ['0', '1', '2'];
const THETA_SYMBOLS: [char; 4] = ['0', '1', '2', 'R'];

fn arb_directive() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec((0usize..3, 0usize..4), 1..=9).prop_map(|steps| {
        steps
            .into_iter()
            .map(|(d, t)| (LETTERS[d], THETA_SYMBOLS[t]))
            .unzip()
    })
}

/// Every `(delta, theta)` with `|delta| = len`.
fn all_directives(len: usize) -> Vec<(String, String)> {
    let mut out = vec![(String::new(), String::new())];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|(delta, theta)| {
                LETTERS.into_iter().flat_map(move |d| {
                    let (delta, theta) = (delta.clone(), theta.clone());
                    THETA_SYMBOLS.into_iter().map(move |t| {
                        let mut delta = delta.clone();
                        let mut theta = theta.clone();
                        delta.push(d);
                        theta.push(t);
                        (delta, theta)
                    })
                })
            })
            .collect();
    }
    out
}

#[test]
fn involutions_are_involutive() {
    for i in Letter::ALL {
        let e = ei(i).unwrap();
        assert_eq!(e.image(i), i);
        for x in Letter::ALL {
            assert_eq!(e.image(e.image(x)), x);
        }
    }
}

#[test]
fn oracle_agreement_is_exhaustive_up_to_length_four() {
    let mut checked = 0;
    for len in 1..=4 {
        for (delta, theta) in all_directives(len) {
            let fast = normalize(&delta, &theta).unwrap();
            let naive = naive_normalize(&delta, &theta).unwrap();
            assert_eq!(fast, naive, "input ({}, {})", delta, theta);
            checked += 1;
        }
    }
    assert_eq!(checked, 12 + 144 + 1728 + 20736);
}

proptest! {
    #[test]
    fn normalization_is_idempotent((delta, theta) in arb_directive()) {
        let once = normalize(&delta, &theta).unwrap();
        let twice = normalize(&once.delta, &once.theta).unwrap();
        prop_assert_eq!(twice.as_tuple(), (once.delta.as_str(), once.theta.as_str(), true));
    }

    #[test]
    fn normalization_preserves_the_word((delta, theta) in arb_directive()) {
        let normalized = normalize(&delta, &theta).unwrap();
        prop_assert_eq!(
            make_word012(&delta, &theta, "").unwrap(),
            make_word012(&normalized.delta, &normalized.theta, "").unwrap()
        );
    }

    #[test]
    fn normalizers_agree((delta, theta) in arb_directive()) {
        let fast = normalize(&delta, &theta).unwrap();
        let naive = naive_normalize(&delta, &theta).unwrap();
        prop_assert_eq!(fast, naive);
    }

    #[test]
    fn unchanged_means_equal_to_input((delta, theta) in arb_directive()) {
        let normalized = normalize(&delta, &theta).unwrap();
        prop_assert_eq!(normalized.unchanged, normalized.delta == delta && normalized.theta == theta);
    }

    #[test]
    fn canonicalization_round_trips((delta, theta) in arb_directive()) {
        let directive = DirectiveBiSequence::new(&delta, &theta).unwrap();
        let (canonical, substitution) = canonicalize(&directive);
        prop_assert!(canonical.delta().starts_with('0'));
        prop_assert_eq!(decanonicalize(&canonical, &substitution), directive);
    }
}
