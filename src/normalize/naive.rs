//! Reference normalizer working on the generated word.
//!
//! The word of the input is built step by step, then every prefix of the
//! word is tested for (pseudo)palindromicity. The normalized bi-sequence
//! closes exactly at those prefixes: its `theta` lists their kinds and its
//! `delta` lists the letters following them. This is quadratic in the word
//! length and only meant to validate [`Normalizer`](crate::Normalizer).

use crate::alphabet::{check_ternary, Theta};
use crate::closure::WordBuilder;
use crate::directive::{DirectiveBiSequence, Normalized};
use crate::error::DirectiveError;
use crate::palindrome::classify_bytes;
use crate::traceability::DiagnosticSink;

/// Normalizer computing the closed prefixes of the generated word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveNormalizer;

impl NaiveNormalizer {
    /// Creates the reference normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalizes `(delta, theta)`.
    pub fn normalize(&self, delta: &str, theta: &str) -> Result<Normalized, DirectiveError> {
        self.normalize_with(delta, theta, ())
    }

    /// Normalizes `(delta, theta)`, reporting constructed and classified
    /// prefixes to `sink`.
    pub fn normalize_with<S: DiagnosticSink>(
        &self,
        delta: &str,
        theta: &str,
        mut sink: S,
    ) -> Result<Normalized, DirectiveError> {
        let input = DirectiveBiSequence::new(delta, theta)?;

        let mut builder = WordBuilder::new();
        for (d, t) in input.delta().chars().zip(input.theta().chars()) {
            builder.push_step(d, t)?;
            sink.word_step(builder.steps(), &builder.word());
        }
        let word = builder.as_bytes();

        let mut new_delta: Vec<u8> = input.delta().bytes().take(1).collect();
        let mut new_theta = Vec::with_capacity(input.len());
        for (len, kind) in closed_prefixes(word) {
            sink.pseudopalindromic_prefix(len, kind);
            if let Some(&next) = word.get(len) {
                new_delta.push(next);
            }
            new_theta.push(kind.to_byte());
        }

        let result = Normalized::compare(
            &input,
            DirectiveBiSequence::from_validated(new_delta, new_theta),
        );
        sink.fixpoint_reached(&result, 0);
        Ok(result)
    }
}

fn closed_prefixes(word: &[u8]) -> impl Iterator<Item = (usize, Theta)> + '_ {
    (1..=word.len()).filter_map(|len| classify_bytes(&word[..len]).map(|kind| (len, kind)))
}

/// Every pseudopalindromic prefix length of `word` with its kind.
///
/// Kinds are tested in the priority order E0, E1, E2, R.
///
/// # Examples
/// ```
/// use tgpc::{pseudopalindromic_prefixes, Letter, Theta};
///
/// let prefixes = pseudopalindromic_prefixes("0101").unwrap();
/// assert_eq!(prefixes[0], (1, Theta::Involution(Letter::Zero)));
/// assert_eq!(prefixes[2], (3, Theta::Reversal));
/// ```
pub fn pseudopalindromic_prefixes(word: &str) -> Result<Vec<(usize, Theta)>, DirectiveError> {
    check_ternary(word)?;
    Ok(closed_prefixes(word.as_bytes()).collect())
}

/// Normalizes `(delta, theta)` with the [`NaiveNormalizer`].
pub fn naive_normalize(delta: &str, theta: &str) -> Result<Normalized, DirectiveError> {
    NaiveNormalizer.normalize(delta, theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Letter;

    #[test]
    fn test_literal_scenarios() {
        let cases = [
            (("0011", "00RR"), ("0011", "00RR", true)),
            (("0102110", "02R0121"), ("01021102", "02R01201", false)),
            (("010", "022"), ("0101", "02R2", false)),
            (("22222", "11112"), ("2020202021", "21R1R1R1R2", false)),
        ];
        for ((delta, theta), expected) in cases {
            let result = naive_normalize(delta, theta).unwrap();
            assert_eq!(result.as_tuple(), expected, "input ({}, {})", delta, theta);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(naive_normalize("", "").unwrap().as_tuple(), ("", "", true));
    }

    #[test]
    fn test_prefix_classification() {
        assert_eq!(
            pseudopalindromic_prefixes("0101").unwrap(),
            vec![
                (1, Theta::Involution(Letter::Zero)),
                (2, Theta::Involution(Letter::Two)),
                (3, Theta::Reversal),
                (4, Theta::Involution(Letter::Two)),
            ]
        );
        assert!(pseudopalindromic_prefixes("01R").is_err());
        assert!(pseudopalindromic_prefixes("").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(matches!(
            naive_normalize("0", "X"),
            Err(DirectiveError::InvalidAlphabet { .. })
        ));
        assert!(matches!(
            naive_normalize("00", "0"),
            Err(DirectiveError::LengthMismatch { .. })
        ));
    }
}
