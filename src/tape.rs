//! The interleaved working representation of a directive bi-sequence.
//!
//! The tape stores `delta[0] theta[0] delta[1] theta[1] ...`. Every rewrite
//! rule looks at whole `(delta, theta)` pairs, so matches always start at an
//! even offset and a correction always replaces exactly one pair.

use crate::alphabet::{Letter, Theta, REVERSAL, THETA_SYMBOLS};
use crate::error::DirectiveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interleaved `(delta, theta)` symbols over `{0, 1, 2, R}`.
///
/// # Invariants
/// - Even length.
/// - Even positions hold letters, odd positions hold theta symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tape(Vec<u8>);

impl Tape {
    /// Interleaves two validated sequences of equal length.
    pub(crate) fn interleave(delta: &[u8], theta: &[u8]) -> Self {
        debug_assert_eq!(delta.len(), theta.len());
        let mut tape = Vec::with_capacity(delta.len() * 2);
        for (&d, &t) in delta.iter().zip(theta) {
            tape.push(d);
            tape.push(t);
        }
        Self(tape)
    }

    /// Parses an interleaved tape, checking every pair.
    pub fn parse(text: &str) -> Result<Self, DirectiveError> {
        let bytes = text.as_bytes();
        let well_formed = bytes.len() % 2 == 0
            && bytes
                .chunks_exact(2)
                .all(|pair| Letter::from_byte(pair[0]).is_some() && Theta::from_byte(pair[1]).is_some());
        if well_formed {
            Ok(Self(bytes.to_vec()))
        } else {
            Err(DirectiveError::InvalidAlphabet {
                sequence: text.to_string(),
                allowed: THETA_SYMBOLS,
            })
        }
    }

    /// Splits the tape back into `(delta, theta)`.
    pub(crate) fn split(&self) -> (Vec<u8>, Vec<u8>) {
        let delta = self.0.iter().step_by(2).copied().collect();
        let theta = self.0.iter().skip(1).step_by(2).copied().collect();
        (delta, theta)
    }

    /// Rewrites the leading run of `(0, R)` / `(0, 0)` pairs to `(0, 0)`.
    ///
    /// On a prefix `0^l` palindromic closure and E0-closure coincide; the rule
    /// tables assume the E0 form. Returns the length of the run in pairs.
    pub fn fix_leading_run(&mut self) -> usize {
        let mut pairs = 0;
        for pair in self.0.chunks_exact_mut(2) {
            if pair[0] != b'0' || !(pair[1] == b'0' || pair[1] == REVERSAL) {
                break;
            }
            pair[1] = b'0';
            pairs += 1;
        }
        pairs
    }

    /// Replaces the pair starting at `position` with `replacement`.
    ///
    /// `replacement` may be longer than one pair, in which case the tape
    /// grows by the extra pairs.
    pub fn splice(&mut self, position: usize, replacement: &[u8]) {
        debug_assert!(position % 2 == 0 && position + 2 <= self.0.len());
        debug_assert!(replacement.len() % 2 == 0);
        self.0.splice(position..position + 2, replacement.iter().copied());
    }

    /// The raw interleaved bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of symbols (twice the number of pairs).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty tape.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of `(delta, theta)` pairs.
    pub fn pairs(&self) -> usize {
        self.0.len() / 2
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleave_and_split() {
        let tape = Tape::interleave(b"012", b"R01");
        assert_eq!(tape.as_bytes(), b"0R1021");
        assert_eq!(tape.pairs(), 3);
        let (delta, theta) = tape.split();
        assert_eq!(delta, b"012");
        assert_eq!(theta, b"R01");
    }

    #[test]
    fn parse_checks_pairs() {
        assert!(Tape::parse("0R1021").is_ok());
        assert!(Tape::parse("").is_ok());
        assert!(Tape::parse("0R1").is_err());
        assert!(Tape::parse("R0").is_err());
        assert!(Tape::parse("0X").is_err());
    }

    #[test]
    fn leading_run_becomes_e0() {
        let mut tape = Tape::interleave(b"00012", b"R0RR0");
        assert_eq!(tape.fix_leading_run(), 3);
        assert_eq!(tape.to_string(), "0000001R20");

        let mut tape = Tape::interleave(b"01", b"2R");
        assert_eq!(tape.fix_leading_run(), 0);
        assert_eq!(tape.to_string(), "021R");
    }

    #[test]
    fn splice_grows_tape() {
        let mut tape = Tape::parse("000102").unwrap();
        tape.splice(4, b"0012");
        assert_eq!(tape.to_string(), "00010012");
        tape.splice(0, b"0R");
        assert_eq!(tape.to_string(), "0R010012");
    }
}
