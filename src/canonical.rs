//! Canonical relabeling of the alphabet.
//!
//! Exchanging letters consistently in `delta` and `theta` produces the same
//! word up to the same exchange, so the rewrite rules only need to be stated
//! for bi-sequences whose `delta` starts with `0` and whose first letter
//! other than `0` is `1`. [`canonicalize`] brings any bi-sequence into that
//! shape and returns the [`Substitution`] needed to undo it.

use crate::alphabet::Letter;
use crate::directive::DirectiveBiSequence;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bijection on the alphabet, together with its inverse.
///
/// The reversal marker `R` is never relabeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Substitution {
    /// `forward[x]` is the image of letter `x`.
    forward: [Letter; 3],
    /// `inverse[forward[x]] == x`.
    inverse: [Letter; 3],
}

impl Substitution {
    /// The identity substitution.
    pub const IDENTITY: Substitution = Substitution {
        forward: Letter::ALL,
        inverse: Letter::ALL,
    };

    /// The transposition exchanging `a` and `b`.
    pub fn transposition(a: Letter, b: Letter) -> Self {
        let mut forward = Letter::ALL;
        forward.swap(a.index(), b.index());
        // Transpositions are their own inverse.
        Self {
            forward,
            inverse: forward,
        }
    }

    /// Returns the substitution applying `self` first and `next` second.
    pub fn then(&self, next: &Substitution) -> Self {
        let forward = self.forward.map(|x| next.apply(x));
        let mut inverse = Letter::ALL;
        for x in Letter::ALL {
            inverse[forward[x.index()].index()] = x;
        }
        Self { forward, inverse }
    }

    /// The inverse substitution.
    pub fn inverse(&self) -> Self {
        Self {
            forward: self.inverse,
            inverse: self.forward,
        }
    }

    /// Image of a letter.
    #[inline]
    pub fn apply(&self, x: Letter) -> Letter {
        self.forward[x.index()]
    }

    /// Image of a tape byte; `R` is left unchanged.
    #[inline]
    pub fn apply_byte(&self, byte: u8) -> u8 {
        match Letter::from_byte(byte) {
            Some(x) => self.apply(x).to_byte(),
            None => byte,
        }
    }

    /// Applies the substitution to every symbol of `seq`.
    pub fn apply_bytes(&self, seq: &[u8]) -> Vec<u8> {
        seq.iter().map(|&b| self.apply_byte(b)).collect()
    }

    /// The forward table, indexed by letter.
    pub fn table(&self) -> [Letter; 3] {
        self.forward
    }

    /// Returns `true` for the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Substitution {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moved: Vec<String> = Letter::ALL
            .iter()
            .filter(|&&x| self.apply(x) != x)
            .map(|&x| format!("{}->{}", x, self.apply(x)))
            .collect();
        if moved.is_empty() {
            write!(f, "id")
        } else {
            write!(f, "{{{}}}", moved.join(", "))
        }
    }
}

fn relabel(
    delta: &mut Vec<u8>,
    theta: &mut Vec<u8>,
    substitution: &mut Substitution,
    step: &Substitution,
) {
    *delta = step.apply_bytes(delta);
    *theta = step.apply_bytes(theta);
    *substitution = substitution.then(step);
}

/// Relabels raw `(delta, theta)` bytes into canonical letter order.
pub(crate) fn canonicalize_bytes(delta: &[u8], theta: &[u8]) -> (Vec<u8>, Vec<u8>, Substitution) {
    let mut delta = delta.to_vec();
    let mut theta = theta.to_vec();
    let mut substitution = Substitution::IDENTITY;

    // First letter becomes 0.
    if let Some(first) = delta.first().copied().and_then(Letter::from_byte) {
        if first != Letter::Zero {
            let step = Substitution::transposition(first, Letter::Zero);
            relabel(&mut delta, &mut theta, &mut substitution, &step);
        }
    }

    // The first letter other than 0 becomes 1. While delta stays at 0, an
    // Ei-closure in theta already decides which of 1 and 2 appears next.
    let swap = Substitution::transposition(Letter::One, Letter::Two);
    let mut k = 0;
    while k < delta.len() && delta[k] == b'0' {
        match theta[k] {
            b'2' => return (delta, theta, substitution),
            b'1' => {
                relabel(&mut delta, &mut theta, &mut substitution, &swap);
                return (delta, theta, substitution);
            }
            _ => k += 1,
        }
    }
    if k < delta.len() && delta[k] == b'2' {
        relabel(&mut delta, &mut theta, &mut substitution, &swap);
    }
    (delta, theta, substitution)
}

/// Relabels a bi-sequence so that it starts with `0` and its next distinct
/// letter is `1`.
///
/// Returns the relabeled bi-sequence and the substitution that was applied.
///
/// # Examples
/// ```
/// use tgpc::{canonicalize, DirectiveBiSequence};
///
/// let input = DirectiveBiSequence::new("2210", "R0R1").unwrap();
/// let (canonical, substitution) = canonicalize(&input);
/// assert_eq!(canonical.delta(), "0012");
/// assert_eq!(canonical.theta(), "R2R1");
/// assert!(!substitution.is_identity());
/// ```
pub fn canonicalize(directive: &DirectiveBiSequence) -> (DirectiveBiSequence, Substitution) {
    let (delta, theta, substitution) =
        canonicalize_bytes(directive.delta().as_bytes(), directive.theta().as_bytes());
    (DirectiveBiSequence::from_validated(delta, theta), substitution)
}

/// Undoes `substitution` on both sequences.
pub fn decanonicalize(
    directive: &DirectiveBiSequence,
    substitution: &Substitution,
) -> DirectiveBiSequence {
    let back = substitution.inverse();
    DirectiveBiSequence::from_validated(
        back.apply_bytes(directive.delta().as_bytes()),
        back.apply_bytes(directive.theta().as_bytes()),
    )
}
