//! Directive bi-sequences and normalization results.

use crate::alphabet::{check_ternary, check_theta, Letter, Theta};
use crate::error::DirectiveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated directive bi-sequence `(delta, theta)`.
///
/// # Invariants
/// - `delta` only uses `0`, `1`, `2`.
/// - `theta` only uses `0`, `1`, `2`, `R`.
/// - `|delta| = |theta|`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectiveBiSequence {
    delta: String,
    theta: String,
}

impl DirectiveBiSequence {
    /// Validates and wraps `(delta, theta)`.
    ///
    /// The alphabet of `delta` is checked first, then the alphabet of
    /// `theta`, then the lengths.
    pub fn new(delta: &str, theta: &str) -> Result<Self, DirectiveError> {
        check_ternary(delta)?;
        check_theta(theta)?;
        if delta.len() != theta.len() {
            return Err(DirectiveError::LengthMismatch {
                delta: delta.len(),
                theta: theta.len(),
            });
        }
        Ok(Self {
            delta: delta.to_string(),
            theta: theta.to_string(),
        })
    }

    /// Builds a bi-sequence from validated bytes.
    pub(crate) fn from_validated(delta: Vec<u8>, theta: Vec<u8>) -> Self {
        debug_assert_eq!(delta.len(), theta.len());
        Self {
            delta: delta.into_iter().map(char::from).collect(),
            theta: theta.into_iter().map(char::from).collect(),
        }
    }

    /// The sequence `delta`.
    pub fn delta(&self) -> &str {
        &self.delta
    }

    /// The sequence `theta`.
    pub fn theta(&self) -> &str {
        &self.theta
    }

    /// Number of construction steps.
    pub fn len(&self) -> usize {
        self.delta.len()
    }

    /// Returns `true` for the empty bi-sequence.
    pub fn is_empty(&self) -> bool {
        self.delta.is_empty()
    }

    /// Iterates over the construction steps `(delta[k], theta[k])`.
    pub fn steps(&self) -> impl Iterator<Item = (Letter, Theta)> + '_ {
        self.delta
            .bytes()
            .zip(self.theta.bytes())
            .filter_map(|(d, t)| Some((Letter::from_byte(d)?, Theta::from_byte(t)?)))
    }

    /// Consumes the bi-sequence into `(delta, theta)`.
    pub fn into_parts(self) -> (String, String) {
        (self.delta, self.theta)
    }
}

impl fmt::Display for DirectiveBiSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.delta, self.theta)
    }
}

/// Result of a normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Normalized {
    /// Normalized `delta`.
    pub delta: String,
    /// Normalized `theta`.
    pub theta: String,
    /// `true` if the input was already normalized.
    pub unchanged: bool,
}

impl Normalized {
    /// Builds the result for `output`, comparing it with `input`.
    pub(crate) fn compare(input: &DirectiveBiSequence, output: DirectiveBiSequence) -> Self {
        let unchanged = *input == output;
        let (delta, theta) = output.into_parts();
        Self {
            delta,
            theta,
            unchanged,
        }
    }

    /// Returns `(delta, theta, unchanged)`.
    pub fn into_tuple(self) -> (String, String, bool) {
        (self.delta, self.theta, self.unchanged)
    }

    /// Returns `(delta, theta, unchanged)` borrowing the strings.
    pub fn as_tuple(&self) -> (&str, &str, bool) {
        (&self.delta, &self.theta, self.unchanged)
    }
}
