//! Error type shared by every entry point of the crate.
//!
//! All input problems are detected before any computation starts; there is no
//! partial-result mode. The only error raised after validation is
//! [`DirectiveError::StepLimitExceeded`], which guards the rewrite loop.

/// Error type for directive bi-sequence validation and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    /// A sequence contains a character outside its alphabet.
    InvalidAlphabet {
        /// The offending sequence.
        sequence: String,
        /// The allowed alphabet, e.g. `"012"` or `"012R"`.
        allowed: &'static str,
    },
    /// `delta` and `theta` have different lengths.
    LengthMismatch {
        /// Length of `delta`.
        delta: usize,
        /// Length of `theta`.
        theta: usize,
    },
    /// A letter argument is not one of `0`, `1`, `2`.
    InvalidSymbol(String),
    /// A theta symbol that is neither `R` nor a letter reached word construction.
    MalformedDirective {
        /// Zero-based construction step.
        step: usize,
        /// The symbol found at that step.
        symbol: char,
    },
    /// The rewrite loop did not reach a fixpoint within the configured bound.
    StepLimitExceeded {
        /// The bound that was hit.
        limit: usize,
    },
}

impl std::fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectiveError::InvalidAlphabet { sequence, allowed } => {
                let shown: Vec<String> = allowed.chars().map(String::from).collect();
                write!(f, "{:?} is not in A = {{{}}}", sequence, shown.join(","))
            }
            DirectiveError::LengthMismatch { delta, theta } => write!(
                f,
                "the lengths of delta and theta are not the same ({} != {})",
                delta, theta
            ),
            DirectiveError::InvalidSymbol(symbol) => {
                write!(f, "{:?} is not in A = {{0,1,2}}", symbol)
            }
            DirectiveError::MalformedDirective { step, symbol } => {
                write!(f, "wrong theta symbol {:?} at step {}", symbol, step)
            }
            DirectiveError::StepLimitExceeded { limit } => {
                write!(f, "no fixpoint reached after {} rewrite steps", limit)
            }
        }
    }
}

impl std::error::Error for DirectiveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = DirectiveError::InvalidAlphabet {
            sequence: "3".to_string(),
            allowed: "012",
        };
        assert_eq!(err.to_string(), "\"3\" is not in A = {0,1,2}");

        let err = DirectiveError::LengthMismatch { delta: 2, theta: 1 };
        assert!(err.to_string().contains("2 != 1"));

        let err = DirectiveError::StepLimitExceeded { limit: 10 };
        assert_eq!(err.to_string(), "no fixpoint reached after 10 rewrite steps");
    }
}
