//! Normalizer configuration.

use serde::{Deserialize, Serialize};

/// Bound on the number of rewrites performed by one normalization.
///
/// The rule catalog is expected to reach a fixpoint on every valid input;
/// the bound turns a violation of that expectation into
/// [`DirectiveError::StepLimitExceeded`](crate::DirectiveError::StepLimitExceeded)
/// instead of a hang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StepLimit {
    /// `32 * n + 256` rewrites for an input of length `n`.
    #[default]
    Auto,
    /// A fixed number of rewrites.
    Fixed(usize),
}

impl StepLimit {
    /// Number of rewrites allowed for an input of `len` steps.
    pub fn limit_for(self, len: usize) -> usize {
        match self {
            StepLimit::Auto => len.saturating_mul(32).saturating_add(256),
            StepLimit::Fixed(limit) => limit,
        }
    }
}

/// Configuration of a [`Normalizer`](crate::Normalizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Rewrite bound.
    pub step_limit: StepLimit,
}

impl NormalizerConfig {
    /// Configuration with an explicit rewrite bound.
    pub fn with_step_limit(step_limit: StepLimit) -> Self {
        Self { step_limit }
    }
}
