//! tgpc: normalization of directive bi-sequences of ternary generalized
//! pseudostandard words.
//!
//! A directive bi-sequence `(delta, theta)` builds a word by repeatedly
//! appending the letter `delta[k]` and closing the result under `theta[k]`:
//! plain palindromic closure for `R`, Ei-palindromic closure for a letter
//! `i`. Different bi-sequences can build the same word. The normalized one
//! closes at every pseudopalindromic prefix of the word, so it is the unique
//! representative from which the word can be read back step by step.
//!
//! This crate provides:
//! - the involutions `E0`, `E1`, `E2` and the (pseudo)palindromic closures;
//! - word construction ([`make_word012`], [`WordBuilder`]);
//! - a rule-based [`Normalizer`] rewriting an interleaved tape with a fixed
//!   catalog of 30 prefix rules and four factor rule families;
//! - a [`NaiveNormalizer`] reading the normalized form off the word, used as
//!   an oracle for the rule-based one;
//! - diagnostics sinks and replayable rewrite traces.
//!
//! # Mathematical Foundations
//!
//! Over the alphabet `A = {0, 1, 2}` the involution `Ei` fixes `i` and
//! exchanges the two other letters. A word `w` is an Ei-palindrome when
//! `w = Ei(reverse(w))`. Relabeling the alphabet consistently in `delta` and
//! `theta` relabels the word, which is why normalization first brings the
//! input into a canonical letter order and undoes it at the end.
//!
//! # References
//!
//! - de Luca, A. "Sturmian words: structure, combinatorics, and their arithmetics" (1997)
//! - de Luca, A., De Luca, A. "Pseudopalindrome closure operators in free monoids" (2006)
//! - Blondin Massé, A., Paquin, G., Tremblay, H., Vuillon, L. "On generalized pseudostandard words over binary alphabets" (2013)
//! - Dvořáková, L., Florian, J. "On periodicity of generalized pseudostandard words" (2016)
//!
//! # Example
//!
//! ```
//! use tgpc::prelude::*;
//!
//! let result = normalize("0012", "0020").unwrap();
//! assert_eq!(result.as_tuple(), ("00120", "00210", false));
//! assert_eq!(
//!     make_word012("0012", "0020", "").unwrap(),
//!     make_word012(&result.delta, &result.theta, "").unwrap(),
//! );
//! ```

pub mod alphabet;
pub mod canonical;
pub mod closure;
pub mod config;
pub mod directive;
pub mod error;
pub mod fingerprint;
pub mod involution;
pub mod normalize;
pub mod palindrome;
pub mod rules;
pub mod tape;
pub mod traceability;

pub use alphabet::{AsLetter, Letter, Theta};
pub use canonical::{canonicalize, decanonicalize, Substitution};
pub use closure::{make_eipal_closure, make_pal_closure, make_word012, WordBuilder};
pub use config::{NormalizerConfig, StepLimit};
pub use directive::{DirectiveBiSequence, Normalized};
pub use error::DirectiveError;
pub use fingerprint::HashValue;
pub use involution::{ei, Involution};
pub use normalize::{naive_normalize, normalize, pseudopalindromic_prefixes, NaiveNormalizer, Normalizer};
pub use palindrome::{classify, is_eipal, is_pal};
pub use rules::{FactorFamily, RuleCatalog, RuleRef};
pub use tape::Tape;
pub use traceability::{
    DiagnosticSink, RewriteStep, RewriteTrace, TraceabilityError, TracingSink, Verbosity,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::alphabet::{AsLetter, Letter, Theta};
    pub use crate::canonical::{canonicalize, decanonicalize, Substitution};
    pub use crate::closure::{make_eipal_closure, make_pal_closure, make_word012, WordBuilder};
    pub use crate::config::{NormalizerConfig, StepLimit};
    pub use crate::directive::{DirectiveBiSequence, Normalized};
    pub use crate::error::DirectiveError;
    pub use crate::involution::ei;
    pub use crate::normalize::{naive_normalize, normalize, NaiveNormalizer, Normalizer};
    pub use crate::palindrome::{is_eipal, is_pal};
    pub use crate::traceability::{DiagnosticSink, RewriteTrace, TracingSink, Verbosity};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    /// The boundary examples of the public surface.
    #[test]
    fn public_surface_smoke_test() {
        assert_eq!(ei(0).unwrap().chars(), ['0', '2', '1']);
        assert_eq!(ei("1").unwrap().chars(), ['2', '1', '0']);
        assert_eq!(ei('2').unwrap().chars(), ['1', '0', '2']);
        assert!(matches!(ei(3), Err(DirectiveError::InvalidSymbol(_))));

        assert_eq!(is_eipal("012", 1), Ok(true));
        assert_eq!(is_eipal("002", 1), Ok(false));
        assert_eq!(make_pal_closure("102"), "10201");
        assert_eq!(make_eipal_closure("101", 1), Ok("10121".to_string()));
    }

    /// Both normalizers agree and preserve the generated word.
    #[test]
    fn normalizers_agree_on_small_example() {
        let (delta, theta) = ("0102110", "02R0121");
        let fast = normalize(delta, theta).unwrap();
        let naive = naive_normalize(delta, theta).unwrap();
        assert_eq!(fast, naive);
        assert_eq!(
            make_word012(delta, theta, "").unwrap(),
            make_word012(&fast.delta, &fast.theta, "").unwrap()
        );
    }

    /// Sinks never change results.
    #[test]
    fn tracing_sink_is_transparent() {
        let normalizer = Normalizer::new();
        let plain = normalizer.normalize("22222", "11112").unwrap();
        let traced = normalizer
            .normalize_with("22222", "11112", TracingSink::new(Verbosity::Debug))
            .unwrap();
        assert_eq!(plain, traced);
    }
}
