//! The rewrite engine.
//!
//! The input is canonicalized and interleaved into a tape, the leading run of
//! zeros is put in E0 form, and the catalog's corrections are applied one at
//! a time until none applies. Decoding the tape and undoing the
//! canonicalization gives the normalized bi-sequence.

use crate::canonical::{canonicalize_bytes, decanonicalize};
use crate::config::NormalizerConfig;
use crate::directive::{DirectiveBiSequence, Normalized};
use crate::error::DirectiveError;
use crate::rules::RuleCatalog;
use crate::tape::Tape;
use crate::traceability::{DiagnosticSink, RewriteStep};

/// Rule-based normalizer.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    config: NormalizerConfig,
    catalog: &'static RuleCatalog,
}

impl Normalizer {
    /// Creates a normalizer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(NormalizerConfig::default())
    }

    /// Creates a normalizer with an explicit configuration.
    pub fn with_config(config: NormalizerConfig) -> Self {
        Self {
            config,
            catalog: RuleCatalog::global(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// The rule catalog in use.
    pub fn catalog(&self) -> &'static RuleCatalog {
        self.catalog
    }

    /// Normalizes `(delta, theta)`.
    ///
    /// # Examples
    /// ```
    /// use tgpc::Normalizer;
    ///
    /// let result = Normalizer::new().normalize("0012", "0020").unwrap();
    /// assert_eq!(result.into_tuple(), ("00120".to_string(), "00210".to_string(), false));
    /// ```
    pub fn normalize(&self, delta: &str, theta: &str) -> Result<Normalized, DirectiveError> {
        self.normalize_with(delta, theta, ())
    }

    /// Normalizes `(delta, theta)`, reporting progress to `sink`.
    pub fn normalize_with<S: DiagnosticSink>(
        &self,
        delta: &str,
        theta: &str,
        sink: S,
    ) -> Result<Normalized, DirectiveError> {
        let input = DirectiveBiSequence::new(delta, theta)?;
        self.normalize_directive(&input, sink)
    }

    /// Normalizes an already validated bi-sequence.
    pub fn normalize_directive<S: DiagnosticSink>(
        &self,
        input: &DirectiveBiSequence,
        mut sink: S,
    ) -> Result<Normalized, DirectiveError> {
        let (delta, theta, substitution) =
            canonicalize_bytes(input.delta().as_bytes(), input.theta().as_bytes());
        let mut tape = Tape::interleave(&delta, &theta);
        tape.fix_leading_run();
        sink.canonicalized(input, &substitution, &tape);

        let limit = self.config.step_limit.limit_for(input.len());
        let mut rewrites = 0;
        while let Some(candidate) = self.catalog.find_applicable(tape.as_bytes()) {
            if rewrites == limit {
                return Err(DirectiveError::StepLimitExceeded { limit });
            }
            tape.splice(candidate.position, candidate.replacement);
            sink.rule_applied(&RewriteStep {
                index: rewrites,
                rule: candidate.rule,
                position: candidate.position,
                replacement: candidate.replacement.iter().map(|&b| char::from(b)).collect(),
                tape_after: tape.clone(),
            });
            rewrites += 1;
        }

        let (delta, theta) = tape.split();
        let canonical = DirectiveBiSequence::from_validated(delta, theta);
        let result = Normalized::compare(input, decanonicalize(&canonical, &substitution));
        sink.fixpoint_reached(&result, rewrites);
        Ok(result)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes `(delta, theta)` with the default [`Normalizer`].
///
/// # Examples
/// ```
/// let (delta, theta, unchanged) = tgpc::normalize("01", "01").unwrap().into_tuple();
/// assert_eq!((delta.as_str(), theta.as_str(), unchanged), ("012", "021", false));
/// ```
pub fn normalize(delta: &str, theta: &str) -> Result<Normalized, DirectiveError> {
    Normalizer::new().normalize(delta, theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StepLimit;

    #[derive(Default)]
    struct Counter {
        rewrites: usize,
        positions: Vec<usize>,
        finished: Option<usize>,
    }

    impl DiagnosticSink for Counter {
        fn rule_applied(&mut self, step: &RewriteStep) {
            self.rewrites += 1;
            self.positions.push(step.position);
        }

        fn fixpoint_reached(&mut self, _result: &Normalized, rewrites: usize) {
            self.finished = Some(rewrites);
        }
    }

    fn norm(delta: &str, theta: &str) -> (String, String, bool) {
        normalize(delta, theta).unwrap().into_tuple()
    }

    #[test]
    fn test_literal_scenarios() {
        assert_eq!(norm("0011", "00RR"), ("0011".into(), "00RR".into(), true));
        assert_eq!(norm("0012", "0020"), ("00120".into(), "00210".into(), false));
        assert_eq!(
            norm("0102110", "02R0121"),
            ("01021102".into(), "02R01201".into(), false)
        );
        assert_eq!(norm("010", "022"), ("0101".into(), "02R2".into(), false));
        assert_eq!(norm("01", "01"), ("012".into(), "021".into(), false));
    }

    #[test]
    fn test_relabeled_input_is_restored() {
        assert_eq!(norm("2210", "R0R1"), ("22110".into(), "220R1".into(), false));
    }

    #[test]
    fn test_empty_input_is_normalized() {
        assert_eq!(norm("", ""), (String::new(), String::new(), true));
    }

    #[test]
    fn test_validation_happens_first() {
        assert!(matches!(
            normalize("3", "0"),
            Err(DirectiveError::InvalidAlphabet { .. })
        ));
        assert!(matches!(
            normalize("0", "3"),
            Err(DirectiveError::InvalidAlphabet { .. })
        ));
        assert_eq!(
            normalize("01", "0"),
            Err(DirectiveError::LengthMismatch { delta: 2, theta: 1 })
        );
    }

    #[test]
    fn test_sink_sees_every_rewrite() {
        let mut counter = Counter::default();
        let result = Normalizer::new()
            .normalize_with("22222", "11112", &mut counter)
            .unwrap();
        assert_eq!(result.as_tuple(), ("2020202021", "21R1R1R1R2", false));
        assert_eq!(counter.rewrites, 5);
        assert_eq!(counter.positions, vec![0, 4, 8, 12, 16]);
        assert_eq!(counter.finished, Some(5));
    }

    #[test]
    fn test_step_limit() {
        let exact = Normalizer::with_config(NormalizerConfig::with_step_limit(StepLimit::Fixed(5)));
        assert!(exact.normalize("22222", "11112").is_ok());

        let short = Normalizer::with_config(NormalizerConfig::with_step_limit(StepLimit::Fixed(4)));
        assert_eq!(
            short.normalize("22222", "11112"),
            Err(DirectiveError::StepLimitExceeded { limit: 4 })
        );

        // A normalized input needs no rewrite at all.
        let none = Normalizer::with_config(NormalizerConfig::with_step_limit(StepLimit::Fixed(0)));
        assert!(none.normalize("0011", "00RR").unwrap().unchanged);
    }
}
