//! Diagnostics, rewrite traces and replay.
//!
//! The normalizers report what they do through a [`DiagnosticSink`] passed in
//! by the caller. `()` ignores every event, [`TracingSink`] forwards events to
//! the `tracing` crate, and [`RewriteTrace`] records the complete rewrite
//! history of one normalization so that it can be persisted and replayed
//! against the rule catalog of another build.
//!
//! # Citations
//! - Graph transformation traceability: Varro et al., "Model transformation by example" (2006)
//! - Transformation traces: Jouault & Kurtev, "Transforming models with ATL" (2005)

use crate::alphabet::Theta;
use crate::canonical::{decanonicalize, Substitution};
use crate::directive::{DirectiveBiSequence, Normalized};
use crate::fingerprint::HashValue;
use crate::rules::{RuleCatalog, RuleRef};
use crate::tape::Tape;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info};

/// Receiver of normalization events.
///
/// Every hook has an empty default body, so implementors only override what
/// they need. Sinks never influence results.
pub trait DiagnosticSink {
    /// The input was relabeled by `substitution` and interleaved into `tape`
    /// (after the leading-run fix).
    fn canonicalized(&mut self, input: &DirectiveBiSequence, substitution: &Substitution, tape: &Tape) {
        let _ = (input, substitution, tape);
    }

    /// A correction was applied.
    fn rule_applied(&mut self, step: &RewriteStep) {
        let _ = step;
    }

    /// No rule applies any more; `result` is what the caller receives.
    fn fixpoint_reached(&mut self, result: &Normalized, rewrites: usize) {
        let _ = (result, rewrites);
    }

    /// Word construction produced the prefix `w_step` (1-based).
    fn word_step(&mut self, step: usize, prefix: &str) {
        let _ = (step, prefix);
    }

    /// The prefix of length `len` was classified as closed under `theta`.
    fn pseudopalindromic_prefix(&mut self, len: usize, theta: Theta) {
        let _ = (len, theta);
    }
}

impl DiagnosticSink for () {}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn canonicalized(&mut self, input: &DirectiveBiSequence, substitution: &Substitution, tape: &Tape) {
        (**self).canonicalized(input, substitution, tape)
    }

    fn rule_applied(&mut self, step: &RewriteStep) {
        (**self).rule_applied(step)
    }

    fn fixpoint_reached(&mut self, result: &Normalized, rewrites: usize) {
        (**self).fixpoint_reached(result, rewrites)
    }

    fn word_step(&mut self, step: usize, prefix: &str) {
        (**self).word_step(step, prefix)
    }

    fn pseudopalindromic_prefix(&mut self, len: usize, theta: Theta) {
        (**self).pseudopalindromic_prefix(len, theta)
    }
}

/// Amount of detail emitted by a [`TracingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Nothing beyond errors.
    #[default]
    Error,
    /// Applied rules, constructed prefixes and results.
    Info,
    /// Tapes and classified prefixes as well.
    Debug,
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Verbosity::Error),
            "INFO" => Ok(Verbosity::Info),
            "DEBUG" => Ok(Verbosity::Debug),
            other => Err(format!("unknown verbosity level: {}", other)),
        }
    }
}

/// Forwards normalization events to `tracing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink {
    /// Events below this level are dropped.
    pub verbosity: Verbosity,
}

impl TracingSink {
    /// Creates a sink emitting events up to `verbosity`.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn enabled(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }
}

impl DiagnosticSink for TracingSink {
    fn canonicalized(&mut self, input: &DirectiveBiSequence, substitution: &Substitution, tape: &Tape) {
        if self.enabled(Verbosity::Debug) {
            debug!(input = %input, substitution = %substitution, tape = %tape, "canonicalized");
        }
    }

    fn rule_applied(&mut self, step: &RewriteStep) {
        if self.enabled(Verbosity::Info) {
            info!(
                step = step.index,
                rule = %step.rule,
                position = step.position,
                replacement = %step.replacement,
                "rule applied"
            );
        }
        if self.enabled(Verbosity::Debug) {
            debug!(tape = %step.tape_after, "tape after rewrite");
        }
    }

    fn fixpoint_reached(&mut self, result: &Normalized, rewrites: usize) {
        if self.enabled(Verbosity::Info) {
            info!(
                delta = %result.delta,
                theta = %result.theta,
                unchanged = result.unchanged,
                rewrites,
                "fixpoint reached"
            );
        }
    }

    fn word_step(&mut self, step: usize, prefix: &str) {
        if self.enabled(Verbosity::Info) {
            info!(step, prefix, "word prefix");
        }
    }

    fn pseudopalindromic_prefix(&mut self, len: usize, theta: Theta) {
        if self.enabled(Verbosity::Debug) {
            debug!(len, theta = %theta, "pseudopalindromic prefix");
        }
    }
}

/// One correction applied by the rewrite engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteStep {
    /// Zero-based index of the rewrite.
    pub index: usize,
    /// The rule that fired.
    pub rule: RuleRef,
    /// Offset of the replaced pair.
    pub position: usize,
    /// Interleaved pairs that replaced it.
    pub replacement: String,
    /// Tape after the rewrite.
    pub tape_after: Tape,
}

/// Error type for trace replay and persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceabilityError {
    /// Replaying step `index` did not reproduce the recorded rewrite.
    StepMismatch {
        /// Index of the diverging step (equal to the step count if the
        /// recorded fixpoint is not one).
        index: usize,
    },
    /// The trace was recorded against a different rule catalog.
    FingerprintMismatch {
        /// Fingerprint stored in the trace.
        expected: HashValue,
        /// Fingerprint of the catalog used for replay.
        found: HashValue,
    },
    /// The trace is incomplete or cannot be decoded.
    Corruption(String),
    /// Reading or writing the trace failed.
    Io(String),
}

impl std::fmt::Display for TraceabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceabilityError::StepMismatch { index } => {
                write!(f, "replay diverges at step {}", index)
            }
            TraceabilityError::FingerprintMismatch { expected, found } => write!(
                f,
                "rule catalog fingerprint mismatch: trace has {}, catalog has {}",
                expected, found
            ),
            TraceabilityError::Corruption(msg) => write!(f, "trace corruption: {}", msg),
            TraceabilityError::Io(msg) => write!(f, "trace i/o error: {}", msg),
        }
    }
}

impl std::error::Error for TraceabilityError {}

/// Complete rewrite history of one normalization.
///
/// Pass a `&mut RewriteTrace` as the sink of
/// [`Normalizer::normalize_with`](crate::Normalizer::normalize_with); it
/// records the input, the canonicalizing substitution, the initial tape and
/// every rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteTrace {
    input: Option<DirectiveBiSequence>,
    substitution: Substitution,
    initial_tape: Option<Tape>,
    steps: Vec<RewriteStep>,
    output: Option<Normalized>,
    catalog_fingerprint: HashValue,
}

impl RewriteTrace {
    /// Creates an empty trace bound to the global rule catalog.
    pub fn new() -> Self {
        Self::for_catalog(RuleCatalog::global())
    }

    /// Creates an empty trace bound to `catalog`.
    pub fn for_catalog(catalog: &RuleCatalog) -> Self {
        Self {
            input: None,
            substitution: Substitution::IDENTITY,
            initial_tape: None,
            steps: Vec::new(),
            output: None,
            catalog_fingerprint: catalog.fingerprint(),
        }
    }

    /// The recorded input.
    pub fn input(&self) -> Option<&DirectiveBiSequence> {
        self.input.as_ref()
    }

    /// The canonicalizing substitution.
    pub fn substitution(&self) -> Substitution {
        self.substitution
    }

    /// The tape the rewrite loop started from.
    pub fn initial_tape(&self) -> Option<&Tape> {
        self.initial_tape.as_ref()
    }

    /// Recorded rewrites in application order.
    pub fn steps(&self) -> &[RewriteStep] {
        &self.steps
    }

    /// Number of recorded rewrites.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The recorded result.
    pub fn output(&self) -> Option<&Normalized> {
        self.output.as_ref()
    }

    /// Fingerprint of the catalog the trace was recorded against.
    pub fn catalog_fingerprint(&self) -> HashValue {
        self.catalog_fingerprint
    }

    /// Replays the trace against the global rule catalog.
    pub fn replay(&self) -> Result<Normalized, TraceabilityError> {
        self.replay_with(RuleCatalog::global())
    }

    /// Replays every step from the initial tape against `catalog`.
    ///
    /// Each step must be the correction the catalog selects on the tape
    /// before it, and must produce the recorded tape. The last tape must be
    /// a fixpoint and decode to the recorded output.
    pub fn replay_with(&self, catalog: &RuleCatalog) -> Result<Normalized, TraceabilityError> {
        if catalog.fingerprint() != self.catalog_fingerprint {
            return Err(TraceabilityError::FingerprintMismatch {
                expected: self.catalog_fingerprint,
                found: catalog.fingerprint(),
            });
        }
        let (Some(input), Some(initial), Some(output)) =
            (&self.input, &self.initial_tape, &self.output)
        else {
            return Err(TraceabilityError::Corruption("trace is incomplete".to_string()));
        };

        let mut tape = initial.clone();
        for (index, step) in self.steps.iter().enumerate() {
            let candidate = catalog
                .find_applicable(tape.as_bytes())
                .ok_or(TraceabilityError::StepMismatch { index })?;
            if step.index != index
                || candidate.rule != step.rule
                || candidate.position != step.position
                || candidate.replacement != step.replacement.as_bytes()
            {
                return Err(TraceabilityError::StepMismatch { index });
            }
            tape.splice(candidate.position, candidate.replacement);
            if tape != step.tape_after {
                return Err(TraceabilityError::StepMismatch { index });
            }
        }
        if catalog.find_applicable(tape.as_bytes()).is_some() {
            return Err(TraceabilityError::StepMismatch {
                index: self.steps.len(),
            });
        }

        let (delta, theta) = tape.split();
        let canonical = DirectiveBiSequence::from_validated(delta, theta);
        let result = Normalized::compare(input, decanonicalize(&canonical, &self.substitution));
        if result != *output {
            return Err(TraceabilityError::Corruption(format!(
                "replayed result ({}, {}) differs from recorded ({}, {})",
                result.delta, result.theta, output.delta, output.theta
            )));
        }
        Ok(result)
    }

    /// Serializes the trace to CBOR bytes.
    pub fn to_cbor(&self) -> Result<Vec<u8>, TraceabilityError> {
        serde_cbor::to_vec(self).map_err(|e| TraceabilityError::Corruption(e.to_string()))
    }

    /// Deserializes a trace from CBOR bytes.
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, TraceabilityError> {
        serde_cbor::from_slice(bytes).map_err(|e| TraceabilityError::Corruption(e.to_string()))
    }

    /// Saves the trace to a file.
    ///
    /// Uses CBOR format.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), TraceabilityError> {
        let bytes = self.to_cbor()?;
        std::fs::write(path, bytes).map_err(|e| TraceabilityError::Io(e.to_string()))
    }

    /// Loads a trace from a file.
    ///
    /// Uses CBOR format.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, TraceabilityError> {
        let bytes = std::fs::read(path).map_err(|e| TraceabilityError::Io(e.to_string()))?;
        Self::from_cbor(&bytes)
    }
}

impl Default for RewriteTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for RewriteTrace {
    fn canonicalized(&mut self, input: &DirectiveBiSequence, substitution: &Substitution, tape: &Tape) {
        self.input = Some(input.clone());
        self.substitution = *substitution;
        self.initial_tape = Some(tape.clone());
        self.steps.clear();
        self.output = None;
    }

    fn rule_applied(&mut self, step: &RewriteStep) {
        self.steps.push(step.clone());
    }

    fn fixpoint_reached(&mut self, result: &Normalized, _rewrites: usize) {
        self.output = Some(result.clone());
    }
}
