//! Normalization of directive bi-sequences.
//!
//! [`engine`] holds the rule-based [`Normalizer`]; [`naive`] holds the
//! reference [`NaiveNormalizer`] used to validate it. Both return the same
//! [`Normalized`](crate::Normalized) value on every valid input.

pub mod engine;
pub mod naive;

pub use engine::{normalize, Normalizer};
pub use naive::{naive_normalize, pseudopalindromic_prefixes, NaiveNormalizer};
