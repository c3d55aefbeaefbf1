//! Factor rules: corrections applicable anywhere on the tape.
//!
//! A factor rule matches a fixed fragment of three or four pairs starting at
//! any even offset. Four families are generated from letter parameters:
//!
//! | family | parameters | fragment (pairs) | correction of the last pair |
//! |---|---|---|---|
//! | 1 | `a, b, i` | `(a,R) (Ei(b),i) (b,i)` | `(b,R) (Ei(b),i)` |
//! | 2 | `a, b, i` | `(a,i) (Ei(b),R) (b,R)` | `(b,i) (Ei(b),R)` |
//! | 3 | `a, b, i≠j` | `(a,i) (b,j) (c,i)` with `c = Ej(Ei(b))` | `(c,Ei(j)) (Ei(Ej(b)),i)` |
//! | 4 | `a, b, {i,j,k}` | `(a,i) (b,j) (c,k) (d,k)` with `c = Ej(Ei(b))`, `d = Ek(Ei(b))` | `(d,i) (b,j) (c,k)` |
//!
//! Every rule is materialized once with its correction already computed,
//! so matching is a plain scan over a finite table.
//!
//! # Citations
//! - Blondin Massé, Paquin, Tremblay, Vuillon, "On generalized pseudostandard words over binary alphabets" (2013)
//! - Dvořáková, Florian, "On periodicity of generalized pseudostandard words" (2016)

use crate::alphabet::{Letter, REVERSAL};
use crate::involution::involution;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four factor rule families, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FactorFamily {
    /// Family 1: an Ei step after a reversal step is rewritten to a reversal.
    Reversal,
    /// Family 2: the counterpart of family 1 with the reversal trailing.
    TrailingReversal,
    /// Family 3: two alternating involutions.
    Exchange,
    /// Family 4: three distinct involutions.
    Triple,
}

impl FactorFamily {
    /// All families in priority order.
    pub const ALL: [FactorFamily; 4] = [
        FactorFamily::Reversal,
        FactorFamily::TrailingReversal,
        FactorFamily::Exchange,
        FactorFamily::Triple,
    ];

    /// Number of the family (1 to 4).
    pub const fn number(self) -> u8 {
        match self {
            FactorFamily::Reversal => 1,
            FactorFamily::TrailingReversal => 2,
            FactorFamily::Exchange => 3,
            FactorFamily::Triple => 4,
        }
    }
}

impl fmt::Display for FactorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One instance of a factor rule family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FactorRule {
    family: FactorFamily,
    /// Generation parameters `a, b, i[, j[, k]]`.
    params: Vec<Letter>,
    /// Interleaved left-hand side.
    fragment: Vec<u8>,
    /// Interleaved pairs replacing the last pair of the fragment.
    replacement: Vec<u8>,
}

impl FactorRule {
    /// Family of the rule.
    pub fn family(&self) -> FactorFamily {
        self.family
    }

    /// Generation parameters `a, b, i[, j[, k]]`.
    pub fn params(&self) -> &[Letter] {
        &self.params
    }

    /// Interleaved left-hand side.
    pub fn fragment(&self) -> &[u8] {
        &self.fragment
    }

    /// Interleaved correction of the last pair.
    pub fn replacement(&self) -> &[u8] {
        &self.replacement
    }

    /// Position of the pair to correct at the leftmost occurrence of the
    /// fragment starting at an even offset of `tape`.
    pub fn find(&self, tape: &[u8]) -> Option<usize> {
        let span = self.fragment.len();
        (0..tape.len().saturating_sub(span) + 1)
            .step_by(2)
            .find(|&start| tape[start..].starts_with(&self.fragment))
            .map(|start| start + span - 2)
    }

    /// The fragment as a readable `(delta, theta)` pair.
    pub fn readable(&self) -> (String, String) {
        let delta = self.fragment.iter().step_by(2).map(|&b| b as char).collect();
        let theta = self.fragment.iter().skip(1).step_by(2).map(|&b| b as char).collect();
        (delta, theta)
    }

    /// Canonical bytes of the rule, used for fingerprinting.
    pub(crate) fn canonical_bytes(&self, out: &mut Vec<u8>) {
        out.push(self.family.number());
        out.extend_from_slice(&self.fragment);
        out.push(0);
        out.extend_from_slice(&self.replacement);
        out.push(0);
    }
}

impl fmt::Display for FactorRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (delta, theta) = self.readable();
        let replacement: String = self.replacement.iter().map(|&b| b as char).collect();
        write!(f, "({}, {}) -> {}", delta, theta, replacement)
    }
}

/// Image of `x` under Ei.
fn e(i: Letter, x: Letter) -> Letter {
    involution(i).image(x)
}

fn pairs(symbols: &[(Letter, u8)]) -> Vec<u8> {
    symbols.iter().flat_map(|&(d, t)| [d.to_byte(), t]).collect()
}

/// Ordered pairs `(a, b)` in lexicographic order.
fn letter_pairs() -> impl Iterator<Item = (Letter, Letter)> {
    Letter::ALL
        .into_iter()
        .flat_map(|a| Letter::ALL.into_iter().map(move |b| (a, b)))
}

/// Ordered pairs of distinct letters in lexicographic order.
fn two_permutations() -> impl Iterator<Item = (Letter, Letter)> {
    letter_pairs().filter(|(i, j)| i != j)
}

/// Permutations of the three letters in lexicographic order.
fn three_permutations() -> impl Iterator<Item = (Letter, Letter, Letter)> {
    two_permutations().flat_map(|(i, j)| {
        Letter::ALL
            .into_iter()
            .filter(move |&k| k != i && k != j)
            .map(move |k| (i, j, k))
    })
}

fn family_reversal() -> Vec<FactorRule> {
    letter_pairs()
        .flat_map(|(a, b)| Letter::ALL.into_iter().map(move |i| (a, b, i)))
        .map(|(a, b, i)| {
            let c = e(i, b);
            let t = i.to_byte();
            FactorRule {
                family: FactorFamily::Reversal,
                params: vec![a, b, i],
                fragment: pairs(&[(a, REVERSAL), (c, t), (b, t)]),
                replacement: pairs(&[(b, REVERSAL), (c, t)]),
            }
        })
        .collect()
}

fn family_trailing_reversal() -> Vec<FactorRule> {
    letter_pairs()
        .flat_map(|(a, b)| Letter::ALL.into_iter().map(move |i| (a, b, i)))
        .map(|(a, b, i)| {
            let c = e(i, b);
            let t = i.to_byte();
            FactorRule {
                family: FactorFamily::TrailingReversal,
                params: vec![a, b, i],
                fragment: pairs(&[(a, t), (c, REVERSAL), (b, REVERSAL)]),
                replacement: pairs(&[(b, t), (c, REVERSAL)]),
            }
        })
        .collect()
}

fn family_exchange() -> Vec<FactorRule> {
    letter_pairs()
        .flat_map(|(a, b)| two_permutations().map(move |(i, j)| (a, b, i, j)))
        .map(|(a, b, i, j)| {
            let c = e(j, e(i, b));
            FactorRule {
                family: FactorFamily::Exchange,
                params: vec![a, b, i, j],
                fragment: pairs(&[(a, i.to_byte()), (b, j.to_byte()), (c, i.to_byte())]),
                replacement: pairs(&[(c, e(i, j).to_byte()), (e(i, e(j, b)), i.to_byte())]),
            }
        })
        .collect()
}

fn family_triple() -> Vec<FactorRule> {
    letter_pairs()
        .flat_map(|(a, b)| three_permutations().map(move |(i, j, k)| (a, b, i, j, k)))
        .map(|(a, b, i, j, k)| {
            let c = e(j, e(i, b));
            let d = e(k, e(i, b));
            FactorRule {
                family: FactorFamily::Triple,
                params: vec![a, b, i, j, k],
                fragment: pairs(&[
                    (a, i.to_byte()),
                    (b, j.to_byte()),
                    (c, k.to_byte()),
                    (d, k.to_byte()),
                ]),
                replacement: pairs(&[(d, i.to_byte()), (b, j.to_byte()), (c, k.to_byte())]),
            }
        })
        .collect()
}

/// Generates every instance of `family` in generation order.
pub fn generate(family: FactorFamily) -> Vec<FactorRule> {
    match family {
        FactorFamily::Reversal => family_reversal(),
        FactorFamily::TrailingReversal => family_trailing_reversal(),
        FactorFamily::Exchange => family_exchange(),
        FactorFamily::Triple => family_triple(),
    }
}
