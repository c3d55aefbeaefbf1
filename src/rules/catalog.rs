//! The process-wide rule catalog and candidate selection.
//!
//! The catalog holds the 30 prefix rules and the four factor families,
//! materialized once on first use and read-only afterwards. Given a tape it
//! selects the correction to apply next:
//!
//! 1. the first prefix rule (in table order) matching at position 0;
//! 2. otherwise the factor match with the smallest position, ties broken by
//!    the enumeration rank (families 1 to 4, then generation order).

use super::factor::{generate, FactorFamily, FactorRule};
use super::prefix::{PrefixRule, PREFIX_RULES};
use crate::fingerprint::{Canonicalizable, HashValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static CATALOG: OnceLock<RuleCatalog> = OnceLock::new();

/// Identifies the rule used by a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleRef {
    /// Prefix rule with the given id (1 to 30).
    Prefix(u8),
    /// Factor rule at `index` in the generation order of `family`.
    Factor {
        /// Family of the rule.
        family: FactorFamily,
        /// Index within the family.
        index: usize,
    },
}

impl fmt::Display for RuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleRef::Prefix(id) => write!(f, "prefix #{}", id),
            RuleRef::Factor { family, index } => write!(f, "factor F{}[{}]", family, index),
        }
    }
}

/// A rule that applies to a tape, with the correction it would make.
///
/// Candidates are ordered by `(position, rank)`; the smallest one wins.
#[derive(Debug, Clone, Copy)]
pub struct RewriteCandidate<'a> {
    /// Offset of the pair to replace.
    pub position: usize,
    /// Enumeration rank of the rule.
    pub rank: usize,
    /// The rule that matched.
    pub rule: RuleRef,
    /// Interleaved pairs replacing the pair at `position`.
    pub replacement: &'a [u8],
}

impl Ord for RewriteCandidate<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.position, self.rank).cmp(&(other.position, other.rank))
    }
}

impl PartialOrd for RewriteCandidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RewriteCandidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for RewriteCandidate<'_> {}

/// Every rewrite rule, in priority order.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    prefix: &'static [PrefixRule],
    /// Factor families, indexed by `FactorFamily::number() - 1`.
    factor: [Vec<FactorRule>; 4],
    fingerprint: HashValue,
}

impl RuleCatalog {
    /// Builds a fresh catalog.
    pub fn build() -> Self {
        let mut catalog = Self {
            prefix: &PREFIX_RULES,
            factor: FactorFamily::ALL.map(generate),
            fingerprint: HashValue::zero(),
        };
        catalog.fingerprint = Canonicalizable::fingerprint(&catalog);
        tracing::debug!(
            rules = catalog.len(),
            fingerprint = %catalog.fingerprint,
            "rule catalog built"
        );
        catalog
    }

    /// The process-wide catalog, built on first use.
    pub fn global() -> &'static RuleCatalog {
        CATALOG.get_or_init(Self::build)
    }

    /// The prefix rules in table order.
    pub fn prefix_rules(&self) -> &[PrefixRule] {
        self.prefix
    }

    /// The rules of one factor family in generation order.
    pub fn factor_rules(&self, family: FactorFamily) -> &[FactorRule] {
        &self.factor[usize::from(family.number() - 1)]
    }

    /// Factor rules of every family with their enumeration rank.
    fn ranked_factor_rules(&self) -> impl Iterator<Item = (usize, RuleRef, &FactorRule)> + '_ {
        FactorFamily::ALL
            .into_iter()
            .flat_map(move |family| {
                self.factor_rules(family)
                    .iter()
                    .enumerate()
                    .map(move |(index, rule)| (RuleRef::Factor { family, index }, rule))
            })
            .enumerate()
            .map(|(rank, (rule_ref, rule))| (rank, rule_ref, rule))
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.prefix.len() + self.factor.iter().map(Vec::len).sum::<usize>()
    }

    /// Returns `true` if the catalog holds no rule.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fingerprint over the canonical bytes of every rule.
    pub fn fingerprint(&self) -> HashValue {
        self.fingerprint
    }

    /// Each rule of `family` as a readable `(delta, theta)` pair.
    pub fn readable_factor_rules(&self, family: FactorFamily) -> Vec<(String, String)> {
        self.factor_rules(family).iter().map(FactorRule::readable).collect()
    }

    /// Correction stored for `rule`, if the catalog has such a rule.
    pub fn replacement(&self, rule: RuleRef) -> Option<&[u8]> {
        match rule {
            RuleRef::Prefix(id) => self
                .prefix
                .iter()
                .find(|r| r.id() == id)
                .map(PrefixRule::replacement),
            RuleRef::Factor { family, index } => self
                .factor_rules(family)
                .get(index)
                .map(FactorRule::replacement),
        }
    }

    /// The first prefix rule applying to `tape`.
    pub fn find_prefix(&self, tape: &[u8]) -> Option<RewriteCandidate<'_>> {
        self.prefix.iter().enumerate().find_map(|(rank, rule)| {
            Some(RewriteCandidate {
                position: rule.find(tape)?,
                rank,
                rule: RuleRef::Prefix(rule.id()),
                replacement: rule.replacement(),
            })
        })
    }

    /// The leftmost factor match, ties broken by rank.
    pub fn find_factor(&self, tape: &[u8]) -> Option<RewriteCandidate<'_>> {
        self.ranked_factor_rules()
            .filter_map(|(rank, rule_ref, rule)| {
                Some(RewriteCandidate {
                    position: rule.find(tape)?,
                    rank,
                    rule: rule_ref,
                    replacement: rule.replacement(),
                })
            })
            .min()
    }

    /// The correction to apply next, or `None` at a fixpoint.
    pub fn find_applicable(&self, tape: &[u8]) -> Option<RewriteCandidate<'_>> {
        self.find_prefix(tape).or_else(|| self.find_factor(tape))
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::build()
    }
}

impl Canonicalizable for RuleCatalog {
    const DOMAIN: &'static [u8] = b"rule-catalog";

    fn write_canonical(&self, out: &mut Vec<u8>) {
        for rule in self.prefix {
            out.push(rule.id());
            rule.pattern().canonical_bytes(out);
            out.extend_from_slice(rule.replacement());
            out.push(0);
        }
        for family in &self.factor {
            for rule in family {
                rule.canonical_bytes(out);
            }
        }
    }
}
