//! Rewrite rules over the interleaved tape.
//!
//! - [`prefix`]: the 30 corrections anchored at the start of the tape.
//! - [`factor`]: the four parametrized families matched at any pair offset.
//! - [`catalog`]: the process-wide table and next-correction selection.

pub mod catalog;
pub mod factor;
pub mod prefix;

pub use catalog::{RewriteCandidate, RuleCatalog, RuleRef};
pub use factor::{FactorFamily, FactorRule};
pub use prefix::{PrefixPattern, PrefixRule, Repetition, PREFIX_RULES};
