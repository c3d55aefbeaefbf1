//! Prefix rules: corrections anchored at the start of the tape.
//!
//! Each left-hand side has the shape `head (unit)* tail`, `head (unit)+ tail`
//! or a plain literal, written below in that notation. A match is tested
//! only at position 0. The correction replaces the last pair of the match,
//! i.e. the pair starting two symbols before the end of the match.
//!
//! # Citations
//! - Blondin Massé, Paquin, Tremblay, Vuillon, "On generalized pseudostandard words over binary alphabets" (2013)
//! - Dvořáková, Florian, "On periodicity of generalized pseudostandard words" (2016)

use std::fmt;

/// Number of repetitions a repeated unit must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repetition {
    /// `(unit)*`
    ZeroOrMore,
    /// `(unit)+`
    OneOrMore,
}

impl Repetition {
    const fn min(self) -> usize {
        match self {
            Repetition::ZeroOrMore => 0,
            Repetition::OneOrMore => 1,
        }
    }
}

/// Left-hand side of a prefix rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrefixPattern {
    head: &'static [u8],
    repeated: Option<(&'static [u8], Repetition)>,
    tail: &'static [u8],
}

impl PrefixPattern {
    /// A pattern without repetition.
    pub const fn literal(text: &'static [u8]) -> Self {
        Self {
            head: text,
            repeated: None,
            tail: b"",
        }
    }

    /// `head (unit)* tail`
    pub const fn star(head: &'static [u8], unit: &'static [u8], tail: &'static [u8]) -> Self {
        Self {
            head,
            repeated: Some((unit, Repetition::ZeroOrMore)),
            tail,
        }
    }

    /// `head (unit)+ tail`
    pub const fn plus(head: &'static [u8], unit: &'static [u8], tail: &'static [u8]) -> Self {
        Self {
            head,
            repeated: Some((unit, Repetition::OneOrMore)),
            tail,
        }
    }

    /// Length of the match at the start of `tape`, if any.
    ///
    /// The repeated unit is consumed greedily: the largest repetition count
    /// after which the tail matches wins.
    pub fn match_len(&self, tape: &[u8]) -> Option<usize> {
        if !tape.starts_with(self.head) {
            return None;
        }
        let start = self.head.len();
        let Some((unit, repetition)) = self.repeated else {
            return tape[start..].starts_with(self.tail).then_some(start + self.tail.len());
        };

        let mut count = 0;
        while tape[start + count * unit.len()..].starts_with(unit) {
            count += 1;
        }
        (repetition.min()..=count).rev().find_map(|k| {
            let at = start + k * unit.len();
            tape[at..].starts_with(self.tail).then_some(at + self.tail.len())
        })
    }

    /// Canonical bytes of the pattern, used for fingerprinting.
    pub(crate) fn canonical_bytes(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.to_string().as_bytes());
        out.push(0);
    }
}

impl fmt::Display for PrefixPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = |bytes: &[u8]| bytes.iter().map(|&b| b as char).collect::<String>();
        write!(f, "{}", text(self.head))?;
        if let Some((unit, repetition)) = self.repeated {
            let op = match repetition {
                Repetition::ZeroOrMore => '*',
                Repetition::OneOrMore => '+',
            };
            write!(f, "({}){}", text(unit), op)?;
        }
        write!(f, "{}", text(self.tail))
    }
}

/// A prefix rule: pattern, identifier and the correction of its last pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrefixRule {
    id: u8,
    pattern: PrefixPattern,
    replacement: &'static [u8],
}

impl PrefixRule {
    const fn new(id: u8, pattern: PrefixPattern, replacement: &'static [u8]) -> Self {
        Self {
            id,
            pattern,
            replacement,
        }
    }

    /// Identifier of the rule (1 to 30, also its priority).
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Left-hand side.
    pub fn pattern(&self) -> &PrefixPattern {
        &self.pattern
    }

    /// Interleaved pairs replacing the last pair of the match.
    pub fn replacement(&self) -> &'static [u8] {
        self.replacement
    }

    /// Position of the pair to correct if the rule applies to `tape`.
    pub fn find(&self, tape: &[u8]) -> Option<usize> {
        self.pattern.match_len(tape)?.checked_sub(2)
    }
}

impl fmt::Display for PrefixRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let replacement: String = self.replacement.iter().map(|&b| b as char).collect();
        write!(f, "#{}: {} -> {}", self.id, self.pattern, replacement)
    }
}

/// The prefix rules in priority order.
pub static PREFIX_RULES: [PrefixRule; 30] = [
    PrefixRule::new(1, PrefixPattern::star(b"", b"00", b"02"), b"0012"),
    PrefixRule::new(2, PrefixPattern::plus(b"00", b"120R", b"10"), b"1220"),
    PrefixRule::new(3, PrefixPattern::star(b"0012", b"0R12", b"01"), b"0R21"),
    PrefixRule::new(4, PrefixPattern::star(b"001221", b"1R11", b"12"), b"1R22"),
    PrefixRule::new(5, PrefixPattern::star(b"0012211R", b"111R", b"10"), b"1100"),
    PrefixRule::new(6, PrefixPattern::star(b"0012", b"0R12", b"00"), b"0R20"),
    PrefixRule::new(7, PrefixPattern::star(b"00", b"120R", b"11"), b"1221"),
    PrefixRule::new(8, PrefixPattern::star(b"", b"001221", b"00122R"), b"211R"),
    PrefixRule::new(9, PrefixPattern::star(b"", b"001221", b"001R"), b"120R"),
    PrefixRule::new(10, PrefixPattern::plus(b"", b"001221", b"0R"), b"002R"),
    PrefixRule::new(11, PrefixPattern::plus(b"", b"001221", b"1R2R"), b"222R"),
    PrefixRule::new(12, PrefixPattern::plus(b"", b"001221", b"002R2R"), b"210R"),
    PrefixRule::new(13, PrefixPattern::star(b"", b"001221", b"00120R2R"), b"201R"),
    PrefixRule::new(14, PrefixPattern::star(b"00", b"120R", b"122111"), b"1R11"),
    PrefixRule::new(15, PrefixPattern::star(b"0012", b"0R12", b"0R2022"), b"2112"),
    PrefixRule::new(16, PrefixPattern::plus(b"", b"00", b"1212"), b"1R02"),
    PrefixRule::new(17, PrefixPattern::plus(b"0012", b"0R12", b"2020"), b"2R10"),
    PrefixRule::new(18, PrefixPattern::plus(b"", b"00", b"1210"), b"1120"),
    PrefixRule::new(19, PrefixPattern::star(b"0012", b"0R12", b"0R2112"), b"1022"),
    PrefixRule::new(20, PrefixPattern::star(b"001221", b"1R11", b"0020"), b"2R10"),
    PrefixRule::new(21, PrefixPattern::star(b"001221", b"1R11", b"1R2201"), b"0021"),
    PrefixRule::new(22, PrefixPattern::plus(b"", b"00", b"1202"), b"0R12"),
    PrefixRule::new(23, PrefixPattern::plus(b"", b"00", b"001111"), b"1R11"),
    PrefixRule::new(24, PrefixPattern::plus(b"", b"00", b"001020"), b"2R10"),
    PrefixRule::new(25, PrefixPattern::literal(b"0010"), b"122100"),
    PrefixRule::new(26, PrefixPattern::literal(b"001222"), b"210012"),
    PrefixRule::new(27, PrefixPattern::plus(b"00", b"120R", b"202111"), b"120021"),
    PrefixRule::new(28, PrefixPattern::plus(b"", b"00", b"121121"), b"200211"),
    PrefixRule::new(29, PrefixPattern::plus(b"00", b"120R", b"211020"), b"220110"),
    PrefixRule::new(30, PrefixPattern::star(b"001221", b"1R11", b"1R220020"), b"211200"),
];
