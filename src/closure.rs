//! Palindromic and pseudopalindromic closures, and word construction.
//!
//! The closure of `w` is the shortest (pseudo)palindrome having `w` as a
//! prefix. It is obtained by locating the longest (pseudo)palindromic suffix
//! of `w` and appending the (transformed) mirror image of what precedes it.
//! Iterating "append `delta[k]`, close under `theta[k]`" produces the
//! generalized pseudostandard word of a directive bi-sequence.
//!
//! # Citations
//! - de Luca, "Sturmian words: structure, combinatorics, and their arithmetics" (1997)
//! - Bucci, de Luca, De Luca, Zamboni, "On different generalizations of episturmian words" (2008)

use crate::alphabet::{check_ternary, AsLetter, Letter, Theta, LETTERS};
use crate::directive::DirectiveBiSequence;
use crate::error::DirectiveError;
use crate::involution::{involution, Involution};
use crate::palindrome::{is_eipal_bytes, is_pal_bytes};

/// Returns the palindromic closure of `seq`.
///
/// # Examples
/// ```
/// assert_eq!(tgpc::make_pal_closure("101"), "101");
/// assert_eq!(tgpc::make_pal_closure("102"), "10201");
/// ```
pub fn make_pal_closure(seq: &str) -> String {
    let chars: Vec<char> = seq.chars().collect();
    let drop = (0..chars.len())
        .find(|&i| {
            let suffix = &chars[i..];
            suffix.iter().eq(suffix.iter().rev())
        })
        .unwrap_or(chars.len());
    let mut closure = seq.to_string();
    closure.extend(chars[..drop].iter().rev());
    closure
}

/// Returns the Ei-palindromic closure of `seq`.
///
/// # Examples
/// ```
/// assert_eq!(tgpc::make_eipal_closure("102", 0), Ok("102".to_string()));
/// assert_eq!(tgpc::make_eipal_closure("101", 1), Ok("10121".to_string()));
/// ```
pub fn make_eipal_closure(seq: &str, i: impl AsLetter) -> Result<String, DirectiveError> {
    let i = i.as_letter()?;
    check_ternary(seq)?;
    let mut word = seq.as_bytes().to_vec();
    close_under_involution(&mut word, involution(i));
    Ok(word.into_iter().map(char::from).collect())
}

/// Number of leading symbols to mirror so that the rest is a palindrome.
fn pal_overhang(word: &[u8]) -> usize {
    (0..word.len())
        .find(|&i| is_pal_bytes(&word[i..]))
        .unwrap_or(word.len())
}

/// Number of leading symbols to mirror so that the rest is an Ei-palindrome.
fn eipal_overhang(word: &[u8], e: &Involution) -> usize {
    (0..word.len())
        .find(|&j| is_eipal_bytes(&word[j..], e))
        .unwrap_or(word.len())
}

pub(crate) fn close_under_reversal(word: &mut Vec<u8>) {
    let drop = pal_overhang(word);
    for x in (0..drop).rev() {
        word.push(word[x]);
    }
}

pub(crate) fn close_under_involution(word: &mut Vec<u8>, e: &Involution) {
    let drop = eipal_overhang(word, e);
    for x in (0..drop).rev() {
        word.push(e.image_byte(word[x]));
    }
}

/// Incremental construction of a generalized pseudostandard word.
///
/// Every call to [`WordBuilder::push`] appends one letter and closes the
/// word; the builder remembers each intermediate prefix `w_1, w_2, ...`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBuilder {
    word: Vec<u8>,
    /// Length of the word after each step.
    prefix_lens: Vec<usize>,
}

impl WordBuilder {
    /// Creates a builder starting from the empty word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder starting from a ternary seed `w_0`.
    pub fn with_seed(seed: &str) -> Result<Self, DirectiveError> {
        check_ternary(seed)?;
        Ok(Self {
            word: seed.as_bytes().to_vec(),
            prefix_lens: Vec::new(),
        })
    }

    /// Appends `letter` and closes the word under `theta`.
    pub fn push(&mut self, letter: Letter, theta: Theta) {
        self.word.push(letter.to_byte());
        match theta {
            Theta::Reversal => close_under_reversal(&mut self.word),
            Theta::Involution(i) => close_under_involution(&mut self.word, involution(i)),
        }
        self.prefix_lens.push(self.word.len());
    }

    /// Appends one step given as raw characters.
    ///
    /// Fails with [`DirectiveError::InvalidAlphabet`] if `delta` is not a
    /// letter and with [`DirectiveError::MalformedDirective`] if `theta` is
    /// neither `R` nor a letter. The word is left untouched on error.
    pub fn push_step(&mut self, delta: char, theta: char) -> Result<(), DirectiveError> {
        let letter = Letter::from_char(delta).ok_or_else(|| DirectiveError::InvalidAlphabet {
            sequence: delta.to_string(),
            allowed: LETTERS,
        })?;
        let theta = Theta::from_char(theta).ok_or(DirectiveError::MalformedDirective {
            step: self.prefix_lens.len(),
            symbol: theta,
        })?;
        self.push(letter, theta);
        Ok(())
    }

    /// Number of steps performed so far.
    pub fn steps(&self) -> usize {
        self.prefix_lens.len()
    }

    /// The current word.
    pub fn word(&self) -> String {
        self.word.iter().copied().map(char::from).collect()
    }

    /// The current word as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.word
    }

    /// The prefix `w_k` obtained after step `k` (1-based).
    pub fn prefix(&self, k: usize) -> Option<String> {
        let len = *self.prefix_lens.get(k.checked_sub(1)?)?;
        Some(self.word[..len].iter().copied().map(char::from).collect())
    }

    /// All prefixes `w_1 .. w_n` in construction order.
    pub fn prefixes(&self) -> Vec<String> {
        (1..=self.steps()).filter_map(|k| self.prefix(k)).collect()
    }

    /// Consumes the builder and returns the word.
    pub fn into_word(self) -> String {
        self.word.into_iter().map(char::from).collect()
    }
}

/// Builds the generalized pseudostandard word of `(delta, theta)` from `seed`.
///
/// # Examples
/// ```
/// assert_eq!(tgpc::make_word012("0011", "012R", ""), Ok("00221112200".to_string()));
/// ```
pub fn make_word012(delta: &str, theta: &str, seed: &str) -> Result<String, DirectiveError> {
    let directive = DirectiveBiSequence::new(delta, theta)?;
    let mut builder = WordBuilder::with_seed(seed)?;
    for (letter, theta) in directive.steps() {
        builder.push(letter, theta);
    }
    Ok(builder.into_word())
}
