//! Palindrome and Ei-palindrome tests.
//!
//! A word `w` is an Ei-palindrome when `w = Ei(reverse(w))`, i.e. every pair
//! of mirrored positions satisfies `w[x] = Ei(w[len - 1 - x])`. For odd
//! lengths this forces the middle letter to be the fixed letter `i`.

use crate::alphabet::{check_ternary, AsLetter, Letter, Theta};
use crate::error::DirectiveError;
use crate::involution::{involution, Involution};

/// Returns `true` if `seq` reads the same in both directions.
///
/// # Examples
/// ```
/// assert!(tgpc::is_pal("010"));
/// assert!(!tgpc::is_pal("012"));
/// ```
pub fn is_pal(seq: &str) -> bool {
    seq.chars().eq(seq.chars().rev())
}

/// Returns `true` if `seq` is an Ei-palindrome.
///
/// `seq` must be ternary and `i` one of `0`, `1`, `2`.
///
/// # Examples
/// ```
/// assert_eq!(tgpc::is_eipal("012", 1), Ok(true));
/// assert_eq!(tgpc::is_eipal("002", 1), Ok(false));
/// ```
pub fn is_eipal(seq: &str, i: impl AsLetter) -> Result<bool, DirectiveError> {
    let i = i.as_letter()?;
    check_ternary(seq)?;
    Ok(is_eipal_bytes(seq.as_bytes(), involution(i)))
}

/// Byte-level palindrome test.
pub(crate) fn is_pal_bytes(seq: &[u8]) -> bool {
    seq.iter().eq(seq.iter().rev())
}

/// Byte-level Ei-palindrome test on an already validated ternary word.
pub(crate) fn is_eipal_bytes(seq: &[u8], e: &Involution) -> bool {
    let len = seq.len();
    (0..len.div_ceil(2)).all(|x| seq[x] == e.image_byte(seq[len - 1 - x]))
}

/// Classifies a ternary word as pseudopalindromic.
///
/// Returns the first matching kind in the priority order E0, E1, E2, R, or
/// `None` if the word is neither an Ei-palindrome nor a palindrome. A constant
/// word `ii..i` is therefore reported as an Ei-palindrome.
pub fn classify(seq: &str) -> Result<Option<Theta>, DirectiveError> {
    check_ternary(seq)?;
    Ok(classify_bytes(seq.as_bytes()))
}

pub(crate) fn classify_bytes(seq: &[u8]) -> Option<Theta> {
    Letter::ALL
        .into_iter()
        .find(|&i| is_eipal_bytes(seq, involution(i)))
        .map(Theta::Involution)
        .or_else(|| is_pal_bytes(seq).then_some(Theta::Reversal))
}
