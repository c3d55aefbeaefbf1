//! The ternary alphabet A = {0,1,2} and the theta alphabet A ∪ {R}.
//!
//! Sequences cross the public boundary as plain strings; internally the
//! engines work on ASCII bytes that have already been validated against these
//! alphabets. [`Letter`] carries the algebra (involutions, substitutions) and
//! converts to and from those bytes.

use crate::error::DirectiveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Allowed characters of `delta` and of generated words.
pub const LETTERS: &str = "012";

/// Allowed characters of `theta`.
pub const THETA_SYMBOLS: &str = "012R";

/// Byte used for the plain reversal marker.
pub const REVERSAL: u8 = b'R';

/// A letter of the ternary alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    Zero = 0,
    One = 1,
    Two = 2,
}

impl Letter {
    /// All letters in ascending order.
    pub const ALL: [Letter; 3] = [Letter::Zero, Letter::One, Letter::Two];

    /// Returns the letter with the given numeric value.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Letter> {
        match index {
            0 => Some(Letter::Zero),
            1 => Some(Letter::One),
            2 => Some(Letter::Two),
            _ => None,
        }
    }

    /// Numeric value of the letter (0, 1 or 2).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parses an ASCII digit byte.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Letter> {
        match byte {
            b'0' => Some(Letter::Zero),
            b'1' => Some(Letter::One),
            b'2' => Some(Letter::Two),
            _ => None,
        }
    }

    /// ASCII digit byte of the letter.
    #[inline]
    pub const fn to_byte(self) -> u8 {
        b'0' + self as u8
    }

    /// Digit character of the letter.
    #[inline]
    pub const fn to_char(self) -> char {
        self.to_byte() as char
    }

    /// Parses a digit character.
    #[inline]
    pub fn from_char(c: char) -> Option<Letter> {
        if c.is_ascii() {
            Letter::from_byte(c as u8)
        } else {
            None
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A symbol of `theta`: plain reversal or the closure under one involution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Theta {
    /// `R`: palindromic closure.
    Reversal,
    /// `i`: Ei-palindromic closure.
    Involution(Letter),
}

impl Theta {
    /// Parses a theta byte (`0`, `1`, `2` or `R`).
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Theta> {
        match byte {
            REVERSAL => Some(Theta::Reversal),
            _ => match Letter::from_byte(byte) {
                Some(letter) => Some(Theta::Involution(letter)),
                None => None,
            },
        }
    }

    /// Parses a theta character.
    #[inline]
    pub fn from_char(c: char) -> Option<Theta> {
        if c.is_ascii() {
            Theta::from_byte(c as u8)
        } else {
            None
        }
    }

    /// ASCII byte of the symbol.
    #[inline]
    pub const fn to_byte(self) -> u8 {
        match self {
            Theta::Reversal => REVERSAL,
            Theta::Involution(letter) => letter.to_byte(),
        }
    }

    /// Character of the symbol.
    #[inline]
    pub const fn to_char(self) -> char {
        self.to_byte() as char
    }
}

impl fmt::Display for Theta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Conversion of a boundary argument into a [`Letter`].
///
/// Letter arguments are accepted either as numbers (`0`, `1`, `2`) or as
/// single-character strings (`"0"`, `'1'`, ...). Anything else is rejected
/// with [`DirectiveError::InvalidSymbol`].
pub trait AsLetter {
    /// Returns the letter denoted by `self`.
    fn as_letter(&self) -> Result<Letter, DirectiveError>;
}

impl AsLetter for Letter {
    fn as_letter(&self) -> Result<Letter, DirectiveError> {
        Ok(*self)
    }
}

impl AsLetter for char {
    fn as_letter(&self) -> Result<Letter, DirectiveError> {
        Letter::from_char(*self).ok_or_else(|| DirectiveError::InvalidSymbol(self.to_string()))
    }
}

impl AsLetter for &str {
    fn as_letter(&self) -> Result<Letter, DirectiveError> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.as_letter(),
            _ => Err(DirectiveError::InvalidSymbol(self.to_string())),
        }
    }
}

impl AsLetter for String {
    fn as_letter(&self) -> Result<Letter, DirectiveError> {
        self.as_str().as_letter()
    }
}

macro_rules! numeric_as_letter {
    ($($ty:ty),*) => {
        $(
            impl AsLetter for $ty {
                fn as_letter(&self) -> Result<Letter, DirectiveError> {
                    usize::try_from(*self)
                        .ok()
                        .and_then(Letter::from_index)
                        .ok_or_else(|| DirectiveError::InvalidSymbol(self.to_string()))
                }
            }
        )*
    };
}

numeric_as_letter!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Checks that `seq` only uses the letters `0`, `1`, `2`.
pub fn check_ternary(seq: &str) -> Result<(), DirectiveError> {
    if seq.bytes().all(|b| Letter::from_byte(b).is_some()) {
        Ok(())
    } else {
        Err(DirectiveError::InvalidAlphabet {
            sequence: seq.to_string(),
            allowed: LETTERS,
        })
    }
}

/// Checks that `seq` only uses the theta symbols `0`, `1`, `2`, `R`.
pub fn check_theta(seq: &str) -> Result<(), DirectiveError> {
    if seq.bytes().all(|b| Theta::from_byte(b).is_some()) {
        Ok(())
    } else {
        Err(DirectiveError::InvalidAlphabet {
            sequence: seq.to_string(),
            allowed: THETA_SYMBOLS,
        })
    }
}
