//! The involutory antimorphisms E0, E1, E2.
//!
//! `Ei` fixes the letter `i` and exchanges the two other letters. Reading a
//! word backwards while applying `Ei` letter by letter is the antimorphism
//! used to define Ei-palindromes; the same table drives the letter algebra
//! of the factor rules.
//!
//! # Citations
//! - de Luca, De Luca, "Pseudopalindrome closure operators in free monoids" (2006)
//! - Blondin Massé, Paquin, Vuillon, "A Fine and Wilf's theorem for pseudoperiods" (2010)

use crate::alphabet::{AsLetter, Letter};
use crate::error::DirectiveError;

/// Lookup table of a single involution Ei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Involution {
    fixed: Letter,
    table: [Letter; 3],
}

impl Involution {
    /// Builds the involution fixing `i`.
    pub const fn of(i: Letter) -> Self {
        let i = i.index();
        let mut table = [Letter::Zero; 3];
        table[i] = letter(i);
        table[(i + 1) % 3] = letter((i + 2) % 3);
        table[(i + 2) % 3] = letter((i + 1) % 3);
        Self {
            fixed: letter(i),
            table,
        }
    }

    /// The letter fixed by this involution.
    #[inline]
    pub const fn fixed(&self) -> Letter {
        self.fixed
    }

    /// Image of `x`.
    #[inline]
    pub const fn image(&self, x: Letter) -> Letter {
        self.table[x.index()]
    }

    /// Image of an ASCII letter byte; bytes outside the alphabet are returned unchanged.
    #[inline]
    pub const fn image_byte(&self, byte: u8) -> u8 {
        match Letter::from_byte(byte) {
            Some(x) => self.image(x).to_byte(),
            None => byte,
        }
    }

    /// The full table, indexed by letter.
    #[inline]
    pub const fn table(&self) -> [Letter; 3] {
        self.table
    }

    /// The full table as characters, e.g. `['0', '2', '1']` for E0.
    pub fn chars(&self) -> [char; 3] {
        self.table.map(Letter::to_char)
    }
}

const fn letter(index: usize) -> Letter {
    match index {
        0 => Letter::Zero,
        1 => Letter::One,
        _ => Letter::Two,
    }
}

const E0: Involution = Involution::of(Letter::Zero);
const E1: Involution = Involution::of(Letter::One);
const E2: Involution = Involution::of(Letter::Two);

/// The three involutions, indexed by their fixed letter.
pub const INVOLUTIONS: [Involution; 3] = [E0, E1, E2];

/// Returns the involution fixing `i`.
#[inline]
pub const fn involution(i: Letter) -> &'static Involution {
    match i {
        Letter::Zero => &E0,
        Letter::One => &E1,
        Letter::Two => &E2,
    }
}

/// Returns the involution Ei for a boundary argument.
///
/// Accepts `0`, `1`, `2` as numbers or single-character strings.
///
/// # Examples
/// ```
/// assert_eq!(tgpc::ei(0).unwrap().chars(), ['0', '2', '1']);
/// assert_eq!(tgpc::ei("1").unwrap().chars(), ['2', '1', '0']);
/// assert!(tgpc::ei(3).is_err());
/// ```
pub fn ei(i: impl AsLetter) -> Result<Involution, DirectiveError> {
    Ok(*involution(i.as_letter()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_match_reference() {
        assert_eq!(ei(0).unwrap().chars(), ['0', '2', '1']);
        assert_eq!(ei(1).unwrap().chars(), ['2', '1', '0']);
        assert_eq!(ei(2).unwrap().chars(), ['1', '0', '2']);
    }

    #[test]
    fn involution_property() {
        for e in &INVOLUTIONS {
            assert_eq!(e.image(e.fixed()), e.fixed());
            for x in Letter::ALL {
                assert_eq!(e.image(e.image(x)), x);
            }
        }
    }

    #[test]
    fn rejects_out_of_alphabet() {
        assert_eq!(ei(3), Err(DirectiveError::InvalidSymbol("3".to_string())));
        assert!(ei("R").is_err());
        assert_eq!(ei('2').map(|e| e.fixed()), Ok(Letter::Two));
    }

    #[test]
    fn image_byte_leaves_reversal() {
        let e0 = involution(Letter::Zero);
        assert_eq!(e0.image_byte(b'1'), b'2');
        assert_eq!(e0.image_byte(b'R'), b'R');
    }
}
