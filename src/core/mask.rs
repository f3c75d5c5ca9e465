//! Colour-bar feedback masks
//!
//! A mask holds one mark per letter position:
//! - `g` = Green (letter correct and in the correct position)
//! - `y` = Yellow (letter present elsewhere)
//! - `b` = Black (letter absent beyond the occurrences already accounted for)
//!
//! Unlike a fixed five-letter encoding, a mask can be any length; every mask
//! in a session shares the length of the first one seen.

use super::Word;
use super::consumption::Consumption;
use crate::error::{CrackError, MaskError};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    Green,
    Yellow,
    Black,
}

impl Mark {
    /// Parse one mask symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' => Some(Self::Green),
            'y' => Some(Self::Yellow),
            'b' => Some(Self::Black),
            _ => None,
        }
    }

    /// The symbol used in the textual notation
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Black => 'b',
        }
    }
}

/// Feedback mask for one guess
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mask(Vec<Mark>);

impl Mask {
    /// Validate and parse a mask that must be `expected_len` symbols long
    ///
    /// # Errors
    /// Returns `MaskError::InvalidLength` if the length differs and
    /// `MaskError::InvalidSymbol` for any symbol other than `g`, `y` or `b`.
    ///
    /// # Examples
    /// ```
    /// use wordle_cracker::core::{Mark, Mask};
    ///
    /// let mask = Mask::validate("gybbb", 5).unwrap();
    /// assert_eq!(mask.marks()[1], Mark::Yellow);
    ///
    /// assert!(Mask::validate("gyb", 5).is_err());
    /// assert!(Mask::validate("gyxbb", 5).is_err());
    /// ```
    pub fn validate(text: &str, expected_len: usize) -> Result<Self, MaskError> {
        let actual = text.chars().count();
        if actual != expected_len {
            return Err(MaskError::InvalidLength {
                mask: text.to_string(),
                expected: expected_len,
                actual,
            });
        }

        text.chars()
            .map(|symbol| {
                Mark::from_symbol(symbol).ok_or_else(|| MaskError::InvalidSymbol {
                    mask: text.to_string(),
                    symbol,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Compute the mask a judge returns for `guess` when the answer is `secret`
    ///
    /// Greens are assigned first and consume their secret positions; every
    /// other position, left to right, is yellow if its letter still occurs at
    /// an unconsumed secret position (consuming the first such occurrence)
    /// and black otherwise.
    ///
    /// # Errors
    /// Returns `CrackError::InternalInvariant` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_cracker::core::{Mask, Word};
    ///
    /// let secret = Word::new("floor").unwrap();
    /// let guess = Word::new("robot").unwrap();
    /// let mask = Mask::synthesize(&secret, &guess).unwrap();
    /// assert_eq!(mask.to_string(), "yybgb");
    /// ```
    pub fn synthesize(secret: &Word, guess: &Word) -> Result<Self, CrackError> {
        if secret.len() != guess.len() {
            return Err(CrackError::InternalInvariant {
                secret: secret.text().to_string(),
                mask: String::new(),
                candidate: guess.text().to_string(),
            });
        }

        let mut marks = vec![Mark::Black; guess.len()];
        let mut secret_letters = Consumption::new(secret.letters());

        for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                marks[i] = Mark::Green;
                secret_letters.consume_at(i);
            }
        }

        for (i, &letter) in guess.letters().iter().enumerate() {
            if marks[i] == Mark::Green {
                continue;
            }
            if secret_letters.consume_first(letter) {
                marks[i] = Mark::Yellow;
            }
        }

        Ok(Self(marks))
    }

    /// The marks, one per position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length mask
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every position is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Green)
    }

    /// Count positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Mask {
    type Err = MaskError;

    /// Parse a mask of any length; only the symbols are checked
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MaskError::Empty);
        }
        Self::validate(s, s.chars().count())
    }
}
