//! Guess/mask constraints and the textual notation they arrive in
//!
//! Two notations are accepted:
//! - colour bars alone: `bbbyy,gybbb`
//! - guess/mask pairs: `foo/gbb,oof/bby`

use super::{Mask, Word};
use crate::error::{CrackError, MaskError};
use std::fmt;

/// A guess together with the mask it produced
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub guess: Word,
    pub mask: Mask,
}

impl Constraint {
    /// Pair a guess with its mask
    ///
    /// # Errors
    /// Returns `MaskError::InvalidLength` if the mask and guess lengths differ.
    pub fn new(guess: Word, mask: Mask) -> Result<Self, MaskError> {
        if mask.len() != guess.len() {
            return Err(MaskError::InvalidLength {
                mask: mask.to_string(),
                expected: guess.len(),
                actual: mask.len(),
            });
        }
        Ok(Self { guess, mask })
    }

    /// Parse a single `guess/mask` entry
    ///
    /// # Errors
    /// `MalformedPair` unless the entry has exactly two slash-delimited
    /// fields; `InvalidWord`/`InvalidMask` if either field is bad.
    ///
    /// # Examples
    /// ```
    /// use wordle_cracker::core::Constraint;
    ///
    /// let c = Constraint::parse("foo/gbb").unwrap();
    /// assert_eq!(c.guess.text(), "foo");
    /// assert_eq!(c.mask.to_string(), "gbb");
    ///
    /// assert!(Constraint::parse("foo").is_err());
    /// ```
    pub fn parse(entry: &str) -> Result<Self, CrackError> {
        let fields: Vec<&str> = entry.split('/').collect();
        let [guess, mask] = fields.as_slice() else {
            return Err(CrackError::MalformedPair {
                entry: entry.to_string(),
                fields: fields.len(),
            });
        };

        let guess = Word::new(*guess)?;
        let mask = Mask::validate(mask, guess.len())?;
        Ok(Self { guess, mask })
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.guess, self.mask)
    }
}

/// Unpack a comma-separated list of colour bars
///
/// Every mask must be as long as the first. The result is sorted and
/// deduplicated.
///
/// # Errors
/// `MaskError::Empty` for an empty list, otherwise the first validation error.
///
/// # Examples
/// ```
/// use wordle_cracker::core::unpack_masks;
///
/// let masks = unpack_masks("gybbb,bbbyy,gybbb").unwrap();
/// let texts: Vec<String> = masks.iter().map(ToString::to_string).collect();
/// assert_eq!(texts, ["bbbyy", "gybbb"]);
/// ```
pub fn unpack_masks(text: &str) -> Result<Vec<Mask>, MaskError> {
    let entries: Vec<&str> = text.split(',').collect();
    let expected_len = entries.first().map_or(0, |first| first.chars().count());
    if expected_len == 0 {
        return Err(MaskError::Empty);
    }

    let mut masks = entries
        .iter()
        .map(|entry| Mask::validate(entry, expected_len))
        .collect::<Result<Vec<_>, _>>()?;

    masks.sort_by_cached_key(ToString::to_string);
    masks.dedup();
    Ok(masks)
}

/// Unpack a comma-separated list of `guess/mask` pairs, in input order
///
/// # Errors
/// `MalformedPair` for an entry without exactly one `/`, and the word or mask
/// error for a bad field.
pub fn unpack_guessed(text: &str) -> Result<Vec<Constraint>, CrackError> {
    text.split(',').map(Constraint::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpack_masks_table() {
        let cases: &[(&str, &[&str], bool)] = &[
            ("", &[], true),
            ("bbbyy,gy,gyybb,gbygb,ggbgg", &[], true),
            ("bbbyy,gybbbbb,gyybb,gbygb,ggbgg", &[], true),
            ("bbbyy,gybbb,gyybb,gbygb,ggbgg,asdff", &[], true),
            ("bbbyy", &["bbbyy"], false),
            (
                "bbbyy,gybbb,gyybb,gbygb,ggbgg",
                &["bbbyy", "gbygb", "ggbgg", "gybbb", "gyybb"],
                false,
            ),
        ];

        for &(input, expected, expect_error) in cases {
            match unpack_masks(input) {
                Ok(masks) => {
                    assert!(!expect_error, "expected an error for {input:?}");
                    let texts: Vec<String> = masks.iter().map(ToString::to_string).collect();
                    assert_eq!(texts, expected, "for {input:?}");
                }
                Err(e) => assert!(expect_error, "unexpected error for {input:?}: {e}"),
            }
        }
    }

    #[test]
    fn unpack_masks_deduplicates() {
        let masks = unpack_masks("ybbby,ybbby,yyybb").unwrap();
        assert_eq!(masks.len(), 2);
    }

    #[test]
    fn unpack_guessed_keeps_input_order() {
        let pairs = unpack_guessed("foo/gbb,oof/bby").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].to_string(), "foo/gbb");
        assert_eq!(pairs[1].to_string(), "oof/bby");
    }

    #[test]
    fn unpack_guessed_rejects_malformed_pairs() {
        assert!(matches!(
            unpack_guessed("foo/gbb,oof"),
            Err(CrackError::MalformedPair { fields: 1, .. })
        ));
        assert!(matches!(
            unpack_guessed("foo/gbb/bbb"),
            Err(CrackError::MalformedPair { fields: 3, .. })
        ));
    }

    #[test]
    fn unpack_guessed_rejects_length_mismatch() {
        assert!(matches!(
            unpack_guessed("foo/gbbb"),
            Err(CrackError::InvalidMask(MaskError::InvalidLength { .. }))
        ));
        assert!(matches!(
            unpack_guessed("foo/gxb"),
            Err(CrackError::InvalidMask(MaskError::InvalidSymbol { symbol: 'x', .. }))
        ));
        assert!(matches!(
            unpack_guessed("f0o/gbb"),
            Err(CrackError::InvalidWord(_))
        ));
    }

    #[test]
    fn constraint_new_checks_lengths() {
        let guess = Word::new("foo").unwrap();
        assert!(Constraint::new(guess.clone(), "ggg".parse().unwrap()).is_ok());
        assert!(Constraint::new(guess, "gg".parse().unwrap()).is_err());
    }
}
