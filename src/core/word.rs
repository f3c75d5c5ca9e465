//! Dictionary word representation
//!
//! A Word is an immutable, lowercase ASCII word of any length. Its per-letter
//! counts are computed once so that pruning can reject candidates cheaply.

use std::cmp::Ordering;
use std::fmt;

/// Number of letters in the alphabet words are drawn from
pub const ALPHABET_SIZE: usize = 26;

/// Longest word accepted; matching tracks positions in a `u128` bitmask
pub const MAX_WORD_LEN: usize = 128;

/// Index of a lowercase ASCII letter in `[0, 26)`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// A lowercase word with cached letter counts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    counts: [u8; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii(String),
    InvalidCharacters(String),
    TooLong(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii(text) => write!(f, "Word must contain only ASCII letters: {text}"),
            Self::InvalidCharacters(text) => {
                write!(f, "Word must contain only the letters a-z: {text}")
            }
            Self::TooLong(text) => {
                write!(f, "Word must be at most {MAX_WORD_LEN} letters: {text}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, lowercasing it
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, longer than `MAX_WORD_LEN`,
    /// or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_cracker::core::Word;
    ///
    /// let word = Word::new("Pshaw").unwrap();
    /// assert_eq!(word.text(), "pshaw");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        // Checked before lowercasing: some non-ASCII letters lowercase to ASCII
        if !text.is_ascii() {
            return Err(WordError::NonAscii(text));
        }

        let text = text.to_ascii_lowercase();
        if text.len() > MAX_WORD_LEN {
            return Err(WordError::TooLong(text));
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let mut counts = [0u8; ALPHABET_SIZE];
        for letter in text.bytes() {
            counts[letter_index(letter)] = counts[letter_index(letter)].saturating_add(1);
        }

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; words are never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// How many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub const fn count_of(&self, letter: u8) -> u8 {
        self.counts[letter_index(letter)]
    }

    /// Iterate over the distinct letters of the word, in alphabet order
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, _)| b'a' + i as u8)
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_lengths_are_not_fixed() {
        assert_eq!(Word::new("foo").unwrap().len(), 3);
        assert_eq!(Word::new("crackers").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert!(matches!(Word::new("cran3"), Err(WordError::InvalidCharacters(_))));
        assert!(matches!(Word::new("cran "), Err(WordError::InvalidCharacters(_))));
        assert!(matches!(Word::new("crâne"), Err(WordError::NonAscii(_))));
    }

    #[test]
    fn word_non_ascii_that_lowercases_to_ascii() {
        // KELVIN SIGN lowercases to a plain 'k'
        assert_eq!(
            Word::new("\u{212A}ite"),
            Err(WordError::NonAscii("\u{212A}ite".to_string()))
        );
    }

    #[test]
    fn word_length_is_capped() {
        assert_eq!(Word::new("a".repeat(MAX_WORD_LEN)).unwrap().len(), MAX_WORD_LEN);
        assert!(matches!(
            Word::new("a".repeat(MAX_WORD_LEN + 1)),
            Err(WordError::TooLong(_))
        ));
    }

    #[test]
    fn word_counts_duplicates() {
        let word = Word::new("alpha").unwrap();
        assert_eq!(word.count_of(b'a'), 2);
        assert_eq!(word.count_of(b'l'), 1);
        assert_eq!(word.count_of(b'z'), 0);
    }

    #[test]
    fn word_distinct_letters_in_alphabet_order() {
        let word = Word::new("speed").unwrap();
        let letters: Vec<u8> = word.distinct_letters().collect();
        assert_eq!(letters, b"deps".to_vec());
    }

    #[test]
    fn word_ordering_follows_text() {
        let mut words = vec![
            Word::new("def").unwrap(),
            Word::new("abc").unwrap(),
            Word::new("abd").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["abc", "abd", "def"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("pshaw").unwrap();
        assert_eq!(format!("{word}"), "pshaw");
    }
}
