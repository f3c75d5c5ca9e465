//! Letter-frequency scoring
//!
//! A word scores the sum of the pool-wide frequencies of its distinct
//! letters. Words that cover common letters split the pool best.

use crate::core::{ALPHABET_SIZE, Word, letter_index};
use crate::error::CrackError;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Occurrence count per letter, indexed `a..=z`
pub type LetterCounts = [u32; ALPHABET_SIZE];

/// Letter occurrence counts over a pool, overall and per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequency {
    overall: LetterCounts,
    by_position: Vec<LetterCounts>,
}

impl LetterFrequency {
    /// Count every letter occurrence in `words`
    ///
    /// The per-position table has one entry per letter of the longest word.
    #[must_use]
    pub fn of(words: &[&Word]) -> Self {
        let width = words.iter().map(|w| w.len()).max().unwrap_or(0);
        let mut overall = [0u32; ALPHABET_SIZE];
        let mut by_position = vec![[0u32; ALPHABET_SIZE]; width];

        for word in words {
            for (i, &letter) in word.letters().iter().enumerate() {
                let idx = letter_index(letter);
                overall[idx] += 1;
                by_position[i][idx] += 1;
            }
        }

        Self {
            overall,
            by_position,
        }
    }

    #[inline]
    #[must_use]
    pub const fn overall(&self) -> &LetterCounts {
        &self.overall
    }

    #[inline]
    #[must_use]
    pub fn by_position(&self) -> &[LetterCounts] {
        &self.by_position
    }

    /// Overall count for one letter
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u32 {
        self.overall[letter_index(letter)]
    }
}

/// A word paired with its letter-frequency score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: u32,
}

impl ScoredWord<'_> {
    /// Higher score first, then lower word in sort order
    fn rank(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.word.cmp(self.word))
    }
}

/// Sum of `overall[letter]` over the distinct letters of `word`
///
/// # Examples
/// ```
/// use wordle_cracker::core::Word;
/// use wordle_cracker::solver::{LetterFrequency, score_word};
///
/// let pool = [Word::new("alpha").unwrap(), Word::new("pshaw").unwrap()];
/// let refs: Vec<&Word> = pool.iter().collect();
/// let freq = LetterFrequency::of(&refs);
///
/// // a(3) + l(1) + p(2) + h(2); the second 'a' is not counted again
/// assert_eq!(score_word(&pool[0], freq.overall()), 8);
/// ```
#[must_use]
pub fn score_word(word: &Word, overall: &LetterCounts) -> u32 {
    word.distinct_letters()
        .map(|letter| overall[letter_index(letter)])
        .sum()
}

/// Every word's score plus the words sharing the top score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScores<'a> {
    pub scores: Vec<ScoredWord<'a>>,
    pub max_words: Vec<&'a Word>,
    pub max_score: u32,
}

/// Score every word and collect the ones tied for the top score, in input order
#[must_use]
pub fn score_words<'a>(words: &[&'a Word], overall: &LetterCounts) -> WordScores<'a> {
    let scores: Vec<ScoredWord<'a>> = words
        .iter()
        .map(|&word| ScoredWord {
            word,
            score: score_word(word, overall),
        })
        .collect();

    let max_score = scores.iter().map(|s| s.score).max().unwrap_or(0);
    let max_words = scores
        .iter()
        .filter(|s| s.score == max_score)
        .map(|s| s.word)
        .collect();

    WordScores {
        scores,
        max_words,
        max_score,
    }
}

/// Highest-scoring word of `pool` not already guessed
///
/// Scores are computed against the pool's own letter frequencies. Ties go to
/// the word that sorts first, so the result never depends on input order.
///
/// # Errors
/// Returns `CrackError::NoCandidates` if the pool is empty or every word in
/// it has already been guessed.
pub fn best_guess<'a>(
    pool: &[&'a Word],
    already_guessed: &FxHashSet<&str>,
) -> Result<ScoredWord<'a>, CrackError> {
    let frequency = LetterFrequency::of(pool);
    let overall = frequency.overall();

    pool.iter()
        .filter(|word| !already_guessed.contains(word.text()))
        .map(|&word| ScoredWord {
            word,
            score: score_word(word, overall),
        })
        .max_by(ScoredWord::rank)
        .ok_or(CrackError::NoCandidates {
            excluded: pool.len(),
        })
}
