//! Dictionaries for the cracker
//!
//! Two sets of word lists are supported: a large open dictionary that serves
//! as both the mystery and the guessable list, and the game's own lists
//! ("cheat" mode), where answers and allowed guesses differ.

pub mod loader;

use crate::core::Word;
use crate::error::CrackError;
use std::fmt;
use std::path::Path;

/// Directory searched for dictionary files by default
pub const DEFAULT_DICT_DIR: &str = "dictionaries";

/// Open dictionary file, used for both pools
pub const OPEN_DICT: &str = "huge.dict";
/// Game answer list
pub const GAME_MYSTERY_DICT: &str = "wordleMystery.dict";
/// Game guess list
pub const GAME_GUESSABLE_DICT: &str = "wordleGuessable.dict";

/// Which word lists to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DictionarySource {
    /// One large open-source dictionary for both pools
    #[default]
    Open,
    /// The game's real mystery and guessable lists
    Game,
}

impl DictionarySource {
    #[must_use]
    pub const fn from_cheat(cheat: bool) -> Self {
        if cheat { Self::Game } else { Self::Open }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open dictionary {OPEN_DICT}"),
            Self::Game => write!(
                f,
                "game dictionaries {GAME_MYSTERY_DICT}/{GAME_GUESSABLE_DICT}"
            ),
        }
    }
}

/// Mystery and guessable pools, filtered to one length, sorted and unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionaries {
    pub mysteries: Vec<Word>,
    pub guessables: Vec<Word>,
}

impl Dictionaries {
    /// Build from raw word vectors
    #[must_use]
    pub fn new(mysteries: Vec<Word>, guessables: Vec<Word>, word_length: usize) -> Self {
        Self {
            mysteries: loader::prepare(mysteries, word_length),
            guessables: loader::prepare(guessables, word_length),
        }
    }

    /// Load the dictionaries for `source` from `dir`
    ///
    /// # Errors
    /// Returns `CrackError::Dictionary` if a file cannot be read.
    pub fn load(
        source: DictionarySource,
        dir: &Path,
        word_length: usize,
    ) -> Result<Self, CrackError> {
        let dictionaries = match source {
            DictionarySource::Open => {
                let words =
                    loader::prepare(loader::load_from_file(dir.join(OPEN_DICT))?, word_length);
                Self {
                    guessables: words.clone(),
                    mysteries: words,
                }
            }
            DictionarySource::Game => Self::new(
                loader::load_from_file(dir.join(GAME_MYSTERY_DICT))?,
                loader::load_from_file(dir.join(GAME_GUESSABLE_DICT))?,
                word_length,
            ),
        };

        log::info!(
            "{source}: {} mystery and {} guessable {word_length}-letter words",
            dictionaries.mysteries.len(),
            dictionaries.guessables.len()
        );
        Ok(dictionaries)
    }
}
