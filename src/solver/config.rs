//! Solver configuration

use crate::core::Word;
use crate::wordlists::DictionarySource;

/// Rounds after which a self-played game counts as failed
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Everything the solver loop needs to know about a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Which dictionaries the pools were loaded from
    pub source: DictionarySource,
    /// Letters per word; every word and mask must have this length
    pub word_length: usize,
    /// The answer, if known; only used to check the masks
    pub known_answer: Option<Word>,
    pub max_rounds: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(source: DictionarySource, word_length: usize) -> Self {
        Self {
            source,
            word_length,
            known_answer: None,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    #[must_use]
    pub fn with_known_answer(mut self, answer: Option<Word>) -> Self {
        self.known_answer = answer;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
