//! Constraint matching, pruning, scoring and the solver loop

mod config;
mod engine;
pub mod frequency;
pub mod matcher;
mod pool;
pub mod prune;

pub use config::{DEFAULT_MAX_ROUNDS, SolverConfig};
pub use engine::{Analysis, PlayedGame, RoundReport, Solver};
pub use frequency::{
    LetterCounts, LetterFrequency, ScoredWord, WordScores, best_guess, score_word, score_words,
};
pub use matcher::{matches, matches_any_guess};
pub use pool::CandidatePool;
pub use prune::{PruneRules, prune_direct, prune_fast};
