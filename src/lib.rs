//! Wordle Cracker
//!
//! A constraint solver for Wordle-style puzzles: narrows a dictionary with
//! colour-bar masks and suggests the next guess by letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cracker::core::{Constraint, Mask, Word};
//! use wordle_cracker::solver::CandidatePool;
//!
//! let dictionary: Vec<Word> = ["baton", "boats", "toads"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let pool = CandidatePool::from_dictionary(&dictionary);
//!
//! // Guessing TOADS against BATON
//! let guess = Word::new("toads").unwrap();
//! let mask = Mask::synthesize(&dictionary[0], &guess).unwrap();
//! assert_eq!(mask.to_string(), "yyybb");
//!
//! let pool = pool.prune(&Constraint::new(guess, mask).unwrap()).unwrap();
//! assert_eq!(pool.len(), 1);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Matching, pruning, scoring and the solver loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{CrackError, MaskError};
