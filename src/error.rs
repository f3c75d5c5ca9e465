//! Error types shared by the solver core and its collaborators

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// A malformed colour-bar mask
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("no masks were supplied")]
    Empty,

    #[error("masks must all be of the same length {expected}, got {actual} in {mask:?}")]
    InvalidLength {
        mask: String,
        expected: usize,
        actual: usize,
    },

    #[error("masks must contain only g, y, or b: {mask:?} has {symbol:?}")]
    InvalidSymbol { mask: String, symbol: char },
}

/// Everything that can go wrong while cracking a puzzle
#[derive(Debug, Error)]
pub enum CrackError {
    #[error("invalid mask: {0}")]
    InvalidMask(#[from] MaskError),

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error(
        "expected exactly one guess/mask pair in {entry:?}, found {fields} slash-delimited values"
    )]
    MalformedPair { entry: String, fields: usize },

    #[error("mystery word {answer:?} has been excluded from the matches {stage}")]
    Consistency { answer: String, stage: String },

    #[error("no candidates remain to suggest ({excluded} already guessed)")]
    NoCandidates { excluded: usize },

    #[error(
        "internal consistency error: word {secret:?}, mask {mask:?} and candidate {candidate:?} differ in length"
    )]
    InternalInvariant {
        secret: String,
        mask: String,
        candidate: String,
    },

    #[error("no masks supplied: pass colour bars, guess/mask pairs, or both")]
    NoMasks,

    #[error("failed to read dictionary {}: {source}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the crate
pub type Result<T, E = CrackError> = std::result::Result<T, E>;
