//! Core domain types for the cracker
//!
//! Words, masks and constraints. Everything here is pure and has no
//! knowledge of dictionaries or output.

mod constraint;
mod consumption;
mod mask;
mod word;

pub(crate) use consumption::Consumption;

pub use constraint::{Constraint, unpack_guessed, unpack_masks};
pub use mask::{Mark, Mask};
pub use word::{ALPHABET_SIZE, MAX_WORD_LEN, Word, WordError, letter_index};
