//! Command implementations

pub mod crack;
pub mod play_all;

pub use crack::{CrackInput, parse_known_answer, run_crack};
pub use play_all::{PlayAllOptions, PlayAllStatistics, run_play_all, select_targets};
