//! Formatting utilities for terminal output

use crate::core::Word;
use crate::solver::LetterCounts;

/// Matches shown per report before the list is cut off
pub const SAMPLE_SIZE: usize = 10;

/// Format letter counts as `e:12 a:9 ...`, most frequent first
///
/// Letters that never occur are left out; ties are listed alphabetically.
#[must_use]
pub fn format_frequency(counts: &LetterCounts) -> String {
    let mut entries: Vec<(char, u32)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(i, &count)| (char::from(b'a' + i as u8), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    entries
        .iter()
        .map(|(letter, count)| format!("{letter}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The first `limit` words joined by spaces, with `...` if any were cut
#[must_use]
pub fn format_sample(words: &[&Word], limit: usize) -> String {
    let mut sample = words
        .iter()
        .take(limit)
        .map(|w| w.text())
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > limit {
        sample.push_str(" ...");
    }
    sample
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
