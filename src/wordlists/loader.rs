//! Word list loading utilities
//!
//! Reads one-word-per-line files and prepares them for the solver: lowercased,
//! filtered to one length, sorted and deduplicated.

use crate::core::Word;
use crate::error::CrackError;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Blank lines and entries that are not plain letters are skipped; the rest
/// are lowercased.
///
/// # Errors
///
/// Returns `CrackError::Dictionary` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_cracker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionaries/huge.dict").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CrackError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CrackError::Dictionary {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_cracker::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "sh0rt", "Slate"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Sort and drop duplicates
#[must_use]
pub fn sort_unique(mut words: Vec<Word>) -> Vec<Word> {
    words.sort_unstable();
    words.dedup();
    words
}

/// Keep only words of `len` letters
#[must_use]
pub fn filter_by_len(words: Vec<Word>, len: usize) -> Vec<Word> {
    words.into_iter().filter(|w| w.len() == len).collect()
}

/// Filter to `len` letters, then sort and deduplicate
#[must_use]
pub fn prepare(words: Vec<Word>, len: usize) -> Vec<Word> {
    sort_unique(filter_by_len(words, len))
}
