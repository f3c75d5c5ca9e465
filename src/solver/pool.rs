//! The candidate pool: words still consistent with every applied constraint

use super::prune::{prune_direct, prune_fast};
use crate::core::{Constraint, Word};
use crate::error::CrackError;
use std::iter::Copied;
use std::slice;

/// Sorted, deduplicated set of candidate words borrowed from a dictionary
///
/// Pruning never edits a pool in place; it returns a new one, so earlier
/// snapshots stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidatePool<'a> {
    words: Vec<&'a Word>,
}

impl<'a> CandidatePool<'a> {
    /// Build a pool from borrowed words, sorting and deduplicating them
    #[must_use]
    pub fn new(mut words: Vec<&'a Word>) -> Self {
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// A pool holding every word of a dictionary
    #[must_use]
    pub fn from_dictionary(dictionary: &'a [Word]) -> Self {
        Self::new(dictionary.iter().collect())
    }

    /// A pool holding every word of both dictionaries
    #[must_use]
    pub fn union(first: &'a [Word], second: &'a [Word]) -> Self {
        Self::new(first.iter().chain(second).collect())
    }

    /// Apply one constraint, returning the surviving words as a new pool
    ///
    /// # Errors
    /// Returns `CrackError::InternalInvariant` if a word's length differs
    /// from the constraint's.
    pub fn prune(&self, constraint: &Constraint) -> Result<Self, CrackError> {
        let words = prune_fast(&self.words, constraint)?;
        log::debug!(
            "{constraint}: {} -> {} candidates",
            self.words.len(),
            words.len()
        );
        Ok(Self { words })
    }

    /// Like [`prune`](Self::prune), re-running the matcher on every word
    ///
    /// # Errors
    /// Returns `CrackError::InternalInvariant` if a word's length differs
    /// from the constraint's.
    pub fn prune_direct(&self, constraint: &Constraint) -> Result<Self, CrackError> {
        Ok(Self {
            words: prune_direct(&self.words, constraint)?,
        })
    }

    /// Apply several constraints in order
    ///
    /// # Errors
    /// Propagates the first pruning error.
    pub fn prune_all<'c>(
        &self,
        constraints: impl IntoIterator<Item = &'c Constraint>,
    ) -> Result<Self, CrackError> {
        constraints
            .into_iter()
            .try_fold(self.clone(), |pool, constraint| pool.prune(constraint))
    }

    /// The words, in sort order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True if the pool holds a word with the same text
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words
            .binary_search_by(|probe| (*probe).cmp(word))
            .is_ok()
    }

    /// True if `self` holds no word that `other` lacks
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.words.iter().all(|w| other.contains(w))
    }

    /// Iterate over the words, in sort order
    pub fn iter(&self) -> Copied<slice::Iter<'_, &'a Word>> {
        self.words.iter().copied()
    }
}

impl<'p, 'a> IntoIterator for &'p CandidatePool<'a> {
    type Item = &'a Word;
    type IntoIter = Copied<slice::Iter<'p, &'a Word>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
