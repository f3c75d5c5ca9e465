//! Per-position bookkeeping of which secret letters are already "spoken for"
//!
//! Both the matcher and the mask synthesizer walk a secret word, consuming
//! positions as greens and yellows claim them. A letter only counts as still
//! available while at least one of its positions is unconsumed.
//!
//! Words are at most `MAX_WORD_LEN` letters, so the consumed positions fit in
//! one `u128` and matching never allocates.

use super::MAX_WORD_LEN;

/// Tracks consumed positions of a secret word
#[derive(Debug, Clone, Copy)]
pub(crate) struct Consumption<'a> {
    secret: &'a [u8],
    consumed: u128,
}

impl<'a> Consumption<'a> {
    pub(crate) fn new(secret: &'a [u8]) -> Self {
        debug_assert!(secret.len() <= MAX_WORD_LEN);
        Self {
            secret,
            consumed: 0,
        }
    }

    #[inline]
    const fn is_consumed(&self, position: usize) -> bool {
        self.consumed & (1 << position) != 0
    }

    /// Mark a single position as spoken for
    #[inline]
    pub(crate) fn consume_at(&mut self, position: usize) {
        self.consumed |= 1 << position;
    }

    /// First unconsumed position holding `letter`, if any
    #[inline]
    pub(crate) fn first_available(&self, letter: u8) -> Option<usize> {
        self.secret
            .iter()
            .enumerate()
            .position(|(i, &l)| l == letter && !self.is_consumed(i))
    }

    /// True if `letter` still occurs at some unconsumed position
    #[inline]
    pub(crate) fn is_available(&self, letter: u8) -> bool {
        self.first_available(letter).is_some()
    }

    /// True if `position` is unconsumed and holds `letter`
    #[inline]
    pub(crate) fn available_at(&self, position: usize, letter: u8) -> bool {
        self.secret[position] == letter && !self.is_consumed(position)
    }

    /// Consume the first unconsumed occurrence of `letter`
    ///
    /// Returns false when no occurrence is left.
    pub(crate) fn consume_first(&mut self, letter: u8) -> bool {
        match self.first_available(letter) {
            Some(position) => {
                self.consume_at(position);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_first_occurrence_only() {
        let mut state = Consumption::new(b"alpha");
        assert_eq!(state.first_available(b'a'), Some(0));

        assert!(state.consume_first(b'a'));
        assert_eq!(state.first_available(b'a'), Some(4));

        assert!(state.consume_first(b'a'));
        assert!(!state.is_available(b'a'));
        assert!(!state.consume_first(b'a'));
    }

    #[test]
    fn consumed_position_is_not_available() {
        let mut state = Consumption::new(b"pshaw");
        assert!(state.available_at(0, b'p'));

        state.consume_at(0);
        assert!(!state.available_at(0, b'p'));
        assert!(!state.is_available(b'p'));
        assert!(state.is_available(b's'));
    }

    #[test]
    fn tracks_positions_of_the_longest_word() {
        let secret = [b'a'; MAX_WORD_LEN];
        let mut state = Consumption::new(&secret);

        state.consume_at(MAX_WORD_LEN - 1);
        assert!(!state.available_at(MAX_WORD_LEN - 1, b'a'));
        assert_eq!(state.first_available(b'a'), Some(0));

        for _ in 0..MAX_WORD_LEN - 1 {
            assert!(state.consume_first(b'a'));
        }
        assert!(!state.is_available(b'a'));
    }
}
