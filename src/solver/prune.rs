//! Candidate pruning
//!
//! `prune_direct` re-runs the matcher on every word. `prune_fast` first
//! derives cheap per-position and per-letter rules from the constraint and
//! only runs the matcher on words that survive them. The rules are necessary
//! conditions of the matcher, so both paths keep exactly the same words.

use super::matcher::matches;
use crate::core::{ALPHABET_SIZE, Constraint, Mark, Word, letter_index};
use crate::error::CrackError;

/// Cheap rules derived from a single guess/mask pair
///
/// For each letter of the guess:
/// - a green forces that letter at its position
/// - greens and yellows each demand one more occurrence in the secret
/// - a black caps the occurrences at exactly the greens plus yellows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneRules {
    forced: Vec<Option<u8>>,
    min_counts: [u8; ALPHABET_SIZE],
    max_counts: [u8; ALPHABET_SIZE],
}

impl PruneRules {
    /// Derive the rules for one constraint
    #[must_use]
    pub fn new(constraint: &Constraint) -> Self {
        let mut forced = vec![None; constraint.guess.len()];
        let mut min_counts = [0u8; ALPHABET_SIZE];
        let mut max_counts = [u8::MAX; ALPHABET_SIZE];
        let mut has_black = [false; ALPHABET_SIZE];

        for (i, (&mark, &letter)) in constraint
            .mask
            .marks()
            .iter()
            .zip(constraint.guess.letters())
            .enumerate()
        {
            let idx = letter_index(letter);
            match mark {
                Mark::Green => {
                    forced[i] = Some(letter);
                    min_counts[idx] += 1;
                }
                Mark::Yellow => min_counts[idx] += 1,
                Mark::Black => has_black[idx] = true,
            }
        }

        for idx in 0..ALPHABET_SIZE {
            if has_black[idx] {
                max_counts[idx] = min_counts[idx];
            }
        }

        Self {
            forced,
            min_counts,
            max_counts,
        }
    }

    /// Word length the rules apply to
    #[must_use]
    pub fn len(&self) -> usize {
        self.forced.len()
    }

    /// True if the rules cover a zero-length word
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forced.is_empty()
    }

    /// True if `word` passes every rule; false means the matcher would reject it
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let letters = word.letters();

        let greens_ok = self
            .forced
            .iter()
            .zip(letters)
            .all(|(forced, &letter)| forced.is_none_or(|f| f == letter));
        if !greens_ok {
            return false;
        }

        (0..ALPHABET_SIZE).all(|idx| {
            let count = word.count_of(b'a' + idx as u8);
            count >= self.min_counts[idx] && count <= self.max_counts[idx]
        })
    }
}

/// Keep the words that could have been the secret when `constraint` was observed
///
/// Re-applies the matcher to every word.
///
/// # Errors
/// Returns `CrackError::InternalInvariant` if any word's length differs from
/// the constraint's.
pub fn prune_direct<'a>(
    pool: &[&'a Word],
    constraint: &Constraint,
) -> Result<Vec<&'a Word>, CrackError> {
    let mut kept = Vec::with_capacity(pool.len());
    for &word in pool {
        if matches(word, &constraint.mask, &constraint.guess)? {
            kept.push(word);
        }
    }
    Ok(kept)
}

/// Same result as [`prune_direct`], screening words with [`PruneRules`] first
///
/// # Errors
/// Returns `CrackError::InternalInvariant` if any word's length differs from
/// the constraint's.
pub fn prune_fast<'a>(
    pool: &[&'a Word],
    constraint: &Constraint,
) -> Result<Vec<&'a Word>, CrackError> {
    let rules = PruneRules::new(constraint);
    let mut kept = Vec::new();

    for &word in pool {
        // Mismatched lengths fall through so the matcher reports them
        if word.len() == rules.len() && !rules.admits(word) {
            continue;
        }
        if matches(word, &constraint.mask, &constraint.guess)? {
            kept.push(word);
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "aback", "alpha", "alpax", "ardor", "audio", "baton", "eerie", "erase", "floor", "geese",
        "llama", "pshaw", "psahw", "robot", "sassy", "speed", "third", "toads", "tshaw", "xxxwa",
    ];

    fn dictionary() -> Vec<Word> {
        WORDS.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn constraint(guess: &str, mask: &str) -> Constraint {
        Constraint::new(Word::new(guess).unwrap(), mask.parse().unwrap()).unwrap()
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn rules_from_duplicate_letters() {
        let rules = PruneRules::new(&constraint("alpax", "gggyb"));
        assert_eq!(rules.len(), 5);
        assert!(rules.admits(&Word::new("alpha").unwrap()));
        // Needs two a's
        assert!(!rules.admits(&Word::new("alpxy").unwrap()));
        // x is capped at zero occurrences
        assert!(!rules.admits(&Word::new("alpax").unwrap()));
    }

    #[test]
    fn rules_black_caps_letter_count() {
        // One green 'a' plus a black 'a' means exactly one 'a'
        let rules = PruneRules::new(&constraint("aaxxx", "gbbbb"));
        assert!(rules.admits(&Word::new("abcde").unwrap()));
        assert!(!rules.admits(&Word::new("abade").unwrap()));
        assert!(!rules.admits(&Word::new("bacde").unwrap()));
    }

    #[test]
    fn direct_keeps_possible_secrets() {
        let dict = dictionary();
        let pool: Vec<&Word> = dict.iter().collect();

        let kept = prune_direct(&pool, &constraint("pshaw", "bgggg")).unwrap();
        assert_eq!(texts(&kept), ["tshaw"]);
    }

    #[test]
    fn fast_and_direct_agree_on_synthesized_masks() {
        let dict = dictionary();
        let pool: Vec<&Word> = dict.iter().collect();

        for secret in &dict {
            for guess in &dict {
                let mask = crate::core::Mask::synthesize(secret, guess).unwrap();
                let c = Constraint::new(guess.clone(), mask).unwrap();
                let direct = prune_direct(&pool, &c).unwrap();
                let fast = prune_fast(&pool, &c).unwrap();
                assert_eq!(texts(&direct), texts(&fast), "{c}");
                assert!(direct.contains(&secret), "{secret} pruned by {c}");
            }
        }
    }

    #[test]
    fn fast_and_direct_agree_on_arbitrary_masks() {
        let dict = dictionary();
        let pool: Vec<&Word> = dict.iter().collect();

        for mask in ["bbbyy", "gybbb", "ggyyg", "yybgb", "gbbbg", "yyyyy", "bbbbb"] {
            for guess in &dict {
                let c = Constraint::new(guess.clone(), mask.parse().unwrap()).unwrap();
                assert_eq!(
                    texts(&prune_direct(&pool, &c).unwrap()),
                    texts(&prune_fast(&pool, &c).unwrap()),
                    "{c}"
                );
            }
        }
    }

    #[test]
    fn length_mismatch_surfaces_in_both_paths() {
        let foo = Word::new("foo").unwrap();
        let pool = vec![&foo];
        let c = constraint("pshaw", "ggggg");

        assert!(matches!(
            prune_direct(&pool, &c),
            Err(CrackError::InternalInvariant { .. })
        ));
        assert!(matches!(
            prune_fast(&pool, &c),
            Err(CrackError::InternalInvariant { .. })
        ));
    }
}
