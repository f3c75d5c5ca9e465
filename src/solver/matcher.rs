//! Constraint matching
//!
//! Decides whether a candidate guess could have produced a mask against a
//! given secret. This is the exact check the pruner relies on.

use crate::core::{Consumption, Mark, Mask, Word};
use crate::error::CrackError;

/// Returns true if `candidate` is not ruled out by `secret`/`mask`
///
/// In other words: had `candidate` been guessed while `secret` was the
/// answer, could the judge have returned `mask`?
///
/// # Algorithm
/// 1. Greens: `candidate[i]` must equal `secret[i]`; consume that position
/// 2. Yellows: `candidate[i]` must remain somewhere in the unconsumed secret,
///    but not as an unconsumed letter at position `i` itself; consume the
///    first unconsumed occurrence
/// 3. Blacks: `candidate[i]` must not remain anywhere in the unconsumed secret
///
/// The passes must run in this order: yellows only see what greens left, and
/// blacks only see what greens and yellows left.
///
/// # Errors
/// Returns `CrackError::InternalInvariant` if the three lengths differ.
///
/// # Examples
/// ```
/// use wordle_cracker::core::{Mask, Word};
/// use wordle_cracker::solver::matches;
///
/// let secret = Word::new("alpha").unwrap();
/// let mask: Mask = "gggyb".parse().unwrap();
/// let candidate = Word::new("alpax").unwrap();
/// assert!(matches(&secret, &mask, &candidate).unwrap());
/// ```
pub fn matches(secret: &Word, mask: &Mask, candidate: &Word) -> Result<bool, CrackError> {
    if secret.len() != mask.len() || secret.len() != candidate.len() {
        return Err(CrackError::InternalInvariant {
            secret: secret.text().to_string(),
            mask: mask.to_string(),
            candidate: candidate.text().to_string(),
        });
    }

    let secret_letters = secret.letters();
    let letters = candidate.letters();
    let marks = mask.marks();
    let mut remaining = Consumption::new(secret_letters);

    for (i, &mark) in marks.iter().enumerate() {
        if mark != Mark::Green {
            continue;
        }
        if letters[i] != secret_letters[i] {
            return Ok(false);
        }
        remaining.consume_at(i);
    }

    for (i, &mark) in marks.iter().enumerate() {
        if mark != Mark::Yellow {
            continue;
        }
        let letter = letters[i];

        // Present somewhere, but not right here
        if !remaining.is_available(letter) || remaining.available_at(i, letter) {
            return Ok(false);
        }
        remaining.consume_first(letter);
    }

    let blocked = marks
        .iter()
        .zip(letters)
        .any(|(&mark, &letter)| mark == Mark::Black && remaining.is_available(letter));

    Ok(!blocked)
}

/// Returns true if, for every mask, some word in `candidates` could have
/// produced it against `secret`
///
/// Used for colour bars that arrive without the guesses behind them.
///
/// # Errors
/// Propagates `CrackError::InternalInvariant` from [`matches`].
pub fn matches_any_guess(
    secret: &Word,
    masks: &[Mask],
    candidates: &[Word],
) -> Result<bool, CrackError> {
    for mask in masks {
        let mut found = false;
        for candidate in candidates {
            if matches(secret, mask, candidate)? {
                found = true;
                break;
            }
        }
        if !found {
            return Ok(false);
        }
    }
    Ok(true)
}
