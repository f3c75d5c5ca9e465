//! Crack command
//!
//! Turns the textual colour bars and guess/mask pairs into constraints and
//! runs every stage of the solver over them.

use crate::core::{Constraint, Mask, Word, unpack_guessed, unpack_masks};
use crate::error::CrackError;
use crate::solver::{Analysis, Solver};

/// Parsed input for one crack run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrackInput {
    /// Colour bars whose guesses are unknown
    pub masks: Vec<Mask>,
    /// Own guesses with their masks, in the order they were played
    pub constraints: Vec<Constraint>,
}

impl CrackInput {
    /// Parse the two optional notations; blank strings count as absent
    ///
    /// # Errors
    /// - `NoMasks` if neither is given
    /// - the mask, pair or word error for malformed input
    ///
    /// # Examples
    /// ```
    /// use wordle_cracker::commands::CrackInput;
    ///
    /// let input = CrackInput::parse(Some("bbbyy,gybbb"), Some("audio/ybbby")).unwrap();
    /// assert_eq!(input.masks.len(), 2);
    /// assert_eq!(input.constraints.len(), 1);
    /// assert_eq!(input.word_length(), 5);
    /// ```
    pub fn parse(colorbars: Option<&str>, guessed: Option<&str>) -> Result<Self, CrackError> {
        let colorbars = colorbars.map(str::trim).filter(|s| !s.is_empty());
        let guessed = guessed.map(str::trim).filter(|s| !s.is_empty());

        if colorbars.is_none() && guessed.is_none() {
            return Err(CrackError::NoMasks);
        }

        let masks = colorbars.map(unpack_masks).transpose()?.unwrap_or_default();
        let constraints = guessed.map(unpack_guessed).transpose()?.unwrap_or_default();

        Ok(Self { masks, constraints })
    }

    /// Length of the first mask seen: colour bars first, then pairs
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.masks
            .first()
            .or_else(|| self.constraints.first().map(|c| &c.mask))
            .map_or(0, Mask::len)
    }
}

/// Parse the optional known answer
///
/// # Errors
/// Returns `CrackError::InvalidWord` for a word with non-letters.
pub fn parse_known_answer(answer: Option<&str>) -> Result<Option<Word>, CrackError> {
    answer
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Word::new)
        .transpose()
        .map_err(CrackError::from)
}

/// Run every stage for `input`
///
/// # Errors
/// Propagates any solver error; see [`Solver::analyze`].
pub fn run_crack<'a>(solver: &Solver<'a>, input: &CrackInput) -> Result<Analysis<'a>, CrackError> {
    solver.analyze(&input.masks, &input.constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaskError;
    use crate::solver::SolverConfig;
    use crate::wordlists::DictionarySource;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn parse_requires_some_input() {
        assert!(matches!(
            CrackInput::parse(None, None),
            Err(CrackError::NoMasks)
        ));
        assert!(matches!(
            CrackInput::parse(Some(""), Some("  ")),
            Err(CrackError::NoMasks)
        ));
    }

    #[test]
    fn word_length_from_first_mask_seen() {
        let input = CrackInput::parse(None, Some("foo/gbb")).unwrap();
        assert_eq!(input.word_length(), 3);

        let input = CrackInput::parse(Some("bbbyy"), None).unwrap();
        assert_eq!(input.word_length(), 5);
        assert_eq!(CrackInput::default().word_length(), 0);
    }

    #[test]
    fn parse_surfaces_bad_input() {
        assert!(matches!(
            CrackInput::parse(Some("bbbyy,gy"), None),
            Err(CrackError::InvalidMask(MaskError::InvalidLength { .. }))
        ));
        assert!(matches!(
            CrackInput::parse(None, Some("foo-gbb")),
            Err(CrackError::MalformedPair { .. })
        ));
    }

    #[test]
    fn known_answer_parsing() {
        assert_eq!(parse_known_answer(None).unwrap(), None);
        assert_eq!(parse_known_answer(Some("")).unwrap(), None);
        assert_eq!(
            parse_known_answer(Some("Baton")).unwrap(),
            Some(Word::new("baton").unwrap())
        );
        assert!(parse_known_answer(Some("b4ton")).is_err());
    }

    #[test]
    fn crack_audio_toads_about() {
        // audio, toads, about, then the answer baton
        let words = words_from_slice(&["about", "audio", "baton", "boats", "doubt", "toads"]);
        let config = SolverConfig::new(DictionarySource::Open, 5)
            .with_known_answer(parse_known_answer(Some("baton")).unwrap());
        let solver = Solver::new(config, &words, &words);

        let input = CrackInput::parse(None, Some("audio/ybbby,toads/yyybb,about/yyyby")).unwrap();
        let analysis = run_crack(&solver, &input).unwrap();

        let remaining: Vec<&str> = analysis.pool.iter().map(Word::text).collect();
        assert_eq!(remaining, ["baton"]);
        assert_eq!(analysis.suggest().unwrap().word.text(), "baton");
    }
}
