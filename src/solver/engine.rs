//! Main solver loop

use super::config::SolverConfig;
use super::frequency::{LetterFrequency, ScoredWord, WordScores, best_guess, score_words};
use super::matcher::matches_any_guess;
use super::pool::CandidatePool;
use crate::core::{Constraint, Mask, Word};
use crate::error::{CrackError, MaskError};
use rustc_hash::FxHashSet;

/// Main solver
///
/// Holds the read-only dictionaries and the run configuration. Every method
/// builds fresh pools, so one solver can serve any number of runs or games.
pub struct Solver<'a> {
    config: SolverConfig,
    mysteries: &'a [Word],
    guessables: &'a [Word],
    play_pool: CandidatePool<'a>,
}

/// The pool after one stage of the solve, with its statistics
#[derive(Debug, Clone)]
pub struct RoundReport<'a> {
    pub label: String,
    /// Masks and guess/mask pairs applied so far, in input order
    pub applied: Vec<String>,
    pub pool: CandidatePool<'a>,
    pub frequency: LetterFrequency,
    pub scores: WordScores<'a>,
}

impl<'a> RoundReport<'a> {
    fn new(label: impl Into<String>, applied: &[String], pool: CandidatePool<'a>) -> Self {
        let frequency = LetterFrequency::of(pool.words());
        let scores = score_words(pool.words(), frequency.overall());
        Self {
            label: label.into(),
            applied: applied.to_vec(),
            pool,
            frequency,
            scores,
        }
    }
}

/// Every stage of a solve plus the final pool
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    pub rounds: Vec<RoundReport<'a>>,
    pub pool: CandidatePool<'a>,
    pub guessed: Vec<String>,
}

impl<'a> Analysis<'a> {
    /// The next guess: best-scoring word of the final pool not yet guessed
    ///
    /// # Errors
    /// Returns `CrackError::NoCandidates` if nothing is left to suggest.
    pub fn suggest(&self) -> Result<ScoredWord<'a>, CrackError> {
        let guessed: FxHashSet<&str> = self.guessed.iter().map(String::as_str).collect();
        best_guess(self.pool.words(), &guessed)
    }
}

/// One self-played game
#[derive(Debug, Clone)]
pub struct PlayedGame<'a> {
    pub secret: &'a Word,
    /// Each guess with the mask it drew
    pub rounds: Vec<Constraint>,
    pub solved: bool,
}

impl PlayedGame<'_> {
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.rounds.len()
    }
}

impl<'a> Solver<'a> {
    /// Create a solver over already loaded, length-filtered dictionaries
    ///
    /// # Parameters
    /// - `config`: word length, known answer and round limit
    /// - `mysteries`: words that can be the answer
    /// - `guessables`: words that may be submitted as guesses
    #[must_use]
    pub fn new(config: SolverConfig, mysteries: &'a [Word], guessables: &'a [Word]) -> Self {
        log::info!(
            "solver over the {} ({} mystery, {} guessable words)",
            config.source,
            mysteries.len(),
            guessables.len()
        );
        Self {
            config,
            mysteries,
            guessables,
            play_pool: CandidatePool::union(mysteries, guessables),
        }
    }

    /// Run every stage: initial colour bars, then each guess/mask pair in order
    ///
    /// The known answer, if configured, is checked after every stage.
    ///
    /// # Errors
    /// - `NoMasks` if both lists are empty
    /// - `InvalidMask` if a mask or guess has the wrong length
    /// - `Consistency` if the known answer drops out of the pool
    pub fn analyze(
        &self,
        masks: &[Mask],
        constraints: &[Constraint],
    ) -> Result<Analysis<'a>, CrackError> {
        if masks.is_empty() && constraints.is_empty() {
            return Err(CrackError::NoMasks);
        }
        self.check_lengths(masks, constraints)?;

        let mut pool = self.apply_initial_masks(masks)?;
        self.check_known_answer(&pool, "after the initial masks")?;

        let mut applied: Vec<String> = masks.iter().map(ToString::to_string).collect();
        let label = if masks.is_empty() {
            format!("Mystery dictionary ({})", self.config.source)
        } else {
            format!("Analysis of initial masks ({})", self.config.source)
        };
        let mut rounds = vec![RoundReport::new(label, &applied, pool.clone())];
        let mut guessed = Vec::with_capacity(constraints.len());

        for constraint in constraints {
            pool = pool.prune(constraint)?;
            self.check_known_answer(&pool, &format!("after guessing {constraint}"))?;

            applied.push(constraint.to_string());
            guessed.push(constraint.guess.text().to_string());
            rounds.push(RoundReport::new(
                format!("After applying {constraint}"),
                &applied,
                pool.clone(),
            ));
        }

        log::info!(
            "{} stage(s) applied, {} candidate(s) remain",
            rounds.len(),
            pool.len()
        );

        Ok(Analysis {
            rounds,
            pool,
            guessed,
        })
    }

    /// Mystery words consistent with colour bars whose guesses are unknown
    ///
    /// A mystery word survives if, for every mask, some guessable word would
    /// have drawn that mask against it. Without masks the whole mystery
    /// dictionary is returned.
    ///
    /// # Errors
    /// Returns `CrackError::InternalInvariant` if the dictionaries hold words
    /// of the wrong length.
    pub fn apply_initial_masks(&self, masks: &[Mask]) -> Result<CandidatePool<'a>, CrackError> {
        if masks.is_empty() {
            return Ok(CandidatePool::from_dictionary(self.mysteries));
        }

        let mut kept = Vec::new();
        for mystery in self.mysteries {
            if matches_any_guess(mystery, masks, self.guessables)? {
                kept.push(mystery);
            }
        }

        log::info!(
            "{} of {} mystery words fit {} initial mask(s)",
            kept.len(),
            self.mysteries.len(),
            masks.len()
        );
        Ok(CandidatePool::new(kept))
    }

    /// Fail if the known answer is configured but missing from `pool`
    ///
    /// # Errors
    /// Returns `CrackError::Consistency` naming `stage`.
    pub fn check_known_answer(&self, pool: &CandidatePool, stage: &str) -> Result<(), CrackError> {
        match &self.config.known_answer {
            Some(answer) if !pool.contains(answer) => {
                log::warn!("{answer} is not among the {} candidates {stage}", pool.len());
                Err(CrackError::Consistency {
                    answer: answer.text().to_string(),
                    stage: stage.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Play one game against `secret`, always guessing the best-scoring word
    ///
    /// The pool starts as both dictionaries combined, so the secret is always
    /// a candidate. Words are never guessed twice, so the game ends within
    /// the pool size; it counts as unsolved after `max_rounds` guesses.
    ///
    /// # Errors
    /// Returns `InternalInvariant` if `secret` has the wrong length and
    /// `NoCandidates` if the pool runs dry, which only happens when `secret`
    /// is not in either dictionary.
    pub fn play(&self, secret: &'a Word) -> Result<PlayedGame<'a>, CrackError> {
        let mut pool = self.play_pool.clone();
        let mut guessed: FxHashSet<&str> = FxHashSet::default();
        let mut rounds = Vec::new();

        for _ in 0..self.config.max_rounds {
            let suggestion = best_guess(pool.words(), &guessed)?;
            let guess = suggestion.word;
            let mask = Mask::synthesize(secret, guess)?;
            let solved = mask.is_solved();

            let constraint = Constraint {
                guess: guess.clone(),
                mask,
            };
            if solved {
                rounds.push(constraint);
                return Ok(PlayedGame {
                    secret,
                    rounds,
                    solved: true,
                });
            }

            pool = pool.prune(&constraint)?;
            guessed.insert(guess.text());
            rounds.push(constraint);
        }

        log::debug!("{secret} not solved in {} rounds", self.config.max_rounds);
        Ok(PlayedGame {
            secret,
            rounds,
            solved: false,
        })
    }

    fn check_lengths(&self, masks: &[Mask], constraints: &[Constraint]) -> Result<(), MaskError> {
        let expected = self.config.word_length;
        let masks = masks.iter().chain(constraints.iter().map(|c| &c.mask));

        for mask in masks {
            if mask.len() != expected {
                return Err(MaskError::InvalidLength {
                    mask: mask.to_string(),
                    expected,
                    actual: mask.len(),
                });
            }
        }
        Ok(())
    }
}
