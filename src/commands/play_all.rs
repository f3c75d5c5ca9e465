//! Play all words - self-play solver evaluation
//!
//! Runs the solver against every mystery word (or a subset) and gathers
//! guesses-to-solve statistics.

use crate::core::Word;
use crate::error::CrackError;
use crate::solver::{PlayedGame, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Which mystery words to play, and how
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayAllOptions {
    /// Only play the first `limit` words
    pub limit: Option<usize>,
    /// Play `sample` words drawn at random instead
    pub sample: Option<usize>,
    /// Seed for the random draw, so a sample can be replayed
    pub seed: u64,
    pub show_progress: bool,
}

/// Statistics from playing many games
#[derive(Debug, Clone, PartialEq)]
pub struct PlayAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    /// Guesses per word over every game played
    pub average_guesses: f64,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub hardest_words: Vec<(String, usize)>,
    pub unsolved_words: Vec<String>,
    pub first_guess_used: FxHashMap<String, usize>,
    pub total_time: Duration,
}

/// Pick the words to play, in sorted order
#[must_use]
pub fn select_targets<'a>(mysteries: &'a [Word], options: &PlayAllOptions) -> Vec<&'a Word> {
    let mut targets: Vec<&Word> = match options.sample {
        Some(n) => {
            let mut rng = StdRng::seed_from_u64(options.seed);
            mysteries.choose_multiple(&mut rng, n).collect()
        }
        None => mysteries.iter().collect(),
    };
    targets.sort_unstable();

    if let Some(limit) = options.limit {
        targets.truncate(limit);
    }
    targets
}

/// Play a game against every target word, in parallel
///
/// # Errors
/// Returns the first game error; see [`Solver::play`].
pub fn run_play_all<'a>(
    solver: &Solver<'a>,
    targets: &[&'a Word],
    show_progress: bool,
) -> Result<PlayAllStatistics, CrackError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let games = targets
        .par_iter()
        .map(|&secret| {
            let game = solver.play(secret);
            pb.inc(1);
            game
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");

    let stats = summarize(&games, start.elapsed());
    log::info!(
        "played {} games, average {:.3} guesses",
        stats.total_words,
        stats.average_guesses
    );
    Ok(stats)
}

/// Fold finished games into statistics
#[must_use]
pub fn summarize(games: &[PlayedGame<'_>], total_time: Duration) -> PlayAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut first_guess_used: FxHashMap<String, usize> = FxHashMap::default();

    for game in games {
        if game.solved {
            *guess_distribution.entry(game.num_guesses()).or_insert(0) += 1;
        }
        if let Some(first) = game.rounds.first() {
            *first_guess_used
                .entry(first.guess.text().to_string())
                .or_insert(0) += 1;
        }
    }

    let solved: Vec<&PlayedGame> = games.iter().filter(|g| g.solved).collect();
    let total_guesses: usize = games.iter().map(PlayedGame::num_guesses).sum();
    let average_guesses = if games.is_empty() {
        0.0
    } else {
        total_guesses as f64 / games.len() as f64
    };

    let mut hardest_words: Vec<(String, usize)> = solved
        .iter()
        .filter(|g| g.num_guesses() > 6)
        .map(|g| (g.secret.text().to_string(), g.num_guesses()))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(10);

    PlayAllStatistics {
        total_words: games.len(),
        solved: solved.len(),
        failed: games.len() - solved.len(),
        total_guesses,
        average_guesses,
        guess_distribution,
        min_guesses: solved.iter().map(|g| g.num_guesses()).min().unwrap_or(0),
        max_guesses: solved.iter().map(|g| g.num_guesses()).max().unwrap_or(0),
        hardest_words,
        unsolved_words: games
            .iter()
            .filter(|g| !g.solved)
            .map(|g| g.secret.text().to_string())
            .collect(),
        first_guess_used,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::DictionarySource;
    use crate::wordlists::loader::words_from_slice;

    const WORDS: &[&str] = &[
        "about", "alpha", "audio", "baton", "boats", "cigar", "crane", "crate", "doubt", "eerie",
        "floor", "grate", "irate", "llama", "pshaw", "rebut", "robot", "sissy", "slate", "speed",
        "third", "toads", "tshaw", "humph", "awake", "blush", "focal", "evade", "naval", "serve",
    ];

    fn solver_over(words: &[Word]) -> Solver<'_> {
        Solver::new(SolverConfig::new(DictionarySource::Open, 5), words, words)
    }

    #[test]
    fn every_word_solved_within_ten_rounds() {
        let words = words_from_slice(WORDS);
        let solver = solver_over(&words);
        let targets = select_targets(&words, &PlayAllOptions::default());

        let stats = run_play_all(&solver, &targets, false).unwrap();
        assert_eq!(stats.total_words, WORDS.len());
        assert_eq!(stats.solved, WORDS.len());
        assert_eq!(stats.failed, 0);
        assert!(stats.unsolved_words.is_empty());
        assert!(stats.max_guesses <= 10);
        assert!(stats.min_guesses >= 1);
        assert!(stats.average_guesses >= 1.0);
    }

    #[test]
    fn distribution_sums_to_solved() {
        let words = words_from_slice(WORDS);
        let solver = solver_over(&words);
        let targets = select_targets(&words, &PlayAllOptions::default());

        let stats = run_play_all(&solver, &targets, false).unwrap();
        let sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(sum, stats.solved);

        // Every game opens with the same suggestion
        assert_eq!(stats.first_guess_used.len(), 1);
        assert_eq!(stats.first_guess_used.values().sum::<usize>(), WORDS.len());
    }

    #[test]
    fn results_do_not_depend_on_scheduling() {
        let words = words_from_slice(WORDS);
        let solver = solver_over(&words);
        let targets = select_targets(&words, &PlayAllOptions::default());

        let first = run_play_all(&solver, &targets, false).unwrap();
        let second = run_play_all(&solver, &targets, false).unwrap();
        assert_eq!(first.total_guesses, second.total_guesses);
        assert_eq!(first.guess_distribution, second.guess_distribution);
    }

    #[test]
    fn select_targets_limit_and_sample() {
        let words = words_from_slice(WORDS);

        let limited = select_targets(
            &words,
            &PlayAllOptions {
                limit: Some(3),
                ..PlayAllOptions::default()
            },
        );
        assert_eq!(limited.len(), 3);

        let options = PlayAllOptions {
            sample: Some(5),
            seed: 7,
            ..PlayAllOptions::default()
        };
        let sample = select_targets(&words, &options);
        assert_eq!(sample.len(), 5);
        assert!(sample.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(sample, select_targets(&words, &options));
    }

    #[test]
    fn empty_target_list() {
        let words = words_from_slice(WORDS);
        let solver = solver_over(&words);

        let stats = run_play_all(&solver, &[], false).unwrap();
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.total_guesses, 0);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
    }
}
