//! Wordle Cracker - CLI
//!
//! Narrows a dictionary using colour bars and guess/mask pairs, then suggests
//! the next guess. `play-all` runs the solver against every mystery word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::{Path, PathBuf};
use wordle_cracker::{
    commands::{
        CrackInput, PlayAllOptions, parse_known_answer, run_crack, run_play_all, select_targets,
    },
    output::{print_play_all_statistics, print_round_report, print_suggestion},
    solver::{DEFAULT_MAX_ROUNDS, Solver, SolverConfig},
    wordlists::{DEFAULT_DICT_DIR, Dictionaries, DictionarySource},
};

#[derive(Parser)]
#[command(
    name = "wordle_cracker",
    about = "Cracks Wordle puzzles from shared colour bars and known guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Colour bars without guesses, comma separated (e.g. "bbbyy,gybbb")
    #[arg(short = 'c', long)]
    colorbars: Option<String>,

    /// Guess/mask pairs, comma separated (e.g. "audio/ybbby,toads/yyybb")
    #[arg(short = 'g', long)]
    guessed: Option<String>,

    /// Known answer; every stage is checked to still contain it
    #[arg(short = 'm', long)]
    mystery: Option<String>,

    /// Use the game's own mystery and guessable word lists
    #[arg(long, global = true)]
    cheat: bool,

    /// Directory holding the dictionary files
    #[arg(long, global = true, env = "CRACKER_DICT_DIR", default_value = DEFAULT_DICT_DIR)]
    dict_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the solver against every mystery word and report statistics
    PlayAll {
        /// Word length to play
        #[arg(short = 'n', long, default_value_t = 5)]
        length: usize,

        /// Limit number of words to play
        #[arg(short, long)]
        limit: Option<usize>,

        /// Play a random sample of this many words
        #[arg(short, long)]
        sample: Option<usize>,

        /// Seed for the random sample
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Give up on a word after this many guesses
        #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let source = DictionarySource::from_cheat(cli.cheat);

    match cli.command {
        Some(Commands::PlayAll {
            length,
            limit,
            sample,
            seed,
            max_rounds,
            no_progress,
        }) => {
            let options = PlayAllOptions {
                limit,
                sample,
                seed,
                show_progress: !no_progress,
            };
            run_play_all_command(source, &cli.dict_dir, length, max_rounds, &options)
        }
        None => run_crack_command(
            source,
            &cli.dict_dir,
            cli.colorbars.as_deref(),
            cli.guessed.as_deref(),
            cli.mystery.as_deref(),
        ),
    }
}

fn run_crack_command(
    source: DictionarySource,
    dict_dir: &Path,
    colorbars: Option<&str>,
    guessed: Option<&str>,
    mystery: Option<&str>,
) -> Result<()> {
    let input = CrackInput::parse(colorbars, guessed)?;
    let known_answer = parse_known_answer(mystery)?;
    let word_length = input.word_length();

    let dictionaries = Dictionaries::load(source, dict_dir, word_length)
        .with_context(|| format!("loading dictionaries from {}", dict_dir.display()))?;

    let config = SolverConfig::new(source, word_length).with_known_answer(known_answer);
    let solver = Solver::new(config, &dictionaries.mysteries, &dictionaries.guessables);

    let analysis = run_crack(&solver, &input)?;
    for round in &analysis.rounds {
        print_round_report(round);
    }
    print_suggestion(&analysis.suggest()?);

    Ok(())
}

fn run_play_all_command(
    source: DictionarySource,
    dict_dir: &Path,
    word_length: usize,
    max_rounds: usize,
    options: &PlayAllOptions,
) -> Result<()> {
    let dictionaries = Dictionaries::load(source, dict_dir, word_length)
        .with_context(|| format!("loading dictionaries from {}", dict_dir.display()))?;

    let config = SolverConfig::new(source, word_length).with_max_rounds(max_rounds);
    let solver = Solver::new(config, &dictionaries.mysteries, &dictionaries.guessables);

    let targets = select_targets(&dictionaries.mysteries, options);
    let stats = run_play_all(&solver, &targets, options.show_progress)?;
    print_play_all_statistics(&stats);

    Ok(())
}
