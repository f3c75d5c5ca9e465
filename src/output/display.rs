//! Display functions for command results

use super::formatters::{SAMPLE_SIZE, create_progress_bar, format_frequency, format_sample};
use crate::commands::PlayAllStatistics;
use crate::solver::{RoundReport, ScoredWord};
use colored::Colorize;

/// Print one stage of the solve: matches, frequency tables and top words
pub fn print_round_report(round: &RoundReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!("{}", round.label.bright_cyan().bold());

    let applied = if round.applied.is_empty() {
        "none".to_string()
    } else {
        round.applied.join(",")
    };
    println!(
        "\nFound {} matches for masks [{}], printing first few...",
        round.pool.len().to_string().bright_yellow().bold(),
        applied
    );
    println!("  {}", format_sample(round.pool.words(), SAMPLE_SIZE));

    println!("\nLetter frequency by position:");
    for (i, counts) in round.frequency.by_position().iter().enumerate() {
        println!("  [{i}] {}", format_frequency(counts));
    }

    println!("Letter frequency overall:");
    println!("  {}", format_frequency(round.frequency.overall()));

    let top: Vec<&str> = round.scores.max_words.iter().map(|w| w.text()).collect();
    println!(
        "\nSuggested guess(es): [{}] for a score of {}",
        top.join(" ").green(),
        round.scores.max_score
    );
    println!("{}", "═".repeat(60).cyan());
}

/// Print the final suggestion
pub fn print_suggestion(suggestion: &ScoredWord) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "Suggested guess: {} (score {})",
        suggestion.word.text().to_uppercase().bright_green().bold(),
        suggestion.score
    );
    println!("{}", "═".repeat(60).cyan());
}

/// Print self-play statistics
pub fn print_play_all_statistics(stats: &PlayAllStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SELF-PLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Total words:      {}", stats.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Solved:           {}",
        stats.solved.to_string().green()
    );
    if stats.failed > 0 {
        println!("   Unsolved:         {}", stats.failed.to_string().red());
    }
    println!(
        "   Best case:        {}",
        stats.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        stats.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    let mut rows: Vec<(usize, usize)> = stats
        .guess_distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    rows.sort_unstable();
    for (guesses, count) in rows {
        let pct = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words:".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!("   {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    if !stats.unsolved_words.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        println!("   {}", stats.unsolved_words.join(" "));
    }

    let mut first_guesses: Vec<(&String, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    if let Some((word, count)) = first_guesses.first() {
        println!(
            "\n🎯 Opening guess: {} ({count} games)",
            word.to_uppercase()
        );
    }
}
