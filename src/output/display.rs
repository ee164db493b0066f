//! Display functions for command results

use super::formatters::{entropy_bar, percent};
use crate::commands::{AnalysisResult, ScoreResult};
use colored::Colorize;

/// Print the result of a scoring run with the top `top` openers
pub fn print_score_result(result: &ScoreResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING GUESS RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Words scored:     {}", result.table.len());
    println!("   Workers:          {}", result.workers);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    let ranked = result.table.ranked();
    let Some(best) = ranked.first() else {
        println!("\n{}", "No words to rank".yellow());
        return;
    };
    let max_entropy = best.expected_information;

    println!("\n🏆 {}", format!("Top {}:", top.min(ranked.len())).bright_cyan().bold());
    for (i, row) in ranked.iter().take(top).enumerate() {
        let bar = entropy_bar(row.expected_information, max_entropy, 30);
        println!(
            "   {:>3}. {}  [{}] {}  freq {}",
            i + 1,
            row.word.text().to_uppercase().bright_yellow().bold(),
            bar.green(),
            format!("{:.4} bits", row.expected_information).bright_yellow(),
            row.frequency
        );
    }
}

/// Print the result of word analysis with the `top` most likely patterns
pub fn print_analysis_result(result: &AnalysisResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_entropy = (result.total_words.max(1) as f64).log2();
    let bar = entropy_bar(result.expected_information, max_entropy, 30);

    println!(
        "\n📊 Against {} words (total frequency {}):",
        result.total_words, result.total_mass
    );
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.expected_information).bright_yellow()
    );
    match result.frequency {
        Some(frequency) => println!("   Frequency:   {frequency}"),
        None => println!("   Frequency:   {}", "not in corpus".yellow()),
    }
    println!(
        "   Expected:    {:.1} words remain",
        result.expected_remaining
    );
    println!("   Solve:       {} first try", percent(result.solve_probability));
    println!(
        "   Patterns:    {} matched, {} unmatched, {} impossible",
        result.breakdown.outcomes.len(),
        result.breakdown.unmatched,
        result.breakdown.impossible
    );

    println!("\n📈 {}", "Most likely feedback:".bright_cyan().bold());
    for outcome in result.breakdown.by_probability().into_iter().take(top) {
        println!(
            "   {} {} {:>5} words  {:.3} bits",
            outcome.pattern.to_emoji(),
            percent(outcome.probability),
            outcome.words,
            outcome.information
        );
    }
}
