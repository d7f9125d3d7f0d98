//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, OpenerResult};
use crate::core::{Feedback, Word};
use crate::solver::{Suggestion, Suggestions};
use colored::Colorize;

/// Print both rankings side by side with the candidate count
pub fn print_suggestions(suggestions: &Suggestions<'_>, candidates: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} candidates remaining",
        candidates.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if candidates == 0 {
        println!(
            "\n{}",
            "❌ No candidates remain! The feedback may be incorrect.".red()
        );
        return;
    }

    println!("\n🎯 {}", "Likely answers:".bright_cyan().bold());
    print_ranking(&suggestions.solutions);

    if suggestions.information.is_empty() {
        println!(
            "\n{}",
            "Too few candidates left to need an information guess.".bright_black()
        );
    } else {
        println!("\n📊 {}", "Information guesses:".bright_cyan().bold());
        print_ranking(&suggestions.information);
    }
}

fn print_ranking(ranking: &[Suggestion<'_>]) {
    let Some(top) = ranking.first().map(|s| s.score) else {
        return;
    };

    for (i, suggestion) in ranking.iter().enumerate() {
        let bar = create_progress_bar(suggestion.score, top, 20);
        println!(
            "   {:>2}. {} [{}] {:.4}",
            (i + 1).to_string().bright_black(),
            suggestion.word.text().to_uppercase().bright_white().bold(),
            bar.green(),
            suggestion.score
        );
    }
}

/// Print the guesses applied so far
pub fn print_history(history: &[(Word, Feedback)]) {
    for (i, (word, feedback)) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            feedback.to_emoji()
        );
    }
}

/// Print up to `limit` remaining candidates
pub fn print_candidates(candidates: &[&Word], limit: usize) {
    for candidate in candidates.iter().take(limit) {
        println!("  • {}", candidate.text().to_uppercase());
    }
    if candidates.len() > limit {
        println!(
            "  {}",
            format!("… and {} more", candidates.len() - limit).bright_black()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates in {} groups",
        result.metrics.max_partition, result.metrics.groups
    );
    if !result.in_dictionary {
        println!("   {}", "Not in the dictionary".yellow());
    } else if result.is_candidate {
        println!("   {}", "Still a possible answer".green());
    }
}

/// Print the scored opening table
pub fn print_openers(results: &[OpenerResult], dictionary_size: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if results.is_empty() {
        println!(
            "\n{}",
            "No opening table for this word length; first guesses are computed.".yellow()
        );
        return;
    }

    println!("\n📊 Against all {dictionary_size} words:");
    for result in results {
        let bar = entropy_bar(result.metrics.entropy, dictionary_size, 20);
        println!(
            "   {} [{}] {:.3} bits, worst case {}",
            result.word.to_uppercase().bright_white().bold(),
            bar.green(),
            result.metrics.entropy,
            result.metrics.max_partition
        );
    }
}
