//! Line-based interactive mode
//!
//! Reads `word feedback` lines and prints fresh suggestions after each one.

use super::suggest::parse_guess;
use crate::core::{Feedback, Mark};
use crate::output::formatters::create_spinner;
use crate::output::{print_candidates, print_history, print_suggestions};
use crate::solver::Session;
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidate count above which ranking shows a spinner
const SPINNER_THRESHOLD: usize = 200;

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Guess { word: String, feedback: Feedback },
    New,
    Undo,
    Candidates,
    Help,
    Quit,
}

/// Parse a shell line; blank lines give `None`
///
/// Guesses are written `word feedback` or `word:feedback`. The feedback `win`
/// stands for all exact marks.
///
/// # Errors
///
/// Returns an error for unknown commands and unparsable feedback.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    let Some(first) = parts.next() else {
        return Ok(None);
    };

    let command = match (first.to_lowercase().as_str(), parts.next()) {
        ("quit" | "q" | "exit", None) => ShellCommand::Quit,
        ("new" | "n", None) => ShellCommand::New,
        ("undo" | "u", None) => ShellCommand::Undo,
        ("candidates" | "c", None) => ShellCommand::Candidates,
        ("help" | "h" | "?", None) => ShellCommand::Help,
        (_, None) if first.contains(':') => {
            let (word, feedback) = parse_guess(first)?;
            ShellCommand::Guess { word, feedback }
        }
        (_, None) => bail!("unknown command '{first}', type 'help'"),
        (word, Some(feedback)) => {
            if parts.next().is_some() {
                bail!("expected 'word feedback', got '{line}'");
            }
            let feedback = if feedback.eq_ignore_ascii_case("win") {
                Feedback::new(vec![Mark::Exact; word.chars().count()])?
            } else {
                feedback
                    .parse()
                    .with_context(|| format!("invalid feedback '{feedback}'"))?
            };
            ShellCommand::Guess {
                word: word.to_string(),
                feedback,
            }
        }
    };
    Ok(Some(command))
}

/// Run the interactive mode until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<R: BufRead>(session: &mut Session<'_>, input: R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Narrow - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help(session.word_length());

    let mut lines = input.lines();
    show_suggestions(session);

    loop {
        print!("\n{} ", format!("[{}]>", session.history().len() + 1).bright_cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{} {e:#}", "❌".red());
                continue;
            }
        };

        match command {
            ShellCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ShellCommand::Help => print_help(session.word_length()),
            ShellCommand::New => {
                session.reset();
                println!("\n🔄 New game started!");
                show_suggestions(session);
            }
            ShellCommand::Undo => match session.undo() {
                Some((word, _)) => {
                    println!("✓ Undid {}", word.text().to_uppercase());
                    show_suggestions(session);
                }
                None => println!("Nothing to undo!"),
            },
            ShellCommand::Candidates => {
                let candidates = session.candidates();
                println!("{} candidates:", candidates.len());
                print_candidates(&candidates, 50);
            }
            ShellCommand::Guess { word, feedback } => {
                if let Err(e) = session
                    .apply(&word, &feedback)
                    .with_context(|| format!("cannot apply '{word}'"))
                {
                    println!("{} {e:#}", "❌".red());
                    continue;
                }

                if feedback.is_solved() {
                    print_solved(session);
                    session.reset();
                    println!("\n🔄 New game started!");
                }
                show_suggestions(session);
            }
        }
    }
}

fn show_suggestions(session: &Session<'_>) {
    let candidates = session.candidates().len();
    let spinner = (candidates > SPINNER_THRESHOLD).then(|| create_spinner("Ranking guesses..."));
    let suggestions = session.suggest();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    print_suggestions(&suggestions, candidates);
}

fn print_solved(session: &Session<'_>) {
    let turns = session.history().len();
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );
    println!("\n  Guess history:");
    print_history(session.history());
    println!("\n{}", "═".repeat(70).bright_cyan());
}

fn print_help(length: usize) {
    println!(
        "Enter each guess with its feedback, e.g. '{} {}':",
        "stare".bright_white(),
        "--Y-G".bright_white()
    );
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' as the feedback if you got it right");
    println!("Words have {length} letters.");
    println!("Commands: 'new', 'undo', 'candidates', 'help', 'quit'");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DictionarySet, Word};
    use crate::solver::RankerConfig;

    #[test]
    fn parse_guess_forms() {
        let expected = ShellCommand::Guess {
            word: "stare".to_string(),
            feedback: "--Y-G".parse().unwrap(),
        };
        assert_eq!(parse_command("stare --Y-G").unwrap(), Some(expected.clone()));
        assert_eq!(parse_command("  stare:--Y-G ").unwrap(), Some(expected));
    }

    #[test]
    fn parse_win_shortcut() {
        let Some(ShellCommand::Guess { feedback, .. }) = parse_command("lake win").unwrap() else {
            panic!("expected a guess");
        };
        assert_eq!(feedback.length(), 4);
        assert!(feedback.is_solved());
    }

    #[test]
    fn parse_commands_and_blanks() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("QUIT").unwrap(), Some(ShellCommand::Quit));
        assert_eq!(parse_command("new").unwrap(), Some(ShellCommand::New));
        assert_eq!(parse_command("u").unwrap(), Some(ShellCommand::Undo));
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("stare --Y-G extra").is_err());
        assert!(parse_command("stare --Q-G").is_err());
    }

    #[test]
    fn scripted_game_updates_session() {
        let words = ["cable", "ankle", "abide", "maple", "stare"].map(|w| Word::new(w).unwrap());
        let dictionaries = DictionarySet::from_words(words);
        let mut session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();

        let script = "stare --Y-G\nbogus\ncrane --\nundo\nmaple -Y-GG\n";
        run_simple(&mut session, script.as_bytes()).unwrap();

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].0.text(), "maple");
        let candidates: Vec<&str> = session.candidates().iter().map(|w| w.text()).collect();
        assert_eq!(candidates, ["ankle"]);
    }

    #[test]
    fn solved_game_starts_over() {
        let words = ["cable", "ankle"].map(|w| Word::new(w).unwrap());
        let dictionaries = DictionarySet::from_words(words);
        let mut session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();

        run_simple(&mut session, "cable win\nquit\nankle GGGGG\n".as_bytes()).unwrap();
        assert!(session.history().is_empty());
        assert!(session.constraints().is_unconstrained());
    }
}
