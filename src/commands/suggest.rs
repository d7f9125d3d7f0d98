//! One-shot suggestion command
//!
//! Applies a list of `word:feedback` guesses and ranks the next guess.

use crate::core::Feedback;
use crate::solver::{Session, Suggestions};
use anyhow::{Context, Result, anyhow};

/// Split a `word:feedback` argument
///
/// # Errors
///
/// Returns an error if the separator is missing or the feedback does not parse.
///
/// # Examples
/// ```
/// use wordle_narrow::commands::parse_guess;
///
/// let (word, feedback) = parse_guess("stare:--Y-G").unwrap();
/// assert_eq!(word, "stare");
/// assert_eq!(feedback.to_string(), "--Y-G");
/// assert!(parse_guess("stare").is_err());
/// ```
pub fn parse_guess(arg: &str) -> Result<(String, Feedback)> {
    let (word, feedback) = arg
        .split_once(':')
        .ok_or_else(|| anyhow!("expected word:feedback, got '{arg}'"))?;
    let feedback = feedback
        .trim()
        .parse::<Feedback>()
        .with_context(|| format!("invalid feedback in '{arg}'"))?;
    Ok((word.trim().to_string(), feedback))
}

/// Apply `word:feedback` guesses in order
///
/// # Errors
///
/// Returns an error naming the first guess that could not be applied. Guesses
/// before it stay applied.
pub fn apply_guesses(session: &mut Session<'_>, guesses: &[String]) -> Result<()> {
    for arg in guesses {
        let (word, feedback) = parse_guess(arg)?;
        session
            .apply(&word, &feedback)
            .with_context(|| format!("cannot apply '{arg}'"))?;
    }
    Ok(())
}

/// Apply every guess in order, then rank the next guess
///
/// # Errors
///
/// Same as [`apply_guesses`].
pub fn run_suggest<'a>(session: &mut Session<'a>, guesses: &[String]) -> Result<Suggestions<'a>> {
    apply_guesses(session, guesses)?;
    Ok(session.suggest())
}
