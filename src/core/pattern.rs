//! Feedback simulation and representation
//!
//! Feedback for one guess is a per-position `Mark`. For partition scoring the
//! marks are packed into a `Pattern`, a base-3 code where each position
//! contributes digit × 3^position:
//! - 0 = Absent (grey)
//! - 1 = Misplaced (yellow)
//! - 2 = Exact (green)

use super::letters::letter_index;
use super::word::{MAX_WORD_LENGTH, Word};
use crate::error::SolverError;
use std::fmt;

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// No further occurrence beyond those already confirmed
    Absent,
    /// In the word, but not at this position
    Misplaced,
    /// Correct letter at the correct position
    Exact,
}

impl Mark {
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Misplaced => 1,
            Self::Exact => 2,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'.'/'x'/⬜/⬛.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '.' | 'x' | 'X' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Run the two-pass matching of `guess` against `answer`
///
/// Pass 1 marks exact matches and consumes those letters from the answer.
/// Pass 2 walks the remaining guess positions left to right, marking a letter
/// misplaced only while the answer still has an unconsumed occurrence of it.
fn simulate(guess: &Word, answer: &Word) -> [Mark; MAX_WORD_LENGTH] {
    debug_assert_eq!(guess.length(), answer.length());

    let mut marks = [Mark::Absent; MAX_WORD_LENGTH];
    let mut available = *answer.counts();
    let guess_bytes = guess.bytes();
    let answer_bytes = answer.bytes();

    for (i, (&g, &a)) in guess_bytes.iter().zip(answer_bytes).enumerate() {
        if g == a {
            marks[i] = Mark::Exact;
            available[letter_index(g)] -= 1;
        }
    }

    for (i, &g) in guess_bytes.iter().enumerate() {
        if marks[i] == Mark::Exact {
            continue;
        }
        let slot = &mut available[letter_index(g)];
        if *slot > 0 {
            marks[i] = Mark::Misplaced;
            *slot -= 1;
        }
    }

    marks
}

/// Packed feedback code used to group candidates
///
/// Only meaningful alongside the word length it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u32);

impl Pattern {
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The all-exact pattern for words of `length` letters
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        Self(encode((0..length).map(|_| Mark::Exact)))
    }

    /// Calculate the pattern `guess` receives when `answer` is the target
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    ///
    /// // C(grey) R(grey) A(green) N(grey) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(Pattern::calculate(&guess, &answer).value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let marks = simulate(guess, answer);
        Self(encode(marks[..guess.length()].iter().copied()))
    }
}

fn encode(marks: impl Iterator<Item = Mark>) -> u32 {
    let mut code = 0u32;
    let mut multiplier = 1u32;
    for mark in marks {
        code += mark.digit() * multiplier;
        multiplier = multiplier.wrapping_mul(3);
    }
    code
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Vec<Mark>,
}

impl Feedback {
    /// Build feedback from explicit marks
    ///
    /// # Errors
    /// Returns `MalformedFeedback` if `marks` is empty or longer than
    /// `MAX_WORD_LENGTH`.
    pub fn new(marks: Vec<Mark>) -> Result<Self, SolverError> {
        if marks.is_empty() || marks.len() > MAX_WORD_LENGTH {
            return Err(SolverError::MalformedFeedback(format!(
                "expected 1 to {MAX_WORD_LENGTH} marks, got {}",
                marks.len()
            )));
        }
        Ok(Self { marks })
    }

    /// The feedback `guess` receives when `answer` is the target
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{Feedback, Word};
    ///
    /// let guess = Word::new("sheen").unwrap();
    /// let answer = Word::new("geese").unwrap();
    ///
    /// let feedback = Feedback::between(&guess, &answer);
    /// assert_eq!(feedback.to_string(), "Y-GY-");
    /// ```
    #[must_use]
    pub fn between(guess: &Word, answer: &Word) -> Self {
        let marks = simulate(guess, answer);
        Self {
            marks: marks[..guess.length()].to_vec(),
        }
    }

    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of positions covered
    #[must_use]
    pub fn length(&self) -> usize {
        self.marks.len()
    }

    /// True when every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Exact)
    }

    /// Packed pattern code for these marks
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        Pattern(encode(self.marks.iter().copied()))
    }

    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.to_emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = SolverError;

    /// Parse a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .trim()
            .chars()
            .map(|ch| {
                Mark::from_symbol(ch).ok_or_else(|| {
                    SolverError::MalformedFeedback(format!("unknown feedback symbol '{ch}'"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(marks)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            let ch = match mark {
                Mark::Exact => 'G',
                Mark::Misplaced => 'Y',
                Mark::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Feedback::between(&guess, &answer).to_string()
    }

    #[test]
    fn all_absent_and_all_exact() {
        assert_eq!(feedback("abcde", "fghij"), "-----");
        assert_eq!(feedback("crane", "crane"), "GGGGG");
    }

    #[test]
    fn exact_match_consumes_before_misplaced() {
        // shelf has a single e, so only the first e of eerie is reported
        assert_eq!(feedback("eerie", "shelf"), "Y----");
        // the exact e at 4 is claimed first, leaving one e for the leading pair
        assert_eq!(feedback("eerie", "there"), "Y-Y-G");
        assert_eq!(feedback("speed", "abide"), "--Y-Y");
    }

    #[test]
    fn sheen_against_geese() {
        // geese has three e's: one exact at 2, one claimed by the e at 3
        assert_eq!(feedback("sheen", "geese"), "Y-GY-");
    }

    #[test]
    fn misplaced_never_exceeds_answer_count() {
        // sheen has one e left after the exact match, only the first extra e gets it
        assert_eq!(feedback("geese", "sheen"), "-YGY-");
    }

    #[test]
    fn robot_against_floor() {
        assert_eq!(feedback("robot", "floor"), "YY-G-");
    }

    #[test]
    fn pattern_matches_feedback_code() {
        let guess = Word::new("stare").unwrap();
        let answer = Word::new("cable").unwrap();
        assert_eq!(
            Pattern::calculate(&guess, &answer),
            Feedback::between(&guess, &answer).pattern()
        );
    }

    #[test]
    fn perfect_pattern_depends_on_length() {
        let word = Word::new("crane").unwrap();
        assert_eq!(Pattern::calculate(&word, &word), Pattern::perfect(5));
        assert_eq!(Pattern::perfect(5).value(), 242);
        assert_eq!(Pattern::perfect(4).value(), 80);
    }

    #[test]
    fn parse_feedback_symbols() {
        let ascii: Feedback = "GY-gy".parse().unwrap();
        let emoji: Feedback = "🟩🟨⬜🟩🟨".parse().unwrap();
        assert_eq!(ascii, emoji);
        assert_eq!(ascii.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(ascii.length(), 5);
    }

    #[test]
    fn parse_feedback_rejects_unknown_symbols() {
        assert!(matches!(
            "GYQ--".parse::<Feedback>(),
            Err(SolverError::MalformedFeedback(_))
        ));
        assert!(matches!(
            "".parse::<Feedback>(),
            Err(SolverError::MalformedFeedback(_))
        ));
    }

    #[test]
    fn solved_feedback() {
        assert!("GGGG".parse::<Feedback>().unwrap().is_solved());
        assert!(!"GGGY".parse::<Feedback>().unwrap().is_solved());
    }
}
