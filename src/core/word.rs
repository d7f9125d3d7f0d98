//! Word representation
//!
//! A Word stores a lowercase word of any supported length along with its
//! per-letter occurrence counts for feedback simulation.

use super::letters::{ALPHABET_SIZE, LetterSet, letter_index};
use std::fmt;
use thiserror::Error;

/// Longest supported word
///
/// Feedback patterns are base-3 encoded into a `u32`, and 3^20 still fits.
pub const MAX_WORD_LENGTH: usize = 20;

/// An immutable lowercase word with letter count tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    counts: [u8; ALPHABET_SIZE],
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be 1 to {MAX_WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only the letters a-z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is zero or above `MAX_WORD_LENGTH`
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.length(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        if text.is_empty() || text.len() > MAX_WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        let mut counts = [0u8; ALPHABET_SIZE];
        let mut letters = LetterSet::new();
        for &ch in text.as_bytes() {
            counts[letter_index(ch)] += 1;
            letters.insert(ch);
        }

        Ok(Self {
            text,
            counts,
            letters,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word as ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Letter at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.length()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// How many times `letter` occurs
    #[inline]
    #[must_use]
    pub const fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[letter_index(letter)]
        } else {
            0
        }
    }

    /// The distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Occurrence counts indexed by `letter_index`
    #[inline]
    pub(crate) const fn counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.length(), 5);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().length(), 1);
        assert_eq!(Word::new("stone").unwrap().length(), 5);
        assert_eq!(Word::new("strength").unwrap().length(), 8);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
        assert_eq!(
            Word::new("a".repeat(MAX_WORD_LENGTH + 1)),
            Err(WordError::InvalidLength(MAX_WORD_LENGTH + 1))
        );
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b's'), 1);
        assert_eq!(word.count_of(b'z'), 0);
        assert_eq!(word.letters().len(), 4);
        assert!(word.has_letter(b'd'));
        assert!(!word.has_letter(b'a'));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("geese").unwrap();
        assert_eq!(word.char_at(0), b'g');
        assert_eq!(word.char_at(3), b's');
    }

    #[test]
    fn word_equality_and_display() {
        let a = Word::new("crane").unwrap();
        let b: Word = "CRANE".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(format!("{a}"), "crane");
    }
}
