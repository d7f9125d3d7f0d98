//! Precomputed opening words
//!
//! High-entropy first guesses for 5-letter English lists. Scoring just these
//! words skips the full dictionary pass on the first turn, at the cost of
//! ignoring anything outside the table.

use crate::core::{Dictionary, Word};

/// Opening words for 5-letter lists, strongest first
pub const FIVE_LETTER_OPENERS: &[&str] = &[
    "soare", "roate", "raise", "salet", "reast", "slate", "crate", "trace", "arise", "stare",
    "irate", "crane", "react",
];

/// The opening table for a word length (empty when none is known)
#[must_use]
pub const fn opening_table(word_length: usize) -> &'static [&'static str] {
    match word_length {
        5 => FIVE_LETTER_OPENERS,
        _ => &[],
    }
}

/// Table words present in `dictionary`, in table order
#[must_use]
pub fn opening_words(dictionary: &Dictionary) -> Vec<&Word> {
    opening_table(dictionary.word_length())
        .iter()
        .filter_map(|text| dictionary.find(text))
        .collect()
}
