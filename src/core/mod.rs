//! Core domain types
//!
//! Words, letter sets, feedback and dictionaries. Everything here is pure and
//! has no knowledge of solving strategy.

mod dictionary;
mod letters;
mod pattern;
mod word;

pub use dictionary::{Dictionary, DictionarySet};
pub use letters::{ALPHABET_SIZE, LetterSet, letter_index};
pub use pattern::{Feedback, Mark, Pattern};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
