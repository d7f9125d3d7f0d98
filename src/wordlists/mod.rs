//! Word lists for the solver
//!
//! The embedded list is compiled into the binary; [`loader`] reads the same
//! format from disk.

mod embedded;
pub mod loader;

use crate::core::DictionarySet;
pub use embedded::{WORDS, WORDS_COUNT};

/// Dictionaries built from the embedded word list, one per word length
///
/// # Examples
/// ```
/// use wordle_narrow::wordlists::embedded_dictionaries;
///
/// let dictionaries = embedded_dictionaries();
/// assert!(dictionaries.get(5).is_ok());
/// assert!(dictionaries.get(3).is_err());
/// ```
#[must_use]
pub fn embedded_dictionaries() -> DictionarySet {
    DictionarySet::from_words(loader::words_from_slice(WORDS))
}
