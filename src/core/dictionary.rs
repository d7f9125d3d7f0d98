//! Immutable dictionaries keyed by word length

use super::word::Word;
use crate::error::SolverError;
use rustc_hash::{FxHashMap, FxHashSet};

/// Ordered, duplicate-free words of a single length
///
/// Built once and shared read-only between sessions.
#[derive(Debug, Clone)]
pub struct Dictionary {
    length: usize,
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from the words of `length` letters in `words`
    ///
    /// Words of other lengths are ignored and repeated words keep their first
    /// position.
    ///
    /// # Errors
    /// Returns `UnsupportedWordLength` if no word has the requested length.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{Dictionary, Word};
    ///
    /// let words = ["crane", "slate", "crane", "cat"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(5, words).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn new(
        length: usize,
        words: impl IntoIterator<Item = Word>,
    ) -> Result<Self, SolverError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| w.length() == length && index.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(SolverError::UnsupportedWordLength(length));
        }

        Ok(Self {
            length,
            words,
            index,
        })
    }

    /// Length shared by every word
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text)
    }

    /// Look up a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        if !self.contains(text) {
            return None;
        }
        self.words.iter().find(|w| w.text() == text)
    }
}

/// Dictionaries for every word length present in a source list
#[derive(Debug, Clone, Default)]
pub struct DictionarySet {
    by_length: FxHashMap<usize, Dictionary>,
}

impl DictionarySet {
    /// Group `words` by length, preserving their order within each length
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut grouped: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        for word in words {
            grouped.entry(word.length()).or_default().push(word);
        }

        let by_length = grouped
            .into_iter()
            .filter_map(|(length, words)| {
                Dictionary::new(length, words)
                    .ok()
                    .map(|dictionary| (length, dictionary))
            })
            .collect();

        Self { by_length }
    }

    /// The dictionary for `length`
    ///
    /// # Errors
    /// Returns `UnsupportedWordLength` if no words of that length were loaded.
    pub fn get(&self, length: usize) -> Result<&Dictionary, SolverError> {
        self.by_length
            .get(&length)
            .ok_or(SolverError::UnsupportedWordLength(length))
    }

    /// Available word lengths, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}
