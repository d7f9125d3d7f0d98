//! Word list loading utilities
//!
//! Files hold one word per line. Blank lines and lines starting with `#` are
//! ignored; entries that are not valid words are skipped with a warning.

use crate::core::{DictionarySet, Word};
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Parse word list text into valid words, in order
///
/// # Examples
/// ```
/// use wordle_narrow::wordlists::loader::parse_words;
///
/// let words = parse_words("# header\ncrane\n\nSlate\nca-t\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("skipping line {}: '{trimmed}': {e}", line + 1);
                    None
                }
            }
        })
        .collect()
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_narrow::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a file and group its words into per-length dictionaries
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_dictionaries<P: AsRef<Path>>(path: P) -> io::Result<DictionarySet> {
    load_from_file(path).map(DictionarySet::from_words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_narrow::wordlists::loader::words_from_slice;
/// use wordle_narrow::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
