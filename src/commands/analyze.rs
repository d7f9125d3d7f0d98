//! Word analysis command
//!
//! Reports how a single guess would split the current candidates.

use crate::core::Word;
use crate::solver::Session;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use anyhow::{Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub metrics: GuessMetrics,
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// Whether the word itself is in the dictionary
    pub in_dictionary: bool,
    /// Whether the word is still a possible answer
    pub is_candidate: bool,
}

/// Analyze a guess against the session's current candidates
///
/// The word does not have to be in the dictionary.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (contains anything other than letters)
/// - The word length differs from the session word length
pub fn analyze_word(session: &Session<'_>, word: &str) -> Result<AnalysisResult> {
    let word = Word::new(word)?;
    if word.length() != session.word_length() {
        bail!(
            "'{word}' has {} letters, this game uses {}",
            word.length(),
            session.word_length()
        );
    }

    let candidates = session.candidates();
    let metrics = calculate_metrics(&word, &candidates);

    Ok(AnalysisResult {
        word: word.text().to_string(),
        metrics,
        expected_reduction: metrics.entropy.exp2(),
        total_candidates: candidates.len(),
        in_dictionary: session.dictionary().contains(word.text()),
        is_candidate: candidates.iter().any(|c| c.text() == word.text()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DictionarySet;
    use crate::solver::RankerConfig;
    use crate::wordlists::embedded_dictionaries;

    #[test]
    fn analyze_valid_word() {
        let dictionaries = embedded_dictionaries();
        let session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();

        let result = analyze_word(&session, "slate").unwrap();

        assert_eq!(result.word, "slate");
        assert!(result.metrics.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert!(result.in_dictionary);
        assert!(result.is_candidate);
        assert_eq!(result.total_candidates, session.dictionary().len());
    }

    #[test]
    fn analyze_rejects_bad_input() {
        let dictionaries = embedded_dictionaries();
        let session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();

        assert!(analyze_word(&session, "sl4te").is_err());
        assert!(analyze_word(&session, "slat").is_err());
    }

    #[test]
    fn analyze_follows_feedback() {
        let words = ["cable", "fable", "maple", "crown"].map(|w| Word::new(w).unwrap());
        let dictionaries = DictionarySet::from_words(words);
        let mut session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();
        session.apply("dough", &"-----".parse().unwrap()).unwrap();

        let result = analyze_word(&session, "frown").unwrap();
        assert_eq!(result.total_candidates, 3);
        assert!(!result.in_dictionary);
        assert!(!result.is_candidate);
        // only fable shares a letter with frown
        assert_eq!(result.metrics.groups, 2);
        assert_eq!(result.metrics.max_partition, 2);
    }
}
