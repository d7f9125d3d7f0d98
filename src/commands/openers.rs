//! Opening table command
//!
//! Scores the fixed opening words against the whole dictionary.

use crate::core::Dictionary;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::openers::opening_words;
use rayon::prelude::*;

/// An opening word with its partition statistics
pub struct OpenerResult {
    pub word: String,
    pub metrics: GuessMetrics,
}

/// Opening table entries present in `dictionary`, best first
///
/// Empty when the dictionary length has no opening table.
#[must_use]
pub fn rank_openers(dictionary: &Dictionary) -> Vec<OpenerResult> {
    let candidates: Vec<_> = dictionary.words().iter().collect();

    let mut results: Vec<OpenerResult> = opening_words(dictionary)
        .par_iter()
        .map(|word| OpenerResult {
            word: word.text().to_string(),
            metrics: calculate_metrics(word, &candidates),
        })
        .collect();

    results.sort_by(|a, b| b.metrics.entropy.total_cmp(&a.metrics.entropy));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_dictionaries;

    #[test]
    fn five_letter_openers_are_ranked() {
        let dictionaries = embedded_dictionaries();
        let results = rank_openers(dictionaries.get(5).unwrap());

        assert!(!results.is_empty());
        assert!(results.iter().any(|r| r.word == "salet"));
        assert!(
            results
                .windows(2)
                .all(|pair| pair[0].metrics.entropy >= pair[1].metrics.entropy)
        );
    }

    #[test]
    fn other_lengths_have_no_table() {
        let dictionaries = embedded_dictionaries();
        assert!(rank_openers(dictionaries.get(4).unwrap()).is_empty());
    }
}
