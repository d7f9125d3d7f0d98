//! Solution scoring by letter coverage
//!
//! Rewards candidates built from letters that are common among the remaining
//! candidates and that have not been tried yet.

use super::config::RankerConfig;
use super::suggestion::{Strategy, Suggestion, rank};
use crate::core::{ALPHABET_SIZE, LetterSet, Word, letter_index};

/// Total occurrences of each letter across `words`
#[must_use]
pub fn letter_totals(words: &[&Word]) -> [usize; ALPHABET_SIZE] {
    let mut totals = [0usize; ALPHABET_SIZE];
    for word in words {
        for &ch in word.bytes() {
            totals[letter_index(ch)] += 1;
        }
    }
    totals
}

/// Score each candidate as a possible answer
///
/// score = fresh unique letters × `fresh_letter_weight`
///       + Σ over unique letters of their total count × `frequency_weight`
///
/// # Examples
/// ```
/// use wordle_narrow::core::{LetterSet, Word};
/// use wordle_narrow::solver::{RankerConfig, score_solution_guesses};
///
/// let words: Vec<Word> = ["cable", "ankle"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// let ranked = score_solution_guesses(&candidates, LetterSet::new(), &RankerConfig::default());
/// assert_eq!(ranked.len(), 2);
/// assert!(ranked[0].score >= ranked[1].score);
/// ```
#[must_use]
pub fn score_solution_guesses<'a>(
    candidates: &[&'a Word],
    used: LetterSet,
    config: &RankerConfig,
) -> Vec<Suggestion<'a>> {
    let totals = letter_totals(candidates);

    let mut suggestions: Vec<Suggestion<'a>> = candidates
        .iter()
        .map(|&word| {
            let letters = word.letters();
            let fresh = letters.difference(used).len() as f64;
            let coverage: usize = letters.iter().map(|ch| totals[letter_index(ch)]).sum();

            Suggestion {
                word,
                score: fresh * config.fresh_letter_weight
                    + coverage as f64 * config.frequency_weight,
                strategy: Strategy::Solution,
            }
        })
        .collect();

    rank(&mut suggestions);
    suggestions
}
