//! Guess ranking over a filtered candidate set
//!
//! Combines the two independent rankings: solution scoring over the
//! candidates themselves and information scoring over dictionary words.

use super::config::{OpeningMode, RankerConfig};
use super::constraints::ConstraintSet;
use super::entropy::{score_information_guesses, score_opening_guesses, select_guess_pool};
use super::frequency::score_solution_guesses;
use super::openers::opening_words;
use super::suggestion::{Suggestion, Suggestions};
use crate::core::{Dictionary, Word};
use log::debug;

/// Ranks next guesses for a candidate set
#[derive(Debug, Clone, Default)]
pub struct GuessRanker {
    config: RankerConfig,
}

impl GuessRanker {
    #[must_use]
    pub const fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Candidates ranked as likely answers
    #[must_use]
    pub fn solution_guesses<'a>(
        &self,
        candidates: &[&'a Word],
        constraints: &ConstraintSet,
    ) -> Vec<Suggestion<'a>> {
        score_solution_guesses(candidates, constraints.used(), &self.config)
    }

    /// Dictionary words ranked by expected information
    ///
    /// Empty when fewer than `min_candidates_for_information` candidates
    /// remain. Before any letter is used the opening path applies: pure
    /// partition score over either the guess pool or the opening table.
    #[must_use]
    pub fn information_guesses<'a>(
        &self,
        dictionary: &'a Dictionary,
        candidates: &[&Word],
        constraints: &ConstraintSet,
    ) -> Vec<Suggestion<'a>> {
        if candidates.len() < self.config.min_candidates_for_information {
            return Vec::new();
        }

        let used = constraints.used();
        if used.is_empty() {
            if self.config.opening == OpeningMode::Table {
                let table = opening_words(dictionary);
                if !table.is_empty() {
                    debug!("scoring {} words from the opening table", table.len());
                    return score_opening_guesses(&table, candidates, &self.config);
                }
                debug!("no opening table words in dictionary, computing openers");
            }
            let pool = select_guess_pool(dictionary, candidates, used, &self.config);
            return score_opening_guesses(&pool, candidates, &self.config);
        }

        let pool = select_guess_pool(dictionary, candidates, used, &self.config);
        score_information_guesses(&pool, candidates, constraints, &self.config)
    }

    /// Both rankings, each truncated to the configured limit
    #[must_use]
    pub fn suggest<'a>(
        &self,
        dictionary: &'a Dictionary,
        candidates: &[&'a Word],
        constraints: &ConstraintSet,
    ) -> Suggestions<'a> {
        let mut solutions = self.solution_guesses(candidates, constraints);
        let mut information = self.information_guesses(dictionary, candidates, constraints);
        solutions.truncate(self.config.limit);
        information.truncate(self.config.limit);

        Suggestions {
            solutions,
            information,
        }
    }
}
