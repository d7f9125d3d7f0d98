//! Partition (entropy) scoring
//!
//! Shannon entropy of the feedback patterns a guess produces over the
//! candidate set, and the information ranking built on it.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_metrics, group_by_pattern, partition_score, shannon_entropy,
};
pub use selector::{
    LetterProfile, score_information_guesses, score_opening_guesses, select_guess_pool,
};
