//! Candidate filtering and guess ranking
//!
//! [`ConstraintSet`] accumulates feedback, [`filter`] applies it to a
//! dictionary, and [`GuessRanker`] orders the next guesses. [`Session`] ties
//! the three together for one puzzle.

mod config;
mod constraints;
pub mod entropy;
mod filter;
pub mod frequency;
pub mod openers;
mod ranker;
mod session;
mod suggestion;

pub use config::{OpeningMode, RankerConfig, SearchMode};
pub use constraints::{ConstraintSet, Slot};
pub use filter::{filter, is_consistent};
pub use frequency::score_solution_guesses;
pub use ranker::GuessRanker;
pub use session::Session;
pub use suggestion::{Strategy, Suggestion, Suggestions, rank};
