//! Error taxonomy for the solving core
//!
//! Every variant is a deterministic function of the input: callers recover by
//! correcting the input and trying again. An empty candidate set is never an
//! error.

use crate::core::WordError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No dictionary words exist for the requested length
    #[error("no dictionary words of length {0}")]
    UnsupportedWordLength(usize),

    /// Feedback has an unknown symbol or the wrong number of positions
    #[error("malformed feedback: {0}")]
    MalformedFeedback(String),

    /// A guess or word list entry is not a valid word
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Feedback contradicts what is already locked at a position
    #[error("feedback conflicts with position {position}: {reason}")]
    ConflictingFeedback { position: usize, reason: String },
}
