//! Command implementations

pub mod analyze;
pub mod openers;
pub mod simple;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use openers::{OpenerResult, rank_openers};
pub use simple::{ShellCommand, parse_command, run_simple};
pub use suggest::{apply_guesses, parse_guess, run_suggest};
