//! Wordle Narrow
//!
//! Narrows a Wordle dictionary from guess feedback and ranks the next guess,
//! either as a likely answer or by the information it is expected to reveal.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_narrow::solver::{RankerConfig, Session};
//! use wordle_narrow::wordlists::embedded_dictionaries;
//!
//! let dictionaries = embedded_dictionaries();
//! let mut session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();
//!
//! session.apply("stare", &"--Y-G".parse().unwrap()).unwrap();
//! let suggestions = session.suggest();
//! for suggestion in &suggestions.solutions {
//!     println!("{} {:.1}", suggestion.word, suggestion.score);
//! }
//! # assert!(session.candidates().iter().all(|w| w.text().ends_with('e')));
//! ```

// Core domain types
pub mod core;

// Error type shared by the library
pub mod error;

// Filtering and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
