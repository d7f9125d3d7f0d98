//! Ranking configuration
//!
//! Weights and search toggles for the guess ranker. Defaults reproduce the
//! standard scoring; the CLI overrides individual fields.

/// How information guesses are drawn from the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Score every dictionary word
    Exhaustive,
    /// Above `prune_above` candidates, score only the candidates plus words
    /// rich in common unused letters
    ///
    /// This is an approximation: the true entropy-maximising word can be
    /// left out of the pool.
    #[default]
    Pruned,
}

impl SearchMode {
    /// Parse a mode name ("exhaustive" or "pruned")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exhaustive" | "full" => Some(Self::Exhaustive),
            "pruned" | "fast" => Some(Self::Pruned),
            _ => None,
        }
    }
}

/// How the first guess of a session is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpeningMode {
    /// Partition-score every dictionary word against the full candidate set
    #[default]
    Computed,
    /// Score only the precomputed opening table (falls back to `Computed`
    /// when none of its words are in the dictionary)
    Table,
}

impl OpeningMode {
    /// Parse a mode name ("computed" or "table")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "computed" | "entropy" => Some(Self::Computed),
            "table" | "precomputed" => Some(Self::Table),
            _ => None,
        }
    }
}

/// Weights and thresholds for both ranking strategies
#[derive(Debug, Clone, PartialEq)]
pub struct RankerConfig {
    /// Solution score per letter not yet used
    pub fresh_letter_weight: f64,
    /// Solution score per occurrence of a letter across the candidates
    pub frequency_weight: f64,
    /// Information score per bit of partition entropy
    pub partition_weight: f64,
    /// Information score per unit of positional letter frequency
    pub bonus_weight: f64,
    /// Multiplier per guess position reusing a known letter
    pub known_letter_penalty: f64,
    /// Extra multiplier per position repeating its confirmed green letter
    pub green_position_penalty: f64,
    pub search: SearchMode,
    /// Candidate count above which `SearchMode::Pruned` narrows the pool
    pub prune_above: usize,
    /// Common unused letters a non-candidate needs to enter a pruned pool
    pub min_common_letters: usize,
    /// Fraction of candidates a letter must appear in to count as common
    pub common_fraction: f64,
    pub opening: OpeningMode,
    /// Below this many candidates no information guesses are offered
    pub min_candidates_for_information: usize,
    /// Maximum suggestions returned per strategy
    pub limit: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            fresh_letter_weight: 10.0,
            frequency_weight: 1.0,
            partition_weight: 15.0,
            bonus_weight: 0.5,
            known_letter_penalty: 0.3,
            green_position_penalty: 0.1,
            search: SearchMode::default(),
            prune_above: 100,
            min_common_letters: 3,
            common_fraction: 0.2,
            opening: OpeningMode::default(),
            min_candidates_for_information: 3,
            limit: 10,
        }
    }
}
