//! Shannon entropy of feedback partitions
//!
//! Given a guess and a set of candidates, computes the expected information
//! gain of the guess in bits.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Partition statistics for one guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy of the pattern distribution (bits)
    pub entropy: f64,
    /// Expected size of the group the answer falls into
    pub expected_remaining: f64,
    /// Largest group (worst case)
    pub max_partition: usize,
    /// Number of distinct patterns
    pub groups: usize,
}

/// Partition score of `guess` against `candidates`
///
/// H = -Σ p(k) · log₂ p(k) over the observed feedback patterns k.
/// Zero when every candidate gives the same pattern; log₂(N) when all N
/// candidates give distinct patterns.
///
/// # Examples
/// ```
/// use wordle_narrow::core::Word;
/// use wordle_narrow::solver::entropy::partition_score;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = [Word::new("slate").unwrap(), Word::new("crown").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// assert!((partition_score(&guess, &refs) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn partition_score(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    shannon_entropy(&group_by_pattern(guess, candidates))
}

/// Count candidates per feedback pattern
#[must_use]
pub fn group_by_pattern(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();
    for &candidate in candidates {
        *counts.entry(Pattern::calculate(guess, candidate)).or_insert(0) += 1;
    }
    counts
}

/// Shannon entropy of a pattern distribution
///
/// # Properties
/// - 0.0 for a single outcome
/// - maximised by a uniform distribution
/// - always within [0, log₂(n)] for n patterns
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy, expected remaining and worst case for a guess
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    let counts = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining = if candidates.is_empty() {
        0.0
    } else {
        counts
            .values()
            .map(|&size| size as f64 * size as f64 / total)
            .sum()
    };

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().copied().max().unwrap_or(0),
        groups: counts.len(),
    }
}
