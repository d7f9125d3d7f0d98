//! Information guess ranking
//!
//! Scores guess words by how well they split the candidate set, nudged towards
//! exploring letters that have not been confirmed yet.

use super::calculator::partition_score;
use crate::core::{ALPHABET_SIZE, Dictionary, LetterSet, Word, letter_index};
use crate::solver::config::{RankerConfig, SearchMode};
use crate::solver::constraints::{ConstraintSet, Slot};
use crate::solver::suggestion::{Strategy, Suggestion, rank};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Letter statistics of a candidate set
#[derive(Debug, Clone)]
pub struct LetterProfile {
    /// Candidates containing each letter at least once
    presence: [usize; ALPHABET_SIZE],
    /// Candidates holding each letter at each position
    positional: Vec<[usize; ALPHABET_SIZE]>,
    total: usize,
}

impl LetterProfile {
    #[must_use]
    pub fn new(candidates: &[&Word], word_length: usize) -> Self {
        let mut presence = [0usize; ALPHABET_SIZE];
        let mut positional = vec![[0usize; ALPHABET_SIZE]; word_length];

        for word in candidates {
            for letter in word.letters().iter() {
                presence[letter_index(letter)] += 1;
            }
            for (counts, &ch) in positional.iter_mut().zip(word.bytes()) {
                counts[letter_index(ch)] += 1;
            }
        }

        Self {
            presence,
            positional,
            total: candidates.len(),
        }
    }

    /// Fraction of candidates containing `letter`
    #[must_use]
    pub fn presence_fraction(&self, letter: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.presence[letter_index(letter)] as f64 / self.total as f64
    }

    /// Fraction of candidates with `letter` at `position`
    #[must_use]
    pub fn positional_fraction(&self, position: usize, letter: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.positional
            .get(position)
            .map_or(0.0, |counts| counts[letter_index(letter)] as f64 / self.total as f64)
    }

    /// Letters present in at least `fraction` of the candidates
    #[must_use]
    pub fn common_letters(&self, fraction: f64) -> LetterSet {
        (b'a'..=b'z')
            .filter(|&letter| self.presence[letter_index(letter)] > 0)
            .filter(|&letter| self.presence_fraction(letter) >= fraction)
            .collect()
    }
}

/// Choose which dictionary words to score as information guesses
///
/// With `SearchMode::Exhaustive`, or while the candidate set is at most
/// `prune_above` words, the whole dictionary is returned. Otherwise the pool
/// is the candidates plus every word with at least `min_common_letters`
/// unused letters that are common among the candidates. Dictionary order is
/// kept either way.
///
/// Pruning trades completeness for speed: the best informational guess can
/// fall outside the pool.
#[must_use]
pub fn select_guess_pool<'a>(
    dictionary: &'a Dictionary,
    candidates: &[&Word],
    used: LetterSet,
    config: &RankerConfig,
) -> Vec<&'a Word> {
    if config.search == SearchMode::Exhaustive || candidates.len() <= config.prune_above {
        return dictionary.words().iter().collect();
    }

    let profile = LetterProfile::new(candidates, dictionary.word_length());
    let common = profile.common_letters(config.common_fraction);
    let candidate_texts: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();

    let pool: Vec<&'a Word> = dictionary
        .words()
        .iter()
        .filter(|w| {
            candidate_texts.contains(w.text())
                || w.letters().difference(used).intersection(common).len()
                    >= config.min_common_letters
        })
        .collect();

    debug!(
        "pruned guess pool to {} of {} words (common letters '{common}')",
        pool.len(),
        dictionary.len()
    );
    pool
}

/// Composite scoring state for one query
struct Scorer<'c> {
    profile: LetterProfile,
    used: LetterSet,
    known: LetterSet,
    greens: Vec<Option<u8>>,
    config: &'c RankerConfig,
}

impl Scorer<'_> {
    /// Score a guess, or `None` when it brings no new, unknown letter
    fn score(&self, guess: &Word, candidates: &[&Word]) -> Option<f64> {
        let fresh = guess.letters().difference(self.used.union(self.known));
        if fresh.is_empty() {
            return None;
        }

        let entropy = partition_score(guess, candidates);

        let mut bonus = 0.0;
        let mut counted = LetterSet::new();
        for (position, &ch) in guess.bytes().iter().enumerate() {
            if self.used.contains(ch) && !self.known.contains(ch) {
                continue;
            }
            bonus += self.profile.positional_fraction(position, ch);
            if !counted.contains(ch) {
                bonus += self.profile.presence_fraction(ch);
                counted.insert(ch);
            }
        }

        let mut score =
            entropy * self.config.partition_weight + bonus * self.config.bonus_weight;

        for (position, &ch) in guess.bytes().iter().enumerate() {
            if self.known.contains(ch) {
                score *= self.config.known_letter_penalty;
            }
            if self.greens.get(position).copied().flatten() == Some(ch) {
                score *= self.config.green_position_penalty;
            }
        }

        Some(score)
    }
}

/// Rank guess words by composite information score
///
/// score = `partition_weight` × entropy + `bonus_weight` × bonus, where the
/// bonus sums, over positions whose letter is unused or already known, the
/// fraction of candidates with that letter there plus (once per letter) the
/// fraction containing it. The result is multiplied by
/// `known_letter_penalty` for every position holding a known letter and by
/// `green_position_penalty` for every position repeating its green letter.
/// Words without a new, unknown letter are dropped.
#[must_use]
pub fn score_information_guesses<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
    constraints: &ConstraintSet,
    config: &RankerConfig,
) -> Vec<Suggestion<'a>> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let scorer = Scorer {
        profile: LetterProfile::new(candidates, constraints.word_length()),
        used: constraints.used(),
        known: constraints.known(),
        greens: constraints
            .slots()
            .iter()
            .map(Slot::locked_letter)
            .collect(),
        config,
    };

    let mut suggestions: Vec<Suggestion<'a>> = guess_pool
        .par_iter()
        .filter_map(|&word| {
            scorer.score(word, candidates).map(|score| Suggestion {
                word,
                score,
                strategy: Strategy::Information,
            })
        })
        .collect();

    rank(&mut suggestions);
    debug!(
        "scored {} of {} information guesses against {} candidates",
        suggestions.len(),
        guess_pool.len(),
        candidates.len()
    );
    suggestions
}

/// Rank guess words by pure partition score
///
/// Used for the opening guess, where no letters are known and no penalty
/// applies.
#[must_use]
pub fn score_opening_guesses<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
    config: &RankerConfig,
) -> Vec<Suggestion<'a>> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<Suggestion<'a>> = guess_pool
        .par_iter()
        .map(|&word| Suggestion {
            word,
            score: partition_score(word, candidates) * config.partition_weight,
            strategy: Strategy::Information,
        })
        .collect();

    rank(&mut suggestions);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn profile_fractions() {
        let list = words(&["cable", "ankle", "abide", "maple"]);
        let refs: Vec<&Word> = list.iter().collect();
        let profile = LetterProfile::new(&refs, 5);

        assert!((profile.presence_fraction(b'a') - 1.0).abs() < 1e-9);
        assert!((profile.presence_fraction(b'k') - 0.25).abs() < 1e-9);
        assert!((profile.positional_fraction(4, b'e') - 1.0).abs() < 1e-9);
        assert!((profile.positional_fraction(0, b'a') - 0.5).abs() < 1e-9);
        assert_eq!(profile.common_letters(0.5).to_string(), "abel");
    }

    #[test]
    fn words_without_new_letters_are_dropped() {
        let list = words(&["cable", "ankle", "abide", "maple"]);
        let candidates: Vec<&Word> = list.iter().collect();
        let pool_words = words(&["cable", "blame", "mound"]);
        let pool: Vec<&Word> = pool_words.iter().collect();

        let mut constraints = ConstraintSet::new(5);
        constraints
            .apply(&Word::new("cable").unwrap(), &"-Y-GG".parse().unwrap())
            .unwrap();
        constraints
            .apply(&Word::new("blame").unwrap(), &"-YY-G".parse().unwrap())
            .unwrap();

        let ranked =
            score_information_guesses(&pool, &candidates, &constraints, &RankerConfig::default());
        let texts: Vec<&str> = ranked.iter().map(|s| s.word.text()).collect();
        assert_eq!(texts, ["mound"]);
    }

    #[test]
    fn known_letters_are_penalised() {
        // Two candidates that only differ at position 0
        let list = words(&["baker", "maker"]);
        let candidates: Vec<&Word> = list.iter().collect();

        let mut constraints = ConstraintSet::new(5);
        constraints
            .apply(&Word::new("taker").unwrap(), &"-GGGG".parse().unwrap())
            .unwrap();

        // both split the pair, but "maker" repeats four greens in place
        let pool_words = words(&["maker", "bumps"]);
        let pool: Vec<&Word> = pool_words.iter().collect();
        let config = RankerConfig::default();

        let ranked = score_information_guesses(&pool, &candidates, &constraints, &config);
        assert_eq!(ranked[0].word.text(), "bumps");
        assert_eq!(ranked[1].word.text(), "maker");

        // maker: 1 bit × 15, bonus 1.0 for m plus 2.0 for each of a, k, e, r,
        // then four known letters sitting on their green positions
        let expected = (15.0 + 0.5 * 9.0) * (0.3f64 * 0.1).powi(4);
        assert!((ranked[1].score - expected).abs() < 1e-9);
    }

    #[test]
    fn empty_candidates_give_no_suggestions() {
        let pool_words = words(&["crane"]);
        let pool: Vec<&Word> = pool_words.iter().collect();
        let constraints = ConstraintSet::new(5);
        let config = RankerConfig::default();

        assert!(score_information_guesses(&pool, &[], &constraints, &config).is_empty());
        assert!(score_opening_guesses(&pool, &[], &config).is_empty());
    }

    #[test]
    fn opening_scores_are_pure_entropy() {
        let list = words(&["slate", "crown"]);
        let candidates: Vec<&Word> = list.iter().collect();
        let pool: Vec<&Word> = list.iter().collect();

        let ranked = score_opening_guesses(&pool, &candidates, &RankerConfig::default());
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|s| (s.score - 15.0).abs() < 1e-9));
        // tie keeps pool order
        assert_eq!(ranked[0].word.text(), "slate");
    }

    #[test]
    fn pool_selection_modes() {
        let dictionary = Dictionary::new(
            5,
            words(&["cable", "ankle", "abide", "maple", "lance", "zzzzz", "mould"]),
        )
        .unwrap();
        let candidates: Vec<&Word> = dictionary.words()[..4].iter().collect();

        // common letters among the four candidates: a, b, e, l
        let mut config = RankerConfig {
            prune_above: 2,
            common_fraction: 0.5,
            ..RankerConfig::default()
        };
        let pruned = select_guess_pool(&dictionary, &candidates, LetterSet::new(), &config);
        let texts: Vec<&str> = pruned.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["cable", "ankle", "abide", "maple", "lance"]);

        config.search = SearchMode::Exhaustive;
        let full = select_guess_pool(&dictionary, &candidates, LetterSet::new(), &config);
        assert_eq!(full.len(), dictionary.len());

        // small candidate sets are never pruned
        config.search = SearchMode::Pruned;
        config.prune_above = 10;
        let small = select_guess_pool(&dictionary, &candidates, LetterSet::new(), &config);
        assert_eq!(small.len(), dictionary.len());
    }
}
