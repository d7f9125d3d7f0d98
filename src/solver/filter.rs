//! Candidate filtering against accumulated constraints
//!
//! A word survives when:
//! 1. every locked position holds its locked letter,
//! 2. no exclusion entry's letter sits at that entry's position, and every
//!    such letter appears somewhere in the word,
//! 3. every excluded letter occurs exactly as often as it is confirmed (locked
//!    positions plus exclusion entries holding it), which is zero for a letter
//!    never seen green or yellow.
//!
//! Under rule 3 a grey second `e` means "no more than the confirmed `e`s",
//! not "no `e` at all".

use super::constraints::ConstraintSet;
use crate::core::{ALPHABET_SIZE, LetterSet, Word, letter_index};
use log::debug;

/// Constraints flattened into lookup tables for the per-word check
struct Compiled<'c> {
    constraints: &'c ConstraintSet,
    required: LetterSet,
    exact_counts: [Option<u8>; ALPHABET_SIZE],
}

impl<'c> Compiled<'c> {
    fn new(constraints: &'c ConstraintSet) -> Self {
        let required = constraints
            .slots()
            .iter()
            .fold(LetterSet::new(), |acc, slot| acc.union(slot.misplaced()));

        let mut exact_counts = [None; ALPHABET_SIZE];
        for letter in constraints.excluded().iter() {
            let confirmed = constraints.confirmed_count(letter);
            exact_counts[letter_index(letter)] = Some(u8::try_from(confirmed).unwrap_or(u8::MAX));
        }

        Self {
            constraints,
            required,
            exact_counts,
        }
    }

    fn admits(&self, word: &Word) -> bool {
        if word.length() != self.constraints.word_length() {
            return false;
        }

        let positions_ok = self
            .constraints
            .slots()
            .iter()
            .zip(word.bytes())
            .all(|(slot, &ch)| {
                slot.locked_letter().is_none_or(|locked| locked == ch)
                    && !slot.misplaced().contains(ch)
            });
        if !positions_ok {
            return false;
        }

        if word.letters().intersection(self.required) != self.required {
            return false;
        }

        self.exact_counts
            .iter()
            .zip(b'a'..=b'z')
            .all(|(expected, letter)| expected.is_none_or(|n| word.count_of(letter) == n))
    }
}

/// Keep the words consistent with `constraints`, in input order
///
/// Accepts a dictionary's words or a previous result, so filtering can be
/// re-applied to its own output. Contradictory constraints give an empty
/// result rather than an error.
///
/// # Examples
/// ```
/// use wordle_narrow::core::Word;
/// use wordle_narrow::solver::{ConstraintSet, filter};
///
/// let words: Vec<Word> = ["sheet", "shelf", "speed"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let mut constraints = ConstraintSet::new(5);
/// constraints.lock(0, b's').unwrap();
/// constraints.misplace(3, b'e').unwrap();
/// constraints.exclude(b'e').unwrap();
///
/// let kept: Vec<&str> = filter(&words, &constraints).iter().map(|w| w.text()).collect();
/// assert_eq!(kept, ["shelf"]);
/// ```
pub fn filter<'a, I>(words: I, constraints: &ConstraintSet) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    let compiled = Compiled::new(constraints);
    let kept: Vec<&'a Word> = words.into_iter().filter(|w| compiled.admits(w)).collect();
    debug!(
        "filter kept {} words (required '{}', excluded '{}')",
        kept.len(),
        compiled.required,
        constraints.excluded()
    );
    kept
}

/// Whether a single word satisfies `constraints`
#[must_use]
pub fn is_consistent(word: &Word, constraints: &ConstraintSet) -> bool {
    Compiled::new(constraints).admits(word)
}
