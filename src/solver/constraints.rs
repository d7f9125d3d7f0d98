//! Accumulated knowledge from guess feedback
//!
//! Positions are tracked as tagged slots rather than sparse maps, so a letter
//! can never be locked and excluded at the same position.

use crate::core::{Feedback, LetterSet, Mark, Word};
use crate::error::SolverError;

/// What is known about one position
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    /// Nothing reported here yet
    #[default]
    Unknown,
    /// The position must hold `letter`
    ///
    /// `misplaced` keeps letters reported present-but-misplaced here before the
    /// lock arrived; they still count as confirmed occurrences. Never contains
    /// `letter`.
    Locked { letter: u8, misplaced: LetterSet },
    /// Letters present in the word but not at this position
    Excluded(LetterSet),
}

impl Slot {
    #[must_use]
    pub const fn locked_letter(&self) -> Option<u8> {
        match self {
            Self::Locked { letter, .. } => Some(*letter),
            _ => None,
        }
    }

    /// Letters known to be present but not here
    #[must_use]
    pub const fn misplaced(&self) -> LetterSet {
        match self {
            Self::Unknown => LetterSet::EMPTY,
            Self::Locked { misplaced, .. } | Self::Excluded(misplaced) => *misplaced,
        }
    }
}

/// Constraint state for one solving session
///
/// Grows monotonically as feedback is applied. There is no rollback; start a
/// new set to reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    slots: Vec<Slot>,
    excluded: LetterSet,
    used: LetterSet,
}

impl ConstraintSet {
    /// An unconstrained set for words of `length` letters
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![Slot::Unknown; length],
            excluded: LetterSet::new(),
            used: LetterSet::new(),
        }
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Letters with no occurrences beyond the confirmed ones
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    /// Every letter guessed so far
    #[must_use]
    pub const fn used(&self) -> LetterSet {
        self.used
    }

    /// Letters confirmed present, green or yellow, anywhere
    #[must_use]
    pub fn known(&self) -> LetterSet {
        self.slots.iter().fold(LetterSet::new(), |acc, slot| {
            let acc = acc.union(slot.misplaced());
            match slot.locked_letter() {
                Some(letter) => acc.union(std::iter::once(letter).collect()),
                None => acc,
            }
        })
    }

    /// Locked positions holding `letter` plus exclusion entries containing it
    #[must_use]
    pub fn confirmed_count(&self, letter: u8) -> usize {
        self.slots
            .iter()
            .map(|slot| {
                usize::from(slot.locked_letter() == Some(letter))
                    + usize::from(slot.misplaced().contains(letter))
            })
            .sum()
    }

    /// True when no feedback has been recorded
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.excluded.is_empty() && self.slots.iter().all(|s| *s == Slot::Unknown)
    }

    /// Require `letter` at `position`
    ///
    /// # Errors
    /// - `MalformedFeedback` if the position or letter is out of range
    /// - `ConflictingFeedback` if another letter is locked there, or `letter`
    ///   was reported misplaced at this position
    pub fn lock(&mut self, position: usize, letter: u8) -> Result<(), SolverError> {
        let slot = self.slot_mut(position, letter)?;
        *slot = match slot {
            Slot::Unknown => Slot::Locked {
                letter,
                misplaced: LetterSet::new(),
            },
            Slot::Locked { letter: current, .. } if *current == letter => return Ok(()),
            Slot::Locked { letter: current, .. } => {
                return Err(SolverError::ConflictingFeedback {
                    position,
                    reason: format!(
                        "already locked to '{}', cannot lock '{}'",
                        *current as char, letter as char
                    ),
                });
            }
            Slot::Excluded(misplaced) if misplaced.contains(letter) => {
                return Err(SolverError::ConflictingFeedback {
                    position,
                    reason: format!("'{}' was reported misplaced here", letter as char),
                });
            }
            Slot::Excluded(misplaced) => Slot::Locked {
                letter,
                misplaced: *misplaced,
            },
        };
        Ok(())
    }

    /// Record `letter` as present but not at `position`
    ///
    /// # Errors
    /// - `MalformedFeedback` if the position or letter is out of range
    /// - `ConflictingFeedback` if `letter` is locked at this position
    pub fn misplace(&mut self, position: usize, letter: u8) -> Result<(), SolverError> {
        let slot = self.slot_mut(position, letter)?;
        match slot {
            Slot::Unknown => *slot = Slot::Excluded(std::iter::once(letter).collect()),
            Slot::Locked { letter: current, .. } if *current == letter => {
                return Err(SolverError::ConflictingFeedback {
                    position,
                    reason: format!("'{}' is locked here", letter as char),
                });
            }
            Slot::Locked { misplaced, .. } | Slot::Excluded(misplaced) => {
                misplaced.insert(letter);
            }
        }
        Ok(())
    }

    /// Record that `letter` has no occurrences beyond the confirmed ones
    ///
    /// Repeating a letter is harmless.
    ///
    /// # Errors
    /// Returns `MalformedFeedback` if `letter` is not in `a..=z`.
    pub fn exclude(&mut self, letter: u8) -> Result<(), SolverError> {
        check_letter(letter)?;
        self.excluded.insert(letter);
        Ok(())
    }

    /// Add the letters of a guess to the used set
    pub fn mark_used(&mut self, letters: LetterSet) {
        self.used = self.used.union(letters);
    }

    /// Apply feedback for `guess` as a single atomic step
    ///
    /// Exact marks lock their position, misplaced marks add an exclusion entry
    /// and absent marks exclude the letter. All letters of the guess become
    /// used. On error `self` is left untouched.
    ///
    /// # Errors
    /// - `MalformedFeedback` if the guess or feedback length differs from the
    ///   session word length
    /// - `ConflictingFeedback` if a mark contradicts an existing lock
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), SolverError> {
        let length = self.word_length();
        if guess.length() != length {
            return Err(SolverError::MalformedFeedback(format!(
                "guess '{guess}' has {} letters, expected {length}",
                guess.length()
            )));
        }
        if feedback.length() != length {
            return Err(SolverError::MalformedFeedback(format!(
                "feedback has {} positions, expected {length}",
                feedback.length()
            )));
        }

        let mut next = self.clone();
        for (position, (&letter, &mark)) in guess.bytes().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Exact => next.lock(position, letter)?,
                Mark::Misplaced => next.misplace(position, letter)?,
                Mark::Absent => next.exclude(letter)?,
            }
        }
        next.mark_used(guess.letters());

        *self = next;
        Ok(())
    }

    fn slot_mut(&mut self, position: usize, letter: u8) -> Result<&mut Slot, SolverError> {
        check_letter(letter)?;
        let length = self.slots.len();
        self.slots.get_mut(position).ok_or_else(|| {
            SolverError::MalformedFeedback(format!(
                "position {position} is outside a {length}-letter word"
            ))
        })
    }
}

fn check_letter(letter: u8) -> Result<(), SolverError> {
    if letter.is_ascii_lowercase() {
        Ok(())
    } else {
        Err(SolverError::MalformedFeedback(format!(
            "'{}' is not a letter a-z",
            letter.escape_ascii()
        )))
    }
}
