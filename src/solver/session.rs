//! Solving session
//!
//! Owns the constraint state for one puzzle and answers queries against a
//! shared, read-only dictionary.

use super::config::RankerConfig;
use super::constraints::ConstraintSet;
use super::filter::filter;
use super::ranker::GuessRanker;
use super::suggestion::Suggestions;
use crate::core::{Dictionary, DictionarySet, Feedback, Word};
use crate::error::SolverError;
use log::{debug, info};

/// One solve: accumulated feedback plus the dictionary it filters
///
/// Candidates and suggestions are recomputed on every query; the session only
/// stores the constraints and the guess history.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    ranker: GuessRanker,
    constraints: ConstraintSet,
    history: Vec<(Word, Feedback)>,
    previous: Vec<ConstraintSet>,
}

impl<'a> Session<'a> {
    /// Start a session for words of `length` letters
    ///
    /// # Errors
    /// Returns `UnsupportedWordLength` if `dictionaries` has no words of that
    /// length.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{DictionarySet, Word};
    /// use wordle_narrow::solver::{RankerConfig, Session};
    ///
    /// let words = ["cable", "ankle", "maple"].map(|w| Word::new(w).unwrap());
    /// let dictionaries = DictionarySet::from_words(words);
    ///
    /// let mut session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();
    /// session.apply("maple", &"-Y-GG".parse().unwrap()).unwrap();
    /// let candidates: Vec<&str> = session.candidates().iter().map(|w| w.text()).collect();
    /// assert_eq!(candidates, ["ankle"]);
    ///
    /// assert!(Session::new(&dictionaries, 7, RankerConfig::default()).is_err());
    /// ```
    pub fn new(
        dictionaries: &'a DictionarySet,
        length: usize,
        config: RankerConfig,
    ) -> Result<Self, SolverError> {
        let dictionary = dictionaries.get(length)?;
        Ok(Self::with_dictionary(dictionary, config))
    }

    /// Start a session over a single dictionary
    #[must_use]
    pub fn with_dictionary(dictionary: &'a Dictionary, config: RankerConfig) -> Self {
        info!(
            "new session: {} words of length {}",
            dictionary.len(),
            dictionary.word_length()
        );
        Self {
            dictionary,
            ranker: GuessRanker::new(config),
            constraints: ConstraintSet::new(dictionary.word_length()),
            history: Vec::new(),
            previous: Vec::new(),
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &RankerConfig {
        self.ranker.config()
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.dictionary.word_length()
    }

    /// Guesses applied so far with their feedback
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Record feedback for a guess
    ///
    /// The guess need not be a dictionary word. Nothing changes unless the
    /// whole feedback is accepted.
    ///
    /// # Errors
    /// - `InvalidWord` if the guess has characters outside a-z
    /// - `MalformedFeedback` if the guess or feedback length is wrong
    /// - `ConflictingFeedback` if a mark contradicts an existing lock
    pub fn apply(&mut self, guess: &str, feedback: &Feedback) -> Result<(), SolverError> {
        let guess = Word::new(guess)?;
        let before = self.constraints.clone();
        self.constraints.apply(&guess, feedback)?;
        debug!("applied {guess} {feedback}");
        self.previous.push(before);
        self.history.push((guess, feedback.clone()));
        Ok(())
    }

    /// Drop the most recent guess, restoring the constraints from before it
    ///
    /// Returns the removed guess, or `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<(Word, Feedback)> {
        let constraints = self.previous.pop()?;
        self.constraints = constraints;
        let last = self.history.pop();
        if let Some((guess, _)) = &last {
            debug!("undid {guess}");
        }
        last
    }

    /// Dictionary words consistent with all feedback so far
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        filter(self.dictionary.words(), &self.constraints)
    }

    /// Ranked next guesses for the current candidates
    ///
    /// Both rankings are empty when no candidate remains.
    #[must_use]
    pub fn suggest(&self) -> Suggestions<'a> {
        let candidates = self.candidates();
        self.ranker
            .suggest(self.dictionary, &candidates, &self.constraints)
    }

    /// Forget all feedback and start over on the same dictionary
    pub fn reset(&mut self) {
        info!("session reset after {} guesses", self.history.len());
        self.constraints = ConstraintSet::new(self.word_length());
        self.history.clear();
        self.previous.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionaries() -> DictionarySet {
        DictionarySet::from_words(
            [
                "cable", "ankle", "abide", "maple", "blade", "stare", "crane", "sheet", "shelf",
                "speed", "cart", "lake",
            ]
            .map(|w| Word::new(w).unwrap()),
        )
    }

    #[test]
    fn unsupported_length_is_rejected() {
        let dictionaries = dictionaries();
        let err = Session::new(&dictionaries, 6, RankerConfig::default()).unwrap_err();
        assert_eq!(err, SolverError::UnsupportedWordLength(6));
    }

    #[test]
    fn apply_narrows_candidates() {
        let dictionaries = dictionaries();
        let mut session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();
        assert_eq!(session.candidates().len(), 10);

        session.apply("stare", &"--Y-G".parse().unwrap()).unwrap();
        let texts: Vec<&str> = session.candidates().iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["cable", "ankle", "abide", "maple"]);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn malformed_feedback_is_rejected_atomically() {
        let dictionaries = dictionaries();
        let mut session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();
        session.apply("stare", &"--Y-G".parse().unwrap()).unwrap();
        let before = session.candidates().len();

        assert!(matches!(
            session.apply("stare", &"--Y-".parse().unwrap()),
            Err(SolverError::MalformedFeedback(_))
        ));
        assert!(matches!(
            session.apply("star3", &"--Y-G".parse().unwrap()),
            Err(SolverError::InvalidWord(_))
        ));
        assert!(matches!(
            session.apply("crane", &"----Y".parse().unwrap()),
            Err(SolverError::ConflictingFeedback { position: 4, .. })
        ));

        assert_eq!(session.candidates().len(), before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let dictionaries = dictionaries();
        let mut session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();
        session.apply("stare", &"-----".parse().unwrap()).unwrap();
        assert!(!session.constraints().used().is_empty());

        session.reset();
        assert!(session.constraints().is_unconstrained());
        assert!(session.constraints().used().is_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.candidates().len(), 10);
    }

    #[test]
    fn undo_restores_previous_candidates() {
        let dictionaries = dictionaries();
        let mut session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();
        assert!(session.undo().is_none());

        session.apply("stare", &"--Y-G".parse().unwrap()).unwrap();
        let after_first = session.candidates().len();
        session.apply("cable", &"-G--G".parse().unwrap()).unwrap();
        assert!(session.candidates().len() < after_first);

        let (guess, _) = session.undo().unwrap();
        assert_eq!(guess.text(), "cable");
        assert_eq!(session.candidates().len(), after_first);
        assert_eq!(session.history().len(), 1);

        session.undo().unwrap();
        assert!(session.constraints().is_unconstrained());
        assert!(session.constraints().used().is_empty());
    }

    #[test]
    fn empty_candidate_set_gives_empty_suggestions() {
        let dictionaries = dictionaries();
        let mut session = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();
        session.apply("zzzzz", &"G----".parse().unwrap()).unwrap();

        assert!(session.candidates().is_empty());
        let suggestions = session.suggest();
        assert!(suggestions.solutions.is_empty());
        assert!(suggestions.information.is_empty());
    }

    #[test]
    fn four_letter_sessions_are_independent() {
        let dictionaries = dictionaries();
        let mut four = Session::new(&dictionaries, 4, RankerConfig::default()).unwrap();
        let five = Session::new(&dictionaries, 5, RankerConfig::default()).unwrap();

        four.apply("lake", &"G---".parse().unwrap()).unwrap();
        assert!(four.candidates().is_empty());
        assert_eq!(five.candidates().len(), 10);
    }
}
