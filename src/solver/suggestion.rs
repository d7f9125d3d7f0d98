//! Scored guess suggestions

use crate::core::Word;

/// Which ranking produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Likely to be the answer itself
    Solution,
    /// Expected to split the candidates well
    Information,
}

/// A word with its score under one strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion<'a> {
    pub word: &'a Word,
    pub score: f64,
    pub strategy: Strategy,
}

/// Both rankings for one query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestions<'a> {
    pub solutions: Vec<Suggestion<'a>>,
    pub information: Vec<Suggestion<'a>>,
}

impl Suggestions<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty() && self.information.is_empty()
    }
}

/// Sort descending by score
///
/// The sort is stable, so equal scores keep their input (dictionary) order.
pub fn rank(suggestions: &mut [Suggestion<'_>]) {
    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_is_descending_and_stable() {
        let words: Vec<Word> = ["aaaaa", "bbbbb", "ccccc", "ddddd"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let mut suggestions: Vec<Suggestion> = words
            .iter()
            .zip([1.0, 3.0, 1.0, 3.0])
            .map(|(word, score)| Suggestion {
                word,
                score,
                strategy: Strategy::Solution,
            })
            .collect();

        rank(&mut suggestions);

        let order: Vec<&str> = suggestions.iter().map(|s| s.word.text()).collect();
        assert_eq!(order, ["bbbbb", "ddddd", "aaaaa", "ccccc"]);
    }
}
