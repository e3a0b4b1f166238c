//! Card model
//!
//! A card pairs a unique term with its definition and counts how many times
//! the definition was answered incorrectly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within the deck
    pub term: String,

    /// The expected answer for the term
    pub definition: String,

    /// Number of incorrect answers recorded during quizzes
    #[serde(default)]
    pub mistakes: u32,
}

impl Card {
    /// Create a card with no recorded mistakes
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::with_mistakes(term, definition, 0)
    }

    /// Create a card with an existing mistake count (used when importing)
    pub fn with_mistakes(
        term: impl Into<String>,
        definition: impl Into<String>,
        mistakes: u32,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes,
        }
    }

    /// Record one incorrect answer
    pub fn record_mistake(&mut self) {
        self.mistakes = self.mistakes.saturating_add(1);
    }

    pub fn reset_mistakes(&mut self) {
        self.mistakes = 0;
    }

    /// Check whether an answer is exactly this card's definition
    pub fn is_answered_by(&self, answer: &str) -> bool {
        self.definition == answer
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\"{}\":\"{}\")", self.term, self.definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card() {
        let card = Card::new("dog", "a domestic animal");
        assert_eq!(card.term, "dog");
        assert_eq!(card.definition, "a domestic animal");
        assert_eq!(card.mistakes, 0);
    }

    #[test]
    fn test_mistakes() {
        let mut card = Card::with_mistakes("x", "hello", 2);
        card.record_mistake();
        assert_eq!(card.mistakes, 3);

        card.reset_mistakes();
        assert_eq!(card.mistakes, 0);
    }

    #[test]
    fn test_answer_matching_is_exact() {
        let card = Card::new("cat", "meows");
        assert!(card.is_answered_by("meows"));
        assert!(!card.is_answered_by("Meows"));
        assert!(!card.is_answered_by("meows "));
    }

    #[test]
    fn test_display() {
        let card = Card::new("cat", "meows");
        assert_eq!(card.to_string(), "(\"cat\":\"meows\")");
    }

    #[test]
    fn test_serde_default_mistakes() {
        let card: Card = serde_json::from_str(r#"{"term":"a","definition":"b"}"#).unwrap();
        assert_eq!(card.mistakes, 0);
    }
}
