//! Quiz session
//!
//! Asks for the definition of each card in insertion order, wrapping around
//! the deck until the requested number of rounds has been answered. Every
//! wrong answer adds one mistake to the card that was asked.

use std::num::NonZeroUsize;

use crate::console::Console;
use crate::error::{FlashcardError, FlashcardResult};
use crate::services::CardStore;

/// How a single answer was judged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    /// The answer matches no card's definition
    Wrong { expected: String },
    /// The answer is the definition of a different card
    WrongButMatches { expected: String, other_term: String },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }

    /// The feedback shown to the user
    pub fn message(&self) -> String {
        match self {
            AnswerOutcome::Correct => "Correct!".to_string(),
            AnswerOutcome::Wrong { expected } => {
                format!("Wrong. The right answer is \"{}\".", expected)
            }
            AnswerOutcome::WrongButMatches {
                expected,
                other_term,
            } => format!(
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                expected, other_term
            ),
        }
    }
}

/// Judge an answer to the card at `index`
///
/// A wrong answer is checked against every card's definition; the first
/// match in insertion order is reported. The check is informational only.
pub fn classify_answer(
    store: &CardStore,
    index: usize,
    answer: &str,
) -> FlashcardResult<AnswerOutcome> {
    let card = store
        .get_index(index)
        .ok_or_else(|| FlashcardError::NotFound(format!("#{}", index)))?;

    if card.is_answered_by(answer) {
        return Ok(AnswerOutcome::Correct);
    }

    let expected = card.definition.clone();
    Ok(match store.find_by_definition(answer) {
        Some(other) => AnswerOutcome::WrongButMatches {
            expected,
            other_term: other.term.clone(),
        },
        None => AnswerOutcome::Wrong { expected },
    })
}

/// Parse a round count typed by the user
pub fn parse_rounds(input: &str) -> FlashcardResult<NonZeroUsize> {
    input
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| FlashcardError::InvalidCount(input.to_string()))
}

/// Totals for one quiz session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizSummary {
    pub asked: usize,
    pub correct: usize,
    pub wrong: usize,
}

/// Runs quiz rounds against a card store
pub struct QuizSession<'a> {
    store: &'a mut CardStore,
}

impl<'a> QuizSession<'a> {
    pub fn new(store: &'a mut CardStore) -> Self {
        Self { store }
    }

    /// Ask exactly `rounds` questions
    ///
    /// Fails with `NoCards` before reading any input when the deck is empty.
    pub fn run<C>(
        &mut self,
        rounds: NonZeroUsize,
        console: &mut C,
    ) -> FlashcardResult<QuizSummary>
    where
        C: Console + ?Sized,
    {
        if self.store.is_empty() {
            return Err(FlashcardError::NoCards);
        }

        let mut summary = QuizSummary::default();
        for index in (0..self.store.len()).cycle().take(rounds.get()) {
            let term = match self.store.get_index(index) {
                Some(card) => card.term.clone(),
                None => break,
            };

            let answer = console.ask(&format!("Print the definition of \"{}\":", term))?;
            let outcome = classify_answer(self.store, index, &answer)?;
            summary.asked += 1;

            if outcome.is_correct() {
                summary.correct += 1;
            } else {
                let mistakes = self.store.record_mistake(index)?;
                log::debug!("{:?} now has {} mistakes", term, mistakes);
                summary.wrong += 1;
            }

            console.say(&outcome.message())?;
        }

        Ok(summary)
    }
}
