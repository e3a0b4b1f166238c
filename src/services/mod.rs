//! Service layer for the flashcard manager
//!
//! The service layer holds the deck invariants and the quiz scoring loop on
//! top of the storage layer.

pub mod card_store;
pub mod quiz;

pub use card_store::{CardStore, HardestCards};
pub use quiz::{classify_answer, parse_rounds, AnswerOutcome, QuizSession, QuizSummary};
