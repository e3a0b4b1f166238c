//! Core data models for the flashcard manager

pub mod card;

pub use card::Card;
