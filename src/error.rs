//! Custom error types for the flashcard manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for flashcard operations
#[derive(Error, Debug)]
pub enum FlashcardError {
    /// A card with this term is already in the deck
    #[error("The term \"{0}\" already exists.")]
    DuplicateTerm(String),

    /// A card with this definition is already in the deck
    #[error("The definition \"{0}\" already exists.")]
    DuplicateDefinition(String),

    /// No card with this term
    #[error("Can't remove \"{0}\": there is no such card.")]
    NotFound(String),

    /// A deck or transcript file does not exist
    #[error("File not found.")]
    FileNotFound(PathBuf),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A deck file line that is not `term,definition,mistakes`
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// The deck is empty, so there is nothing to quiz on
    #[error("There are no cards to ask about.")]
    NoCards,

    /// Round count that is not a positive integer
    #[error("Invalid number of rounds: \"{0}\".")]
    InvalidCount(String),

    /// Interactive input reached end-of-file
    #[error("Input closed")]
    InputClosed,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl FlashcardError {
    /// Create a malformed record error for a 1-based line number
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::FileNotFound(_))
    }

    /// Check if this is a uniqueness violation
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateTerm(_) | Self::DuplicateDefinition(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FlashcardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FlashcardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for flashcard operations
pub type FlashcardResult<T> = Result<T, FlashcardError>;
