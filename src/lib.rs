//! Flashcards - interactive terminal flashcard manager
//!
//! This library provides the core of the `flashcards` command-line tool: a
//! deck of term/definition cards with per-card mistake counts, a quiz loop
//! that scores answers, and a transcript of the whole session.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The card model
//! - `storage`: Plain-text deck file format
//! - `services`: Card store and quiz session
//! - `transcript`: Session transcript recorder
//! - `console`: Line-oriented user interaction
//! - `audit`: Audit logging of deck changes
//! - `cli`: Interactive shell
//!
//! # Example
//!
//! ```rust
//! use flashcards::services::CardStore;
//!
//! let mut store = CardStore::new();
//! store.add("dog", "a domestic animal")?;
//! assert!(store.add("cat", "a domestic animal").is_err());
//! assert_eq!(store.len(), 1);
//! # Ok::<(), flashcards::FlashcardError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod transcript;

pub use error::{FlashcardError, FlashcardResult};
