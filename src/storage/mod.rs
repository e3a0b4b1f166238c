//! Storage layer for the flashcard manager
//!
//! Reads and writes the plain-text deck format with atomic replacement of
//! the destination file.

pub mod deck_file;

pub use deck_file::{parse_deck, read_deck, write_deck, write_deck_atomic};
