//! Configuration module for the flashcard manager
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FlashcardPaths;
pub use settings::Settings;
