//! Path management for the flashcard manager
//!
//! ## Path Resolution Order
//!
//! 1. `FLASHCARDS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/flashcards` or `~/.config/flashcards`
//! 3. Windows: `%APPDATA%\flashcards`

use std::path::PathBuf;

use crate::error::FlashcardError;

/// Manages all paths used by the flashcard manager
#[derive(Debug, Clone)]
pub struct FlashcardPaths {
    base_dir: PathBuf,
}

impl FlashcardPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be determined.
    pub fn new() -> Result<Self, FlashcardError> {
        let base_dir = if let Ok(custom) = std::env::var("FLASHCARDS_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FlashcardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FlashcardError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FlashcardError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FlashcardError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("flashcards"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FlashcardError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FlashcardError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("flashcards"))
}
