//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Card;

/// Deck operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Remove,
    Import,
    Export,
    ResetStats,
    Quiz,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Remove => write!(f, "REMOVE"),
            Operation::Import => write!(f, "IMPORT"),
            Operation::Export => write!(f, "EXPORT"),
            Operation::ResetStats => write!(f, "RESET_STATS"),
            Operation::Quiz => write!(f, "QUIZ"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// The card term or file the operation acted on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Operation-specific payload (the card, counts, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn new(
        operation: Operation,
        subject: Option<String>,
        details: Option<serde_json::Value>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            subject,
            details,
        }
    }

    /// Create an entry for an operation on a single card
    pub fn for_card(operation: Operation, card: &Card) -> Self {
        Self::new(
            operation,
            Some(card.term.clone()),
            serde_json::to_value(card).ok(),
        )
    }

    /// Create an entry for a deck file transfer
    pub fn for_file(operation: Operation, path: impl Into<String>, count: usize) -> Self {
        Self::new(
            operation,
            Some(path.into()),
            Some(serde_json::json!({ "cards": count })),
        )
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        match &self.subject {
            Some(subject) => format!(
                "{} {} {}",
                self.timestamp.format("%Y-%m-%d %H:%M:%S"),
                self.operation,
                subject
            ),
            None => format!(
                "{} {}",
                self.timestamp.format("%Y-%m-%d %H:%M:%S"),
                self.operation
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_entry() {
        let card = Card::with_mistakes("dog", "barks", 2);
        let entry = AuditEntry::for_card(Operation::Add, &card);

        assert_eq!(entry.operation, Operation::Add);
        assert_eq!(entry.subject.as_deref(), Some("dog"));
        let details = entry.details.unwrap();
        assert_eq!(details["definition"], "barks");
        assert_eq!(details["mistakes"], 2);
    }

    #[test]
    fn test_file_entry() {
        let entry = AuditEntry::for_file(Operation::Export, "deck.txt", 4);
        assert_eq!(entry.details.as_ref().unwrap()["cards"], 4);
        assert!(entry.summary().ends_with("EXPORT deck.txt"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::new(Operation::ResetStats, None, None);
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"reset_stats\""));
        assert!(!json.contains("subject"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::ResetStats.to_string(), "RESET_STATS");
        assert_eq!(Operation::Quiz.to_string(), "QUIZ");
    }
}
