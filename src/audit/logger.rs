//! Audit logger for the append-only audit log
//!
//! The log is a sequence of JSON objects, one per line. Each entry is
//! appended with its own open/write so nothing is buffered across actions.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::PathBuf;

use crate::error::{FlashcardError, FlashcardResult};

use super::entry::AuditEntry;

/// Appends deck changes to a JSON-lines file and reads them back
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as one line
    pub fn log(&self, entry: &AuditEntry) -> FlashcardResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| file.write_all(&line))
            .map_err(|e| FlashcardError::Io(format!("Failed to append to audit log: {}", e)))
    }

    /// Read every entry, oldest first; a missing log is empty
    pub fn read_all(&self) -> FlashcardResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(FlashcardError::Io(format!("Failed to open audit log: {}", e)))
            }
        };

        serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<AuditEntry>()
            .map(|entry| {
                entry.map_err(|e| FlashcardError::Json(format!("Corrupt audit log: {}", e)))
            })
            .collect()
    }

    /// Read the most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> FlashcardResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of entries recorded so far
    pub fn entry_count(&self) -> FlashcardResult<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::Card;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::for_card(Operation::Add, &Card::new("dog", "barks"));

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Add);
        assert_eq!(entries[0].subject.as_deref(), Some("dog"));
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 0..10 {
            let card = Card::new(format!("term-{}", i), format!("def-{}", i));
            logger.log(&AuditEntry::for_card(Operation::Remove, &card)).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].subject.as_deref(), Some("term-7"));
        assert_eq!(recent[2].subject.as_deref(), Some("term-9"));
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert!(!logger.path().exists());
        assert!(logger.read_all().unwrap().is_empty());
        assert_eq!(logger.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_entry_count() {
        let (logger, _temp) = create_test_logger();
        logger.log(&AuditEntry::for_card(Operation::Add, &Card::new("a", "1"))).unwrap();
        logger.log(&AuditEntry::for_card(Operation::Add, &Card::new("b", "2"))).unwrap();

        assert_eq!(logger.entry_count().unwrap(), 2);
        assert_eq!(std::fs::read_to_string(logger.path()).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_appends_across_loggers() {
        let (logger, temp) = create_test_logger();
        logger
            .log(&AuditEntry::new(Operation::ResetStats, None, None))
            .unwrap();

        let logger2 = AuditLogger::new(temp.path().join("audit.log"));
        logger2
            .log(&AuditEntry::for_file(Operation::Import, "deck.txt", 2))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Import);
    }

    #[test]
    fn test_corrupt_line_is_reported() {
        let (logger, _temp) = create_test_logger();
        std::fs::write(logger.path(), "{not json}\n").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(matches!(err, FlashcardError::Json(msg) if msg.contains("line 1")));
    }
}
