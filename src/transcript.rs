//! Session transcript
//!
//! Records every line read from and written to the user, in order. A saved
//! transcript marks input lines with a `> ` prefix; output lines are written
//! unchanged.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{FlashcardError, FlashcardResult};

/// Prefix that marks a line the user typed
pub const INPUT_MARKER: &str = "> ";

/// One recorded line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    Input(String),
    Output(String),
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptLine::Input(line) => write!(f, "{}{}", INPUT_MARKER, line),
            TranscriptLine::Output(line) => f.write_str(line),
        }
    }
}

/// Append-only record of a session's dialogue
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line the user typed
    pub fn record_input(&mut self, line: impl Into<String>) {
        self.lines.push(TranscriptLine::Input(line.into()));
    }

    /// Record a line shown to the user
    pub fn record_output(&mut self, line: impl Into<String>) {
        self.lines.push(TranscriptLine::Output(line.into()));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the recorded lines, oldest first
    pub fn lines(&self) -> std::slice::Iter<'_, TranscriptLine> {
        self.lines.iter()
    }

    /// Write every recorded line, one per line, returning the line count
    pub fn write_to<W: Write>(&self, writer: &mut W) -> FlashcardResult<usize> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(self.lines.len())
    }

    /// Save the whole transcript to a file, replacing its contents
    ///
    /// The in-memory transcript is kept, so later saves repeat everything
    /// recorded so far.
    pub fn flush_to<P: AsRef<Path>>(&self, path: P) -> FlashcardResult<usize> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            FlashcardError::Io(format!("Failed to create {}: {}", path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        let count = self.write_to(&mut writer)?;
        log::debug!("saved {} transcript lines to {}", count, path.display());
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Transcript {
        let mut transcript = Transcript::new();
        transcript.record_output("The card:");
        transcript.record_input("dog");
        transcript.record_output("The definition of the card:");
        transcript.record_input("barks");
        transcript
    }

    #[test]
    fn test_records_in_order() {
        let transcript = sample();
        assert_eq!(transcript.len(), 4);
        assert_eq!(
            transcript.lines().nth(1),
            Some(&TranscriptLine::Input("dog".into()))
        );
    }

    #[test]
    fn test_write_marks_input_lines() {
        let mut out = Vec::new();
        let count = sample().write_to(&mut out).unwrap();

        assert_eq!(count, 4);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "The card:\n> dog\nThe definition of the card:\n> barks\n"
        );
    }

    #[test]
    fn test_empty_transcript_writes_nothing() {
        let mut out = Vec::new();
        assert_eq!(Transcript::new().write_to(&mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_flush_repeats_prior_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.log");
        let mut transcript = sample();

        transcript.flush_to(&path).unwrap();
        transcript.record_output("The log has been saved.");
        transcript.flush_to(&path).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved.lines().count(), 5);
        assert!(saved.starts_with("The card:\n> dog\n"));
        assert!(saved.ends_with("The log has been saved.\n"));
        assert_eq!(transcript.len(), 5);
    }

    #[test]
    fn test_flush_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("session.log");

        let err = sample().flush_to(&path).unwrap_err();
        assert!(matches!(err, FlashcardError::Io(_)));
    }
}
