//! Interactive shell
//!
//! Reads actions from the user, runs them against the card store and reports
//! every outcome as a message. Errors from an action are shown to the user
//! and the loop continues; only end of input or a failing terminal stops it.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::console::{Console, RecordingConsole};
use crate::error::{FlashcardError, FlashcardResult};
use crate::services::{parse_rounds, CardStore, HardestCards, QuizSession};

use super::commands::Action;

/// Startup options for a shell session
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Deck imported at startup and reused by the `import` action
    pub import_file: Option<PathBuf>,
    /// Deck written on exit and reused by the `export` action
    pub export_file: Option<PathBuf>,
}

/// An interactive session over a recording console
pub struct Shell<R, W> {
    store: CardStore,
    console: RecordingConsole<R, W>,
    options: ShellOptions,
    audit: Option<AuditLogger>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(console: RecordingConsole<R, W>, options: ShellOptions) -> Self {
        Self {
            store: CardStore::new(),
            console,
            options,
            audit: None,
        }
    }

    /// Append deck changes to an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn console(&self) -> &RecordingConsole<R, W> {
        &self.console
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> FlashcardResult<()> {
        if let Some(path) = self.options.import_file.clone() {
            let result = self.import_from(path);
            if !self.report(result)? {
                return self.finish();
            }
        }

        loop {
            self.console.say("")?;
            let line = match self.console.ask(&Action::menu()) {
                Ok(line) => line,
                Err(FlashcardError::InputClosed) => break,
                Err(e) => {
                    log::warn!("Failed to read action: {}", e);
                    break;
                }
            };

            let action = Action::parse(&line);
            if action == Action::Exit {
                break;
            }

            let result = self.dispatch(action);
            if !self.report(result)? {
                break;
            }
        }

        self.finish()
    }

    /// Show an action's error to the user
    ///
    /// Returns `false` when the session should end.
    fn report(&mut self, result: FlashcardResult<()>) -> FlashcardResult<bool> {
        match result {
            Ok(()) => Ok(true),
            Err(FlashcardError::InputClosed) => Ok(false),
            Err(e) => {
                log::debug!("action failed: {:?}", e);
                self.console.say(&e.to_string())?;
                Ok(true)
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> FlashcardResult<()> {
        match action {
            Action::Add => self.add(),
            Action::Remove => self.remove(),
            Action::Import => {
                let path = match self.options.import_file.clone() {
                    Some(path) => path,
                    None => self.ask_file_name()?,
                };
                self.import_from(path)
            }
            Action::Export => {
                let path = match self.options.export_file.clone() {
                    Some(path) => path,
                    None => self.ask_file_name()?,
                };
                self.export_to(path)
            }
            Action::Ask => self.ask(),
            Action::Log => self.save_log(),
            Action::HardestCard => {
                let message = hardest_message(&self.store.hardest());
                self.console.say(&message)
            }
            Action::ResetStats => {
                self.store.reset_stats();
                self.record(AuditEntry::new(Operation::ResetStats, None, None));
                self.console.say("Card statistics have been reset.")
            }
            Action::Exit => Ok(()),
            Action::Unknown(input) => self.console.say(&format!("Unknown action \"{}\".", input)),
        }
    }

    fn add(&mut self) -> FlashcardResult<()> {
        let mut term = self.console.ask("The card:")?;
        loop {
            match self.store.check_term_available(&term) {
                Ok(()) => break,
                Err(e) if e.is_duplicate() => {
                    term = self.console.ask(&format!("{} Try again:", e))?;
                }
                Err(e) => return Err(e),
            }
        }

        let mut definition = self.console.ask("The definition of the card:")?;
        loop {
            match self.store.check_definition_available(&definition) {
                Ok(()) => break,
                Err(e) if e.is_duplicate() => {
                    definition = self.console.ask(&format!("{} Try again:", e))?;
                }
                Err(e) => return Err(e),
            }
        }

        let card = self.store.add(term, definition)?.clone();
        self.record(AuditEntry::for_card(Operation::Add, &card));
        self.console
            .say(&format!("The pair {} has been added.", card))
    }

    fn remove(&mut self) -> FlashcardResult<()> {
        let term = self.console.ask("Which card?")?;
        let card = self.store.remove(&term)?;
        self.record(AuditEntry::for_card(Operation::Remove, &card));
        self.console.say("The card has been removed.")
    }

    fn import_from(&mut self, path: PathBuf) -> FlashcardResult<()> {
        let count = self.store.import_from(&path)?;
        self.record(AuditEntry::for_file(
            Operation::Import,
            path.display().to_string(),
            count,
        ));
        self.console
            .say(&format!("{} cards have been loaded.", count))
    }

    fn export_to(&mut self, path: PathBuf) -> FlashcardResult<()> {
        let count = self.store.export_to(&path)?;
        self.record(AuditEntry::for_file(
            Operation::Export,
            path.display().to_string(),
            count,
        ));
        self.console
            .say(&format!("{} cards have been saved.", count))
    }

    fn ask(&mut self) -> FlashcardResult<()> {
        if self.store.is_empty() {
            return Err(FlashcardError::NoCards);
        }

        let input = self.console.ask("How many times to ask?")?;
        let rounds = parse_rounds(&input)?;
        let summary = QuizSession::new(&mut self.store).run(rounds, &mut self.console)?;

        self.record(AuditEntry::new(
            Operation::Quiz,
            None,
            Some(serde_json::json!({
                "asked": summary.asked,
                "correct": summary.correct,
                "wrong": summary.wrong,
            })),
        ));
        Ok(())
    }

    fn save_log(&mut self) -> FlashcardResult<()> {
        let path = self.ask_file_name()?;
        self.console.transcript().flush_to(&path)?;
        self.console.say("The log has been saved.")
    }

    fn ask_file_name(&mut self) -> FlashcardResult<PathBuf> {
        self.console.ask("File name:").map(PathBuf::from)
    }

    /// Export to the configured destination, then say goodbye
    fn finish(&mut self) -> FlashcardResult<()> {
        if let Some(path) = self.options.export_file.clone() {
            let result = self.export_to(path);
            self.report(result)?;
        }
        self.console.say("Bye bye!")
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                log::warn!("Failed to write audit entry for {}: {}", entry.operation, e);
            }
        }
    }
}

/// Describe the hardest card(s) for the user
pub fn hardest_message(hardest: &HardestCards) -> String {
    match hardest.terms.as_slice() {
        [] => "There are no cards with errors.".to_string(),
        [term] => format!(
            "The hardest card is \"{}\". You have {} errors answering it.",
            term, hardest.mistakes
        ),
        terms => {
            let quoted: Vec<String> = terms.iter().map(|t| format!("\"{}\"", t)).collect();
            format!(
                "The hardest cards are {}. You have {} errors answering them.",
                quoted.join(", "),
                hardest.mistakes
            )
        }
    }
}
