//! Audit history listing
//!
//! Prints the most recent deck changes recorded in the audit log.

use std::io::Write;

use crate::audit::AuditLogger;
use crate::error::FlashcardResult;

/// Write the last `count` audit entries, one summary per line
pub fn print_history<W: Write>(
    logger: &AuditLogger,
    count: usize,
    out: &mut W,
) -> FlashcardResult<()> {
    let total = logger.entry_count()?;
    if total == 0 {
        writeln!(out, "No changes recorded in {}.", logger.path().display())?;
        return Ok(());
    }

    let recent = logger.read_recent(count)?;
    for entry in &recent {
        writeln!(out, "{}", entry.summary())?;
    }
    writeln!(out, "\nShowing {} of {} changes.", recent.len(), total)?;
    Ok(())
}
