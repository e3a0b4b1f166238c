//! Audit logging for deck changes
//!
//! Records adds, removals, imports, exports, stat resets and quiz results in
//! an append-only JSON-lines file.
//!
//! - `AuditEntry`: one timestamped operation with an optional subject and payload
//! - `AuditLogger`: appends entries to, and reads them back from, the log file

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
