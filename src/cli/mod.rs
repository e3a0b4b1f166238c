//! Interactive command-line front end
//!
//! This module parses the actions typed at the prompt and runs them through
//! the service layer, reporting every outcome to the user.

pub mod commands;
pub mod history;
pub mod shell;

pub use commands::Action;
pub use history::print_history;
pub use shell::{hardest_message, Shell, ShellOptions};
