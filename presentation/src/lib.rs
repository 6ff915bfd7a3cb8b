//! Presentation layer for toolchat
//!
//! This crate contains CLI definitions, output formatters,
//! the progress spinner, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, Command, GlobalArgs};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::json::JsonFormatter;
pub use progress::reporter::ProgressReporter;
