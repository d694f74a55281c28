//! Presentation layer for whalley-score
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive intake interface.

pub mod cli;
pub mod config;
pub mod intake;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{
    Cli, Command, HealthArgs, ListArgs, MapArgs, OutputFormat, PreviewArgs,
};
pub use config::{OutputConfig, ReplConfig};
pub use intake::repl::{IntakeCommand, IntakeRepl};
pub use output::{console::ConsoleFormatter, formatter::OutputFormatter, json::JsonFormatter};
pub use progress::reporter::ProgressReporter;
