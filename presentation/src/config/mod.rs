//! Presentation-level configuration
//!
//! Output settings resolved from the command line and config file.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use crate::output::{console::ConsoleFormatter, formatter::OutputFormatter, json::JsonFormatter};
use std::path::PathBuf;
use whalley_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show spinners while waiting on the network
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Command line beats config file beats the table default
    pub fn resolve(
        cli_format: Option<CliOutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
        quiet: bool,
    ) -> Self {
        let format = cli_format
            .map(OutputFormat::from)
            .or(file_format)
            .unwrap_or_default();

        Self {
            format,
            // No escape codes or spinners around JSON output
            color: color && format == OutputFormat::Table,
            show_progress: !quiet && format == OutputFormat::Table,
        }
    }

    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Table => Box::new(ConsoleFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Path to history file; `None` disables history
    pub history_file: Option<PathBuf>,
    /// Number of regions in the live preview
    pub preview_limit: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_file: dirs::data_dir().map(|p| p.join("whalley").join("intake_history.txt")),
            preview_limit: whalley_domain::DEFAULT_PREVIEW_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_file() {
        let config = OutputConfig::resolve(
            Some(CliOutputFormat::Table),
            Some(OutputFormat::Json),
            true,
            false,
        );
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.color);
        assert!(config.show_progress);
    }

    #[test]
    fn test_file_format_used_without_flag() {
        let config = OutputConfig::resolve(None, Some(OutputFormat::Json), true, false);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_default_is_table() {
        let config = OutputConfig::resolve(None, None, false, true);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(!config.color);
        assert!(!config.show_progress);
    }
}
