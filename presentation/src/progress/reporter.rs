//! Progress reporting for network calls

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while waiting on the backend
///
/// A hidden spinner is used in quiet mode so callers never branch.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// A reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn with_enabled(enabled: bool, message: impl Into<String>) -> Self {
        if enabled {
            Self::new(message)
        } else {
            Self::hidden()
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn finish_err(&self, message: impl AsRef<str>) {
        self.bar
            .finish_with_message(format!("{} {}", "x".red(), message.as_ref()));
    }

    /// Remove the spinner line without leaving a message
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}
