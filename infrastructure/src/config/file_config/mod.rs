//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod output;
mod preview;

pub use api::{DEFAULT_TIMEOUT_SECONDS, FileApiConfig};
pub use output::FileOutputConfig;
pub use preview::FilePreviewConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("api.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("preview.limit cannot be 0")]
    InvalidPreviewLimit,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend API settings
    pub api: FileApiConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Intake preview settings
    pub preview: FilePreviewConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every problem found
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.api.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.api.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        }
        if self.preview.limit == 0 {
            issues.push(ConfigValidationError::InvalidPreviewLimit);
        }

        issues
    }
}
