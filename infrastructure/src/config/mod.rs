//! Configuration file loading for whalley
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WHALLEY_API_BASE_URL` environment variable
//! 2. `--config <path>` specified file
//! 3. Project root: `./whalley.toml` or `./.whalley.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/whalley/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_TIMEOUT_SECONDS, FileApiConfig, FileConfig, FileOutputConfig,
    FilePreviewConfig,
};
pub use loader::{BASE_URL_ENV, ConfigLoader};
