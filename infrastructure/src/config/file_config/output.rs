//! `[output]` section of the config file

use serde::{Deserialize, Serialize};
use whalley_domain::OutputFormat;

/// How results are printed unless the command line says otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `None` defers to `--output`, then to the table view
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
