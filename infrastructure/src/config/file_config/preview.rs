//! Intake preview configuration from TOML (`[preview]` section)

use serde::{Deserialize, Serialize};
use whalley_domain::DEFAULT_PREVIEW_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePreviewConfig {
    /// How many adjusted candidates the preview shows
    pub limit: usize,
}

impl Default for FilePreviewConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}
