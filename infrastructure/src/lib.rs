//! Infrastructure layer for whalley-score
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod api;
pub mod config;
pub mod seed;

// Re-export commonly used types
pub use api::{ApiClient, ApiError, DEFAULT_BASE_URL, HttpApiGateway, HttpMethod};
pub use config::{
    BASE_URL_ENV, ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig,
    FileOutputConfig, FilePreviewConfig,
};
pub use seed::{SeedCatalog, country_seed, region_seed};
