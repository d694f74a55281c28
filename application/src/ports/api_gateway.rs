//! API Gateway port
//!
//! Defines the interface for talking to the backend API service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during API gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The server answered with a non-success status
    #[error("API {method} {url} failed: {status} {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl GatewayError {
    /// HTTP status code, if the server responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Body of the `/health` and `/health/db` endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub ok: bool,
}

/// Gateway for the backend API
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// Base URL requests are sent to
    fn base_url(&self) -> &str;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus, GatewayError>;

    /// `GET /health/db`
    async fn db_health(&self) -> Result<HealthStatus, GatewayError>;
}
