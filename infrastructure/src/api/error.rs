//! Error types for the HTTP API adapter

use super::client::HttpMethod;
use thiserror::Error;
use whalley_application::GatewayError;

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when calling the backend API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Non-2xx response
    #[error("API {method} {url} failed: {status} {body}")]
    Status {
        method: HttpMethod,
        url: String,
        status: u16,
        body: String,
    },

    #[error("API {method} {url} request error: {source}")]
    Transport {
        method: HttpMethod,
        url: String,
        source: reqwest::Error,
    },

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status code, if the server responded
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ApiError> for GatewayError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status {
                method,
                url,
                status,
                body,
            } => GatewayError::Status {
                method: method.to_string(),
                url,
                status,
                body,
            },
            ApiError::Transport { ref source, .. } if source.is_timeout() => GatewayError::Timeout,
            ApiError::Transport { .. } | ApiError::ClientBuild(_) => {
                GatewayError::ConnectionError(err.to_string())
            }
            ApiError::Encode(_) | ApiError::Decode { .. } => {
                GatewayError::InvalidResponse(err.to_string())
            }
        }
    }
}
