//! HTTP adapter for the backend API
//!
//! [`ApiClient`] is the single generic JSON request helper;
//! [`HttpApiGateway`] exposes the health endpoints through the
//! application's [`ApiGateway`](whalley_application::ApiGateway) port.

mod client;
mod error;
mod gateway;

pub use client::{ApiClient, DEFAULT_BASE_URL, HttpMethod};
pub use error::{ApiError, Result};
pub use gateway::HttpApiGateway;
