//! [`ApiGateway`] adapter backed by [`ApiClient`]

use super::client::ApiClient;
use super::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use whalley_application::{ApiGateway, GatewayError, HealthStatus};

/// Gateway to the backend API service over HTTP
#[derive(Debug, Clone)]
pub struct HttpApiGateway {
    client: ApiClient,
}

impl HttpApiGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Build a gateway for a base URL and request timeout
    pub fn connect(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = ApiClient::with_timeout(base_url, timeout)?;
        debug!("API gateway bound to {}", client.base_url());
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl ApiGateway for HttpApiGateway {
    fn base_url(&self) -> &str {
        self.client.base_url()
    }

    async fn health(&self) -> std::result::Result<HealthStatus, GatewayError> {
        Ok(self.client.get("/health").await?)
    }

    async fn db_health(&self) -> std::result::Result<HealthStatus, GatewayError> {
        Ok(self.client.get("/health/db").await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn gateway(server: &MockServer) -> HttpApiGateway {
        HttpApiGateway::connect(server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/health");
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;

        let status = gateway(&server).health().await.unwrap();
        assert!(status.ok);
    }

    #[tokio::test]
    async fn test_db_health_status_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/health/db");
                then.status(503).body("database unavailable");
            })
            .await;

        let err = gateway(&server).db_health().await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(
            err.to_string(),
            format!(
                "API GET {}/health/db failed: 503 database unavailable",
                server.base_url()
            )
        );
    }

    #[tokio::test]
    async fn test_unreachable_is_connection_error() {
        // Nothing listens on port 9 (discard) in the test environment
        let gateway =
            HttpApiGateway::connect("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = gateway.health().await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::ConnectionError(_) | GatewayError::Timeout
        ));
    }
}
