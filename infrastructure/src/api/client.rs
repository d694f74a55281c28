//! Generic JSON request helper for the backend API

use super::error::{ApiError, Result};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default API base URL when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP methods the helper supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON-over-HTTP client bound to one base URL
///
/// Every request sends `Content-Type: application/json`. Any non-2xx
/// response becomes [`ApiError::Status`] carrying the method, URL, status
/// code and response body.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with reqwest's default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::build(base_url, None)
    }

    /// Create a client with a per-request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::build(base_url, Some(timeout))
    }

    fn build(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and a path, adding the leading `/` if missing
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Send a request and decode the JSON response.
    ///
    /// An empty success body decodes as JSON `null`, so `()` and
    /// `Option<T>` work for endpoints without content.
    pub async fn request<T, B>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path);
        debug!("API {} {}", method, url);

        let mut request = self
            .client
            .request(method.into(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(|source| ApiError::Transport {
            method,
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("API {} {} failed: {}", method, url, status.as_u16());
            return Err(ApiError::Status {
                method,
                url,
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|source| ApiError::Transport {
            method,
            url: url.clone(),
            source,
        })?;
        let payload: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };

        serde_json::from_slice(payload).map_err(|source| ApiError::Decode { url, source })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(HttpMethod::Get, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Post, path, body).await
    }

    pub async fn put<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Put, path, body).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Patch, path, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(HttpMethod::Delete, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::PATCH;
    use httpmock::prelude::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Health {
        ok: bool,
    }

    #[test]
    fn test_url_for_adds_slash() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url_for("health"), "http://localhost:8000/health");
        assert_eq!(client.url_for("/health"), "http://localhost:8000/health");
    }

    #[test]
    fn test_method_names() {
        let names: Vec<&str> = [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
        ]
        .iter()
        .map(HttpMethod::as_str)
        .collect();
        assert_eq!(names, vec!["GET", "POST", "PUT", "PATCH", "DELETE"]);
    }

    #[tokio::test]
    async fn test_get_decodes_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/health")
                    .header("content-type", "application/json");
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;

        let client = ApiClient::new(server.base_url()).unwrap();
        let body: Health = client.get("health").await.unwrap();

        assert_eq!(body, Health { ok: true });
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/tests")
                    .json_body(json!({ "device_id": "abc" }));
                then.status(201).json_body(json!({ "ok": true }));
            })
            .await;

        let client = ApiClient::new(server.base_url()).unwrap();
        let body: Health = client
            .post("/tests", Some(&json!({ "device_id": "abc" })))
            .await
            .unwrap();

        assert!(body.ok);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_carries_details() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PATCH).path("/regions/1");
                then.status(404).body("region not found");
            })
            .await;

        let client = ApiClient::new(server.base_url()).unwrap();
        let err = client
            .patch::<serde_json::Value, _>("/regions/1", Some(&json!({})))
            .await
            .unwrap_err();

        match err {
            ApiError::Status {
                method,
                url,
                status,
                body,
            } => {
                assert_eq!(method, HttpMethod::Patch);
                assert_eq!(url, format!("{}/regions/1", server.base_url()));
                assert_eq!(status, 404);
                assert_eq!(body, "region not found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_body_decodes_as_unit() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/tests/1");
                then.status(204);
            })
            .await;

        let client = ApiClient::new(server.base_url()).unwrap();
        let () = client.delete("/tests/1").await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/profile");
                then.status(200).body("not json");
            })
            .await;

        let client = ApiClient::new(server.base_url()).unwrap();
        let err = client
            .put::<Health, _>("/profile", Some(&json!({ "name": "x" })))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(err.status(), None);
    }
}
