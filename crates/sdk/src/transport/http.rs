//! HTTP transport layer for the Supavec SDK.

use crate::config::ClientConfig;
use crate::error::{SupavecError, SupavecResult};
use reqwest::{header, Client};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP transport for making API requests.
///
/// Every call is a single round trip: no retries, and the timeout is
/// whatever `reqwest` defaults to.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> SupavecResult<Self> {
        if config.api_key.is_empty() {
            return Err(SupavecError::Config("API key must not be empty".to_string()));
        }

        let mut headers = header::HeaderMap::new();

        // Supavec expects the raw key, not a `Bearer` scheme.
        let mut auth = header::HeaderValue::from_str(&config.api_key)
            .map_err(|_| SupavecError::Config("Invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let client = Client::builder()
            .user_agent(concat!("supavec-sdk/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path, relative to the base URL's own path.
    fn build_url(&self, path: &str) -> SupavecResult<url::Url> {
        let mut base = self.config.base_url.clone();
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(SupavecError::InvalidUrl)
    }

    /// Execute a POST request and return the decoded JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> SupavecResult<serde_json::Value> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        let response = match self.client.post(url).json(body).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(path, error = %e, "Request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(path, status = status.as_u16(), "Request returned error status");
            return Err(SupavecError::from_response(status.as_u16(), &body));
        }

        let body = response.json().await.map_err(|e| {
            warn!(path, error = %e, "Response body is not valid JSON");
            SupavecError::from(e)
        })?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_config(base_url: &str, api_key: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig::new(api_key).with_base_url(url::Url::parse(base_url).unwrap()))
    }

    #[tokio::test]
    async fn test_post_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"documents": []})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "sk-test")).unwrap();

        let result = transport.post("/embeddings", &json!({})).await.unwrap();
        assert_eq!(result, json!({"documents": []}));
    }

    #[tokio::test]
    async fn test_raw_authorization_header() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/user_files"))
            .and(header("authorization", "sk-raw-key"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "sk-raw-key")).unwrap();

        let result = transport.post("/user_files", &json!({})).await.unwrap();
        assert_eq!(result["success"], true);
    }

    #[tokio::test]
    async fn test_request_body_is_json() {
        let server = MockServer::start().await;
        let body = json!({"file_ids": ["file-123"], "query": "neural networks"});

        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .and(body_json(&body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"documents": []})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "sk-test")).unwrap();
        transport.post("/embeddings", &body).await.unwrap();
    }

    #[tokio::test]
    async fn test_error_on_401_keeps_upstream_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"error": "Authentication failed: Invalid API key"})),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "invalid-key")).unwrap();

        let err = transport.post("/embeddings", &json!({})).await.unwrap_err();
        match &err {
            SupavecError::Status { status, message } => {
                assert_eq!(*status, 401);
                assert_eq!(message.as_deref(), Some("Authentication failed: Invalid API key"));
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("Failed to fetch data: status 401"));
    }

    #[tokio::test]
    async fn test_error_on_500_plain_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/user_files"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "sk-test")).unwrap();

        let err = transport.post("/user_files", &json!({})).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch data: status 500");
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri(), "sk-test")).unwrap();

        let err = transport.post("/embeddings", &json!({})).await.unwrap_err();
        assert!(matches!(err, SupavecError::Http(_)));
        assert!(err.to_string().starts_with("Failed to fetch data: "));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Nothing listens on the discard port.
        let transport = HttpTransport::new(create_config("http://127.0.0.1:9", "sk-test")).unwrap();

        let err = transport.post("/embeddings", &json!({})).await.unwrap_err();
        assert!(matches!(err, SupavecError::Http(_)));
        assert!(err.to_string().starts_with("Failed to fetch data: "));
    }

    #[tokio::test]
    async fn test_empty_api_key_rejected() {
        let result = HttpTransport::new(create_config("http://localhost:8080", ""));
        assert!(matches!(result, Err(SupavecError::Config(_))));
    }

    #[tokio::test]
    async fn test_api_key_with_newline_rejected() {
        let result = HttpTransport::new(create_config("http://localhost:8080", "bad\nkey"));
        assert!(matches!(result, Err(SupavecError::Config(_))));
    }

    #[tokio::test]
    async fn test_build_url() {
        let transport =
            HttpTransport::new(create_config("http://localhost:8080", "sk-test")).unwrap();

        let url = transport.build_url("/user_files").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/user_files");
    }

    #[tokio::test]
    async fn test_build_url_keeps_base_path() {
        for base in ["http://localhost:8080/v1", "http://localhost:8080/v1/"] {
            let transport = HttpTransport::new(create_config(base, "sk-test")).unwrap();

            let url = transport.build_url("/embeddings").unwrap();
            assert_eq!(url.as_str(), "http://localhost:8080/v1/embeddings");
        }
    }

    #[tokio::test]
    async fn test_post_under_base_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/user_files"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let base = format!("{}/v1", server.uri());
        let transport = HttpTransport::new(create_config(&base, "sk-test")).unwrap();

        let result = transport.post("/user_files", &json!({})).await.unwrap();
        assert_eq!(result["success"], true);
    }
}
