//! Main client for the Supavec SDK.

use crate::api::{EmbeddingsApi, UserFilesApi};
use crate::config::ClientConfig;
use crate::error::{SupavecError, SupavecResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use url::Url;

/// Main client for interacting with the Supavec API.
///
/// Cloning is cheap; clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct SupavecClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl SupavecClient {
    /// Create a new client builder.
    pub fn builder() -> SupavecClientBuilder {
        SupavecClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> SupavecResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the embeddings API.
    pub fn embeddings(&self) -> EmbeddingsApi<'_> {
        EmbeddingsApi::new(self)
    }

    /// Get the user files API.
    pub fn user_files(&self) -> UserFilesApi<'_> {
        UserFilesApi::new(self)
    }
}

/// Builder for creating a SupavecClient.
#[derive(Debug, Default)]
pub struct SupavecClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl SupavecClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL of the Supavec API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> SupavecResult<SupavecClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| SupavecError::Config("api_key is required".to_string()))?;

        let mut config = ClientConfig::new(api_key);
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(Url::parse(&base_url)?);
        }

        SupavecClient::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_hosted_api() {
        let client = SupavecClient::builder().api_key("sk-test").build().unwrap();
        assert_eq!(client.config().base_url.as_str(), "https://api.supavec.com/");
    }

    #[test]
    fn test_builder_base_url_override() {
        let client = SupavecClient::builder()
            .api_key("sk-test")
            .base_url("http://localhost:4000")
            .build()
            .unwrap();
        assert_eq!(client.config().base_url.as_str(), "http://localhost:4000/");
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = SupavecClient::builder().build();
        assert!(matches!(result, Err(SupavecError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = SupavecClient::builder()
            .api_key("sk-test")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(SupavecError::InvalidUrl(_))));
    }
}
