//! Configuration types for the Supavec SDK.

use url::Url;

/// Base endpoint of the hosted Supavec API.
pub const DEFAULT_BASE_URL: &str = "https://api.supavec.com";

/// Configuration for the Supavec client.
///
/// Built once at startup and shared read-only by every request.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the Supavec API.
    pub base_url: Url,
    /// API key sent verbatim in the `authorization` header.
    pub api_key: String,
}

impl ClientConfig {
    /// Create a configuration against the hosted API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different deployment.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_new() {
        let config = ClientConfig::new("sk-test");

        assert_eq!(config.base_url.as_str(), "https://api.supavec.com/");
        assert_eq!(config.api_key, "sk-test");
    }

    #[test]
    fn test_client_config_with_base_url() {
        let url = Url::parse("http://localhost:9000").unwrap();
        let config = ClientConfig::new("sk-test").with_base_url(url.clone());

        assert_eq!(config.base_url, url);
        assert_eq!(config.api_key, "sk-test");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("sk-very-secret");
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
