//! Error types for the Supavec SDK.

use serde::{Deserialize, Serialize};

/// Result type for SDK operations.
pub type SupavecResult<T> = Result<T, SupavecError>;

/// Error types that can occur when calling the Supavec API.
///
/// Every data-path variant renders with a `Failed to fetch data: ` prefix so
/// the message can be handed straight to a tool caller.
#[derive(Debug, thiserror::Error)]
pub enum SupavecError {
    /// Transport failure, or a response body that is not JSON.
    #[error("Failed to fetch data: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status.
    #[error("Failed to fetch data: status {status}{}", detail_suffix(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// API answered successfully but the payload has the wrong shape.
    #[error("Failed to fetch data: unexpected response: {0}")]
    UnexpectedPayload(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

fn detail_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(" ({})", message),
        None => String::new(),
    }
}

impl SupavecError {
    /// Create a status error from a status code and response body.
    ///
    /// The upstream `error` field is kept when the body carries one; any other
    /// body is dropped.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|response| response.error)
            .filter(|message| !message.is_empty());

        Self::Status { status, message }
    }

    /// HTTP status code, when the API was reached.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Error response body from the Supavec API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
