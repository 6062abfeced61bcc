//! Error handling for the MCP server

use crate::protocol::JsonRpcError;
use thiserror::Error;

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;

/// Errors that surface to the client as JSON-RPC errors.
///
/// Upstream failures are not here: tools turn those into ordinary content.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl McpError {
    /// Convert to JSON-RPC error
    pub fn to_jsonrpc_error(&self) -> JsonRpcError {
        match self {
            // MCP reports unknown tools as invalid params, not as an unknown method.
            McpError::ToolNotFound(_) | McpError::InvalidArguments(_) => {
                JsonRpcError::invalid_params(self.to_string())
            }
            McpError::Serialization(_) | McpError::Internal(_) => {
                JsonRpcError::internal_error(self.to_string())
            }
        }
    }
}

impl From<anyhow::Error> for McpError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<McpError>() {
            Ok(err) => err,
            Err(err) => McpError::Internal(format!("{:#}", err)),
        }
    }
}
