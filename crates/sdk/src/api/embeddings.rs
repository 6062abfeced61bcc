//! Embeddings API endpoint.

use crate::client::SupavecClient;
use crate::error::{SupavecError, SupavecResult};
use serde::{Deserialize, Serialize};

/// Embeddings API for searching inside uploaded files.
pub struct EmbeddingsApi<'a> {
    client: &'a SupavecClient,
}

impl<'a> EmbeddingsApi<'a> {
    pub(crate) fn new(client: &'a SupavecClient) -> Self {
        Self { client }
    }

    /// Fetch the chunks of the requested files that match the query.
    pub async fn search(&self, request: &EmbeddingsRequest) -> SupavecResult<EmbeddingsResponse> {
        let payload = self.client.http.post("/embeddings", request).await?;
        serde_json::from_value(payload)
            .map_err(|e| SupavecError::UnexpectedPayload(e.to_string()))
    }
}

/// Body of `POST /embeddings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingsRequest {
    pub file_ids: Vec<String>,
    pub query: String,
}

impl EmbeddingsRequest {
    /// Search a single file.
    pub fn for_file(file_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            file_ids: vec![file_id.into()],
            query: query.into(),
        }
    }
}

/// Successful response of `POST /embeddings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingsResponse {
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
}

impl EmbeddingsResponse {
    /// Document contents joined with newlines, in response order.
    pub fn joined_content(&self) -> String {
        self.documents
            .iter()
            .map(|d| d.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
