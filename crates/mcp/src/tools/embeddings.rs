// Semantic search over a single uploaded file

use crate::error::McpError;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::params::{ParamKind, ParamSpec, ParameterSchema};
use crate::tools::Tool;
use anyhow::Result;
use serde::Deserialize;
use supavec_sdk::{EmbeddingsRequest, SupavecClient};
use tracing::{debug, warn};

pub const FETCH_EMBEDDINGS: &str = "fetch-embeddings";

/// Tool to fetch the chunks of a file relevant to a query
pub struct FetchEmbeddingsTool {
    client: SupavecClient,
    params: ParameterSchema,
}

impl FetchEmbeddingsTool {
    pub fn new(client: SupavecClient) -> Self {
        Self {
            client,
            params: ParameterSchema::new(vec![
                ParamSpec::required(
                    "file_id",
                    ParamKind::String,
                    "ID of the file to get embeddings for",
                ),
                ParamSpec::required("query", ParamKind::String, "Query to search for in the file"),
            ]),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FetchEmbeddingsArgs {
    file_id: String,
    query: String,
}

#[async_trait::async_trait]
impl Tool for FetchEmbeddingsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: FETCH_EMBEDDINGS.to_string(),
            description: "Fetch embeddings for a file by ID and query".to_string(),
            input_schema: self.params.to_json_schema(),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args = self.params.validate(arguments)?;
        let args: FetchEmbeddingsArgs = serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|e| McpError::InvalidArguments(e.to_string()))?;

        debug!(file_id = %args.file_id, "Fetching embeddings");

        let request = EmbeddingsRequest::for_file(&args.file_id, args.query);
        match self.client.embeddings().search(&request).await {
            Ok(response) => {
                // The joined text is sent as a JSON string literal.
                let text = serde_json::to_string_pretty(&response.joined_content())?;
                Ok(CallToolResult::json(text))
            }
            Err(e) => {
                warn!(file_id = %args.file_id, error = %e, "Embeddings request failed");
                Ok(CallToolResult::text(format!(
                    "Failed to retrieve embeddings for {}: {}",
                    args.file_id, e
                )))
            }
        }
    }
}
