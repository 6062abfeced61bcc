// Listing of the files owned by the API key

use crate::error::McpError;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::params::{ParamKind, ParamSpec, ParameterSchema};
use crate::tools::Tool;
use anyhow::Result;
use serde::Deserialize;
use supavec_sdk::{OrderDirection, Pagination, SupavecClient, UserFilesRequest};
use tracing::{debug, warn};

pub const LIST_USER_FILES: &str = "list-user-files";

const ORDER_DIRECTIONS: &[&str] = &["desc", "asc"];

/// Tool to list uploaded files, newest first by default
pub struct ListUserFilesTool {
    client: SupavecClient,
    params: ParameterSchema,
}

impl ListUserFilesTool {
    pub fn new(client: SupavecClient) -> Self {
        let defaults = UserFilesRequest::default();
        Self {
            client,
            params: ParameterSchema::new(vec![
                ParamSpec::optional(
                    "limit",
                    ParamKind::Integer,
                    "Number of files to fetch (default: 10)",
                    defaults.pagination.limit,
                ),
                ParamSpec::optional(
                    "offset",
                    ParamKind::Integer,
                    "Offset for pagination (default: 0)",
                    defaults.pagination.offset,
                ),
                ParamSpec::optional(
                    "order_dir",
                    ParamKind::Enum(ORDER_DIRECTIONS),
                    "Order direction for results",
                    defaults.order_dir.as_str(),
                ),
            ]),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListUserFilesArgs {
    limit: u64,
    offset: u64,
    order_dir: OrderDirection,
}

#[async_trait::async_trait]
impl Tool for ListUserFilesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: LIST_USER_FILES.to_string(),
            description: "List all files uploaded to Supavec for the current user".to_string(),
            input_schema: self.params.to_json_schema(),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args = self.params.validate(arguments)?;
        let args: ListUserFilesArgs = serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|e| McpError::InvalidArguments(e.to_string()))?;

        debug!(
            limit = args.limit,
            offset = args.offset,
            order_dir = %args.order_dir,
            "Listing user files"
        );

        let request = UserFilesRequest {
            pagination: Pagination {
                limit: args.limit,
                offset: args.offset,
            },
            order_dir: args.order_dir,
        };

        match self.client.user_files().list(&request).await {
            Ok(payload) => Ok(CallToolResult::json(serde_json::to_string_pretty(&payload)?)),
            Err(e) => {
                warn!(error = %e, "User files request failed");
                Ok(CallToolResult::text(format!(
                    "Failed to retrieve user files: {}",
                    e
                )))
            }
        }
    }
}
