//! User files API endpoint.

use crate::client::SupavecClient;
use crate::error::SupavecResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User files API for listing the files owned by the authenticated key.
pub struct UserFilesApi<'a> {
    client: &'a SupavecClient,
}

impl<'a> UserFilesApi<'a> {
    pub(crate) fn new(client: &'a SupavecClient) -> Self {
        Self { client }
    }

    /// List files. The response payload is returned untouched.
    pub async fn list(&self, request: &UserFilesRequest) -> SupavecResult<serde_json::Value> {
        self.client.http.post("/user_files", request).await
    }
}

/// Body of `POST /user_files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFilesRequest {
    pub pagination: Pagination,
    pub order_dir: OrderDirection,
}

impl Default for UserFilesRequest {
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            order_dir: OrderDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Sort direction on file creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown order direction: {}", other)),
        }
    }
}
