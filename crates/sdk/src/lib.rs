//! # Supavec SDK
//!
//! Rust client for the Supavec embeddings and file API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use supavec_sdk::{EmbeddingsRequest, SupavecClient, SupavecResult, UserFilesRequest};
//!
//! #[tokio::main]
//! async fn main() -> SupavecResult<()> {
//!     let client = SupavecClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     // Search a file
//!     let hits = client
//!         .embeddings()
//!         .search(&EmbeddingsRequest::for_file("file-123", "vector databases"))
//!         .await?;
//!     println!("{}", hits.joined_content());
//!
//!     // List files
//!     let files = client.user_files().list(&UserFilesRequest::default()).await?;
//!     println!("{}", files);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use api::{
    Document, EmbeddingsRequest, EmbeddingsResponse, OrderDirection, Pagination,
    UserFilesRequest,
};
pub use client::{SupavecClient, SupavecClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{SupavecError, SupavecResult};
