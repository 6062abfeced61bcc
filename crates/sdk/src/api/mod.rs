//! Supavec API endpoints.

mod embeddings;
mod user_files;

pub use embeddings::{Document, EmbeddingsApi, EmbeddingsRequest, EmbeddingsResponse};
pub use user_files::{OrderDirection, Pagination, UserFilesApi, UserFilesRequest};
