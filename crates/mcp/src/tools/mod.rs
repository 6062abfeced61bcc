pub mod embeddings;
pub mod params;
pub mod user_files;
mod registry;

pub use embeddings::{FetchEmbeddingsTool, FETCH_EMBEDDINGS};
pub use params::{ParamKind, ParamSpec, ParameterSchema};
pub use registry::{
    json_schema_enum, json_schema_integer, json_schema_object, json_schema_string, Tool,
    ToolRegistry,
};
pub use user_files::{ListUserFilesTool, LIST_USER_FILES};

use std::sync::Arc;
use supavec_sdk::SupavecClient;

impl ToolRegistry {
    /// Registry holding the Supavec tools in advertised order.
    pub fn supavec(client: SupavecClient) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(FetchEmbeddingsTool::new(client.clone())));
        registry.register(Arc::new(ListUserFilesTool::new(client)));
        registry
    }
}
