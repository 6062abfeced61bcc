// MCP (Model Context Protocol) server for Supavec
// Exposes embeddings search and file listing as tools to agent clients

pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::McpServer;
pub use tools::ToolRegistry;
