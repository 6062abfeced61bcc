// MCP tool trait and registry

use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::Result;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    ///
    /// Upstream failures come back as `Ok` content; `Err` is reserved for
    /// protocol-level problems such as invalid arguments.
    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult>;
}

/// Tool registry for managing available tools
///
/// Tools are advertised in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<(String, Arc<dyn Tool>)>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool, replacing any earlier tool of the same name in place
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        match self.tools.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = tool,
            None => self.tools.push((name, tool)),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, tool)| tool.clone())
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|(_, t)| t.schema()).collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_integer(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "integer",
        "minimum": 0,
        "description": description
    })
}

pub fn json_schema_enum(allowed: &[&str], description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description,
        "enum": allowed
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToolContent;

    struct EchoTool(&'static str);

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: self.0.to_string(),
                description: format!("echo {}", self.0),
                input_schema: json_schema_object(serde_json::json!({}), vec![]),
            }
        }

        async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
            Ok(CallToolResult {
                content: vec![ToolContent::text(arguments.to_string())],
            })
        }
    }

    #[test]
    fn test_registration_order_is_kept() {
        let mut registry = ToolRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.register(Arc::new(EchoTool(name)));
        }

        let names: Vec<_> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_reregister_replaces_in_place() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool("a")));
        registry.register(Arc::new(EchoTool("b")));
        registry.register(Arc::new(EchoTool("a")));

        let names: Vec<_> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_get_and_contains() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(EchoTool("echo")));

        assert!(registry.contains("echo"));
        assert!(!registry.contains("missing"));
        assert!(registry.get("missing").is_none());

        let result = registry
            .get("echo")
            .unwrap()
            .execute(serde_json::json!({"x": 1}))
            .await
            .unwrap();
        assert_eq!(result.content[0].as_text(), r#"{"x":1}"#);
    }

    #[test]
    fn test_enum_schema_helper() {
        let schema = json_schema_enum(&["desc", "asc"], "Order");
        assert_eq!(schema["enum"], serde_json::json!(["desc", "asc"]));
        assert_eq!(schema["type"], "string");
    }
}
