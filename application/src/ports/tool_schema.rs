//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how to serialize for the
//! API" (infrastructure). The domain layer defines [`ToolDefinition`] and
//! [`ToolSpec`]; this port handles the JSON Schema conversion that the
//! backend requires.

use toolchat_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to the backend's catalog format.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to a catalog entry.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert the whole catalog, preserving registration order.
    fn catalog_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        spec.all().map(|t| self.tool_to_schema(t)).collect()
    }
}
