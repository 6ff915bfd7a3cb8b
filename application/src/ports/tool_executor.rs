//! Tool Executor port
//!
//! Defines the interface for dispatching tool calls to the registry.

use async_trait::async_trait;
use toolchat_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::ToolResult,
};

/// Port for tool execution
///
/// This port defines how the application layer executes tools.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().contains(name)
    }

    /// Execute a tool call.
    ///
    /// Returns `None` when no tool is registered under the call's name.
    /// Argument problems are not errors: they come back as a result with
    /// `success = false`.
    async fn execute(&self, call: &ToolCall) -> Option<ToolResult>;
}
