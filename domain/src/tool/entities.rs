//! Tool domain entities

use super::category::ToolCategory;
use super::value_objects::ToolError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declared type of a tool parameter.
///
/// Mirrors the JSON Schema primitive the backend sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Number,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Number => "number",
        }
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a tool advertised to the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "calculator")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Listing category
    pub category: ToolCategory,
    /// Parameter specifications, in declaration order
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Declared type
    pub param_type: ParamType,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: ToolCategory,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ToolParameter> {
        self.parameters.iter().filter(|p| p.required)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: ParamType::String,
        }
    }

    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = param_type;
        self
    }
}

/// Ordered catalog of tool definitions.
///
/// Registration order is preserved and is the order advertised to the
/// backend. Lookups by name go through an index and are O(1).
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool (builder pattern).
    ///
    /// Re-registering a name replaces the definition in place, keeping its
    /// original position.
    pub fn register(mut self, tool: ToolDefinition) -> Self {
        match self.index.get(&tool.name) {
            Some(&pos) => self.tools[pos] = tool,
            None => {
                self.index.insert(tool.name.clone(), self.tools.len());
                self.tools.push(tool);
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.index.get(name).map(|&pos| &self.tools[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All definitions in registration order
    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool names grouped by category, categories in listing order.
    ///
    /// Categories without tools are omitted.
    pub fn by_category(&self) -> Vec<(ToolCategory, Vec<&str>)> {
        ToolCategory::ALL
            .iter()
            .filter_map(|category| {
                let names: Vec<&str> = self
                    .tools
                    .iter()
                    .filter(|t| t.category == *category)
                    .map(|t| t.name.as_str())
                    .collect();
                (!names.is_empty()).then_some((*category, names))
            })
            .collect()
    }
}

/// A request to invoke a tool.
///
/// Produced either by the backend (structured intent, `id` set to the
/// backend's correlation token) or by the heuristic detector (`id` unset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Backend correlation id, if the call came from the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            id: None,
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    /// Create a call from a backend-declared intent.
    pub fn from_native(
        id: impl Into<String>,
        tool_name: impl Into<String>,
        arguments: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            tool_name: tool_name.into(),
            arguments,
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument
    pub fn require_string(&self, key: &str) -> Result<&str, ToolError> {
        self.get_string(key)
            .ok_or_else(|| ToolError::missing_argument(key))
    }

    /// Get an integer argument.
    ///
    /// Accepts JSON integers, floats without a fractional part, and numeric
    /// strings, since backends are not consistent about argument typing.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.arguments.get(key).and_then(value_as_i64)
    }

    pub fn require_i64(&self, key: &str) -> Result<i64, ToolError> {
        match self.arguments.get(key) {
            None => Err(ToolError::missing_argument(key)),
            Some(v) => value_as_i64(v).ok_or_else(|| {
                ToolError::invalid_argument(format!("'{}' must be an integer", key))
            }),
        }
    }

    /// Get a numeric argument (integers, floats, numeric strings)
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.arguments.get(key).and_then(value_as_f64)
    }

    pub fn require_f64(&self, key: &str) -> Result<f64, ToolError> {
        match self.arguments.get(key) {
            None => Err(ToolError::missing_argument(key)),
            Some(v) => value_as_f64(v).ok_or_else(|| {
                ToolError::invalid_argument(format!("'{}' must be a number", key))
            }),
        }
    }
}

fn value_as_i64(value: &serde_json::Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    if let Some(f) = value.as_f64() {
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
            return Some(f as i64);
        }
        return None;
    }
    value.as_str().and_then(|s| s.trim().parse().ok())
}

fn value_as_f64(value: &serde_json::Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}
