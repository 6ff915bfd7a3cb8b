//! JSON Schema tool converter.
//!
//! Implementation of [`ToolSchemaPort`] producing the OpenAI-compatible
//! function-tool format:
//!
//! ```json
//! {"type": "function",
//!  "function": {"name": "...", "description": "...",
//!               "parameters": {"type": "object", "properties": {...}, "required": [...]}}}
//! ```

use toolchat_application::ports::tool_schema::ToolSchemaPort;
use toolchat_domain::tool::entities::ToolDefinition;

/// Converts tool definitions into function-tool catalog entries.
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": param.param_type.as_str(),
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolchat_domain::tool::entities::{ParamType, ToolParameter, ToolSpec};
    use toolchat_domain::ToolCategory;

    #[test]
    fn test_tool_to_schema() {
        let converter = JsonSchemaToolConverter;
        let tool = ToolDefinition::new("random_number", "Generate random number in range", ToolCategory::RandomFun)
            .with_parameter(ToolParameter::new("min", "Minimum value", true).with_type(ParamType::Integer))
            .with_parameter(ToolParameter::new("label", "Optional label", false));

        let schema = converter.tool_to_schema(&tool);

        assert_eq!(schema["type"], "function");
        let function = &schema["function"];
        assert_eq!(function["name"], "random_number");
        assert_eq!(function["description"], "Generate random number in range");
        assert_eq!(function["parameters"]["type"], "object");

        let min = &function["parameters"]["properties"]["min"];
        assert_eq!(min["type"], "integer");
        assert_eq!(min["description"], "Minimum value");
        assert_eq!(function["parameters"]["properties"]["label"]["type"], "string");

        let required = function["parameters"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0], "min");
    }

    #[test]
    fn test_parameterless_tool_has_empty_object_schema() {
        let schema = JsonSchemaToolConverter
            .tool_to_schema(&ToolDefinition::new("flip_coin", "Flip a coin", ToolCategory::RandomFun));
        assert_eq!(schema["function"]["parameters"]["properties"], serde_json::json!({}));
        assert_eq!(schema["function"]["parameters"]["required"], serde_json::json!([]));
    }

    #[test]
    fn test_catalog_keeps_registration_order() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("zeta", "z", ToolCategory::Math))
            .register(ToolDefinition::new("alpha", "a", ToolCategory::Math));

        let tools = JsonSchemaToolConverter.catalog_schema(&spec);
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["function"]["name"], "zeta");
        assert_eq!(tools[1]["function"]["name"], "alpha");
    }
}
