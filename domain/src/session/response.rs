//! Structured backend replies.
//!
//! A backend reply is an ordered list of content blocks mixing free-form
//! text and structured tool intents. The controller only cares about two
//! questions: did the backend declare any intents, and what text did it say.

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single block of content within a backend reply.
///
/// # Examples
///
/// ```
/// use toolchat_domain::session::response::ContentBlock;
///
/// let text = ContentBlock::Text("Let me check the weather.".to_string());
/// assert!(text.as_text().is_some());
///
/// let tool = ContentBlock::ToolUse {
///     id: "call_abc123".to_string(),
///     name: "get_weather".to_string(),
///     input: [("city".to_string(), serde_json::json!("Tokyo"))]
///         .into_iter().collect(),
/// };
/// assert!(tool.as_tool_use().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A text content block from the model.
    Text(String),

    /// A structured tool intent.
    ToolUse {
        /// Correlation id used to attach the result back (e.g. "call_abc123").
        id: String,
        /// Tool name as declared by the backend; may be unknown to the registry.
        name: String,
        /// Decoded JSON arguments.
        input: HashMap<String, serde_json::Value>,
    },
}

impl ContentBlock {
    /// Returns the text content if this is a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `(id, name, input)` if this is a `ToolUse` block.
    pub fn as_tool_use(&self) -> Option<(&str, &str, &HashMap<String, serde_json::Value>)> {
        match self {
            ContentBlock::ToolUse { id, name, input } => Some((id, name, input)),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response.
    EndTurn,
    /// The model declared tool intents.
    ToolUse,
    /// Hit the token limit; the text may be truncated.
    MaxTokens,
    /// Provider-specific stop reason.
    Other(String),
}

impl StopReason {
    /// Map an OpenAI-style `finish_reason` string.
    pub fn from_finish_reason(reason: &str) -> Self {
        match reason {
            "stop" => StopReason::EndTurn,
            "tool_calls" | "function_call" => StopReason::ToolUse,
            "length" => StopReason::MaxTokens,
            other => StopReason::Other(other.to_string()),
        }
    }
}

/// A structured reply from the backend.
///
/// # Examples
///
/// ```
/// use toolchat_domain::session::response::{ContentBlock, LlmResponse, StopReason};
///
/// let response = LlmResponse::from_text("Hello!");
/// assert_eq!(response.text_content(), "Hello!");
/// assert!(!response.has_tool_calls());
///
/// let response = LlmResponse {
///     content: vec![ContentBlock::ToolUse {
///         id: "call_1".to_string(),
///         name: "flip_coin".to_string(),
///         input: Default::default(),
///     }],
///     stop_reason: Some(StopReason::ToolUse),
///     model: None,
/// };
/// assert_eq!(response.tool_calls().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    /// Content blocks in the response (text and/or tool use).
    pub content: Vec<ContentBlock>,
    /// Why the model stopped generating.
    pub stop_reason: Option<StopReason>,
    /// Model identifier (if returned by the API).
    pub model: Option<String>,
}

impl LlmResponse {
    /// Create a text-only response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    /// Concatenate all `Text` content blocks into a single string.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract all `ToolUse` blocks as [`ToolCall`]s, in the order received.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => {
                    Some(ToolCall::from_native(id, name, input.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Returns `true` if the response contains any tool intents.
    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }
}
