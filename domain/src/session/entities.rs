//! Session domain entities

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        }
    }

    /// Whether turns with this role belong in caller-owned history.
    pub fn is_conversational(&self) -> bool {
        matches!(self, Role::User | Role::Assistant)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One turn of caller-owned conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A message sent to the backend.
///
/// Assistant messages may carry the structured intents the backend declared;
/// tool messages carry one executed result keyed by the intent's
/// correlation id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Message {
    fn plain(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
            name: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::plain(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::plain(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::plain(Role::Assistant, content)
    }

    /// Assistant message echoing the intents the backend declared.
    pub fn assistant_with_tool_calls(content: impl Into<String>, calls: Vec<ToolCall>) -> Self {
        Self {
            tool_calls: calls,
            ..Self::plain(Role::Assistant, content)
        }
    }

    /// Tool message answering the intent with the given correlation id.
    pub fn tool_result(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            tool_call_id: Some(call_id.into()),
            name: Some(tool_name.into()),
            ..Self::plain(Role::Tool, content)
        }
    }
}

impl From<&ConversationTurn> for Message {
    fn from(turn: &ConversationTurn) -> Self {
        Message::plain(turn.role, turn.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_conversational() {
        assert!(Role::User.is_conversational());
        assert!(Role::Assistant.is_conversational());
        assert!(!Role::System.is_conversational());
        assert!(!Role::Tool.is_conversational());
    }

    #[test]
    fn test_turn_serde_shape() {
        let turn = ConversationTurn::user("hello");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hello"}));

        let parsed: ConversationTurn =
            serde_json::from_value(serde_json::json!({"role": "assistant", "content": "hi"}))
                .unwrap();
        assert_eq!(parsed, ConversationTurn::assistant("hi"));
    }

    #[test]
    fn test_tool_result_message() {
        let msg = Message::tool_result("call_9", "get_joke", "{\"output\":\"ha\"}");
        assert_eq!(msg.role, Role::Tool);
        assert_eq!(msg.tool_call_id.as_deref(), Some("call_9"));
        assert_eq!(msg.name.as_deref(), Some("get_joke"));
        assert!(msg.tool_calls.is_empty());
    }
}
