//! LLM Gateway port
//!
//! Defines the interface for communicating with the reasoning backend.
//!
//! The gateway is stateless: every call carries the complete message list.
//! The orchestration controller owns the context and decides what to send.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toolchat_domain::{LlmResponse, Message};

/// Errors that can occur during LLM gateway operations.
///
/// From the controller's point of view every variant is a protocol failure
/// and routes the turn to the heuristic fallback path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Backend returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GatewayError {
    /// Short machine-readable category, used in conversation logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::ConnectionError(_) => "connection",
            GatewayError::RequestFailed(_) => "request",
            GatewayError::HttpStatus { .. } => "http_status",
            GatewayError::MalformedResponse(_) => "malformed_response",
            GatewayError::Timeout => "timeout",
            GatewayError::Configuration(_) => "configuration",
        }
    }
}

/// Tool-choice policy sent with a request that carries a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoice {
    Auto,
}

impl ToolChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolChoice::Auto => "auto",
        }
    }
}

/// One backend request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    /// Tool catalog in provider JSON Schema form; empty means no tools
    pub tools: Vec<serde_json::Value>,
    pub tool_choice: Option<ToolChoice>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            tools: Vec::new(),
            tool_choice: None,
            temperature: 0.7,
            max_tokens: 300,
        }
    }

    /// Attach a tool catalog with the "auto" policy.
    pub fn with_tools(mut self, tools: Vec<serde_json::Value>) -> Self {
        self.tools = tools;
        self.tool_choice = Some(ToolChoice::Auto);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn has_tools(&self) -> bool {
        !self.tools.is_empty()
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the
/// backend. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Model identifier reported by health checks
    fn model_id(&self) -> &str;

    /// Send one request and wait for the complete reply.
    ///
    /// Implementations must bound the wait; exceeding it is
    /// [`GatewayError::Timeout`].
    async fn complete(&self, request: &ChatRequest) -> Result<LlmResponse, GatewayError>;
}
