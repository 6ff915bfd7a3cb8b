//! Domain layer for toolchat
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tool catalog
//!
//! A fixed set of deterministic tools ([`ToolDefinition`]) advertised to the
//! reasoning backend. Each invocation ([`ToolCall`]) yields exactly one
//! [`ToolResult`] envelope.
//!
//! ## Conversation
//!
//! History is owned by the caller. The engine windows it into the backend
//! context ([`session::context`]) and returns it extended by one exchange.
//!
//! ## Heuristic intent detection
//!
//! When the backend cannot be used, [`IntentDetector`] re-derives the tool
//! and its arguments from the raw user text.

pub mod calc;
pub mod intent;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use calc::CalcError;
pub use intent::{HeuristicMatch, IntentDetector, IntentRule};
pub use session::{
    entities::{ConversationTurn, Message, Role},
    phase::TurnPhase,
    response::{ContentBlock, LlmResponse, StopReason},
};
pub use tool::{
    category::ToolCategory,
    entities::{ParamType, ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    value_objects::{ToolError, ToolResult},
};
