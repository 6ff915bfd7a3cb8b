//! Application layer for toolchat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{ChatRequest, GatewayError, LlmGateway, ToolChoice},
    progress::{NoTurnProgress, TurnProgressNotifier},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::capabilities::{
    CapabilityReport, HealthReport, capability_report, health_report,
};
pub use use_cases::run_turn::{
    PhaseOutcome, ReplySource, RunTurnInput, RunTurnOutput, RunTurnUseCase, TurnPath,
};
