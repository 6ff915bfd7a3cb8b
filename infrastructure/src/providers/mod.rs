//! Reasoning backend adapters implementing [`LlmGateway`](toolchat_application::ports::llm_gateway::LlmGateway).

pub mod offline;
pub mod openai;

pub use offline::UnavailableGateway;
pub use openai::{BackendSettings, OpenAiCompatibleGateway};
