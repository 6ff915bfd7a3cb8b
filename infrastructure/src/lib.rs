//! Infrastructure layer for toolchat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer:
//!
//! - [`tools`]: the 25-tool catalog, its executors and [`ToolRegistry`]
//! - [`providers`]: the OpenAI-compatible HTTP gateway and the offline gateway
//! - [`config`]: figment-based configuration loading
//! - [`logging`]: the JSONL conversation transcript

pub mod config;
pub mod logging;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use logging::JsonlConversationLogger;
pub use providers::{BackendSettings, OpenAiCompatibleGateway, UnavailableGateway};
pub use tools::{
    EncyclopediaClient, EncyclopediaError, EncyclopediaSettings, JsonSchemaToolConverter,
    ToolRegistry,
};
