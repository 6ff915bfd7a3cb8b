//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional; missing keys take their defaults.

mod backend;
mod chat;
mod encyclopedia;
mod logging;
mod repl;

pub use backend::FileBackendConfig;
pub use chat::FileChatConfig;
pub use encyclopedia::FileEncyclopediaConfig;
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("{section}.timeout_seconds cannot be 0")]
    ZeroTimeout { section: &'static str },

    #[error("backend.model cannot be empty")]
    EmptyModelName,

    #[error("{section}.base_url must start with http:// or https://, got '{value}'")]
    InvalidBaseUrl { section: &'static str, value: String },

    #[error("chat.history_window cannot be 0")]
    ZeroHistoryWindow,

    #[error("chat.{field} must be between 0.0 and 2.0, got {value}")]
    TemperatureOutOfRange { field: &'static str, value: f32 },

    #[error("chat.{field} cannot be 0")]
    ZeroTokenLimit { field: &'static str },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Reasoning backend connection
    pub backend: FileBackendConfig,
    /// Turn controller parameters
    pub chat: FileChatConfig,
    /// Encyclopedia lookup tool
    pub encyclopedia: FileEncyclopediaConfig,
    /// Diagnostic and transcript logging
    pub logging: FileLoggingConfig,
    /// Interactive chat settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.backend.model.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyModelName);
        }
        for (section, url) in [
            ("backend", &self.backend.base_url),
            ("encyclopedia", &self.encyclopedia.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                errors.push(ConfigValidationError::InvalidBaseUrl {
                    section,
                    value: url.clone(),
                });
            }
        }
        if self.backend.timeout_seconds == 0 {
            errors.push(ConfigValidationError::ZeroTimeout { section: "backend" });
        }
        if self.encyclopedia.timeout_seconds == 0 {
            errors.push(ConfigValidationError::ZeroTimeout {
                section: "encyclopedia",
            });
        }

        if self.chat.history_window == 0 {
            errors.push(ConfigValidationError::ZeroHistoryWindow);
        }
        for (field, value) in [
            ("primary_temperature", self.chat.primary_temperature),
            ("verbalize_temperature", self.chat.verbalize_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                errors.push(ConfigValidationError::TemperatureOutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("max_tokens", self.chat.max_tokens),
            ("fallback_max_tokens", self.chat.fallback_max_tokens),
        ] {
            if value == 0 {
                errors.push(ConfigValidationError::ZeroTokenLimit { field });
            }
        }

        errors
    }
}
