//! Controller configuration from TOML (`[chat]` section)

use serde::{Deserialize, Serialize};
use toolchat_application::ChatParams;

/// Raw chat configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Most recent history entries sent to the backend
    pub history_window: usize,
    pub primary_temperature: f32,
    pub verbalize_temperature: f32,
    pub max_tokens: u32,
    pub fallback_max_tokens: u32,
    /// Replaces the built-in system instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        let params = ChatParams::default();
        Self {
            history_window: params.history_window,
            primary_temperature: params.primary_temperature,
            verbalize_temperature: params.verbalize_temperature,
            max_tokens: params.max_tokens,
            fallback_max_tokens: params.fallback_max_tokens,
            system_prompt: None,
        }
    }
}

impl FileChatConfig {
    pub fn to_params(&self) -> ChatParams {
        let params = ChatParams::default()
            .with_history_window(self.history_window)
            .with_primary_temperature(self.primary_temperature)
            .with_verbalize_temperature(self.verbalize_temperature)
            .with_max_tokens(self.max_tokens)
            .with_fallback_max_tokens(self.fallback_max_tokens);
        match &self.system_prompt {
            Some(prompt) if !prompt.trim().is_empty() => params.with_system_prompt(prompt.clone()),
            _ => params,
        }
    }
}
