//! Backend configuration from TOML (`[backend]` section)

use crate::providers::openai::{BackendSettings, DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw backend configuration from TOML
///
/// ```toml
/// [backend]
/// base_url = "https://api.groq.com/openai/v1"
/// model = "llama-3.3-70b-versatile"
/// timeout_seconds = 30
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// OpenAI-compatible API root (without `/chat/completions`)
    pub base_url: String,
    /// Bearer token; `GROQ_API_KEY` / `OPENAI_API_KEY` are used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl std::fmt::Debug for FileBackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileBackendConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl FileBackendConfig {
    pub fn to_settings(&self) -> BackendSettings {
        BackendSettings {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone().filter(|k| !k.trim().is_empty()),
            model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}
