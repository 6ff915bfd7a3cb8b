//! Encyclopedia lookup configuration from TOML (`[encyclopedia]` section)

use crate::tools::EncyclopediaSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEncyclopediaConfig {
    /// Page summary endpoint
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub timeout_seconds: u64,
    pub max_summary_chars: usize,
}

impl Default for FileEncyclopediaConfig {
    fn default() -> Self {
        let settings = EncyclopediaSettings::default();
        Self {
            base_url: settings.base_url,
            user_agent: None,
            timeout_seconds: settings.timeout.as_secs(),
            max_summary_chars: settings.max_summary_chars,
        }
    }
}

impl FileEncyclopediaConfig {
    pub fn to_settings(&self) -> EncyclopediaSettings {
        let defaults = EncyclopediaSettings::default();
        EncyclopediaSettings {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            timeout: Duration::from_secs(self.timeout_seconds),
            max_summary_chars: self.max_summary_chars,
        }
    }
}
