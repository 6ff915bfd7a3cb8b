//! REPL configuration from TOML (`[repl]` section)

use super::logging::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to the input history file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// Configured history file, or `<data dir>/toolchat/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|d| d.join("toolchat").join("history.txt")),
        }
    }
}
