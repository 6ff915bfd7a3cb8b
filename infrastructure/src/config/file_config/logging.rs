//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// Both paths accept a leading `~/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rotated diagnostic log files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// JSONL conversation transcript
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_log: Option<String>,
}

impl FileLoggingConfig {
    pub fn dir_path(&self) -> Option<PathBuf> {
        self.dir.as_deref().map(expand_home)
    }

    pub fn conversation_log_path(&self) -> Option<PathBuf> {
        self.conversation_log.as_deref().map(expand_home)
    }
}

/// Expand a leading `~/` to the user's home directory.
pub(crate) fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
