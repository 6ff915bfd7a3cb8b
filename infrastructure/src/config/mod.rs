//! Configuration file loading for toolchat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOOLCHAT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./toolchat.toml` or `./.toolchat.toml`
//! 4. Global: `$XDG_CONFIG_HOME/toolchat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBackendConfig, FileChatConfig, FileConfig, FileEncyclopediaConfig,
    FileLoggingConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
