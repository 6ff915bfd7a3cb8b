//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["toolchat.toml", ".toolchat.toml"];
const ENV_PREFIX: &str = "TOOLCHAT_";
/// Consulted in order when no API key is configured.
const API_KEY_FALLBACK_VARS: [&str; 2] = ["GROQ_API_KEY", "OPENAI_API_KEY"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `TOOLCHAT_*` environment variables (`__` separates sections,
    ///    e.g. `TOOLCHAT_BACKEND__MODEL`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./toolchat.toml` or `./.toolchat.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/toolchat/config.toml`
    /// 5. Default values
    ///
    /// `GROQ_API_KEY` / `OPENAI_API_KEY` fill in the API key when none of
    /// the above set one.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let files = Self::file_sources(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path,
        )?;
        let mut config: FileConfig = files
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;
        Self::apply_api_key_fallback(&mut config, |var| std::env::var(var).ok());
        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    ///
    /// The API key environment fallback still applies.
    pub fn load_defaults() -> FileConfig {
        let mut config = FileConfig::default();
        Self::apply_api_key_fallback(&mut config, |var| std::env::var(var).ok());
        config
    }

    /// Defaults merged with the given files, lowest priority first.
    ///
    /// Missing global and project files are skipped; a missing explicit
    /// file is an error.
    fn file_sources(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Figment, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }
        Ok(figment)
    }

    fn apply_api_key_fallback(config: &mut FileConfig, lookup: impl Fn(&str) -> Option<String>) {
        if config.backend.has_api_key() {
            return;
        }
        config.backend.api_key = API_KEY_FALLBACK_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .find(|key| !key.trim().is_empty());
    }

    /// Get the global config file path
    ///
    /// `$XDG_CONFIG_HOME/toolchat/config.toml` if set, otherwise the
    /// platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("toolchat").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config sources being used (for `--show-config`)
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] Environment: {}*", ENV_PREFIX));

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            lines.push(format!("  [{}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_only() {
        let config: FileConfig = ConfigLoader::file_sources(None, None, None)
            .unwrap()
            .extract()
            .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = write_toml(
            &dir,
            "global.toml",
            "[backend]\nmodel = \"global-model\"\ntimeout_seconds = 45\n",
        );
        let project = write_toml(&dir, "toolchat.toml", "[backend]\nmodel = \"project-model\"\n");
        let explicit = write_toml(&dir, "explicit.toml", "[chat]\nhistory_window = 3\n");

        let config: FileConfig =
            ConfigLoader::file_sources(Some(&global), Some(&project), Some(&explicit))
                .unwrap()
                .extract()
                .unwrap();

        assert_eq!(config.backend.model, "project-model");
        assert_eq!(config.backend.timeout_seconds, 45);
        assert_eq!(config.chat.history_window, 3);
        assert_eq!(config.chat.max_tokens, 300);
    }

    #[test]
    fn test_missing_optional_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("nope.toml");
        let config: FileConfig = ConfigLoader::file_sources(Some(&absent), Some(&absent), None)
            .unwrap()
            .extract()
            .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("nope.toml");
        let err = ConfigLoader::file_sources(None, None, Some(&absent)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_toml(&dir, "bad.toml", "[chat]\nhistory_window = \"many\"\n");
        let result: Result<FileConfig, _> = ConfigLoader::file_sources(None, None, Some(&bad))
            .unwrap()
            .extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_api_key_fallback_order() {
        let mut config = FileConfig::default();
        ConfigLoader::apply_api_key_fallback(&mut config, |var| match var {
            "GROQ_API_KEY" => Some("".to_string()),
            "OPENAI_API_KEY" => Some("sk-openai".to_string()),
            _ => None,
        });
        assert_eq!(config.backend.api_key.as_deref(), Some("sk-openai"));

        let mut config = FileConfig::default();
        config.backend.api_key = Some("configured".to_string());
        ConfigLoader::apply_api_key_fallback(&mut config, |_| Some("env".to_string()));
        assert_eq!(config.backend.api_key.as_deref(), Some("configured"));

        let mut config = FileConfig::default();
        ConfigLoader::apply_api_key_fallback(&mut config, |_| None);
        assert!(config.backend.api_key.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.ends_with("toolchat/config.toml"));
    }

    #[test]
    fn test_describe_sources_mentions_explicit_path() {
        let lines = ConfigLoader::describe_sources(Some(Path::new("/definitely/missing.toml")));
        assert!(lines.iter().any(|l| l.contains("[MISS ] Explicit: /definitely/missing.toml")));
        assert!(lines.last().unwrap().contains("Default"));
    }
}
