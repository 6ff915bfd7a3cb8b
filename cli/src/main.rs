//! CLI entrypoint for toolchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use toolchat_application::{
    LlmGateway, NoTurnProgress, RunTurnInput, RunTurnOutput, RunTurnUseCase, capability_report,
    health_report,
};
use toolchat_domain::ConversationTurn;
use toolchat_infrastructure::{
    ConfigLoader, EncyclopediaClient, FileConfig, JsonSchemaToolConverter,
    JsonlConversationLogger, OpenAiCompatibleGateway, ToolRegistry, UnavailableGateway,
};
use toolchat_presentation::{
    ChatRepl, Cli, Command, ConsoleFormatter, JsonFormatter, OutputFormatter, ProgressReporter,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let args = &cli.global;

    if args.show_config {
        for line in ConfigLoader::describe_sources(args.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = load_config(args.no_config, args.config.as_deref())?;

    // Held until exit so buffered file logs are flushed
    let log_dir = args.log_dir.clone().or_else(|| config.logging.dir_path());
    let _log_guard = init_logging(args.verbose, log_dir.as_deref())?;

    info!("Starting toolchat");

    // === Dependency Injection ===
    let gateway = build_gateway(&config, args.offline)?;
    let encyclopedia = EncyclopediaClient::new(&config.encyclopedia.to_settings())
        .context("Failed to create encyclopedia client")?;
    let registry = Arc::new(ToolRegistry::new(encyclopedia));

    let mut use_case = RunTurnUseCase::new(gateway, registry, Arc::new(JsonSchemaToolConverter))
        .with_params(config.chat.to_params());

    let transcript = args
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log_path());
    if let Some(logger) = transcript.and_then(JsonlConversationLogger::try_open) {
        info!(path = %logger.path().display(), "Writing conversation transcript");
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    match cli.effective_command() {
        Command::Ask {
            message,
            history,
            json,
        } => {
            let history = match history {
                Some(path) => load_history(&path)?,
                None => Vec::new(),
            };
            let input = RunTurnInput::new(message).with_history(history);
            let output = run_turn(&use_case, input, !args.quiet).await;
            println!("{}", formatter(json).format_turn(&output));
        }
        Command::Chat => {
            let mut repl = ChatRepl::new(use_case.clone(), use_case.model_id())
                .with_progress(!args.quiet && config.repl.show_progress)
                .with_history_file(config.repl.history_path());
            repl.run().await.context("Chat session failed")?;
        }
        Command::Tools { json } => {
            let report = capability_report(use_case.tool_spec());
            println!("{}", formatter(json).format_capabilities(&report));
        }
        Command::Health { json } => {
            let report = health_report(use_case.model_id(), use_case.tool_spec());
            println!("{}", formatter(json).format_health(&report));
        }
    }

    Ok(())
}

fn load_config(no_config: bool, path: Option<&Path>) -> Result<FileConfig> {
    let config = if no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(path).map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let errors = config.validate();
    if !errors.is_empty() {
        let details = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("Invalid configuration:\n{}", details);
    }
    Ok(config)
}

/// Stderr logging filtered by `-v` (or `RUST_LOG`), plus daily files when
/// a log directory is set.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| verbosity_filter(verbose));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "toolchat.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn verbosity_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

fn build_gateway(config: &FileConfig, offline: bool) -> Result<Arc<dyn LlmGateway>> {
    if offline {
        info!("Offline mode: answering with the keyword detector only");
        return Ok(Arc::new(UnavailableGateway::new("offline")));
    }
    if !config.backend.has_api_key() {
        warn!(
            "No API key configured (set TOOLCHAT_BACKEND__API_KEY or GROQ_API_KEY); answering offline"
        );
        return Ok(Arc::new(UnavailableGateway::new("offline")));
    }

    let gateway = OpenAiCompatibleGateway::new(config.backend.to_settings())
        .context("Failed to create backend gateway")?;
    Ok(Arc::new(gateway))
}

async fn run_turn(use_case: &RunTurnUseCase, input: RunTurnInput, show_progress: bool) -> RunTurnOutput {
    if show_progress {
        let progress = ProgressReporter::new();
        let output = use_case.execute(input, &progress).await;
        progress.finish();
        output
    } else {
        use_case.execute(input, &NoTurnProgress).await
    }
}

fn load_history(path: &Path) -> Result<Vec<ConversationTurn>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| {
        format!(
            "History file {} must be a JSON array of {{\"role\", \"content\"}} objects",
            path.display()
        )
    })
}

fn formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(ConsoleFormatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(
            &path,
            r#"[{"role": "user", "content": "hi"}, {"role": "assistant", "content": "hello"}]"#,
        )
        .unwrap();

        let history = load_history(&path).unwrap();
        assert_eq!(
            history,
            vec![
                ConversationTurn::user("hi"),
                ConversationTurn::assistant("hello")
            ]
        );
    }

    #[test]
    fn test_load_history_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, r#"{"role": "user"}"#).unwrap();
        let err = load_history(&path).unwrap_err();
        assert!(err.to_string().contains("must be a JSON array"));

        assert!(load_history(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_offline_flag_wins_over_api_key() {
        let mut config = FileConfig::default();
        config.backend.api_key = Some("sk-test".to_string());
        let gateway = build_gateway(&config, true).unwrap();
        assert_eq!(gateway.model_id(), "offline");

        let gateway = build_gateway(&config, false).unwrap();
        assert_eq!(gateway.model_id(), "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_missing_api_key_runs_offline() {
        let gateway = build_gateway(&FileConfig::default(), false).unwrap();
        assert_eq!(gateway.model_id(), "offline");
    }

    #[test]
    fn test_no_config_defaults_are_valid() {
        assert!(load_config(true, None).is_ok());
    }
}
