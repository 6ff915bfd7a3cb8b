//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for toolchat
#[derive(Parser, Debug)]
#[command(name = "toolchat")]
#[command(author, version, about = "Chat assistant that answers with 25 deterministic tools")]
#[command(long_about = r#"
toolchat sends each message to an OpenAI-compatible backend together with a
catalog of 25 tools (calculator, weather, Wikipedia, dice, conversions, ...).
Tools the backend asks for are run locally and the results are turned into
a reply. When the backend is unreachable, a keyword detector picks the tool
instead, so most questions still get an answer.

Configuration files are loaded from (in priority order):
1. TOOLCHAT_* environment variables (e.g. TOOLCHAT_BACKEND__MODEL)
2. --config <path>     Explicit config file
3. ./toolchat.toml     Project-level config
4. ~/.config/toolchat/config.toml   Global config

The API key falls back to GROQ_API_KEY or OPENAI_API_KEY.

Example:
  toolchat ask "what is 12*4"
  toolchat ask --json --history history.json "and times 2?"
  toolchat --offline chat
  toolchat tools
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl Cli {
    /// The subcommand to run; interactive chat when none was given.
    pub fn effective_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }
}

/// Flags accepted before or after any subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Never contact the backend; answer with the keyword detector only
    #[arg(long, global = true)]
    pub offline: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Also write diagnostic logs to daily files in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Append a JSONL transcript of every turn to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub conversation_log: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a single turn and print the reply
    Ask {
        /// The user message
        message: String,

        /// JSON file with prior turns: [{"role": "user", "content": "..."}, ...]
        #[arg(long, value_name = "FILE")]
        history: Option<PathBuf>,

        /// Print {response, tool_calls, history} as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive chat session (default)
    Chat,

    /// List the available tools by category
    Tools {
        #[arg(long)]
        json: bool,
    },

    /// Report liveness, model and tool count
    Health {
        #[arg(long)]
        json: bool,
    },
}
