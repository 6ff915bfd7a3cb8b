//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use toolchat_application::{
    NoTurnProgress, RunTurnInput, RunTurnOutput, RunTurnUseCase, capability_report,
};
use toolchat_domain::ConversationTurn;
use tracing::warn;

/// Number of input lines kept in the history file
const HISTORY_CAPACITY: usize = 1000;

/// Outcome of a slash command
#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandResult {
    Continue,
    Exit,
}

/// Interactive chat REPL
///
/// Conversation history lives in memory for the whole session and is sent
/// with every turn.
pub struct ChatRepl {
    use_case: RunTurnUseCase,
    model: String,
    history: Vec<ConversationTurn>,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(use_case: RunTurnUseCase, model: impl Into<String>) -> Self {
        Self {
            use_case,
            model: model.into(),
            history: Vec::new(),
            show_progress: true,
            history_file: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Persist typed lines to this file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_file else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not open input history");
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("toolchat".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) == CommandResult::Exit {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => {
                    println!("^C");
                    continue;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              toolchat - Chat Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model);
        println!(
            "Tools: {}",
            capability_report(self.use_case.tool_spec()).total_tools()
        );
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /tools            - List available tools");
        println!("  /history          - Show the conversation so far");
        println!("  /clear            - Forget the conversation");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle slash commands.
    fn handle_command(&mut self, cmd: &str) -> CommandResult {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                CommandResult::Exit
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_help();
                CommandResult::Continue
            }
            "/tools" => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_capabilities(&capability_report(
                        self.use_case.tool_spec()
                    ))
                );
                CommandResult::Continue
            }
            "/history" => {
                println!();
                println!("{}", ConsoleFormatter::format_history(&self.history));
                println!();
                CommandResult::Continue
            }
            "/clear" => {
                self.history.clear();
                println!("{}", "Conversation cleared.".dimmed());
                CommandResult::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandResult::Continue
            }
        }
    }

    async fn process_message(&mut self, message: &str) {
        let input = RunTurnInput::new(message).with_history(self.history.clone());
        let output = self.run_turn(input).await;

        println!();
        println!("{}", ConsoleFormatter::format_turn(&output));
        println!();

        self.history = output.history;
    }

    async fn run_turn(&self, input: RunTurnInput) -> RunTurnOutput {
        if self.show_progress {
            let progress = ProgressReporter::new();
            let output = self.use_case.execute(input, &progress).await;
            progress.finish();
            output
        } else {
            self.use_case.execute(input, &NoTurnProgress).await
        }
    }
}
