//! Console output formatter

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use toolchat_application::{CapabilityReport, HealthReport, RunTurnOutput, TurnPath};
use toolchat_domain::{ConversationTurn, Role, ToolResult};

/// Formats results for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Tool traces followed by the reply
    pub fn format_turn(output: &RunTurnOutput) -> String {
        let mut out = String::new();

        if matches!(
            output.path,
            TurnPath::FallbackTool | TurnPath::FallbackConversation
        ) {
            out.push_str(&format!(
                "{}\n",
                "(backend unavailable, answered offline)".dimmed()
            ));
        }

        for result in &output.tool_calls {
            out.push_str(&Self::tool_trace(result));
            out.push('\n');
        }
        if !output.tool_calls.is_empty() {
            out.push('\n');
        }

        out.push_str(&output.response);
        out
    }

    /// One line per executed tool: status mark, label, input and output
    pub fn tool_trace(result: &ToolResult) -> String {
        let mark = if result.success {
            "✓".green()
        } else {
            "✗".red()
        };
        let output = if result.success {
            result.output.normal()
        } else {
            result.output.red()
        };
        format!(
            "  {} {} {} {} {}",
            mark,
            result.label.cyan().bold(),
            result.input.dimmed(),
            "→".dimmed(),
            Self::indent_continuation(&output.to_string(), "      ")
        )
    }

    pub fn format_capabilities(report: &CapabilityReport) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} {}\n",
            "Available tools:".cyan().bold(),
            report.total_tools()
        ));
        for (category, tools) in &report.groups {
            out.push_str(&format!(
                "\n{}\n",
                category.display_name().yellow().bold()
            ));
            for tool in tools {
                out.push_str(&format!("  - {}\n", tool));
            }
        }
        out
    }

    pub fn format_health(report: &HealthReport) -> String {
        format!(
            "{} {}\n{} {}\n{} {}",
            "Status:".cyan().bold(),
            report.status.green(),
            "Model:".cyan().bold(),
            report.model,
            "Tools:".cyan().bold(),
            report.total_tools
        )
    }

    /// Conversation history as `you:` / `bot:` lines
    pub fn format_history(history: &[ConversationTurn]) -> String {
        if history.is_empty() {
            return "(no history yet)".dimmed().to_string();
        }
        history
            .iter()
            .map(|turn| {
                let who = match turn.role {
                    Role::User => "you:".bold().to_string(),
                    Role::Assistant => "bot:".green().bold().to_string(),
                    other => format!("{}:", other.as_str()).dimmed().to_string(),
                };
                format!("{} {}", who, turn.content)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Indent every line but the first
    fn indent_continuation(text: &str, prefix: &str) -> String {
        text.lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    line.to_string()
                } else {
                    format!("{}{}", prefix, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_turn(&self, output: &RunTurnOutput) -> String {
        Self::format_turn(output)
    }

    fn format_capabilities(&self, report: &CapabilityReport) -> String {
        Self::format_capabilities(report)
    }

    fn format_health(&self, report: &HealthReport) -> String {
        Self::format_health(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolchat_application::ReplySource;
    use toolchat_domain::ToolCategory;

    fn plain() {
        colored::control::set_override(false);
    }

    fn turn(path: TurnPath, tool_calls: Vec<ToolResult>) -> RunTurnOutput {
        RunTurnOutput {
            response: "Here you go!".to_string(),
            tool_calls,
            history: vec![
                ConversationTurn::user("roll a dice"),
                ConversationTurn::assistant("Here you go!"),
            ],
            path,
            reply_source: ReplySource::Backend,
        }
    }

    #[test]
    fn test_turn_lists_traces_before_reply() {
        plain();
        let output = turn(
            TurnPath::Structured,
            vec![ToolResult::success("Dice Roll 🎲", "6-sided dice", "You rolled: 4")],
        );
        let text = ConsoleFormatter::format_turn(&output);
        assert_eq!(
            text,
            "  ✓ Dice Roll 🎲 6-sided dice → You rolled: 4\n\nHere you go!"
        );
    }

    #[test]
    fn test_fallback_turn_is_marked() {
        plain();
        let text = ConsoleFormatter::format_turn(&turn(TurnPath::FallbackConversation, vec![]));
        assert!(text.starts_with("(backend unavailable, answered offline)\n"));
        assert!(text.ends_with("Here you go!"));
    }

    #[test]
    fn test_multiline_output_is_indented() {
        plain();
        let trace = ConsoleFormatter::tool_trace(&ToolResult::success("Quote 💭", "quote", "a\nb"));
        assert!(trace.ends_with("→ a\n      b"));
    }

    #[test]
    fn test_capabilities() {
        plain();
        let report = CapabilityReport {
            groups: vec![(ToolCategory::Math, vec!["calculator".to_string()])],
        };
        let text = ConsoleFormatter::format_capabilities(&report);
        assert!(text.starts_with("Available tools: 1\n"));
        assert!(text.contains("\nMath\n  - calculator\n"));
    }

    #[test]
    fn test_history() {
        plain();
        assert_eq!(ConsoleFormatter::format_history(&[]), "(no history yet)");
        let text = ConsoleFormatter::format_history(&[
            ConversationTurn::user("hi"),
            ConversationTurn::assistant("hello"),
        ]);
        assert_eq!(text, "you: hi\nbot: hello");
    }

    #[test]
    fn test_health() {
        plain();
        let report = HealthReport {
            status: "ok",
            model: "offline".to_string(),
            total_tools: 25,
            tools: vec![],
        };
        assert_eq!(
            ConsoleFormatter::format_health(&report),
            "Status: ok\nModel: offline\nTools: 25"
        );
    }
}
