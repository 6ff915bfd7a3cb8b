//! Progress reporting while a turn runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use toolchat_application::{GatewayError, TurnProgressNotifier};
use toolchat_domain::{ToolCall, ToolResult, TurnPhase};

/// Spinner on stderr showing what the controller is doing.
///
/// Create one per turn; it clears itself when finished or dropped.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message("Thinking...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn phase_message(phase: TurnPhase) -> Option<&'static str> {
        match phase {
            TurnPhase::BuildContext | TurnPhase::PrimaryInvoke => Some("Thinking..."),
            TurnPhase::StructuredDispatch | TurnPhase::FallbackDispatch => Some("Running tools..."),
            TurnPhase::FallbackDetect => Some("Backend unavailable, matching keywords..."),
            TurnPhase::Verbalize | TurnPhase::PlainReply => Some("Composing reply..."),
            TurnPhase::Respond => None,
        }
    }

    /// Stop the spinner and erase it.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

impl TurnProgressNotifier for ProgressReporter {
    fn on_phase(&self, phase: TurnPhase) {
        match Self::phase_message(phase) {
            Some(message) => self.bar.set_message(message),
            None => self.bar.finish_and_clear(),
        }
    }

    fn on_fallback(&self, error: &GatewayError) {
        self.bar.println(format!(
            "{} {}",
            "!".yellow().bold(),
            format!("Backend call failed ({}), using offline fallback", error.kind()).dimmed()
        ));
    }

    fn on_tool_started(&self, call: &ToolCall) {
        self.bar.set_message(format!("Running {}...", call.tool_name));
    }

    fn on_tool_result(&self, result: &ToolResult) {
        let mark = if result.success {
            "✓".green()
        } else {
            "✗".red()
        };
        self.bar.set_message(format!("{} {}", mark, result.label));
    }

    fn on_tool_skipped(&self, tool_name: &str) {
        self.bar.println(format!(
            "{} {}",
            "?".yellow().bold(),
            format!("Backend asked for unknown tool '{}', skipped", tool_name).dimmed()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_working_phase_has_a_message() {
        for phase in [
            TurnPhase::BuildContext,
            TurnPhase::PrimaryInvoke,
            TurnPhase::StructuredDispatch,
            TurnPhase::PlainReply,
            TurnPhase::FallbackDetect,
            TurnPhase::FallbackDispatch,
            TurnPhase::Verbalize,
        ] {
            assert!(ProgressReporter::phase_message(phase).is_some(), "{}", phase);
        }
        assert!(ProgressReporter::phase_message(TurnPhase::Respond).is_none());
    }

    #[test]
    fn test_respond_finishes_spinner() {
        let reporter = ProgressReporter::new();
        reporter.on_phase(TurnPhase::PrimaryInvoke);
        reporter.on_phase(TurnPhase::Respond);
        assert!(reporter.bar.is_finished());
    }
}
