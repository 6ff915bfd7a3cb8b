//! Turn progress notification port
//!
//! The presentation layer implements [`TurnProgressNotifier`] to show what
//! the controller is doing while a turn runs (spinner, tool traces).

use crate::ports::llm_gateway::GatewayError;
use toolchat_domain::{ToolCall, ToolResult, TurnPhase};

/// Callbacks for progress during one turn.
///
/// All methods have no-op defaults.
pub trait TurnProgressNotifier: Send + Sync {
    /// The controller entered a new phase.
    fn on_phase(&self, _phase: TurnPhase) {}

    /// The primary backend call failed; the fallback path takes over.
    fn on_fallback(&self, _error: &GatewayError) {}

    /// A tool is about to run.
    fn on_tool_started(&self, _call: &ToolCall) {}

    /// A tool finished.
    fn on_tool_result(&self, _result: &ToolResult) {}

    /// A declared tool was not in the registry and was skipped.
    fn on_tool_skipped(&self, _tool_name: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoTurnProgress;

impl TurnProgressNotifier for NoTurnProgress {}
