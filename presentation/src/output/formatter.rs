//! Output formatter trait

use toolchat_application::{CapabilityReport, HealthReport, RunTurnOutput};

/// Trait for rendering command results
pub trait OutputFormatter {
    /// Render the result of one turn
    fn format_turn(&self, output: &RunTurnOutput) -> String;

    /// Render the tool listing
    fn format_capabilities(&self, report: &CapabilityReport) -> String;

    /// Render the liveness report
    fn format_health(&self, report: &HealthReport) -> String;
}
