//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use serde::Serialize;
use toolchat_application::{CapabilityReport, HealthReport, RunTurnOutput};

/// Pretty-printed JSON, one document per result
pub struct JsonFormatter;

/// Capability listing with its total; category order is preserved.
#[derive(Serialize)]
struct CapabilitiesDocument<'a> {
    total_tools: usize,
    categories: &'a CapabilityReport,
}

impl JsonFormatter {
    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    /// `{response, tool_calls, history}`
    fn format_turn(&self, output: &RunTurnOutput) -> String {
        Self::to_json(output)
    }

    /// `{total_tools, categories: {<category>: [names]}}`
    fn format_capabilities(&self, report: &CapabilityReport) -> String {
        Self::to_json(&CapabilitiesDocument {
            total_tools: report.total_tools(),
            categories: report,
        })
    }

    fn format_health(&self, report: &HealthReport) -> String {
        Self::to_json(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolchat_application::{ReplySource, TurnPath};
    use toolchat_domain::{ConversationTurn, ToolCategory, ToolResult};

    #[test]
    fn test_turn_contract() {
        let output = RunTurnOutput {
            response: "12*4 is 48!".to_string(),
            tool_calls: vec![ToolResult::success("Calculator 🧮", "12*4", "12*4 = 48")],
            history: vec![
                ConversationTurn::user("what is 12*4"),
                ConversationTurn::assistant("12*4 is 48!"),
            ],
            path: TurnPath::Structured,
            reply_source: ReplySource::Backend,
        };

        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_turn(&output)).unwrap();
        assert_eq!(value["response"], "12*4 is 48!");
        assert_eq!(value["tool_calls"][0]["tool"], "Calculator 🧮");
        assert_eq!(value["tool_calls"][0]["success"], true);
        assert_eq!(value["history"][1]["role"], "assistant");
        assert!(value.get("path").is_none());
    }

    #[test]
    fn test_capabilities_keep_category_order() {
        let report = CapabilityReport {
            groups: vec![
                (ToolCategory::TimeDate, vec!["get_time".to_string()]),
                (ToolCategory::Math, vec!["calculator".to_string(), "is_prime".to_string()]),
            ],
        };
        let text = JsonFormatter.format_capabilities(&report);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["total_tools"], 3);
        assert_eq!(value["categories"]["Math"][1], "is_prime");
        assert!(text.find("Time & Date").unwrap() < text.find("Math").unwrap());
    }

    #[test]
    fn test_health() {
        let report = HealthReport {
            status: "ok",
            model: "llama-3.3-70b-versatile".to_string(),
            total_tools: 1,
            tools: vec!["get_time".to_string()],
        };
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_health(&report)).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["tools"][0], "get_time");
    }
}
