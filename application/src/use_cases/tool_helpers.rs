//! Shared helpers for tool use cases.

use toolchat_domain::tool::entities::ToolCall;

/// Extract a short preview string from tool call arguments.
///
/// Looks for well-known keys (`expression`, `query`, `text`, `city`)
/// first, then falls back to the compact JSON of all arguments.
pub(crate) fn tool_args_preview(call: &ToolCall) -> String {
    let keys = ["expression", "query", "text", "city", "encoded"];
    for key in &keys {
        if let Some(serde_json::Value::String(s)) = call.arguments.get(*key) {
            return truncate_preview(s, 50);
        }
    }
    if call.arguments.is_empty() {
        return String::new();
    }
    let mut pairs: Vec<_> = call.arguments.iter().collect();
    pairs.sort_by_key(|(k, _)| k.as_str());
    let rendered = pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ");
    truncate_preview(&rendered, 50)
}

fn truncate_preview(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
