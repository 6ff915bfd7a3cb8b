//! Fixed prompts and canned replies used by the turn controller.

use toolchat_domain::ToolResult;

/// Default system instruction for every turn.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a friendly AI assistant with 25+ tools! Be conversational and warm.

Keep responses brief and natural (2-3 sentences max). Use a warm, engaging tone.";

/// System instruction for verbalizing a heuristically executed tool.
pub const FALLBACK_SYSTEM_PROMPT: &str =
    "You are a friendly AI. Respond naturally based on the tool result.";

/// Reply when the backend answered with neither text nor tool intents.
pub const DEFAULT_REPLY: &str = "Hey! How can I help you? 😊";

/// Reply when every backend interaction of a turn failed.
pub const CAPABILITY_REPLY: &str = "I'm here to help! I have 25+ tools including Wikipedia, calculator, weather, and more. What would you like to know? 😊";

/// User prompt asking the backend to phrase one tool result.
pub fn fallback_verbalize_prompt(user_message: &str, result: &ToolResult) -> String {
    format!(
        "User asked: '{}'\n\nTool: {}\nResult: {}\n\nRespond naturally in 2-3 sentences.",
        user_message, result.label, result.output
    )
}

/// Reply built without the backend, embedding raw tool outputs.
///
/// With no results at all this is the capability reply.
pub fn templated_reply(results: &[ToolResult]) -> String {
    if results.is_empty() {
        return CAPABILITY_REPLY.to_string();
    }
    let outputs = results
        .iter()
        .map(|r| r.output.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    format!("Here's what I found: {}", outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_prompt_embeds_tool_result() {
        let result = ToolResult::success("Calculator 🧮", "12*4", "12*4 = 48");
        let prompt = fallback_verbalize_prompt("what is 12*4", &result);

        assert!(prompt.starts_with("User asked: 'what is 12*4'"));
        assert!(prompt.contains("Tool: Calculator 🧮"));
        assert!(prompt.contains("Result: 12*4 = 48"));
    }

    #[test]
    fn test_templated_reply() {
        let one = vec![ToolResult::success("Coin Flip 🪙", "Flip coin", "Result: Heads")];
        assert_eq!(templated_reply(&one), "Here's what I found: Result: Heads");

        let two = vec![
            ToolResult::success("Coin Flip 🪙", "Flip coin", "Result: Heads"),
            ToolResult::success("Dice Roller 🎲", "6-sided dice", "You rolled: 4"),
        ];
        assert_eq!(
            templated_reply(&two),
            "Here's what I found: Result: Heads; You rolled: 4"
        );

        assert_eq!(templated_reply(&[]), CAPABILITY_REPLY);
    }
}
