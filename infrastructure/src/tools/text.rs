//! Text tools: count_words, reverse_text, text_to_uppercase, text_to_lowercase

use toolchat_domain::tool::{
    category::ToolCategory,
    entities::{ToolCall, ToolDefinition, ToolParameter},
    names::{COUNT_WORDS, REVERSE_TEXT, TEXT_TO_LOWERCASE, TEXT_TO_UPPERCASE},
    value_objects::ToolResult,
};

const WORD_COUNTER: &str = "Word Counter 📝";
const REVERSER: &str = "Text Reverser 🔄";
const UPPERCASE: &str = "Uppercase Converter 🔤";
const LOWERCASE: &str = "Lowercase Converter 🔡";

/// Long inputs are echoed back cut to this many characters.
const INPUT_ECHO_CHARS: usize = 50;

pub fn count_words_definition() -> ToolDefinition {
    ToolDefinition::new(COUNT_WORDS, "Count words in text", ToolCategory::Text)
        .with_parameter(ToolParameter::new("text", "Text to count words in", true))
}

pub fn reverse_text_definition() -> ToolDefinition {
    ToolDefinition::new(REVERSE_TEXT, "Reverse text", ToolCategory::Text)
        .with_parameter(ToolParameter::new("text", "Text to reverse", true))
}

pub fn text_to_uppercase_definition() -> ToolDefinition {
    ToolDefinition::new(TEXT_TO_UPPERCASE, "Convert text to uppercase", ToolCategory::Text)
        .with_parameter(ToolParameter::new("text", "Text to convert", true))
}

pub fn text_to_lowercase_definition() -> ToolDefinition {
    ToolDefinition::new(TEXT_TO_LOWERCASE, "Convert text to lowercase", ToolCategory::Text)
        .with_parameter(ToolParameter::new("text", "Text to convert", true))
}

pub fn execute_count_words(call: &ToolCall) -> ToolResult {
    let text = match call.require_string("text") {
        Ok(t) => t,
        Err(e) => return ToolResult::from_error(WORD_COUNTER, "", &e),
    };
    let words = text.split_whitespace().count();
    let chars = text.chars().count();
    let echo: String = text.chars().take(INPUT_ECHO_CHARS).collect();
    ToolResult::success(
        WORD_COUNTER,
        echo,
        format!("Words: {}, Characters: {}", words, chars),
    )
}

pub fn execute_reverse_text(call: &ToolCall) -> ToolResult {
    transform(call, REVERSER, |t| t.chars().rev().collect())
}

pub fn execute_text_to_uppercase(call: &ToolCall) -> ToolResult {
    transform(call, UPPERCASE, str::to_uppercase)
}

pub fn execute_text_to_lowercase(call: &ToolCall) -> ToolResult {
    transform(call, LOWERCASE, str::to_lowercase)
}

fn transform(call: &ToolCall, label: &str, f: impl Fn(&str) -> String) -> ToolResult {
    match call.require_string("text") {
        Ok(text) => ToolResult::success(label, text, f(text)),
        Err(e) => ToolResult::from_error(label, "", &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_call(name: &str, text: &str) -> ToolCall {
        ToolCall::new(name).with_arg("text", text)
    }

    #[test]
    fn test_count_words() {
        let result = execute_count_words(&text_call(COUNT_WORDS, "hello  brave\nnew world"));
        assert_eq!(result.output, "Words: 4, Characters: 22");
    }

    #[test]
    fn test_count_words_truncates_echo() {
        let long = "word ".repeat(30);
        let result = execute_count_words(&text_call(COUNT_WORDS, &long));
        assert_eq!(result.input.chars().count(), 50);
        assert_eq!(result.output, "Words: 30, Characters: 150");
    }

    #[test]
    fn test_reverse_is_an_involution() {
        let once = execute_reverse_text(&text_call(REVERSE_TEXT, "héllo wörld"));
        assert_eq!(once.output, "dlröw olléh");
        let twice = execute_reverse_text(&text_call(REVERSE_TEXT, &once.output));
        assert_eq!(twice.output, "héllo wörld");
    }

    #[test]
    fn test_case_conversion_is_idempotent() {
        let upper = execute_text_to_uppercase(&text_call(TEXT_TO_UPPERCASE, "Hello World"));
        assert_eq!(upper.output, "HELLO WORLD");
        let again = execute_text_to_uppercase(&text_call(TEXT_TO_UPPERCASE, &upper.output));
        assert_eq!(again.output, upper.output);

        let lower = execute_text_to_lowercase(&text_call(TEXT_TO_LOWERCASE, "Hello World"));
        assert_eq!(lower.output, "hello world");
    }

    #[test]
    fn test_missing_text_is_failure() {
        let result = execute_reverse_text(&ToolCall::new(REVERSE_TEXT));
        assert!(!result.success);
        assert_eq!(result.label, REVERSER);
    }
}
