//! Conversions between domain types and the chat/completions wire format.
//!
//! Also recovers tool calls that a backend emitted as inline text markup
//! (`<function=NAME{JSON}</function>`) instead of structured calls.

use super::wire::{
    ChatCompletionRequest, ChatCompletionResponse, ErrorEnvelope, WireFunction, WireMessage,
    WireToolCall,
};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use toolchat_application::ports::llm_gateway::{ChatRequest, GatewayError};
use toolchat_domain::{ContentBlock, LlmResponse, Message, Role, StopReason, ToolCall};

static INLINE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<function=([A-Za-z0-9_\-]+)[\s>(,]*(\{.*?\})\)?\s*</function>")
        .expect("inline function pattern is valid")
});

// ─── Domain → Wire ───────────────────────────────────────────────

pub fn convert_message(message: &Message) -> WireMessage {
    let tool_calls: Vec<WireToolCall> = message.tool_calls.iter().map(convert_tool_call).collect();
    let content = if tool_calls.is_empty() || !message.content.is_empty() {
        Some(message.content.clone())
    } else {
        None
    };

    WireMessage {
        role: message.role.as_str(),
        content,
        tool_calls,
        tool_call_id: message.tool_call_id.clone(),
        name: if message.role == Role::Tool {
            message.name.clone()
        } else {
            None
        },
    }
}

fn convert_tool_call(call: &ToolCall) -> WireToolCall {
    WireToolCall {
        id: call.id.clone().unwrap_or_default(),
        kind: "function".to_string(),
        function: WireFunction {
            name: call.tool_name.clone(),
            arguments: serde_json::to_string(&call.arguments).unwrap_or_else(|_| "{}".to_string()),
        },
    }
}

pub fn build_request<'a>(model: &'a str, request: &'a ChatRequest) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model,
        messages: request.messages.iter().map(convert_message).collect(),
        tools: &request.tools,
        tool_choice: if request.has_tools() {
            request.tool_choice.map(|c| c.as_str())
        } else {
            None
        },
        temperature: request.temperature,
        max_tokens: request.max_tokens,
    }
}

// ─── Wire → Domain ───────────────────────────────────────────────

/// Convert a completion into a domain response.
///
/// Tool-call arguments that do not decode to a JSON object make the whole
/// response malformed.
pub fn convert_response(response: ChatCompletionResponse) -> Result<LlmResponse, GatewayError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::MalformedResponse("response has no choices".to_string()))?;

    let mut content = Vec::new();
    let text = choice.message.content.unwrap_or_default();
    let (text, inline) = extract_inline_calls(&text)?;
    if !text.is_empty() {
        content.push(ContentBlock::Text(text));
    }
    content.extend(inline);

    for call in choice.message.tool_calls.unwrap_or_default() {
        content.push(ContentBlock::ToolUse {
            input: decode_arguments(&call.function.name, &call.function.arguments)?,
            id: call.id,
            name: call.function.name,
        });
    }

    let has_tools = content
        .iter()
        .any(|b| matches!(b, ContentBlock::ToolUse { .. }));
    let stop_reason = match choice.finish_reason.as_deref() {
        Some(_) if has_tools => Some(StopReason::ToolUse),
        Some(reason) => Some(StopReason::from_finish_reason(reason)),
        None => has_tools.then_some(StopReason::ToolUse),
    };

    Ok(LlmResponse {
        content,
        stop_reason,
        model: response.model,
    })
}

/// Recover tool intents from an error body whose `failed_generation`
/// carries inline function markup.
///
/// Returns `None` when the body is not such an error or holds no markup.
pub fn recover_failed_generation(body: &str) -> Option<LlmResponse> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    let generation = envelope.error.failed_generation?;
    let (_, calls) = extract_inline_calls(&generation).ok()?;
    if calls.is_empty() {
        return None;
    }
    Some(LlmResponse {
        content: calls,
        stop_reason: Some(StopReason::ToolUse),
        model: None,
    })
}

/// Human-readable message from an error body, falling back to the raw body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| match (e.error.code, e.error.message) {
            (Some(code), Some(msg)) => Some(format!("{}: {}", code, msg)),
            (None, Some(msg)) => Some(msg),
            _ => None,
        })
        .unwrap_or_else(|| body.to_string())
}

/// Split inline function markup out of `text`.
///
/// Returns the remaining text (trimmed) and one `ToolUse` block per
/// markup occurrence, with ids `inline_0`, `inline_1`, ...
fn extract_inline_calls(text: &str) -> Result<(String, Vec<ContentBlock>), GatewayError> {
    let mut calls = Vec::new();
    for (i, caps) in INLINE_FUNCTION.captures_iter(text).enumerate() {
        let name = caps[1].to_string();
        let input = decode_arguments(&name, &caps[2])?;
        calls.push(ContentBlock::ToolUse {
            id: format!("inline_{}", i),
            name,
            input,
        });
    }
    if calls.is_empty() {
        return Ok((text.to_string(), calls));
    }
    let rest = INLINE_FUNCTION.replace_all(text, "").trim().to_string();
    Ok((rest, calls))
}

fn decode_arguments(
    tool: &str,
    raw: &str,
) -> Result<HashMap<String, serde_json::Value>, GatewayError> {
    if raw.trim().is_empty() {
        return Ok(HashMap::new());
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Object(map)) => Ok(map.into_iter().collect()),
        Ok(serde_json::Value::Null) => Ok(HashMap::new()),
        Ok(other) => Err(GatewayError::MalformedResponse(format!(
            "arguments for '{}' are not an object: {}",
            tool, other
        ))),
        Err(e) => Err(GatewayError::MalformedResponse(format!(
            "arguments for '{}' are not valid JSON: {}",
            tool, e
        ))),
    }
}
