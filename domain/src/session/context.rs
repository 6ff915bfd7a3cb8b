//! Conversation context windowing.
//!
//! The engine never stores history. Each turn receives the caller's history,
//! copies a bounded window of it into the backend context, and hands back
//! the history extended by exactly one user turn and one assistant turn.

use super::entities::{ConversationTurn, Message};

/// Select the turns of `history` that go into the backend context.
///
/// The window is taken over the raw history first (most recent `window`
/// entries), then non-conversational roles and empty turns are dropped.
pub fn windowed_history(history: &[ConversationTurn], window: usize) -> Vec<&ConversationTurn> {
    let start = history.len().saturating_sub(window);
    history[start..]
        .iter()
        .filter(|turn| turn.role.is_conversational() && !turn.content.is_empty())
        .collect()
}

/// Assemble the backend message list: system instruction, windowed
/// history, then the new user message.
pub fn build_messages(
    system_prompt: &str,
    history: &[ConversationTurn],
    window: usize,
    user_message: &str,
) -> Vec<Message> {
    let mut messages = Vec::with_capacity(window + 2);
    messages.push(Message::system(system_prompt));
    messages.extend(windowed_history(history, window).into_iter().map(Message::from));
    messages.push(Message::user(user_message));
    messages
}

/// The caller's history extended by this turn's exchange.
pub fn extend_history(
    history: &[ConversationTurn],
    user_message: &str,
    reply: &str,
) -> Vec<ConversationTurn> {
    let mut extended = Vec::with_capacity(history.len() + 2);
    extended.extend_from_slice(history);
    extended.push(ConversationTurn::user(user_message));
    extended.push(ConversationTurn::assistant(reply));
    extended
}
