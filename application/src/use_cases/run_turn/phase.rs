//! Tagged results of controller phases.

use crate::ports::llm_gateway::GatewayError;
use serde::Serialize;

/// Result of a phase that talks to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseOutcome<T> {
    /// The phase produced what the next state needs.
    Success(T),
    /// The backend answered, but without any tool intent. Carries its text.
    NoIntent(String),
    /// Transport, status, decoding or schema failure.
    ProtocolFailure(GatewayError),
}

impl<T> PhaseOutcome<T> {
    pub fn label(&self) -> &'static str {
        match self {
            PhaseOutcome::Success(_) => "success",
            PhaseOutcome::NoIntent(_) => "no_intent",
            PhaseOutcome::ProtocolFailure(_) => "protocol_failure",
        }
    }

    pub fn is_protocol_failure(&self) -> bool {
        matches!(self, PhaseOutcome::ProtocolFailure(_))
    }
}

/// Which branch of the state machine produced the turn's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPath {
    /// Backend declared intents; they were dispatched and verbalized.
    Structured,
    /// Backend answered in plain text.
    Plain,
    /// Backend failed; the heuristic detector picked a tool.
    FallbackTool,
    /// Backend failed and no rule matched.
    FallbackConversation,
}

impl TurnPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPath::Structured => "structured",
            TurnPath::Plain => "plain",
            TurnPath::FallbackTool => "fallback_tool",
            TurnPath::FallbackConversation => "fallback_conversation",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TurnPath::FallbackTool | TurnPath::FallbackConversation)
    }
}

/// Where the final reply text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Text written by the backend.
    Backend,
    /// The backend said nothing; the default greeting was used.
    Default,
    /// Raw tool output embedded in a fixed template.
    Templated,
    /// Static capability reply; every backend interaction failed.
    Static,
}

impl ReplySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplySource::Backend => "backend",
            ReplySource::Default => "default",
            ReplySource::Templated => "templated",
            ReplySource::Static => "static",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        let ok: PhaseOutcome<u8> = PhaseOutcome::Success(1);
        let plain: PhaseOutcome<u8> = PhaseOutcome::NoIntent("hi".to_string());
        let failed: PhaseOutcome<u8> = PhaseOutcome::ProtocolFailure(GatewayError::Timeout);

        assert_eq!(ok.label(), "success");
        assert_eq!(plain.label(), "no_intent");
        assert_eq!(failed.label(), "protocol_failure");
        assert!(failed.is_protocol_failure());
        assert!(!ok.is_protocol_failure());
    }

    #[test]
    fn test_fallback_paths() {
        assert!(TurnPath::FallbackTool.is_fallback());
        assert!(TurnPath::FallbackConversation.is_fallback());
        assert!(!TurnPath::Structured.is_fallback());
        assert!(!TurnPath::Plain.is_fallback());
    }
}
