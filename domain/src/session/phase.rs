//! Phases of one conversational turn.

use serde::{Deserialize, Serialize};

/// Controller state for a single turn.
///
/// ```text
/// BuildContext → PrimaryInvoke → {StructuredDispatch → Verbalize | PlainReply} → Respond
///                     │
///                     └─ backend failure → FallbackDetect → {FallbackDispatch → Verbalize | PlainReply} → Respond
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    BuildContext,
    PrimaryInvoke,
    StructuredDispatch,
    PlainReply,
    FallbackDetect,
    FallbackDispatch,
    Verbalize,
    Respond,
}

impl TurnPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::BuildContext => "build_context",
            TurnPhase::PrimaryInvoke => "primary_invoke",
            TurnPhase::StructuredDispatch => "structured_dispatch",
            TurnPhase::PlainReply => "plain_reply",
            TurnPhase::FallbackDetect => "fallback_detect",
            TurnPhase::FallbackDispatch => "fallback_dispatch",
            TurnPhase::Verbalize => "verbalize",
            TurnPhase::Respond => "respond",
        }
    }

    /// Whether this phase belongs to the fallback branch.
    pub fn is_fallback(&self) -> bool {
        matches!(self, TurnPhase::FallbackDetect | TurnPhase::FallbackDispatch)
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
