//! Conversation domain.
//!
//! - [`entities::ConversationTurn`]: one caller-owned history entry
//! - [`entities::Message`]: a single message sent to the backend
//! - [`context`]: history windowing and context assembly
//! - [`response::LlmResponse`]: structured backend reply (text and tool intents)
//! - [`phase::TurnPhase`]: controller states of one turn

pub mod context;
pub mod entities;
pub mod phase;
pub mod response;
