//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod capabilities;
pub mod run_turn;
pub(crate) mod tool_helpers;
