//! Tool domain module
//!
//! Defines the vocabulary of the assistant's **tool catalog**: what a tool
//! looks like to the backend ([`ToolDefinition`]), how it is invoked
//! ([`ToolCall`]), and what it returns ([`ToolResult`]).
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (catalog)    │    │ (invocation) │    │ (envelope)   │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! A [`ToolCall`] originates from one of two places: a structured intent
//! declared by the backend (carrying the backend's correlation id), or the
//! heuristic detector in [`crate::intent`] (no id).
//!
//! # Architecture
//!
//! - **Domain** (this module): definitions and argument accessors, no I/O
//! - **Application** (`ToolExecutorPort`): port trait for dispatch
//! - **Infrastructure** (`ToolRegistry`): the 25 executors and the dispatch table

pub mod category;
pub mod entities;
pub mod names;
pub mod value_objects;

pub use category::ToolCategory;
pub use entities::{ParamType, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use value_objects::{ToolError, ToolResult};
