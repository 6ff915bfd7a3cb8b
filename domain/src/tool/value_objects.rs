//! Tool domain value objects (result envelope and argument errors)
//!
//! Every executor invocation produces exactly one [`ToolResult`]. Invalid
//! input never escapes as an error: executors turn a [`ToolError`] into a
//! `success = false` envelope carrying the diagnostic as its output.

use serde::{Deserialize, Serialize};

/// Error raised while reading or validating tool arguments.
///
/// | Code | Meaning |
/// |------|---------|
/// | `MISSING_ARGUMENT` | A required parameter was not supplied |
/// | `INVALID_ARGUMENT` | A parameter had the wrong shape or value |
/// | `EXECUTION_FAILED` | The tool ran but could not produce a result |
/// | `TIMEOUT` | An outbound lookup timed out |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    pub code: String,
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn missing_argument(name: &str) -> Self {
        Self::new(
            "MISSING_ARGUMENT",
            format!("Missing required argument: {}", name),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new("TIMEOUT", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ToolError {}

/// Uniform result envelope of one tool execution.
///
/// Serialized with the field names the turn-level response contract uses
/// (`tool`, `input`, `output`, `success`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Display label, e.g. "Calculator 🧮"
    #[serde(rename = "tool")]
    pub label: String,
    /// Echo of what was processed
    pub input: String,
    /// Human-readable output or diagnostic
    pub output: String,
    pub success: bool,
}

impl ToolResult {
    pub fn success(
        label: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            input: input.into(),
            output: output.into(),
            success: true,
        }
    }

    pub fn failure(
        label: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            input: input.into(),
            output: output.into(),
            success: false,
        }
    }

    /// Failure envelope whose output is the error's diagnostic message.
    pub fn from_error(label: impl Into<String>, input: impl Into<String>, error: &ToolError) -> Self {
        Self::failure(label, input, error.message.clone())
    }
}
