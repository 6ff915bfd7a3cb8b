//! Chat parameters for the turn controller
//!
//! [`ChatParams`] groups the static parameters that control one turn in
//! [`RunTurnUseCase`](crate::use_cases::run_turn::RunTurnUseCase).

use crate::use_cases::run_turn::prompts::DEFAULT_SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};

/// Turn controller parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatParams {
    /// System instruction placed first in every backend context.
    pub system_prompt: String,
    /// How many of the most recent history entries are considered.
    pub history_window: usize,
    /// Sampling temperature of the primary (catalog-carrying) call.
    pub primary_temperature: f32,
    /// Sampling temperature of verbalization and plain fallback calls.
    pub verbalize_temperature: f32,
    /// Output limit of the primary call and structured verbalization.
    pub max_tokens: u32,
    /// Output limit of fallback-path calls.
    pub fallback_max_tokens: u32,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            history_window: 6,
            primary_temperature: 0.7,
            verbalize_temperature: 0.8,
            max_tokens: 300,
            fallback_max_tokens: 200,
        }
    }
}

impl ChatParams {
    // ==================== Builder Methods ====================

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn with_primary_temperature(mut self, temperature: f32) -> Self {
        self.primary_temperature = temperature;
        self
    }

    pub fn with_verbalize_temperature(mut self, temperature: f32) -> Self {
        self.verbalize_temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_fallback_max_tokens(mut self, max: u32) -> Self {
        self.fallback_max_tokens = max;
        self
    }
}
