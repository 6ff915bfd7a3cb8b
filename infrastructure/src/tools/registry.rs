//! Tool Registry
//!
//! The [`ToolRegistry`] owns the tool catalog and the dispatch table and
//! implements [`ToolExecutorPort`].
//!
//! Both mappings are built once, from a single list of
//! `(definition, handler)` entries, so a tool cannot be advertised without
//! an executor or executed without being advertised.
//!
//! # Usage
//!
//! ```ignore
//! use toolchat_infrastructure::tools::{EncyclopediaClient, EncyclopediaSettings, ToolRegistry};
//!
//! let encyclopedia = EncyclopediaClient::new(&EncyclopediaSettings::default())?;
//! let registry = ToolRegistry::new(encyclopedia);
//!
//! assert!(registry.has_tool("calculator"));
//! let call = ToolCall::new("calculator").with_arg("expression", "2+2");
//! let result = registry.execute(&call).await;
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use toolchat_application::ports::tool_executor::ToolExecutorPort;
use toolchat_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::ToolResult,
};
use tracing::debug;

use super::encyclopedia::{self, EncyclopediaClient};
use super::{conversion, info, math, random, text, time};

type LocalHandler = fn(&ToolCall) -> ToolResult;

/// How a registered tool is executed.
#[derive(Clone, Copy)]
enum Handler {
    /// Pure in-process function.
    Local(LocalHandler),
    /// Summary lookup over HTTP.
    Encyclopedia,
}

/// The full catalog in advertised order, each entry paired with its handler.
fn catalog() -> Vec<(ToolDefinition, Handler)> {
    use Handler::{Encyclopedia, Local};
    vec![
        // Time & Date
        (time::get_time_definition(), Local(time::execute_get_time)),
        (time::calculate_age_definition(), Local(time::execute_calculate_age)),
        (time::days_until_definition(), Local(time::execute_days_until)),
        // Math
        (math::calculator_definition(), Local(math::execute_calculator)),
        (math::is_prime_definition(), Local(math::execute_is_prime)),
        (math::factorial_definition(), Local(math::execute_factorial)),
        (math::fibonacci_definition(), Local(math::execute_fibonacci)),
        // Information
        (info::get_weather_definition(), Local(info::execute_get_weather)),
        (encyclopedia::search_wikipedia_definition(), Encyclopedia),
        (info::get_random_fact_definition(), Local(info::execute_get_random_fact)),
        (info::get_joke_definition(), Local(info::execute_get_joke)),
        (info::get_quote_definition(), Local(info::execute_get_quote)),
        // Text
        (text::count_words_definition(), Local(text::execute_count_words)),
        (text::reverse_text_definition(), Local(text::execute_reverse_text)),
        (text::text_to_uppercase_definition(), Local(text::execute_text_to_uppercase)),
        (text::text_to_lowercase_definition(), Local(text::execute_text_to_lowercase)),
        // Conversion
        (conversion::convert_currency_definition(), Local(conversion::execute_convert_currency)),
        (conversion::convert_temperature_definition(), Local(conversion::execute_convert_temperature)),
        (conversion::encode_base64_definition(), Local(conversion::execute_encode_base64)),
        (conversion::decode_base64_definition(), Local(conversion::execute_decode_base64)),
        // Random / Fun
        (random::roll_dice_definition(), Local(random::execute_roll_dice)),
        (random::flip_coin_definition(), Local(random::execute_flip_coin)),
        (random::generate_password_definition(), Local(random::execute_generate_password)),
        (random::random_number_definition(), Local(random::execute_random_number)),
        (random::magic_8ball_definition(), Local(random::execute_magic_8ball)),
    ]
}

/// Immutable tool catalog plus name → executor table.
pub struct ToolRegistry {
    tool_spec: ToolSpec,
    handlers: HashMap<String, Handler>,
    encyclopedia: EncyclopediaClient,
}

impl ToolRegistry {
    /// Create a registry with the full catalog.
    pub fn new(encyclopedia: EncyclopediaClient) -> Self {
        let mut tool_spec = ToolSpec::new();
        let mut handlers = HashMap::new();
        for (definition, handler) in catalog() {
            handlers.insert(definition.name.clone(), handler);
            tool_spec = tool_spec.register(definition);
        }
        Self {
            tool_spec,
            handlers,
            encyclopedia,
        }
    }
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> Option<ToolResult> {
        let handler = *self.handlers.get(&call.tool_name)?;
        let result = match handler {
            Handler::Local(f) => f(call),
            Handler::Encyclopedia => self.encyclopedia.execute(call).await,
        };
        debug!(
            tool = %call.tool_name,
            success = result.success,
            "Tool finished"
        );
        Some(result)
    }
}
