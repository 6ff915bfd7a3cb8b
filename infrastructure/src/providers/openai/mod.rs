//! OpenAI-compatible chat/completions provider
//!
//! Talks to any backend exposing `POST {base_url}/chat/completions` with
//! bearer authentication (Groq, OpenAI, local llama.cpp / vLLM servers).
//!
//! Besides transport errors, two backend quirks are handled here:
//! - tool calls emitted as inline `<function=NAME{JSON}</function>` text are
//!   turned into structured intents;
//! - a `400 tool_use_failed` error whose `failed_generation` holds such markup
//!   is recovered the same way instead of failing the turn.

mod parse;
mod wire;

use async_trait::async_trait;
use std::time::Duration;
use toolchat_application::ports::llm_gateway::{ChatRequest, GatewayError, LlmGateway};
use toolchat_domain::LlmResponse;
use tracing::{debug, info, warn};

use wire::ChatCompletionResponse;

/// Default endpoint (Groq's OpenAI-compatible API).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest error body kept in [`GatewayError::HttpStatus`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Connection settings for the backend.
#[derive(Clone, PartialEq)]
pub struct BackendSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// The API key must never end up in logs.
impl std::fmt::Debug for BackendSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BackendSettings {
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// [`LlmGateway`] over an OpenAI-compatible HTTP API.
pub struct OpenAiCompatibleGateway {
    http: reqwest::Client,
    settings: BackendSettings,
    endpoint: String,
}

impl OpenAiCompatibleGateway {
    pub fn new(settings: BackendSettings) -> Result<Self, GatewayError> {
        if !settings.base_url.starts_with("http://") && !settings.base_url.starts_with("https://") {
            return Err(GatewayError::Configuration(format!(
                "base URL must start with http:// or https://, got '{}'",
                settings.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        info!(
            endpoint = %settings.endpoint(),
            model = %settings.model,
            "Backend gateway initialized"
        );

        Ok(Self {
            endpoint: settings.endpoint(),
            http,
            settings,
        })
    }

    pub fn settings(&self) -> &BackendSettings {
        &self.settings
    }

    fn map_transport_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::ConnectionError(e.to_string())
        } else {
            GatewayError::RequestFailed(e.to_string())
        }
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatibleGateway {
    fn model_id(&self) -> &str {
        &self.settings.model
    }

    async fn complete(&self, request: &ChatRequest) -> Result<LlmResponse, GatewayError> {
        let api_key = self.settings.api_key.as_deref().ok_or_else(|| {
            GatewayError::Configuration("no API key configured for the backend".to_string())
        })?;

        let body = parse::build_request(&self.settings.model, request);
        debug!(
            messages = body.messages.len(),
            tools = body.tools.len(),
            max_tokens = body.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            if let Some(recovered) = parse::recover_failed_generation(&text) {
                warn!(
                    status = status.as_u16(),
                    "Backend rejected its own tool call; recovered intent from failed generation"
                );
                return Ok(recovered);
            }
            warn!(status = status.as_u16(), "Backend returned an error status");
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                body: toolchat_domain::util::truncate_str(
                    &parse::error_message(&text),
                    MAX_ERROR_BODY_CHARS,
                )
                .to_string(),
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        let reply = parse::convert_response(parsed)?;

        debug!(
            tool_calls = reply.tool_calls().len(),
            stop_reason = ?reply.stop_reason,
            "Received chat completion"
        );
        Ok(reply)
    }
}
