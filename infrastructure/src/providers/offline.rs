//! Gateway used when no backend is configured or `--offline` is given.
//!
//! Every call fails with a connection error, so each turn goes straight to
//! heuristic intent detection.

use async_trait::async_trait;
use toolchat_application::ports::llm_gateway::{ChatRequest, GatewayError, LlmGateway};
use toolchat_domain::LlmResponse;

pub struct UnavailableGateway {
    model: String,
}

impl UnavailableGateway {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

#[async_trait]
impl LlmGateway for UnavailableGateway {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<LlmResponse, GatewayError> {
        Err(GatewayError::ConnectionError(
            "backend disabled (offline mode)".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolchat_domain::Message;

    #[tokio::test]
    async fn test_always_unavailable() {
        let gateway = UnavailableGateway::new("offline");
        assert_eq!(gateway.model_id(), "offline");
        let err = gateway
            .complete(&ChatRequest::new(vec![Message::user("hi")]))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "connection");
    }
}
