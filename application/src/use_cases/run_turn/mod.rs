//! Run Turn use case.
//!
//! Drives one conversational turn through the orchestration state machine:
//!
//! ```text
//! BuildContext → PrimaryInvoke ─┬─ Success ────────▶ StructuredDispatch → Verbalize ─┐
//!                               ├─ NoIntent ───────▶ PlainReply ─────────────────────┤
//!                               └─ ProtocolFailure ▶ FallbackDetect ─┬─ FallbackDispatch → Verbalize ─┤
//!                                                                    └─ PlainReply ───────────────────┤
//!                                                                                          Respond ◀──┘
//! ```
//!
//! The use case never fails: every branch resolves to reply text. Backend
//! problems are logged and absorbed by the fallback path, and a static
//! capability reply is the last resort.

pub mod phase;
pub mod prompts;

pub use phase::{PhaseOutcome, ReplySource, TurnPath};

use crate::config::ChatParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{ChatRequest, LlmGateway};
use crate::ports::progress::TurnProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use crate::use_cases::tool_helpers::tool_args_preview;
use prompts::{
    CAPABILITY_REPLY, DEFAULT_REPLY, FALLBACK_SYSTEM_PROMPT, fallback_verbalize_prompt,
    templated_reply,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use toolchat_domain::session::context::{build_messages, extend_history};
use toolchat_domain::util::truncate_str;
use toolchat_domain::{
    ConversationTurn, IntentDetector, LlmResponse, Message, ToolCall, ToolResult, ToolSpec,
    TurnPhase,
};
use tracing::{debug, info, warn};

/// Input for the [`RunTurnUseCase`]: the turn-level request contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunTurnInput {
    /// The new user message.
    pub message: String,
    /// Caller-owned history of prior turns.
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

impl RunTurnInput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }
}

/// Output of the [`RunTurnUseCase`].
///
/// Serializes to the turn-level response contract
/// `{response, tool_calls, history}`.
#[derive(Debug, Clone, Serialize)]
pub struct RunTurnOutput {
    /// Final reply text.
    pub response: String,
    /// Executed tool results, in execution order.
    pub tool_calls: Vec<ToolResult>,
    /// Input history extended by the user turn and the assistant turn.
    pub history: Vec<ConversationTurn>,
    #[serde(skip)]
    pub path: TurnPath,
    #[serde(skip)]
    pub reply_source: ReplySource,
}

/// Reply assembled by one branch of the state machine.
struct BranchReply {
    text: String,
    results: Vec<ToolResult>,
    path: TurnPath,
    source: ReplySource,
}

/// Use case for running one conversational turn.
///
/// Stateless between calls: the caller supplies the history and receives
/// the extended history back. Within a turn everything is sequential.
#[derive(Clone)]
pub struct RunTurnUseCase {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    detector: IntentDetector,
    params: ChatParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunTurnUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            gateway,
            tool_executor,
            tool_schema,
            detector: IntentDetector::default(),
            params: ChatParams::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_params(mut self, params: ChatParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_detector(mut self, detector: IntentDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &ChatParams {
        &self.params
    }

    /// Catalog advertised to the backend.
    pub fn tool_spec(&self) -> &ToolSpec {
        self.tool_executor.tool_spec()
    }

    pub fn model_id(&self) -> &str {
        self.gateway.model_id()
    }

    /// Run one turn with progress callbacks.
    pub async fn execute(
        &self,
        input: RunTurnInput,
        progress: &dyn TurnProgressNotifier,
    ) -> RunTurnOutput {
        info!(
            history = input.history.len(),
            "Starting turn: {}",
            truncate_str(&input.message, 100)
        );
        self.conversation_logger.log(ConversationEvent::new(
            "turn_started",
            serde_json::json!({
                "message": input.message,
                "history_len": input.history.len(),
            }),
        ));

        progress.on_phase(TurnPhase::BuildContext);
        let context = build_messages(
            &self.params.system_prompt,
            &input.history,
            self.params.history_window,
            &input.message,
        );

        progress.on_phase(TurnPhase::PrimaryInvoke);
        let outcome = self.primary_invoke(&context).await;
        debug!(outcome = outcome.label(), "Primary call finished");

        let reply = match outcome {
            PhaseOutcome::Success(response) => {
                self.structured_dispatch(context, response, progress).await
            }
            PhaseOutcome::NoIntent(text) => {
                progress.on_phase(TurnPhase::PlainReply);
                plain_reply(text)
            }
            PhaseOutcome::ProtocolFailure(error) => {
                warn!(error = %error, "Primary call failed, using heuristic fallback");
                self.conversation_logger.log(ConversationEvent::new(
                    "fallback_triggered",
                    serde_json::json!({
                        "kind": error.kind(),
                        "error": error.to_string(),
                    }),
                ));
                progress.on_fallback(&error);
                self.fallback(&input.message, context, progress).await
            }
        };

        progress.on_phase(TurnPhase::Respond);
        info!(
            path = reply.path.as_str(),
            source = reply.source.as_str(),
            tools = reply.results.len(),
            "Turn complete"
        );
        self.conversation_logger.log(ConversationEvent::new(
            "turn_completed",
            serde_json::json!({
                "path": reply.path.as_str(),
                "reply_source": reply.source.as_str(),
                "tool_count": reply.results.len(),
                "response": reply.text,
            }),
        ));

        let history = extend_history(&input.history, &input.message, &reply.text);
        RunTurnOutput {
            response: reply.text,
            tool_calls: reply.results,
            history,
            path: reply.path,
            reply_source: reply.source,
        }
    }

    /// PrimaryInvoke: context + full catalog, tool choice "auto".
    async fn primary_invoke(&self, context: &[Message]) -> PhaseOutcome<LlmResponse> {
        let tools = self
            .tool_schema
            .catalog_schema(self.tool_executor.tool_spec());
        debug!(tools = tools.len(), model = self.gateway.model_id(), "Primary call");

        let request = ChatRequest::new(context.to_vec())
            .with_tools(tools)
            .with_temperature(self.params.primary_temperature)
            .with_max_tokens(self.params.max_tokens);

        match self.gateway.complete(&request).await {
            Ok(response) if response.has_tool_calls() => PhaseOutcome::Success(response),
            Ok(response) => PhaseOutcome::NoIntent(response.text_content()),
            Err(e) => PhaseOutcome::ProtocolFailure(e),
        }
    }

    /// StructuredDispatch + Verbalize.
    async fn structured_dispatch(
        &self,
        mut messages: Vec<Message>,
        response: LlmResponse,
        progress: &dyn TurnProgressNotifier,
    ) -> BranchReply {
        progress.on_phase(TurnPhase::StructuredDispatch);

        let calls: Vec<ToolCall> = response
            .tool_calls()
            .into_iter()
            .enumerate()
            .map(|(i, mut call)| {
                if call.id.is_none() {
                    call.id = Some(format!("call_{}", i));
                }
                call
            })
            .collect();
        info!(intents = calls.len(), "Backend declared tool intents");

        let mut results = Vec::new();
        let mut answered = Vec::new();
        let mut tool_messages = Vec::new();
        for call in &calls {
            if let Some(result) = self.dispatch(call, "structured", progress).await {
                let call_id = call.id.clone().unwrap_or_default();
                tool_messages.push(Message::tool_result(
                    call_id,
                    &call.tool_name,
                    tool_message_content(&result),
                ));
                answered.push(call.clone());
                results.push(result);
            }
        }

        // Only intents that produced a result are echoed back, so every
        // echoed call id has a matching tool message.
        let preamble = response.text_content();
        if !answered.is_empty() {
            messages.push(Message::assistant_with_tool_calls(preamble, answered));
        } else if !preamble.is_empty() {
            messages.push(Message::assistant(preamble));
        }
        messages.extend(tool_messages);

        progress.on_phase(TurnPhase::Verbalize);
        let request = ChatRequest::new(messages)
            .with_temperature(self.params.verbalize_temperature)
            .with_max_tokens(self.params.max_tokens);

        let (text, source) = match self.gateway.complete(&request).await {
            Ok(reply) if !reply.text_content().trim().is_empty() => {
                (reply.text_content(), ReplySource::Backend)
            }
            Ok(_) => {
                warn!("Verbalization returned no text");
                templated(&results)
            }
            Err(e) => {
                warn!(error = %e, "Verbalization failed");
                templated(&results)
            }
        };

        BranchReply {
            text,
            results,
            path: TurnPath::Structured,
            source,
        }
    }

    /// FallbackDetect → {FallbackDispatch → Verbalize | PlainReply}.
    async fn fallback(
        &self,
        user_message: &str,
        context: Vec<Message>,
        progress: &dyn TurnProgressNotifier,
    ) -> BranchReply {
        progress.on_phase(TurnPhase::FallbackDetect);

        if let Some(hit) = self.detector.detect(user_message) {
            info!(rule = hit.rule, tool = %hit.call.tool_name, "Heuristic match");
            progress.on_phase(TurnPhase::FallbackDispatch);
            if let Some(result) = self.dispatch(&hit.call, "heuristic", progress).await {
                progress.on_phase(TurnPhase::Verbalize);
                let (text, source) = self.verbalize_fallback(user_message, &result).await;
                return BranchReply {
                    text,
                    results: vec![result],
                    path: TurnPath::FallbackTool,
                    source,
                };
            }
        } else {
            debug!("No heuristic rule matched");
        }

        progress.on_phase(TurnPhase::PlainReply);
        let request = ChatRequest::new(context)
            .with_temperature(self.params.verbalize_temperature)
            .with_max_tokens(self.params.fallback_max_tokens);
        let (text, source) = match self.gateway.complete(&request).await {
            Ok(reply) if !reply.text_content().trim().is_empty() => {
                (reply.text_content(), ReplySource::Backend)
            }
            Ok(_) => (CAPABILITY_REPLY.to_string(), ReplySource::Static),
            Err(e) => {
                warn!(error = %e, "Plain fallback call failed");
                (CAPABILITY_REPLY.to_string(), ReplySource::Static)
            }
        };

        BranchReply {
            text,
            results: Vec::new(),
            path: TurnPath::FallbackConversation,
            source,
        }
    }

    /// Best-effort phrasing of a heuristically executed tool.
    async fn verbalize_fallback(
        &self,
        user_message: &str,
        result: &ToolResult,
    ) -> (String, ReplySource) {
        let request = ChatRequest::new(vec![
            Message::system(FALLBACK_SYSTEM_PROMPT),
            Message::user(fallback_verbalize_prompt(user_message, result)),
        ])
        .with_temperature(self.params.verbalize_temperature)
        .with_max_tokens(self.params.fallback_max_tokens);

        match self.gateway.complete(&request).await {
            Ok(reply) if !reply.text_content().trim().is_empty() => {
                (reply.text_content(), ReplySource::Backend)
            }
            Ok(_) => templated(std::slice::from_ref(result)),
            Err(e) => {
                debug!(error = %e, "Fallback verbalization failed");
                templated(std::slice::from_ref(result))
            }
        }
    }

    /// Resolve and execute one call. `None` means the tool is unknown.
    async fn dispatch(
        &self,
        call: &ToolCall,
        source: &'static str,
        progress: &dyn TurnProgressNotifier,
    ) -> Option<ToolResult> {
        if !self.tool_executor.has_tool(&call.tool_name) {
            warn!(tool = %call.tool_name, "Skipping unknown tool");
            progress.on_tool_skipped(&call.tool_name);
            return None;
        }

        progress.on_tool_started(call);
        debug!(
            tool = %call.tool_name,
            args = %tool_args_preview(call),
            "Executing tool"
        );
        let result = self.tool_executor.execute(call).await?;
        progress.on_tool_result(&result);

        self.conversation_logger.log(ConversationEvent::new(
            "tool_executed",
            serde_json::json!({
                "source": source,
                "tool": call.tool_name,
                "call_id": call.id,
                "label": result.label,
                "input": result.input,
                "output": result.output,
                "success": result.success,
            }),
        ));
        Some(result)
    }
}

fn plain_reply(text: String) -> BranchReply {
    let (text, source) = if text.trim().is_empty() {
        (DEFAULT_REPLY.to_string(), ReplySource::Default)
    } else {
        (text, ReplySource::Backend)
    };
    BranchReply {
        text,
        results: Vec::new(),
        path: TurnPath::Plain,
        source,
    }
}

fn templated(results: &[ToolResult]) -> (String, ReplySource) {
    let source = if results.is_empty() {
        ReplySource::Static
    } else {
        ReplySource::Templated
    };
    (templated_reply(results), source)
}

/// Content of a tool-role message: the serialized result envelope.
fn tool_message_content(result: &ToolResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| result.output.clone())
}
