//! Adapter request/response types and conversion to the shared model.

use serde_json::Value;

use crate::{ModelRequest, ModelResponse, StopReason, TokenUsage, Turn};

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl From<ModelRequest> for ChatRequest {
    fn from(value: ModelRequest) -> Self {
        Self {
            model: value.params.model,
            messages: value.turns.into_iter().map(ChatMessage::from).collect(),
            temperature: value.params.temperature,
            max_tokens: value.params.max_output_tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl From<Turn> for ChatMessage {
    fn from(value: Turn) -> Self {
        Self {
            role: value.role.wire_name(),
            content: value.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    pub model: String,
    pub content: String,
    pub finish_reason: Option<String>,
    pub usage: TokenUsage,
    pub raw: Value,
}

impl ChatCompletion {
    pub(crate) fn into_model_response(self, requested_model: String) -> ModelResponse {
        let model = if self.model.is_empty() {
            requested_model
        } else {
            self.model
        };

        ModelResponse {
            model,
            message: Turn::assistant(self.content),
            stop_reason: StopReason::parse(self.finish_reason.as_deref()),
            usage: self.usage,
            raw: self.raw,
        }
    }
}
