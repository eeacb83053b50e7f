//! Chat-completions HTTP payload serde models and response interpretation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ProviderError, TokenUsage};

use super::types::{ChatCompletion, ChatRequest};

pub(crate) fn build_api_request(request: &ChatRequest) -> Result<ApiRequest<'_>, ProviderError> {
    if request.messages.is_empty() {
        return Err(ProviderError::invalid_request(
            "chat completion request requires at least one message",
        ));
    }

    Ok(ApiRequest {
        model: &request.model,
        messages: request
            .messages
            .iter()
            .map(|message| ApiMessage {
                role: message.role,
                content: &message.content,
            })
            .collect(),
        temperature: request.temperature,
        max_tokens: request.max_tokens,
        stream: false,
    })
}

/// Turns a raw `/chat/completions` HTTP result into a completion or a classified error.
pub fn interpret_completion(status: u16, body: &[u8]) -> Result<ChatCompletion, ProviderError> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, body));
    }

    let raw: Value = serde_json::from_slice(body).map_err(|err| {
        ProviderError::malformed_response(format!("backend returned invalid JSON: {err}"))
    })?;

    let parsed: ApiResponse = serde_json::from_value(raw.clone()).map_err(|err| {
        ProviderError::malformed_response(format!("unexpected completion shape: {err}"))
    })?;

    let choice = parsed.choices.into_iter().next().ok_or_else(|| {
        ProviderError::malformed_response("backend response did not include choices")
    })?;

    let usage = parsed
        .usage
        .map(|usage| TokenUsage {
            input_tokens: usage.prompt_tokens,
            output_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        })
        .unwrap_or_default();

    Ok(ChatCompletion {
        model: parsed.model.unwrap_or_default(),
        content: choice.message.content.unwrap_or_default(),
        finish_reason: choice.finish_reason,
        usage,
        raw,
    })
}

/// Turns a raw `/models` HTTP result into the JSON the backend sent.
pub fn interpret_models(status: u16, body: &[u8]) -> Result<Value, ProviderError> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, body));
    }

    serde_json::from_slice(body).map_err(|err| {
        ProviderError::malformed_response(format!("backend returned invalid JSON: {err}"))
    })
}

fn status_error(status: u16, body: &[u8]) -> ProviderError {
    let message = extract_error_message(body)
        .unwrap_or_else(|| format!("backend request failed with status {status}"));

    let mut error = match status {
        502 | 503 => ProviderError::unavailable(message),
        408 | 504 => ProviderError::timeout(message),
        _ => ProviderError::status(status, message),
    };
    error.http_status = Some(status);
    error
}

fn extract_error_message(body: &[u8]) -> Option<String> {
    let parsed = serde_json::from_slice::<ApiErrorEnvelope>(body).ok()?;
    match parsed.error {
        ApiErrorBody::Detailed { message } => Some(message),
        ApiErrorBody::Plain(message) => Some(message),
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiErrorBody {
    Detailed { message: String },
    Plain(String),
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ApiMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    model: Option<String>,
    choices: Vec<ApiChoice>,
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiAssistantMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiAssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}
