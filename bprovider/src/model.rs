//! Provider-agnostic turn, request, and response model types.
//!
//! ```rust
//! use bcommon::GenerationParams;
//! use bprovider::{ModelRequest, ProviderErrorKind, Role, Turn};
//!
//! let ok = ModelRequest::new_validated(
//!     vec![Turn::new(Role::User, "Generate an elf name")],
//!     GenerationParams::default(),
//! );
//! assert!(ok.is_ok());
//!
//! let err = ModelRequest::new_validated(Vec::new(), GenerationParams::default())
//!     .err()
//!     .expect("empty turn list should fail");
//! assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);
//! ```

use bcommon::{GenerationParams, MetadataMap};
use serde_json::{Value, json};

use crate::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
    ToolResult,
}

impl Role {
    /// Role name sent over chat-completions wire formats.
    ///
    /// Text-only backends have no tool role, so tool results travel as `user`.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User | Self::ToolResult => "user",
            Self::Assistant => "assistant",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "system" => Some(Self::System),
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            "tool" => Some(Self::ToolResult),
            _ => None,
        }
    }
}

/// Who authored a turn, independent of the role it is sent under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOrigin {
    Caller,
    Backend,
    Bridge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub origin: TurnOrigin,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            origin: TurnOrigin::Caller,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            origin: TurnOrigin::Backend,
        }
    }

    pub fn bridge(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            origin: TurnOrigin::Bridge,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.origin == TurnOrigin::Bridge
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    Cancelled,
    Other,
}

impl StopReason {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("stop") => Self::EndTurn,
            Some("length") => Self::MaxTokens,
            Some("cancelled") => Self::Cancelled,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

/// One assistant turn produced by a backend, plus the payload it arrived in.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResponse {
    pub model: String,
    pub message: Turn,
    pub stop_reason: StopReason,
    pub usage: TokenUsage,
    pub raw: Value,
}

impl ModelResponse {
    /// Builds a response whose raw payload has the chat-completion shape.
    pub fn from_text(model: impl Into<String>, content: impl Into<String>) -> Self {
        let model = model.into();
        let content = content.into();
        let raw = json!({
            "object": "chat.completion",
            "model": model,
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        });

        Self {
            model,
            message: Turn::assistant(content),
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage::default(),
            raw,
        }
    }

    pub fn text(&self) -> &str {
        &self.message.content
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub turns: Vec<Turn>,
    pub params: GenerationParams,
    pub metadata: MetadataMap,
}

impl ModelRequest {
    pub fn builder(params: GenerationParams) -> ModelRequestBuilder {
        ModelRequestBuilder::new(params)
    }

    pub fn new(turns: Vec<Turn>, params: GenerationParams) -> Self {
        Self {
            turns,
            params,
            metadata: MetadataMap::new(),
        }
    }

    pub fn new_validated(turns: Vec<Turn>, params: GenerationParams) -> Result<Self, ProviderError> {
        let request = Self::new(turns, params);
        request.validate()?;
        Ok(request)
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.params.model.trim().is_empty() {
            return Err(ProviderError::invalid_request("model must not be empty"));
        }

        if self.turns.is_empty() {
            return Err(ProviderError::invalid_request("at least one turn is required"));
        }

        if self.params.max_output_tokens == 0 {
            return Err(ProviderError::invalid_request(
                "max_tokens must be greater than zero",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequestBuilder {
    turns: Vec<Turn>,
    params: GenerationParams,
    metadata: MetadataMap,
}

impl ModelRequestBuilder {
    pub fn new(params: GenerationParams) -> Self {
        Self {
            turns: Vec::new(),
            params,
            metadata: MetadataMap::new(),
        }
    }

    pub fn turn(mut self, turn: Turn) -> Self {
        self.turns.push(turn);
        self
    }

    pub fn turns(mut self, turns: impl IntoIterator<Item = Turn>) -> Self {
        self.turns.extend(turns);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<ModelRequest, ProviderError> {
        let request = ModelRequest {
            turns: self.turns,
            params: self.params,
            metadata: self.metadata,
        };

        request.validate()?;
        Ok(request)
    }
}
