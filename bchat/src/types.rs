//! Per-request bridge state: conversation, budget, request, and outcome.

use bcommon::{GenerationParams, RequestId};
use bprovider::{ModelResponse, Role, Turn};
use btooling::ToolInvocation;

/// Append-only turn sequence for one request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Starts a conversation with the bridge prompt ahead of the caller's turns.
    pub fn new(prompt: Turn, caller_turns: impl IntoIterator<Item = Turn>) -> Self {
        let mut turns = vec![prompt];
        turns.extend(caller_turns);
        Self { turns }
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Every turn except bridge-owned system prompts.
    pub fn caller_visible(&self) -> Vec<Turn> {
        self.turns
            .iter()
            .filter(|turn| !(turn.is_synthetic() && turn.role == Role::System))
            .cloned()
            .collect()
    }
}

/// Upper bound on backend calls per request. Never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IterationBudget(u32);

impl IterationBudget {
    pub const DEFAULT: u32 = 5;

    pub fn new(max_backend_calls: u32) -> Self {
        Self(max_backend_calls.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for IterationBudget {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeRequest {
    pub request_id: RequestId,
    pub turns: Vec<Turn>,
    pub params: GenerationParams,
}

impl BridgeRequest {
    pub fn new(turns: Vec<Turn>, params: GenerationParams) -> Self {
        Self {
            request_id: RequestId::random(),
            turns,
            params,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<RequestId>) -> Self {
        self.request_id = request_id.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCallRecord {
    pub iteration: u32,
    pub invocation: ToolInvocation,
    pub succeeded: bool,
    /// Tool result text, or the error message that was fed back.
    pub output: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeOutcome {
    pub request_id: RequestId,
    pub response: ModelResponse,
    pub backend_calls: u32,
    pub tool_calls: Vec<ToolCallRecord>,
    pub transcript: Vec<Turn>,
}

impl BridgeOutcome {
    pub fn final_text(&self) -> &str {
        self.response.text()
    }
}
