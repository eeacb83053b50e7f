//! Lifecycle callbacks for observing the bridge loop.
//!
//! ```rust
//! use bchat::{BridgeHooks, NoopBridgeHooks};
//!
//! fn accepts_hooks(_hooks: &dyn BridgeHooks) {}
//!
//! let hooks = NoopBridgeHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use bcommon::RequestId;
use bprovider::ProviderError;
use btooling::{ToolError, ToolInvocation};

pub trait BridgeHooks: Send + Sync {
    fn on_request_start(&self, _request_id: &RequestId, _caller_turns: usize) {}

    fn on_iteration_start(&self, _request_id: &RequestId, _iteration: u32, _turns_sent: usize) {}

    fn on_backend_response(&self, _request_id: &RequestId, _iteration: u32, _elapsed: Duration) {}

    fn on_backend_failure(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        _error: &ProviderError,
        _elapsed: Duration,
    ) {
    }

    fn on_tool_call_parsed(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        _invocation: &ToolInvocation,
    ) {
    }

    fn on_tool_success(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        _invocation: &ToolInvocation,
        _elapsed: Duration,
    ) {
    }

    fn on_tool_failure(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        _invocation: &ToolInvocation,
        _error: &ToolError,
        _elapsed: Duration,
    ) {
    }

    fn on_completed(&self, _request_id: &RequestId, _backend_calls: u32) {}

    fn on_budget_exceeded(&self, _request_id: &RequestId, _budget: u32) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBridgeHooks;

impl BridgeHooks for NoopBridgeHooks {}
