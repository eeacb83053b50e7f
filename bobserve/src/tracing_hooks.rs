//! Tracing-based bridge hooks.
//!
//! ```rust
//! use bchat::BridgeHooks;
//! use bobserve::TracingBridgeHooks;
//!
//! fn accepts_hooks(_hooks: &dyn BridgeHooks) {}
//!
//! accepts_hooks(&TracingBridgeHooks);
//! ```

use std::time::Duration;

use bchat::BridgeHooks;
use bcommon::RequestId;
use bprovider::ProviderError;
use btooling::{ToolError, ToolInvocation};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBridgeHooks;

impl BridgeHooks for TracingBridgeHooks {
    fn on_request_start(&self, request_id: &RequestId, caller_turns: usize) {
        tracing::info!(
            phase = "bridge",
            event = "request_start",
            request_id = %request_id,
            caller_turns
        );
    }

    fn on_iteration_start(&self, request_id: &RequestId, iteration: u32, turns_sent: usize) {
        tracing::info!(
            phase = "bridge",
            event = "iteration_start",
            request_id = %request_id,
            iteration,
            turns_sent
        );
    }

    fn on_backend_response(&self, request_id: &RequestId, iteration: u32, elapsed: Duration) {
        tracing::info!(
            phase = "bridge",
            event = "backend_response",
            request_id = %request_id,
            iteration,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_backend_failure(
        &self,
        request_id: &RequestId,
        iteration: u32,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "bridge",
            event = "backend_failure",
            request_id = %request_id,
            iteration,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            http_status = error.http_status,
            error = %error
        );
    }

    fn on_tool_call_parsed(&self, request_id: &RequestId, iteration: u32, invocation: &ToolInvocation) {
        tracing::info!(
            phase = "bridge",
            event = "tool_call_parsed",
            request_id = %request_id,
            iteration,
            tool_name = invocation.name.as_str(),
            arguments = %invocation.arguments.to_json()
        );
    }

    fn on_tool_success(
        &self,
        request_id: &RequestId,
        iteration: u32,
        invocation: &ToolInvocation,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "bridge",
            event = "tool_success",
            request_id = %request_id,
            iteration,
            tool_name = invocation.name.as_str(),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_tool_failure(
        &self,
        request_id: &RequestId,
        iteration: u32,
        invocation: &ToolInvocation,
        error: &ToolError,
        elapsed: Duration,
    ) {
        tracing::warn!(
            phase = "bridge",
            event = "tool_failure",
            request_id = %request_id,
            iteration,
            tool_name = invocation.name.as_str(),
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            error = %error
        );
    }

    fn on_completed(&self, request_id: &RequestId, backend_calls: u32) {
        tracing::info!(
            phase = "bridge",
            event = "completed",
            request_id = %request_id,
            backend_calls
        );
    }

    fn on_budget_exceeded(&self, request_id: &RequestId, budget: u32) {
        tracing::warn!(
            phase = "bridge",
            event = "budget_exceeded",
            request_id = %request_id,
            budget
        );
    }
}
