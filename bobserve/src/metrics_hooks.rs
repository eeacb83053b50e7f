//! Metrics-based bridge hooks.
//!
//! ```rust
//! use bchat::BridgeHooks;
//! use bobserve::MetricsBridgeHooks;
//!
//! fn accepts_hooks(_hooks: &dyn BridgeHooks) {}
//!
//! accepts_hooks(&MetricsBridgeHooks);
//! ```

use std::time::Duration;

use bchat::BridgeHooks;
use bcommon::RequestId;
use bprovider::ProviderError;
use btooling::{ToolError, ToolInvocation};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsBridgeHooks;

impl BridgeHooks for MetricsBridgeHooks {
    fn on_request_start(&self, _request_id: &RequestId, _caller_turns: usize) {
        metrics::counter!("toolbridge_requests_total").increment(1);
    }

    fn on_iteration_start(&self, _request_id: &RequestId, _iteration: u32, _turns_sent: usize) {
        metrics::counter!("toolbridge_backend_calls_total").increment(1);
    }

    fn on_backend_response(&self, _request_id: &RequestId, _iteration: u32, elapsed: Duration) {
        metrics::histogram!("toolbridge_backend_call_duration_seconds", "status" => "success")
            .record(elapsed.as_secs_f64());
    }

    fn on_backend_failure(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "toolbridge_backend_failure_total",
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!("toolbridge_backend_call_duration_seconds", "status" => "failure")
            .record(elapsed.as_secs_f64());
    }

    fn on_tool_call_parsed(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        invocation: &ToolInvocation,
    ) {
        metrics::counter!(
            "toolbridge_tool_calls_total",
            "tool_name" => invocation.name.clone()
        )
        .increment(1);
    }

    fn on_tool_success(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        invocation: &ToolInvocation,
        elapsed: Duration,
    ) {
        metrics::histogram!(
            "toolbridge_tool_duration_seconds",
            "tool_name" => invocation.name.clone(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_tool_failure(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        invocation: &ToolInvocation,
        error: &ToolError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "toolbridge_tool_failure_total",
            "tool_name" => invocation.name.clone(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "toolbridge_tool_duration_seconds",
            "tool_name" => invocation.name.clone(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_completed(&self, _request_id: &RequestId, backend_calls: u32) {
        metrics::counter!("toolbridge_requests_completed_total").increment(1);
        metrics::histogram!("toolbridge_backend_calls_per_request").record(backend_calls as f64);
    }

    fn on_budget_exceeded(&self, _request_id: &RequestId, _budget: u32) {
        metrics::counter!("toolbridge_budget_exceeded_total").increment(1);
    }
}
