use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use bchat::BridgeHooks;
use bcommon::RequestId;
use bprovider::ProviderError;
use btooling::{ToolError, ToolInvocation};

/// Swallows panics raised by the wrapped hooks.
pub struct SafeBridgeHooks<H> {
    inner: H,
}

impl<H> SafeBridgeHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> BridgeHooks for SafeBridgeHooks<H>
where
    H: BridgeHooks,
{
    fn on_request_start(&self, request_id: &RequestId, caller_turns: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_start(request_id, caller_turns)
        }));
    }

    fn on_iteration_start(&self, request_id: &RequestId, iteration: u32, turns_sent: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_iteration_start(request_id, iteration, turns_sent)
        }));
    }

    fn on_backend_response(&self, request_id: &RequestId, iteration: u32, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_backend_response(request_id, iteration, elapsed)
        }));
    }

    fn on_backend_failure(
        &self,
        request_id: &RequestId,
        iteration: u32,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_backend_failure(request_id, iteration, error, elapsed)
        }));
    }

    fn on_tool_call_parsed(&self, request_id: &RequestId, iteration: u32, invocation: &ToolInvocation) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_tool_call_parsed(request_id, iteration, invocation)
        }));
    }

    fn on_tool_success(
        &self,
        request_id: &RequestId,
        iteration: u32,
        invocation: &ToolInvocation,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_tool_success(request_id, iteration, invocation, elapsed)
        }));
    }

    fn on_tool_failure(
        &self,
        request_id: &RequestId,
        iteration: u32,
        invocation: &ToolInvocation,
        error: &ToolError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_tool_failure(request_id, iteration, invocation, error, elapsed)
        }));
    }

    fn on_completed(&self, request_id: &RequestId, backend_calls: u32) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_completed(request_id, backend_calls)
        }));
    }

    fn on_budget_exceeded(&self, request_id: &RequestId, budget: u32) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_budget_exceeded(request_id, budget)
        }));
    }
}
