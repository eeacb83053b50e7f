//! Dispatches each callback to several hooks in registration order.

use std::sync::Arc;
use std::time::Duration;

use bchat::BridgeHooks;
use bcommon::RequestId;
use bprovider::ProviderError;
use btooling::{ToolError, ToolInvocation};

#[derive(Clone, Default)]
pub struct FanoutBridgeHooks {
    hooks: Vec<Arc<dyn BridgeHooks>>,
}

impl FanoutBridgeHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<H>(mut self, hooks: H) -> Self
    where
        H: BridgeHooks + 'static,
    {
        self.hooks.push(Arc::new(hooks));
        self
    }

    pub fn with_shared(mut self, hooks: Arc<dyn BridgeHooks>) -> Self {
        self.hooks.push(hooks);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl BridgeHooks for FanoutBridgeHooks {
    fn on_request_start(&self, request_id: &RequestId, caller_turns: usize) {
        for hooks in &self.hooks {
            hooks.on_request_start(request_id, caller_turns);
        }
    }

    fn on_iteration_start(&self, request_id: &RequestId, iteration: u32, turns_sent: usize) {
        for hooks in &self.hooks {
            hooks.on_iteration_start(request_id, iteration, turns_sent);
        }
    }

    fn on_backend_response(&self, request_id: &RequestId, iteration: u32, elapsed: Duration) {
        for hooks in &self.hooks {
            hooks.on_backend_response(request_id, iteration, elapsed);
        }
    }

    fn on_backend_failure(
        &self,
        request_id: &RequestId,
        iteration: u32,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_backend_failure(request_id, iteration, error, elapsed);
        }
    }

    fn on_tool_call_parsed(&self, request_id: &RequestId, iteration: u32, invocation: &ToolInvocation) {
        for hooks in &self.hooks {
            hooks.on_tool_call_parsed(request_id, iteration, invocation);
        }
    }

    fn on_tool_success(
        &self,
        request_id: &RequestId,
        iteration: u32,
        invocation: &ToolInvocation,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_tool_success(request_id, iteration, invocation, elapsed);
        }
    }

    fn on_tool_failure(
        &self,
        request_id: &RequestId,
        iteration: u32,
        invocation: &ToolInvocation,
        error: &ToolError,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_tool_failure(request_id, iteration, invocation, error, elapsed);
        }
    }

    fn on_completed(&self, request_id: &RequestId, backend_calls: u32) {
        for hooks in &self.hooks {
            hooks.on_completed(request_id, backend_calls);
        }
    }

    fn on_budget_exceeded(&self, request_id: &RequestId, budget: u32) {
        for hooks in &self.hooks {
            hooks.on_budget_exceeded(request_id, budget);
        }
    }
}
