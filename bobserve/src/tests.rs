use std::sync::{Arc, Mutex};
use std::time::Duration;

use bchat::BridgeHooks;
use bcommon::RequestId;
use bprovider::ProviderError;
use btooling::{ToolArguments, ToolError, ToolInvocation};

use crate::{FanoutBridgeHooks, MetricsBridgeHooks, SafeBridgeHooks, TracingBridgeHooks};

fn sample_invocation() -> ToolInvocation {
    ToolInvocation::new("get_elf_name", ToolArguments::new().with("count", 1))
}

fn drive_all_callbacks(hooks: &dyn BridgeHooks) {
    let request_id = RequestId::from("req-1");
    let provider_error = ProviderError::status(503, "model loading");
    let tool_error = ToolError::execution("tool failed");
    let invocation = sample_invocation();

    hooks.on_request_start(&request_id, 1);
    hooks.on_iteration_start(&request_id, 1, 2);
    hooks.on_backend_response(&request_id, 1, Duration::from_millis(10));
    hooks.on_backend_failure(&request_id, 2, &provider_error, Duration::from_millis(10));
    hooks.on_tool_call_parsed(&request_id, 1, &invocation);
    hooks.on_tool_success(&request_id, 1, &invocation, Duration::from_millis(20));
    hooks.on_tool_failure(
        &request_id,
        1,
        &invocation,
        &tool_error,
        Duration::from_millis(20),
    );
    hooks.on_completed(&request_id, 2);
    hooks.on_budget_exceeded(&request_id, 5);
}

#[derive(Default, Clone)]
struct RecordingHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingHooks {
    fn push(&self, event: &'static str) {
        self.events.lock().expect("events lock").push(event);
    }
}

impl BridgeHooks for RecordingHooks {
    fn on_request_start(&self, _request_id: &RequestId, _caller_turns: usize) {
        self.push("request_start");
    }

    fn on_iteration_start(&self, _request_id: &RequestId, _iteration: u32, _turns_sent: usize) {
        self.push("iteration_start");
    }

    fn on_backend_response(&self, _request_id: &RequestId, _iteration: u32, _elapsed: Duration) {
        self.push("backend_response");
    }

    fn on_backend_failure(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        _error: &ProviderError,
        _elapsed: Duration,
    ) {
        self.push("backend_failure");
    }

    fn on_tool_call_parsed(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        _invocation: &ToolInvocation,
    ) {
        self.push("tool_call_parsed");
    }

    fn on_tool_success(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        _invocation: &ToolInvocation,
        _elapsed: Duration,
    ) {
        self.push("tool_success");
    }

    fn on_tool_failure(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        _invocation: &ToolInvocation,
        _error: &ToolError,
        _elapsed: Duration,
    ) {
        self.push("tool_failure");
    }

    fn on_completed(&self, _request_id: &RequestId, _backend_calls: u32) {
        self.push("completed");
    }

    fn on_budget_exceeded(&self, _request_id: &RequestId, _budget: u32) {
        self.push("budget_exceeded");
    }
}

struct PanicHooks;

impl BridgeHooks for PanicHooks {
    fn on_request_start(&self, _request_id: &RequestId, _caller_turns: usize) {
        panic!("request_start panic");
    }

    fn on_tool_call_parsed(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        _invocation: &ToolInvocation,
    ) {
        panic!("tool_call_parsed panic");
    }

    fn on_tool_failure(
        &self,
        _request_id: &RequestId,
        _iteration: u32,
        _invocation: &ToolInvocation,
        _error: &ToolError,
        _elapsed: Duration,
    ) {
        panic!("tool_failure panic");
    }

    fn on_budget_exceeded(&self, _request_id: &RequestId, _budget: u32) {
        panic!("budget_exceeded panic");
    }
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    drive_all_callbacks(&TracingBridgeHooks);
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    drive_all_callbacks(&MetricsBridgeHooks);
}

#[test]
fn safe_hooks_delegate_when_inner_succeeds() {
    let inner = RecordingHooks::default();
    let events = Arc::clone(&inner.events);

    drive_all_callbacks(&SafeBridgeHooks::new(inner));

    assert_eq!(events.lock().expect("events lock").len(), 9);
}

#[test]
fn safe_hooks_swallow_panics() {
    drive_all_callbacks(&SafeBridgeHooks::new(PanicHooks));
}

#[test]
fn fanout_dispatches_to_every_hook_in_order() {
    let first = RecordingHooks::default();
    let second = RecordingHooks::default();
    let first_events = Arc::clone(&first.events);
    let second_events = Arc::clone(&second.events);

    let fanout = FanoutBridgeHooks::new()
        .with(first)
        .with(TracingBridgeHooks)
        .with_shared(Arc::new(second));
    assert_eq!(fanout.len(), 3);

    drive_all_callbacks(&fanout);

    let first_events = first_events.lock().expect("events lock").clone();
    assert_eq!(first_events.first(), Some(&"request_start"));
    assert_eq!(first_events.last(), Some(&"budget_exceeded"));
    assert_eq!(first_events, *second_events.lock().expect("events lock"));
}

#[test]
fn safe_fanout_keeps_later_hooks_running_after_a_panic() {
    let recorder = RecordingHooks::default();
    let events = Arc::clone(&recorder.events);

    let fanout = FanoutBridgeHooks::new()
        .with(SafeBridgeHooks::new(PanicHooks))
        .with(recorder);

    drive_all_callbacks(&fanout);

    assert_eq!(events.lock().expect("events lock").len(), 9);
}
