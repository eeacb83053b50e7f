//! Unified facade over the toolbridge workspace crates.
//!
//! Most applications only need this crate: it re-exports the backend client
//! contract, the tool registry, the bridge orchestrator and its observability
//! hooks, plus a few constructors for common setup.

mod macros;

pub mod prelude;
pub mod util;

pub use bchat;
pub use bcommon;
pub use bobserve;
pub use bprovider;
pub use btooling;

pub use bchat::{
    BridgeError, BridgeErrorKind, BridgeHooks, BridgeOutcome, BridgeRequest, BridgeService,
    BridgeServiceBuilder, CALL_MARKER, CALL_SYNTAX, Conversation, IterationBudget,
    NoopBridgeHooks, ToolCallRecord, augment_prompt, parse_arguments, parse_tool_call,
    parse_value, render_prompt, tool_error_turn, tool_result_turn,
};
pub use bcommon::{BoxFuture, GenerationParams, MetadataMap, RequestId};
pub use bobserve::{FanoutBridgeHooks, MetricsBridgeHooks, SafeBridgeHooks, TracingBridgeHooks};
pub use bprovider::{
    ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderErrorKind, ProviderFuture,
    Role, SecretString, StopReason, TokenUsage, Turn, TurnOrigin,
};
pub use btooling::{
    ArgumentValue, DefaultToolExecutor, FnToolExecutor, FunctionTool, Tool, ToolArguments,
    ToolDescriptor, ToolError, ToolErrorKind, ToolExecutor, ToolFuture, ToolInvocation,
    ToolRegistry, optional_integer, optional_string, required_string,
};

pub use util::{
    assistant_turn, bridge_request, bridge_service, observed_bridge_service, system_turn,
    user_turn,
};

#[cfg(test)]
mod tests {
    use crate::{Role, TurnOrigin};

    #[test]
    fn tb_turn_macro_creates_caller_turn() {
        let turn = crate::tb_turn!(user => "hello");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.content, "hello");
        assert_eq!(turn.origin, TurnOrigin::Caller);
    }

    #[test]
    fn tb_turns_macro_builds_turn_vector() {
        let turns = crate::tb_turns![
            system => "You are a storyteller.",
            user => "Write a story about an elf.",
        ];

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::System);
        assert_eq!(turns[1].role, Role::User);
    }

    #[test]
    fn tb_turns_macro_accepts_empty_input() {
        let turns = crate::tb_turns![];
        assert!(turns.is_empty());
    }
}
