//! Simulated tool calling over text-only chat backends.
//!
//! ```rust
//! use bchat::{IterationBudget, parse_tool_call};
//!
//! let call = parse_tool_call("TOOL_CALL: get_location_description(style='detailed')")
//!     .expect("call should parse");
//! assert_eq!(call.arguments.get("style").and_then(|value| value.as_str()), Some("detailed"));
//! assert_eq!(IterationBudget::default().get(), 5);
//! ```

mod codec;
mod error;
mod hooks;
mod prompt;
mod service;
mod types;

pub mod prelude {
    pub use crate::{
        BridgeError, BridgeErrorKind, BridgeHooks, BridgeOutcome, BridgeRequest, BridgeService,
        BridgeServiceBuilder, Conversation, IterationBudget, NoopBridgeHooks, ToolCallRecord,
        augment_prompt, parse_tool_call,
    };
    pub use bcommon::{GenerationParams, RequestId};
    pub use btooling::{
        ArgumentValue, DefaultToolExecutor, Tool, ToolArguments, ToolDescriptor, ToolError,
        ToolErrorKind, ToolExecutor, ToolInvocation, ToolRegistry,
    };
}

pub use codec::{CALL_MARKER, parse_arguments, parse_tool_call, parse_value};
pub use error::{BridgeError, BridgeErrorKind};
pub use hooks::{BridgeHooks, NoopBridgeHooks};
pub use prompt::{CALL_SYNTAX, augment_prompt, render_prompt};
pub use service::{BridgeService, BridgeServiceBuilder, tool_error_turn, tool_result_turn};
pub use types::{BridgeOutcome, BridgeRequest, Conversation, IterationBudget, ToolCallRecord};
pub use bcommon::{GenerationParams, RequestId};
