//! Common imports for most toolbridge applications.

pub use crate::{
    assistant_turn, bridge_request, bridge_service, observed_bridge_service, system_turn,
    user_turn,
};
pub use crate::{tb_turn, tb_turns};
pub use crate::{
    ArgumentValue, BridgeError, BridgeErrorKind, BridgeHooks, BridgeOutcome, BridgeRequest,
    BridgeService, BridgeServiceBuilder, DefaultToolExecutor, GenerationParams, IterationBudget,
    ModelProvider, ModelRequest, ModelResponse, ProviderError, RequestId, Role, Tool,
    ToolArguments, ToolDescriptor, ToolError, ToolErrorKind, ToolExecutor, ToolInvocation,
    ToolRegistry, Turn,
};
