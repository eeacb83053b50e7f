//! Capability layer for registering and executing bridge tools.

mod args;
mod error;
mod executor;
mod registry;
mod tool;
mod types;

pub mod prelude {
    pub use crate::{
        ArgumentValue, DefaultToolExecutor, Tool, ToolArguments, ToolDescriptor, ToolError,
        ToolErrorKind, ToolExecutor, ToolFuture, ToolInvocation, ToolRegistry,
    };
}

pub use args::{optional_integer, optional_string, required_string};
pub use error::{ToolError, ToolErrorKind};
pub use executor::{DefaultToolExecutor, FnToolExecutor, ToolExecutor};
pub use registry::ToolRegistry;
pub use tool::{FunctionTool, Tool, ToolFuture};
pub use types::{ArgumentValue, ToolArguments, ToolDescriptor, ToolInvocation};
