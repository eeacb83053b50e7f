//! Tool trait contract for registry-managed capabilities.
//!
//! ```rust
//! use btooling::{FunctionTool, Tool, ToolDescriptor};
//!
//! let tool = FunctionTool::new(
//!     ToolDescriptor::new("echo", "echo(text='hi')", "Echoes its text argument"),
//!     |args| async move { Ok(args.to_string()) },
//! );
//!
//! assert_eq!(tool.descriptor().name, "echo");
//! ```

use std::future::Future;
use std::sync::Arc;

use bcommon::BoxFuture;

use crate::{ToolArguments, ToolDescriptor, ToolError};

pub type ToolFuture<'a, T> = BoxFuture<'a, T>;

pub trait Tool: Send + Sync {
    fn descriptor(&self) -> ToolDescriptor;

    fn invoke<'a>(&'a self, args: &'a ToolArguments) -> ToolFuture<'a, Result<String, ToolError>>;
}

type ToolHandler =
    dyn Fn(ToolArguments) -> ToolFuture<'static, Result<String, ToolError>> + Send + Sync;

pub struct FunctionTool {
    descriptor: ToolDescriptor,
    handler: Arc<ToolHandler>,
}

impl FunctionTool {
    pub fn new<F, Fut>(descriptor: ToolDescriptor, handler: F) -> Self
    where
        F: Fn(ToolArguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, ToolError>> + Send + 'static,
    {
        let handler: Arc<ToolHandler> = Arc::new(move |args| Box::pin(handler(args)));

        Self {
            descriptor,
            handler,
        }
    }
}

impl Tool for FunctionTool {
    fn descriptor(&self) -> ToolDescriptor {
        self.descriptor.clone()
    }

    fn invoke<'a>(&'a self, args: &'a ToolArguments) -> ToolFuture<'a, Result<String, ToolError>> {
        (self.handler)(args.clone())
    }
}
