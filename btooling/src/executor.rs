//! Tool executor contract, registry-backed default, and closure adapter.

use std::sync::Arc;

use crate::{ToolArguments, ToolDescriptor, ToolError, ToolFuture, ToolRegistry};

/// Runs the tool a model asked for and returns its text result.
///
/// One executor is shared by every in-flight request, so implementations
/// must tolerate concurrent calls.
pub trait ToolExecutor: Send + Sync {
    fn execute<'a>(
        &'a self,
        name: &'a str,
        arguments: &'a ToolArguments,
    ) -> ToolFuture<'a, Result<String, ToolError>>;

    /// Tools this executor can advertise in the bridge prompt.
    fn descriptors(&self) -> Vec<ToolDescriptor> {
        Vec::new()
    }
}

#[derive(Clone, Default)]
pub struct DefaultToolExecutor {
    registry: Arc<ToolRegistry>,
}

impl DefaultToolExecutor {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> Arc<ToolRegistry> {
        Arc::clone(&self.registry)
    }
}

impl ToolExecutor for DefaultToolExecutor {
    fn execute<'a>(
        &'a self,
        name: &'a str,
        arguments: &'a ToolArguments,
    ) -> ToolFuture<'a, Result<String, ToolError>> {
        Box::pin(async move {
            let tool = self.registry.get(name).ok_or_else(|| {
                ToolError::not_found(format!("Unknown tool: {name}")).with_tool_name(name)
            })?;

            tool.invoke(arguments)
                .await
                .map_err(|err| match err.tool_name {
                    Some(_) => err,
                    None => err.with_tool_name(name),
                })
        })
    }

    fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.registry.descriptors()
    }
}

/// Adapts a plain function into a [`ToolExecutor`].
pub struct FnToolExecutor<F> {
    handler: F,
}

impl<F> FnToolExecutor<F>
where
    F: Fn(&str, &ToolArguments) -> Result<String, ToolError> + Send + Sync,
{
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> ToolExecutor for FnToolExecutor<F>
where
    F: Fn(&str, &ToolArguments) -> Result<String, ToolError> + Send + Sync,
{
    fn execute<'a>(
        &'a self,
        name: &'a str,
        arguments: &'a ToolArguments,
    ) -> ToolFuture<'a, Result<String, ToolError>> {
        let output = (self.handler)(name, arguments);
        Box::pin(async move { output })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{ArgumentValue, Tool, ToolErrorKind, optional_integer};

    #[derive(Debug)]
    struct CounterTool;

    impl Tool for CounterTool {
        fn descriptor(&self) -> ToolDescriptor {
            ToolDescriptor::new("count_up", "count_up(to=3)", "Counts from one")
        }

        fn invoke<'a>(
            &'a self,
            args: &'a ToolArguments,
        ) -> ToolFuture<'a, Result<String, ToolError>> {
            Box::pin(async move {
                let to = optional_integer(args, "to", 3)?;
                Ok((1..=to).map(|n| n.to_string()).collect::<Vec<_>>().join(" "))
            })
        }
    }

    #[derive(Debug)]
    struct BrokenTool;

    impl Tool for BrokenTool {
        fn descriptor(&self) -> ToolDescriptor {
            ToolDescriptor::new("broken", "broken()", "Always fails")
        }

        fn invoke<'a>(
            &'a self,
            _args: &'a ToolArguments,
        ) -> ToolFuture<'a, Result<String, ToolError>> {
            Box::pin(async move { Err(ToolError::execution("tool exploded")) })
        }
    }

    #[tokio::test]
    async fn executor_runs_registered_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(CounterTool);
        let executor = DefaultToolExecutor::new(Arc::new(registry));

        let args = ToolArguments::new().with("to", 4);
        let output = executor
            .execute("count_up", &args)
            .await
            .expect("execution should succeed");

        assert_eq!(output, "1 2 3 4");
    }

    #[tokio::test]
    async fn executor_returns_not_found_for_unknown_tool() {
        let executor = DefaultToolExecutor::new(Arc::new(ToolRegistry::new()));

        let error = executor
            .execute("missing", &ToolArguments::new())
            .await
            .expect_err("execution should fail");

        assert_eq!(error.kind, ToolErrorKind::NotFound);
        assert_eq!(error.tool_name.as_deref(), Some("missing"));
        assert_eq!(error.message, "Unknown tool: missing");
    }

    #[tokio::test]
    async fn executor_attaches_tool_name_to_tool_failures() {
        let mut registry = ToolRegistry::new();
        registry.register(BrokenTool);
        let executor = DefaultToolExecutor::new(Arc::new(registry));

        let error = executor
            .execute("broken", &ToolArguments::new())
            .await
            .expect_err("execution should fail");

        assert_eq!(error.kind, ToolErrorKind::Execution);
        assert_eq!(error.message, "tool exploded");
        assert_eq!(error.tool_name.as_deref(), Some("broken"));
    }

    #[tokio::test]
    async fn fn_executor_wraps_a_plain_function() {
        let executor = FnToolExecutor::new(|name: &str, args: &ToolArguments| {
            match args.get("text") {
                Some(ArgumentValue::String(text)) => Ok(format!("{name}:{text}")),
                _ => Err(ToolError::invalid_arguments("text is required")),
            }
        });

        let ok = executor
            .execute("echo", &ToolArguments::new().with("text", "hi"))
            .await
            .expect("echo should succeed");
        assert_eq!(ok, "echo:hi");
        assert!(executor.descriptors().is_empty());

        let error = executor
            .execute("echo", &ToolArguments::new())
            .await
            .expect_err("missing text should fail");
        assert_eq!(error.kind, ToolErrorKind::InvalidArguments);
    }

    #[test]
    fn registry_tracks_registered_tools_in_name_order() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(CounterTool);
        registry.register(BrokenTool);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("count_up"));

        let names = registry
            .descriptors()
            .into_iter()
            .map(|descriptor| descriptor.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["broken", "count_up"]);

        assert!(registry.remove("broken").is_some());
        assert_eq!(registry.len(), 1);
    }
}
