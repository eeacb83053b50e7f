//! Small convenience constructors for common types.

use std::sync::Arc;

use crate::{
    BridgeRequest, BridgeService, FanoutBridgeHooks, GenerationParams, MetricsBridgeHooks,
    ModelProvider, Role, SafeBridgeHooks, ToolExecutor, TracingBridgeHooks, Turn,
};

pub fn system_turn(content: impl Into<String>) -> Turn {
    Turn::new(Role::System, content)
}

pub fn user_turn(content: impl Into<String>) -> Turn {
    Turn::new(Role::User, content)
}

/// An assistant turn from the caller's own history, not a fresh backend reply.
pub fn assistant_turn(content: impl Into<String>) -> Turn {
    Turn::new(Role::Assistant, content)
}

pub fn bridge_request(turns: Vec<Turn>) -> BridgeRequest {
    BridgeRequest::new(turns, GenerationParams::default())
}

pub fn bridge_service(
    provider: Arc<dyn ModelProvider>,
    executor: Arc<dyn ToolExecutor>,
) -> BridgeService {
    BridgeService::new(provider, executor)
}

/// Bridge service wired with panic-isolated tracing and metrics hooks.
pub fn observed_bridge_service(
    provider: Arc<dyn ModelProvider>,
    executor: Arc<dyn ToolExecutor>,
) -> BridgeService {
    let hooks = SafeBridgeHooks::new(
        FanoutBridgeHooks::new()
            .with(TracingBridgeHooks)
            .with(MetricsBridgeHooks),
    );

    BridgeService::builder(provider, executor)
        .hooks(Arc::new(hooks))
        .build()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::{
        DefaultToolExecutor, ModelRequest, ModelResponse, ProviderError, ProviderFuture, Role,
        ToolDescriptor, ToolRegistry, TurnOrigin,
    };

    use super::*;

    struct ScriptedBackend {
        replies: Mutex<Vec<&'static str>>,
        requests: Mutex<Vec<ModelRequest>>,
    }

    impl ScriptedBackend {
        fn new(mut replies: Vec<&'static str>) -> Self {
            replies.reverse();
            Self {
                replies: Mutex::new(replies),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl ModelProvider for ScriptedBackend {
        fn complete<'a>(
            &'a self,
            request: ModelRequest,
        ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>> {
            Box::pin(async move {
                self.requests.lock().expect("requests lock").push(request);
                let reply = self.replies.lock().expect("replies lock").pop();
                reply
                    .map(|text| ModelResponse::from_text("local-model", text))
                    .ok_or_else(|| ProviderError::other("script exhausted"))
            })
        }
    }

    fn greeting_executor() -> Arc<DefaultToolExecutor> {
        let mut registry = ToolRegistry::new();
        registry.register_sync_fn(
            ToolDescriptor::new("greet", "greet(name='friend')", "Greets someone"),
            |args| Ok(format!("hello {}", crate::optional_string(args, "name", "friend")?)),
        );
        Arc::new(DefaultToolExecutor::new(Arc::new(registry)))
    }

    #[test]
    fn turn_helpers_record_role_and_caller_origin() {
        assert_eq!(system_turn("rules").role, Role::System);
        assert_eq!(user_turn("hi").role, Role::User);

        let assistant = assistant_turn("earlier reply");
        assert_eq!(assistant.role, Role::Assistant);
        assert_eq!(assistant.origin, TurnOrigin::Caller);
    }

    #[test]
    fn bridge_request_uses_default_generation_params() {
        let request = bridge_request(vec![user_turn("hi")]);
        assert_eq!(request.params, GenerationParams::default());
        assert_eq!(request.turns.len(), 1);
    }

    #[tokio::test]
    async fn bridge_service_runs_a_tool_round_trip() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            "TOOL_CALL: greet(name='Arwen')",
            "The elf was greeted warmly.",
        ]));
        let service = bridge_service(backend.clone(), greeting_executor());

        let outcome = service
            .run(bridge_request(vec![user_turn("Greet Arwen")]))
            .await
            .expect("bridge should finish");

        assert_eq!(outcome.final_text(), "The elf was greeted warmly.");
        assert_eq!(outcome.backend_calls, 2);

        let requests = backend.requests.lock().expect("requests lock");
        let result_turn = requests[1].turns.last().expect("tool result turn");
        assert!(result_turn.content.starts_with("TOOL_RESULT: hello Arwen"));
    }

    #[tokio::test]
    async fn observed_bridge_service_behaves_like_plain_service() {
        let backend = Arc::new(ScriptedBackend::new(vec!["No tools needed."]));
        let service = observed_bridge_service(backend, greeting_executor());

        let outcome = service
            .run(bridge_request(vec![user_turn("hi")]))
            .await
            .expect("bridge should finish");

        assert_eq!(outcome.final_text(), "No tools needed.");
        assert_eq!(outcome.backend_calls, 1);
        assert!(outcome.tool_calls.is_empty());
    }
}
