//! Bridge orchestrator: the bounded backend -> codec -> tool -> backend loop.
//!
//! Each call to [`BridgeService::run`] owns its conversation; the provider,
//! executor, and hooks are shared read-only across concurrent requests.

use std::sync::Arc;
use std::time::Instant;

use bprovider::{ModelProvider, ModelRequest, Role, Turn};
use btooling::{ToolDescriptor, ToolExecutor};

use crate::{
    BridgeError, BridgeHooks, BridgeOutcome, BridgeRequest, Conversation, IterationBudget,
    NoopBridgeHooks, ToolCallRecord, augment_prompt, parse_tool_call,
};

pub fn tool_result_turn(result: &str) -> Turn {
    Turn::bridge(
        Role::ToolResult,
        format!(
            "TOOL_RESULT: {result}\n\nNow continue with your response using this information. \
Do not call the tool again."
        ),
    )
}

pub fn tool_error_turn(message: &str) -> Turn {
    Turn::bridge(
        Role::ToolResult,
        format!("TOOL_ERROR: {message}\n\nPlease continue without the tool."),
    )
}

#[derive(Clone)]
pub struct BridgeService {
    provider: Arc<dyn ModelProvider>,
    executor: Arc<dyn ToolExecutor>,
    budget: IterationBudget,
    hooks: Arc<dyn BridgeHooks>,
    advertise_tools: bool,
}

impl BridgeService {
    pub fn new(provider: Arc<dyn ModelProvider>, executor: Arc<dyn ToolExecutor>) -> Self {
        Self::builder(provider, executor).build()
    }

    pub fn builder(
        provider: Arc<dyn ModelProvider>,
        executor: Arc<dyn ToolExecutor>,
    ) -> BridgeServiceBuilder {
        BridgeServiceBuilder::new(provider, executor)
    }

    pub fn budget(&self) -> IterationBudget {
        self.budget
    }

    pub fn executor(&self) -> Arc<dyn ToolExecutor> {
        Arc::clone(&self.executor)
    }

    pub fn provider(&self) -> Arc<dyn ModelProvider> {
        Arc::clone(&self.provider)
    }

    /// Descriptors named in the prompt, or `None` for the generic wording.
    pub fn advertised_tools(&self) -> Option<Vec<ToolDescriptor>> {
        if !self.advertise_tools {
            return None;
        }

        let descriptors = self.executor.descriptors();
        (!descriptors.is_empty()).then_some(descriptors)
    }

    pub async fn run(&self, request: BridgeRequest) -> Result<BridgeOutcome, BridgeError> {
        let BridgeRequest {
            request_id,
            turns,
            params,
        } = request;

        if turns.is_empty() {
            return Err(BridgeError::invalid_request("messages must not be empty"));
        }

        self.hooks.on_request_start(&request_id, turns.len());

        let prompt = augment_prompt(self.advertised_tools().as_deref());
        let mut conversation = Conversation::new(prompt, turns);
        let mut tool_calls = Vec::new();

        for iteration in 1..=self.budget.get() {
            self.hooks
                .on_iteration_start(&request_id, iteration, conversation.len());

            let model_request = ModelRequest::new(conversation.turns().to_vec(), params.clone())
                .with_metadata("request_id", request_id.as_str());
            model_request.validate()?;

            let started = Instant::now();
            let response = match self.provider.complete(model_request).await {
                Ok(response) => {
                    self.hooks
                        .on_backend_response(&request_id, iteration, started.elapsed());
                    response
                }
                Err(error) => {
                    self.hooks
                        .on_backend_failure(&request_id, iteration, &error, started.elapsed());
                    return Err(error.into());
                }
            };

            let Some(invocation) = parse_tool_call(response.text()) else {
                conversation.push(response.message.clone());
                self.hooks.on_completed(&request_id, iteration);

                return Ok(BridgeOutcome {
                    request_id,
                    response,
                    backend_calls: iteration,
                    tool_calls,
                    transcript: conversation.caller_visible(),
                });
            };

            self.hooks
                .on_tool_call_parsed(&request_id, iteration, &invocation);
            conversation.push(Turn::assistant(response.text()));

            let started = Instant::now();
            let record = match self
                .executor
                .execute(&invocation.name, &invocation.arguments)
                .await
            {
                Ok(result) => {
                    self.hooks.on_tool_success(
                        &request_id,
                        iteration,
                        &invocation,
                        started.elapsed(),
                    );
                    conversation.push(tool_result_turn(&result));
                    ToolCallRecord {
                        iteration,
                        invocation,
                        succeeded: true,
                        output: result,
                    }
                }
                Err(error) => {
                    self.hooks.on_tool_failure(
                        &request_id,
                        iteration,
                        &invocation,
                        &error,
                        started.elapsed(),
                    );
                    conversation.push(tool_error_turn(&error.message));
                    ToolCallRecord {
                        iteration,
                        invocation,
                        succeeded: false,
                        output: error.message,
                    }
                }
            };
            tool_calls.push(record);
        }

        self.hooks
            .on_budget_exceeded(&request_id, self.budget.get());
        Err(BridgeError::budget_exceeded())
    }
}

pub struct BridgeServiceBuilder {
    provider: Arc<dyn ModelProvider>,
    executor: Arc<dyn ToolExecutor>,
    budget: IterationBudget,
    hooks: Arc<dyn BridgeHooks>,
    advertise_tools: bool,
}

impl BridgeServiceBuilder {
    pub fn new(provider: Arc<dyn ModelProvider>, executor: Arc<dyn ToolExecutor>) -> Self {
        Self {
            provider,
            executor,
            budget: IterationBudget::default(),
            hooks: Arc::new(NoopBridgeHooks),
            advertise_tools: true,
        }
    }

    pub fn budget(mut self, budget: IterationBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn max_iterations(self, max_backend_calls: u32) -> Self {
        self.budget(IterationBudget::new(max_backend_calls))
    }

    pub fn hooks(mut self, hooks: Arc<dyn BridgeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn advertise_tools(mut self, advertise_tools: bool) -> Self {
        self.advertise_tools = advertise_tools;
        self
    }

    pub fn build(self) -> BridgeService {
        BridgeService {
            provider: self.provider,
            executor: self.executor,
            budget: self.budget,
            hooks: self.hooks,
            advertise_tools: self.advertise_tools,
        }
    }
}
