#![cfg(feature = "provider-openai-compat")]

use std::sync::{Arc, Mutex};

use bcommon::GenerationParams;
use bprovider::adapters::openai_compat::{
    ChatCompletion, ChatRequest, OpenAiCompatProvider, OpenAiCompatTransport,
};
use bprovider::{
    ModelProvider, ModelRequest, ProviderError, ProviderErrorKind, ProviderFuture, Role,
    TokenUsage, Turn,
};
use serde_json::{Value, json};

#[derive(Debug, Default)]
struct FakeTransport {
    captured_request: Mutex<Option<ChatRequest>>,
    fail_with: Option<ProviderError>,
}

impl OpenAiCompatTransport for FakeTransport {
    fn complete<'a>(
        &'a self,
        request: ChatRequest,
    ) -> ProviderFuture<'a, Result<ChatCompletion, ProviderError>> {
        Box::pin(async move {
            *self.captured_request.lock().expect("request lock") = Some(request);

            if let Some(error) = &self.fail_with {
                return Err(error.clone());
            }

            Ok(ChatCompletion {
                model: String::new(),
                content: "TOOL_CALL: get_elf_name(count=1)".to_string(),
                finish_reason: Some("stop".to_string()),
                usage: TokenUsage {
                    input_tokens: 3,
                    output_tokens: 7,
                    total_tokens: 10,
                },
                raw: json!({ "choices": [] }),
            })
        })
    }

    fn list_models<'a>(&'a self) -> ProviderFuture<'a, Result<Value, ProviderError>> {
        Box::pin(async { Ok(json!({ "data": [{ "id": "llamafile" }] })) })
    }
}

#[tokio::test]
async fn complete_passes_generation_params_through_unmodified() {
    let transport = Arc::new(FakeTransport::default());
    let provider = OpenAiCompatProvider::new(transport.clone());

    let params = GenerationParams::new("tinyllama")
        .with_temperature(0.25)
        .with_max_output_tokens(64);
    let request = ModelRequest::new(vec![Turn::new(Role::User, "hi")], params);

    let response = provider.complete(request).await.expect("complete should work");
    assert_eq!(response.text(), "TOOL_CALL: get_elf_name(count=1)");
    assert_eq!(response.model, "tinyllama");
    assert_eq!(response.usage.total_tokens, 10);

    let captured = transport
        .captured_request
        .lock()
        .expect("request lock")
        .clone()
        .expect("request should be captured");
    assert_eq!(captured.model, "tinyllama");
    assert_eq!(captured.temperature, 0.25);
    assert_eq!(captured.max_tokens, 64);
    assert_eq!(captured.messages.len(), 1);
}

#[tokio::test]
async fn complete_rejects_invalid_requests_before_transport() {
    let transport = Arc::new(FakeTransport::default());
    let provider = OpenAiCompatProvider::new(transport.clone());

    let error = provider
        .complete(ModelRequest::new(Vec::new(), GenerationParams::default()))
        .await
        .expect_err("empty request should fail");

    assert_eq!(error.kind, ProviderErrorKind::InvalidRequest);
    assert!(transport.captured_request.lock().expect("request lock").is_none());
}

#[tokio::test]
async fn complete_propagates_transport_errors() {
    let transport = Arc::new(FakeTransport {
        fail_with: Some(ProviderError::transport("connection refused")),
        ..FakeTransport::default()
    });
    let provider = OpenAiCompatProvider::new(transport);

    let error = provider
        .complete(ModelRequest::new(
            vec![Turn::new(Role::User, "hi")],
            GenerationParams::default(),
        ))
        .await
        .expect_err("transport failure should surface");

    assert_eq!(error.kind, ProviderErrorKind::Transport);
    assert!(error.is_backend_unavailable());
}

#[tokio::test]
async fn list_models_delegates_to_transport() {
    let provider = OpenAiCompatProvider::new(Arc::new(FakeTransport::default()));
    let models = provider.list_models().await.expect("models should list");
    assert_eq!(models["data"][0]["id"], "llamafile");
}
