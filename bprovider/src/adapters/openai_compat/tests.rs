//! Focused unit tests for chat-completions adapter internals.

#![cfg(test)]

use bcommon::GenerationParams;
use serde_json::json;

use crate::{ModelRequest, ProviderErrorKind, Role, StopReason, Turn, TurnOrigin};

use super::serde_api::{build_api_request, interpret_completion, interpret_models};
use super::types::ChatRequest;

fn completion_body(content: &str) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "llamafile",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17 }
    }))
    .expect("body should serialize")
}

#[test]
fn chat_request_sends_tool_results_under_the_user_role() {
    let request = ModelRequest::new(
        vec![
            Turn::bridge(Role::System, "rules"),
            Turn::new(Role::User, "Generate an elf name"),
            Turn::assistant("TOOL_CALL: get_elf_name(count=1)"),
            Turn::bridge(Role::ToolResult, "TOOL_RESULT: Luis Agulló"),
        ],
        GenerationParams::new("local-model").with_temperature(0.3),
    );

    let chat = ChatRequest::from(request);
    let roles = chat.messages.iter().map(|m| m.role).collect::<Vec<_>>();
    assert_eq!(roles, vec!["system", "user", "assistant", "user"]);

    let api = build_api_request(&chat).expect("api request should build");
    let encoded = serde_json::to_value(&api).expect("api request should serialize");
    assert_eq!(encoded["model"], "local-model");
    assert_eq!(encoded["max_tokens"], 1000);
    assert_eq!(encoded["stream"], false);
    assert_eq!(encoded["messages"][3]["content"], "TOOL_RESULT: Luis Agulló");
}

#[test]
fn interpret_completion_keeps_raw_payload_and_maps_fields() {
    let completion =
        interpret_completion(200, &completion_body("Hello there")).expect("should parse");

    assert_eq!(completion.content, "Hello there");
    assert_eq!(completion.model, "llamafile");
    assert_eq!(completion.usage.total_tokens, 17);
    assert_eq!(completion.raw["id"], "chatcmpl-1");

    let response = completion.into_model_response("local-model".to_string());
    assert_eq!(response.message.origin, TurnOrigin::Backend);
    assert_eq!(response.stop_reason, StopReason::EndTurn);
    assert_eq!(response.model, "llamafile");
}

#[test]
fn interpret_completion_treats_null_content_as_empty_text() {
    let body = serde_json::to_vec(&json!({
        "choices": [{ "message": { "role": "assistant", "content": null } }]
    }))
    .expect("body should serialize");

    let completion = interpret_completion(200, &body).expect("should parse");
    assert_eq!(completion.content, "");
    assert_eq!(completion.model, "");
}

#[test]
fn interpret_completion_classifies_non_success_statuses() {
    let body = br#"{"error":{"message":"model not loaded"}}"#;
    let error = interpret_completion(500, body).expect_err("500 should fail");
    assert_eq!(error.kind, ProviderErrorKind::Status);
    assert_eq!(error.http_status, Some(500));
    assert_eq!(error.message, "model not loaded");
    assert!(error.is_backend_unavailable());

    let error = interpret_completion(503, b"loading").expect_err("503 should fail");
    assert_eq!(error.kind, ProviderErrorKind::Unavailable);
    assert_eq!(error.http_status, Some(503));
    assert!(error.message.contains("503"));

    let error = interpret_completion(404, br#"{"error":"not found"}"#).expect_err("404");
    assert_eq!(error.message, "not found");
}

#[test]
fn interpret_completion_flags_malformed_payloads() {
    let error = interpret_completion(200, b"<html>").expect_err("html should fail");
    assert_eq!(error.kind, ProviderErrorKind::MalformedResponse);

    let error = interpret_completion(200, br#"{"choices":[]}"#).expect_err("no choices");
    assert_eq!(error.kind, ProviderErrorKind::MalformedResponse);

    let error = interpret_completion(200, br#"{"result":"ok"}"#).expect_err("wrong shape");
    assert_eq!(error.kind, ProviderErrorKind::MalformedResponse);
    assert!(!error.is_backend_unavailable());
}

#[test]
fn interpret_models_passes_json_through() {
    let body = br#"{"object":"list","data":[{"id":"llamafile"}]}"#;
    let models = interpret_models(200, body).expect("models should parse");
    assert_eq!(models["data"][0]["id"], "llamafile");

    let error = interpret_models(502, b"").expect_err("502 should fail");
    assert!(error.is_backend_unavailable());
}
