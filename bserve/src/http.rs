//! HTTP surface: chat completions through the bridge, plus health and model passthroughs.

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Request, State};
use axum::http::header::{HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bchat::{BridgeError, BridgeErrorKind, BridgeRequest, BridgeService};
use bcommon::{GenerationParams, RequestId};
use bprovider::{Role, Turn};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 128;
const INTERNAL_ERROR_MESSAGE: &str = "internal error";

#[derive(Clone)]
pub struct AppState {
    service: BridgeService,
    defaults: GenerationParams,
    tool_count: usize,
}

impl AppState {
    pub fn new(service: BridgeService, defaults: GenerationParams) -> Self {
        let tool_count = service.executor().descriptors().len();
        Self {
            service,
            defaults,
            tool_count,
        }
    }

    pub fn service(&self) -> &BridgeService {
        &self.service
    }

    pub fn tool_count(&self) -> usize {
        self.tool_count
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .route("/v1/models", get(list_models))
        .route("/health", get(health))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: Option<String>,
    #[serde(default)]
    pub messages: Vec<IncomingMessage>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl IncomingMessage {
    fn into_turn(self) -> Result<Turn, BridgeError> {
        let role = Role::parse(&self.role).ok_or_else(|| {
            BridgeError::invalid_request(format!("unsupported message role '{}'", self.role))
        })?;
        Ok(Turn::new(role, self.content.unwrap_or_default()))
    }
}

impl ChatCompletionRequest {
    fn into_bridge_request(
        self,
        defaults: &GenerationParams,
        request_id: RequestId,
    ) -> Result<BridgeRequest, BridgeError> {
        if self.messages.is_empty() {
            return Err(BridgeError::invalid_request("messages must not be empty"));
        }

        let turns = self
            .messages
            .into_iter()
            .map(IncomingMessage::into_turn)
            .collect::<Result<Vec<_>, _>>()?;

        let params = defaults.resolve(self.model, self.temperature, self.max_tokens);

        Ok(BridgeRequest::new(turns, params).with_request_id(request_id))
    }
}

/// Renders a [`BridgeError`] as `{error, kind}` with its status class.
///
/// Internal faults render a fixed message; their detail only goes to the log.
#[derive(Debug)]
pub struct ApiError(pub BridgeError);

impl From<BridgeError> for ApiError {
    fn from(error: BridgeError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        let status =
            StatusCode::from_u16(error.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Bridge hooks already reported backend and budget failures.
        tracing::debug!(
            phase = "http",
            status = status.as_u16(),
            error_kind = error.kind.as_str(),
            error = %error.message,
            "request failed"
        );

        let message = match error.kind {
            BridgeErrorKind::InternalFault => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => error.message,
        };
        let mut body = json!({
            "error": message,
            "kind": error.kind.as_str(),
        });
        if let Some(upstream_status) = error.upstream_status {
            body["upstream_status"] = json!(upstream_status);
        }

        (status, Json(body)).into_response()
    }
}

async fn chat_completions(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<ChatCompletionRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) =
        payload.map_err(|rejection| BridgeError::invalid_request(rejection.body_text()))?;
    let request = payload.into_bridge_request(&state.defaults, request_id)?;

    let outcome = state.service.run(request).await?;
    Ok(Json(outcome.response.raw))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "mode": "simulated_tool_calling",
        "tools": state.tool_count,
        "max_iterations": state.service.budget().get(),
    }))
}

async fn list_models(State(state): State<AppState>) -> Response {
    let provider = state.service.provider();
    match provider.list_models().await {
        Ok(models) => Json(models).into_response(),
        Err(error) => {
            tracing::warn!(phase = "http", error = %error, "model listing failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": format!("cannot reach backend: {}", error.message) })),
            )
                .into_response()
        }
    }
}

/// Adopts a well-formed caller `X-Request-ID` or mints one, and echoes it on the response.
async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| is_valid_request_id(value))
        .map(RequestId::from)
        .unwrap_or_else(RequestId::random);

    request.extensions_mut().insert(request_id.clone());
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

fn is_valid_request_id(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_REQUEST_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("handler panicked");
    tracing::error!(phase = "http", error = detail, "request handler panicked");

    ApiError(BridgeError::internal_fault(detail)).into_response()
}
