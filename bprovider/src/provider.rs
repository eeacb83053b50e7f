//! Backend client contract consumed by the bridge orchestrator.

use bcommon::BoxFuture;
use serde_json::Value;

use crate::{ModelRequest, ModelResponse, ProviderError};

pub type ProviderFuture<'a, T> = BoxFuture<'a, T>;

/// Produces one assistant turn per call.
///
/// Implementations are shared across concurrent requests and must not keep
/// per-request state.
pub trait ModelProvider: Send + Sync {
    fn complete<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>>;

    /// Upstream model listing, returned as the backend sent it.
    fn list_models<'a>(&'a self) -> ProviderFuture<'a, Result<Value, ProviderError>> {
        Box::pin(async { Err(ProviderError::unsupported("model listing is not supported")) })
    }
}
