//! Backend client over an OpenAI-compatible transport.

use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;

use crate::{ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderFuture};

use super::transport::{HttpTransport, OpenAiCompatTransport};
use super::types::ChatRequest;

#[derive(Debug, Clone)]
pub struct OpenAiCompatProvider {
    transport: Arc<dyn OpenAiCompatTransport>,
}

impl OpenAiCompatProvider {
    pub fn new(transport: Arc<dyn OpenAiCompatTransport>) -> Self {
        Self { transport }
    }

    pub fn http(client: Client, base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpTransport::new(client, base_url)))
    }
}

impl ModelProvider for OpenAiCompatProvider {
    fn complete<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>> {
        Box::pin(async move {
            request.validate()?;
            let requested_model = request.params.model.clone();
            let completion = self.transport.complete(ChatRequest::from(request)).await?;
            Ok(completion.into_model_response(requested_model))
        })
    }

    fn list_models<'a>(&'a self) -> ProviderFuture<'a, Result<Value, ProviderError>> {
        self.transport.list_models()
    }
}
