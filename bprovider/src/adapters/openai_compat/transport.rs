//! Transport trait and reqwest-based HTTP implementation.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{ProviderError, ProviderFuture, SecretString};

use super::serde_api::{build_api_request, interpret_completion, interpret_models};
use super::types::{ChatCompletion, ChatRequest};

pub trait OpenAiCompatTransport: Send + Sync + std::fmt::Debug {
    fn complete<'a>(
        &'a self,
        request: ChatRequest,
    ) -> ProviderFuture<'a, Result<ChatCompletion, ProviderError>>;

    fn list_models<'a>(&'a self) -> ProviderFuture<'a, Result<Value, ProviderError>>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    models_timeout: Duration,
}

impl HttpTransport {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: None,
            models_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_key(mut self, api_key: SecretString) -> Self {
        if !api_key.is_empty() {
            self.api_key = Some(api_key);
        }
        self
    }

    pub fn with_models_timeout(mut self, timeout: Duration) -> Self {
        self.models_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key.expose()),
            None => builder,
        }
    }

    async fn read(response: reqwest::Response) -> Result<(u16, Vec<u8>), ProviderError> {
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_send_error)?;
        Ok((status, body.to_vec()))
    }
}

impl OpenAiCompatTransport for HttpTransport {
    fn complete<'a>(
        &'a self,
        request: ChatRequest,
    ) -> ProviderFuture<'a, Result<ChatCompletion, ProviderError>> {
        Box::pin(async move {
            let api_request = build_api_request(&request)?;
            let builder = self
                .client
                .post(self.endpoint("chat/completions"))
                .json(&api_request);
            let response = self
                .apply_auth(builder)
                .send()
                .await
                .map_err(map_send_error)?;

            let (status, body) = Self::read(response).await?;
            interpret_completion(status, &body)
        })
    }

    fn list_models<'a>(&'a self) -> ProviderFuture<'a, Result<Value, ProviderError>> {
        Box::pin(async move {
            let builder = self
                .client
                .get(self.endpoint("models"))
                .timeout(self.models_timeout);
            let response = self
                .apply_auth(builder)
                .send()
                .await
                .map_err(map_send_error)?;

            let (status, body) = Self::read(response).await?;
            interpret_models(status, &body)
        })
    }
}

fn map_send_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::timeout(err.to_string())
    } else {
        ProviderError::transport(err.to_string())
    }
}
