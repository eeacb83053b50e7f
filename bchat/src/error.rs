//! Bridge-level errors and their HTTP status classes.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bprovider::{ProviderError, ProviderErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeErrorKind {
    InvalidRequest,
    BackendUnavailable,
    IterationBudgetExceeded,
    InternalFault,
}

impl BridgeErrorKind {
    /// Stable snake_case discriminator used in error payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::BackendUnavailable => "backend_unavailable",
            Self::IterationBudgetExceeded => "iteration_budget_exceeded",
            Self::InternalFault => "internal_fault",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeError {
    pub kind: BridgeErrorKind,
    pub message: String,
    pub upstream_status: Option<u16>,
}

impl BridgeError {
    pub fn new(kind: BridgeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            upstream_status: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(BridgeErrorKind::InvalidRequest, message)
    }

    pub fn backend_unavailable(message: impl Into<String>) -> Self {
        Self::new(BridgeErrorKind::BackendUnavailable, message)
    }

    pub fn budget_exceeded() -> Self {
        Self::new(
            BridgeErrorKind::IterationBudgetExceeded,
            "maximum tool call iterations reached",
        )
    }

    pub fn internal_fault(message: impl Into<String>) -> Self {
        Self::new(BridgeErrorKind::InternalFault, message)
    }

    pub fn with_upstream_status(mut self, status: u16) -> Self {
        self.upstream_status = Some(status);
        self
    }

    pub fn http_status(&self) -> u16 {
        match self.kind {
            BridgeErrorKind::InvalidRequest => 400,
            BridgeErrorKind::BackendUnavailable => 502,
            BridgeErrorKind::IterationBudgetExceeded | BridgeErrorKind::InternalFault => 500,
        }
    }
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for BridgeError {}

impl From<ProviderError> for BridgeError {
    fn from(value: ProviderError) -> Self {
        let error = match value.kind {
            ProviderErrorKind::Transport
            | ProviderErrorKind::Timeout
            | ProviderErrorKind::Status
            | ProviderErrorKind::Unavailable => {
                BridgeError::backend_unavailable(format!("backend request failed: {}", value.message))
            }
            ProviderErrorKind::InvalidRequest => BridgeError::invalid_request(value.message),
            ProviderErrorKind::MalformedResponse
            | ProviderErrorKind::Unsupported
            | ProviderErrorKind::Other => {
                BridgeError::internal_fault(format!("internal error: {}", value.message))
            }
        };

        match value.http_status {
            Some(status) => error.with_upstream_status(status),
            None => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_map_to_bridge_status_classes() {
        let cases = [
            (ProviderError::transport("refused"), BridgeErrorKind::BackendUnavailable, 502),
            (ProviderError::timeout("slow"), BridgeErrorKind::BackendUnavailable, 502),
            (ProviderError::status(500, "boom"), BridgeErrorKind::BackendUnavailable, 502),
            (ProviderError::unavailable("down"), BridgeErrorKind::BackendUnavailable, 502),
            (ProviderError::invalid_request("no turns"), BridgeErrorKind::InvalidRequest, 400),
            (ProviderError::malformed_response("no choices"), BridgeErrorKind::InternalFault, 500),
            (ProviderError::unsupported("models"), BridgeErrorKind::InternalFault, 500),
            (ProviderError::other("weird"), BridgeErrorKind::InternalFault, 500),
        ];

        for (provider_error, kind, status) in cases {
            let error = BridgeError::from(provider_error);
            assert_eq!(error.kind, kind);
            assert_eq!(error.http_status(), status);
        }
    }

    #[test]
    fn backend_status_is_kept_as_upstream_context() {
        let error = BridgeError::from(ProviderError::status(503, "model loading"));

        assert_eq!(error.upstream_status, Some(503));
        assert_eq!(error.message, "backend request failed: model loading");
        assert_eq!(error.http_status(), 502);
    }

    #[test]
    fn budget_error_has_stable_message_and_discriminator() {
        let error = BridgeError::budget_exceeded();

        assert_eq!(error.message, "maximum tool call iterations reached");
        assert_eq!(error.kind.as_str(), "iteration_budget_exceeded");
        assert_eq!(error.http_status(), 500);
        assert_eq!(
            error.to_string(),
            "IterationBudgetExceeded: maximum tool call iterations reached"
        );
    }
}
