//! Shared provider error kinds and error value helpers.
//!
//! ```rust
//! use bprovider::{ProviderError, ProviderErrorKind};
//!
//! let status = ProviderError::status(503, "backend warming up");
//! assert_eq!(status.kind, ProviderErrorKind::Status);
//! assert_eq!(status.http_status, Some(503));
//! assert!(status.is_backend_unavailable());
//!
//! let malformed = ProviderError::malformed_response("missing choices");
//! assert!(!malformed.is_backend_unavailable());
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    Transport,
    Timeout,
    Status,
    Unavailable,
    InvalidRequest,
    MalformedResponse,
    Unsupported,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
    pub http_status: Option<u16>,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            http_status: None,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Transport, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Timeout, message)
    }

    pub fn status(http_status: u16, message: impl Into<String>) -> Self {
        Self {
            http_status: Some(http_status),
            ..Self::new(ProviderErrorKind::Status, message)
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unavailable, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidRequest, message)
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::MalformedResponse, message)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unsupported, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Other, message)
    }

    /// True when the backend could not be reached or answered with a non-success status.
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(
            self.kind,
            ProviderErrorKind::Transport
                | ProviderErrorKind::Timeout
                | ProviderErrorKind::Status
                | ProviderErrorKind::Unavailable
        )
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.http_status {
            Some(code) => write!(f, "{:?} (http {}): {}", self.kind, code, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_classification_covers_transport_and_status_kinds() {
        assert!(ProviderError::transport("connection refused").is_backend_unavailable());
        assert!(ProviderError::timeout("slow").is_backend_unavailable());
        assert!(ProviderError::status(500, "boom").is_backend_unavailable());
        assert!(ProviderError::unavailable("down").is_backend_unavailable());

        assert!(!ProviderError::invalid_request("bad").is_backend_unavailable());
        assert!(!ProviderError::malformed_response("bad json").is_backend_unavailable());
        assert!(!ProviderError::unsupported("nope").is_backend_unavailable());
    }

    #[test]
    fn display_includes_http_status_when_present() {
        let rendered = ProviderError::status(404, "no such route").to_string();
        assert_eq!(rendered, "Status (http 404): no such route");

        let rendered = ProviderError::transport("refused").to_string();
        assert_eq!(rendered, "Transport: refused");
    }
}
