//! Backend client contract and conversation model for text-only chat backends.
//!
//! ```rust
//! use bprovider::{Role, Turn};
//!
//! let turn = Turn::new(Role::User, "Generate an elf name");
//! assert_eq!(turn.role.wire_name(), "user");
//! assert!(!turn.is_synthetic());
//! ```

pub mod adapters;
mod error;
mod model;
mod provider;
mod secret;

pub mod prelude {
    pub use crate::{
        ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderErrorKind,
        ProviderFuture, Role, Turn, TurnOrigin,
    };
}

pub use error::{ProviderError, ProviderErrorKind};
pub use model::{
    ModelRequest, ModelRequestBuilder, ModelResponse, Role, StopReason, TokenUsage, Turn,
    TurnOrigin,
};
pub use provider::{ModelProvider, ProviderFuture};
pub use secret::SecretString;
