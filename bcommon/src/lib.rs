//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use bcommon::{GenerationParams, MetadataMap, RequestId};
//!
//! let request = RequestId::from("req-1");
//! let mut metadata = MetadataMap::new();
//! metadata.insert("tenant".to_string(), "acme".to_string());
//!
//! let params = GenerationParams::default().resolve(None, Some(0.2), None);
//! assert_eq!(request.as_str(), "req-1");
//! assert_eq!(params.model, "local-model");
//! assert_eq!(params.temperature, 0.2);
//! assert_eq!(params.max_output_tokens, 1000);
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use bcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Shared metadata and request identifier newtype.
    //!
    //! ```rust
    //! use bcommon::{MetadataMap, RequestId};
    //!
    //! let request = RequestId::new("req-42");
    //! let mut metadata = MetadataMap::new();
    //! metadata.insert("env".to_string(), "test".to_string());
    //!
    //! assert_eq!(request.to_string(), "req-42");
    //! assert!(!RequestId::random().as_str().is_empty());
    //! ```

    use std::collections::HashMap;
    use std::fmt::{Display, Formatter};

    pub type MetadataMap = HashMap<String, String>;

    /// Identifies one bridge request from arrival to response.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct RequestId(String);

    impl RequestId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn random() -> Self {
            Self(uuid::Uuid::new_v4().to_string())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for RequestId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for RequestId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for RequestId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub mod model {
    //! Generation parameters passed through to the backend unmodified.
    //!
    //! ```rust
    //! use bcommon::GenerationParams;
    //!
    //! let params = GenerationParams::new("qwen2.5")
    //!     .with_temperature(0.1)
    //!     .with_max_output_tokens(256);
    //!
    //! assert_eq!(params.model, "qwen2.5");
    //! assert_eq!(params.temperature, 0.1);
    //! assert_eq!(params.max_output_tokens, 256);
    //! ```

    pub const DEFAULT_MODEL: &str = "local-model";
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1000;

    #[derive(Debug, Clone, PartialEq)]
    pub struct GenerationParams {
        pub model: String,
        pub temperature: f32,
        pub max_output_tokens: u32,
    }

    impl Default for GenerationParams {
        fn default() -> Self {
            Self::new(DEFAULT_MODEL)
        }
    }

    impl GenerationParams {
        pub fn new(model: impl Into<String>) -> Self {
            Self {
                model: model.into(),
                temperature: DEFAULT_TEMPERATURE,
                max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            }
        }

        /// Caller values win; every absent one falls back to `self`.
        pub fn resolve(
            &self,
            model: Option<String>,
            temperature: Option<f32>,
            max_output_tokens: Option<u32>,
        ) -> Self {
            Self {
                model: model.unwrap_or_else(|| self.model.clone()),
                temperature: temperature.unwrap_or(self.temperature),
                max_output_tokens: max_output_tokens.unwrap_or(self.max_output_tokens),
            }
        }

        pub fn with_model(mut self, model: impl Into<String>) -> Self {
            self.model = model.into();
            self
        }

        pub fn with_temperature(mut self, temperature: f32) -> Self {
            self.temperature = temperature;
            self
        }

        pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
            self.max_output_tokens = max_output_tokens;
            self
        }
    }
}

pub mod registry {
    //! Generic registry map wrapper used by runtime registries.
    //!
    //! ```rust
    //! use bcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("alpha".to_string(), 1_u32);
    //!
    //! assert_eq!(registry.get("alpha"), Some(&1));
    //! assert!(registry.contains_key("alpha"));
    //! ```

    use std::borrow::Borrow;
    use std::collections::HashMap;
    use std::hash::Hash;

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        items: HashMap<K, V>,
    }

    impl<K, V> Default for Registry<K, V>
    where
        K: Eq + Hash,
    {
        fn default() -> Self {
            Self {
                items: HashMap::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash,
    {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            self.items.insert(key, value)
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.get(key)
        }

        pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.remove(key)
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.contains_key(key)
        }

        pub fn values(&self) -> impl Iterator<Item = &V> {
            self.items.values()
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }
    }
}

pub use context::{MetadataMap, RequestId};
pub use future::BoxFuture;
pub use model::{
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, GenerationParams,
};
pub use registry::Registry;
