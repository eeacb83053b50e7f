//! HTTP server for the toolbridge simulated tool-calling bridge.
//!
//! ```rust
//! use bserve::config::ServerConfig;
//!
//! let state = bserve::build_state(&ServerConfig::default()).expect("state should build");
//! assert_eq!(state.tool_count(), 3);
//! assert_eq!(state.service().budget().get(), 5);
//! ```

use std::sync::Arc;

use anyhow::Context;
use bchat::BridgeService;
use bobserve::{FanoutBridgeHooks, MetricsBridgeHooks, SafeBridgeHooks, TracingBridgeHooks};
use bprovider::ModelProvider;
use bprovider::adapters::openai_compat::{HttpTransport, OpenAiCompatProvider};
use btooling::{DefaultToolExecutor, ToolRegistry};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub mod config;
pub mod http;
pub mod tools;

pub use config::{ConfigError, LogFormat, ServerConfig};
pub use http::{ApiError, AppState, router};
pub use tools::{StoryTables, register_story_tools, story_registry};

/// Installs the global subscriber; `RUST_LOG` overrides the `info` default.
pub fn init_tracing(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .try_init()
        .context("failed to install tracing subscriber")
}

/// Production wiring: HTTP backend client and the built-in story tools.
pub fn build_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let client = reqwest::Client::builder()
        .timeout(config.backend_timeout)
        .build()
        .context("failed to build backend HTTP client")?;

    let mut transport = HttpTransport::new(client, config.backend_url.clone())
        .with_models_timeout(config.models_timeout);
    if let Some(api_key) = &config.backend_api_key {
        transport = transport.with_api_key(api_key.clone());
    }

    let provider = Arc::new(OpenAiCompatProvider::new(Arc::new(transport)));
    let registry = story_registry(Arc::new(StoryTables::default()));

    Ok(bridge_state(config, provider, registry))
}

/// Assembles the bridge around any backend client and tool set.
pub fn bridge_state(
    config: &ServerConfig,
    provider: Arc<dyn ModelProvider>,
    registry: ToolRegistry,
) -> AppState {
    let hooks = SafeBridgeHooks::new(
        FanoutBridgeHooks::new()
            .with(TracingBridgeHooks)
            .with(MetricsBridgeHooks),
    );

    let service = BridgeService::builder(
        provider,
        Arc::new(DefaultToolExecutor::new(Arc::new(registry))),
    )
    .max_iterations(config.max_iterations)
    .advertise_tools(config.advertise_tools)
    .hooks(Arc::new(hooks))
    .build();

    AppState::new(service, config.generation_defaults())
}
