//! Production-friendly observability hooks for the bridge loop.
//!
//! ```rust
//! use bobserve::{FanoutBridgeHooks, MetricsBridgeHooks, SafeBridgeHooks, TracingBridgeHooks};
//!
//! let _hooks = SafeBridgeHooks::new(
//!     FanoutBridgeHooks::new()
//!         .with(TracingBridgeHooks)
//!         .with(MetricsBridgeHooks),
//! );
//! ```

mod fanout_hooks;
mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use fanout_hooks::FanoutBridgeHooks;
pub use metrics_hooks::MetricsBridgeHooks;
pub use safe_hooks::SafeBridgeHooks;
pub use tracing_hooks::TracingBridgeHooks;

pub mod prelude {
    pub use crate::{FanoutBridgeHooks, MetricsBridgeHooks, SafeBridgeHooks, TracingBridgeHooks};
}

#[cfg(test)]
mod tests;
