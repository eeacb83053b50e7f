//! Environment-driven server configuration.
//!
//! ```rust
//! use bserve::config::ServerConfig;
//!
//! let config = ServerConfig::from_lookup(|key| match key {
//!     "TOOLBRIDGE_MAX_ITERATIONS" => Some("3".to_string()),
//!     _ => None,
//! })
//! .expect("config should load");
//!
//! assert_eq!(config.max_iterations, 3);
//! assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8081");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use bcommon::{DEFAULT_MODEL, GenerationParams};
use bprovider::SecretString;

pub const ENV_BIND_ADDR: &str = "TOOLBRIDGE_BIND_ADDR";
pub const ENV_BACKEND_URL: &str = "TOOLBRIDGE_BACKEND_URL";
pub const ENV_BACKEND_API_KEY: &str = "TOOLBRIDGE_BACKEND_API_KEY";
pub const ENV_BACKEND_TIMEOUT_SECS: &str = "TOOLBRIDGE_BACKEND_TIMEOUT_SECS";
pub const ENV_MODELS_TIMEOUT_SECS: &str = "TOOLBRIDGE_MODELS_TIMEOUT_SECS";
pub const ENV_MAX_ITERATIONS: &str = "TOOLBRIDGE_MAX_ITERATIONS";
pub const ENV_ADVERTISE_TOOLS: &str = "TOOLBRIDGE_ADVERTISE_TOOLS";
pub const ENV_DEFAULT_MODEL: &str = "TOOLBRIDGE_DEFAULT_MODEL";
pub const ENV_LOG_FORMAT: &str = "TOOLBRIDGE_LOG_FORMAT";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8081);
const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/v1";
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 180;
const DEFAULT_MODELS_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: String,
    pub message: String,
}

impl ConfigError {
    pub fn new(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            message: message.into(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.variable, self.message)
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}', expected text or json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub backend_url: String,
    pub backend_api_key: Option<SecretString>,
    pub backend_timeout: Duration,
    pub models_timeout: Duration,
    pub max_iterations: u32,
    pub advertise_tools: bool,
    pub default_model: String,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let bind_addr: SocketAddr = parse_or(
            ENV_BIND_ADDR,
            value(ENV_BIND_ADDR),
            SocketAddr::from(DEFAULT_BIND_ADDR),
        )?;

        let backend_url = value(ENV_BACKEND_URL).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::new(
                ENV_BACKEND_URL,
                format!("'{backend_url}' must start with http:// or https://"),
            ));
        }

        let backend_timeout = parse_or(
            ENV_BACKEND_TIMEOUT_SECS,
            value(ENV_BACKEND_TIMEOUT_SECS),
            DEFAULT_BACKEND_TIMEOUT_SECS,
        )?;
        let models_timeout = parse_or(
            ENV_MODELS_TIMEOUT_SECS,
            value(ENV_MODELS_TIMEOUT_SECS),
            DEFAULT_MODELS_TIMEOUT_SECS,
        )?;
        for (variable, secs) in [
            (ENV_BACKEND_TIMEOUT_SECS, backend_timeout),
            (ENV_MODELS_TIMEOUT_SECS, models_timeout),
        ] {
            if secs == 0 {
                return Err(ConfigError::new(variable, "timeout must be at least one second"));
            }
        }

        let max_iterations = parse_or(
            ENV_MAX_ITERATIONS,
            value(ENV_MAX_ITERATIONS),
            bchat::IterationBudget::DEFAULT,
        )?;
        if max_iterations == 0 {
            return Err(ConfigError::new(ENV_MAX_ITERATIONS, "must be at least 1"));
        }

        let advertise_tools = match value(ENV_ADVERTISE_TOOLS) {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::new(
                    ENV_ADVERTISE_TOOLS,
                    format!("'{raw}' is not a boolean, expected true/false/1/0/yes/no"),
                )
            })?,
        };

        let log_format = match value(ENV_LOG_FORMAT) {
            None => LogFormat::default(),
            Some(raw) => raw
                .parse()
                .map_err(|message: String| ConfigError::new(ENV_LOG_FORMAT, message))?,
        };

        Ok(Self {
            bind_addr,
            backend_url,
            backend_api_key: value(ENV_BACKEND_API_KEY).map(SecretString::new),
            backend_timeout: Duration::from_secs(backend_timeout),
            models_timeout: Duration::from_secs(models_timeout),
            max_iterations,
            advertise_tools,
            default_model: value(ENV_DEFAULT_MODEL)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            log_format,
        })
    }

    /// Generation parameters applied when a caller omits model, temperature, or max tokens.
    pub fn generation_defaults(&self) -> GenerationParams {
        GenerationParams::default().with_model(self.default_model.clone())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            backend_api_key: None,
            backend_timeout: Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
            models_timeout: Duration::from_secs(DEFAULT_MODELS_TIMEOUT_SECS),
            max_iterations: bchat::IterationBudget::DEFAULT,
            advertise_tools: true,
            default_model: DEFAULT_MODEL.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

fn parse_or<T>(variable: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|error| ConfigError::new(variable, format!("'{raw}': {error}"))),
        None => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
