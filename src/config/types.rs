// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

use crate::dispatch::ParameterBag;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub dispatch: DispatchConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Dispatch log format (`text` or `json`)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "text".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Dispatch configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DispatchConfig {
    /// Callback used for requests without path segments
    pub default_callback: Vec<String>,
    /// Params used with the default callback when the request has none
    #[serde(default)]
    pub default_params: ParameterBag,
    /// View name for scalar results
    pub message_view: String,
    /// View name for structured results without a `view` key
    pub json_view: String,
}
