//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use fivcglue_domain::value_objects::ComponentSpec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [[components]]
/// class = "loggers.tracing"
/// entries = [{ interface = "LoggerProvider" }]
///
/// [[components]]
/// class = "caches.memory"
/// entries = [{ interface = "CacheProvider", name = "memory" }]
/// max_capacity = 1000
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,

    /// Components to build, in dependency order
    pub components: Vec<ComponentSpec>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
