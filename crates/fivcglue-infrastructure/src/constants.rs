//! Infrastructure layer constants
//!
//! Interface names and other domain-level constants live in
//! `fivcglue_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "fivcglue.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "fivcglue";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "FIVCGLUE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a filter directive that overrides the configured level
pub const LOG_ENV_VAR: &str = "FIVCGLUE_LOG";

/// File stem used for log files when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "fivcglue";
