//! Domain constants
//!
//! Symbolic interface names used in declarative component specs. A spec entry
//! such as `{ interface = "CacheProvider", name = "memory" }` refers to the
//! port trait of the same name.

// ============================================================================
// INTERFACE NAMES
// ============================================================================

/// Symbolic name of [`crate::ports::ConfigProvider`]
pub const CONFIG_INTERFACE: &str = "ConfigProvider";

/// Symbolic name of [`crate::ports::CacheProvider`]
pub const CACHE_INTERFACE: &str = "CacheProvider";

/// Symbolic name of [`crate::ports::LoggerProvider`]
pub const LOGGER_INTERFACE: &str = "LoggerProvider";

/// Symbolic name of [`crate::ports::LockProvider`]
pub const LOCK_INTERFACE: &str = "LockProvider";

/// Symbolic name of [`crate::ports::HealthCheckProvider`]
pub const HEALTH_CHECK_INTERFACE: &str = "HealthCheckProvider";
