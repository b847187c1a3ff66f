//! Provider constants

// ============================================================================
// FACTORY NAMES
// ============================================================================

/// Class name of the in-memory cache
pub const MEMORY_CACHE_CLASS: &str = "caches.memory";

/// Class name of the null cache
pub const NULL_CACHE_CLASS: &str = "caches.null";

/// Class name of the file-backed configuration
pub const FILE_CONFIG_CLASS: &str = "configs.file";

/// Class name of the in-process lock provider
pub const LOCAL_LOCK_CLASS: &str = "mutexes.local";

/// Class name of the tracing-backed logger site
pub const TRACING_LOGGER_CLASS: &str = "loggers.tracing";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default maximum number of entries in the memory cache
pub const CACHE_DEFAULT_MAX_CAPACITY: u64 = 10_000;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Logger topic used by providers to report their own lifecycle
pub const PROVIDER_LOG_TOPIC: &str = "fivcglue.providers";
