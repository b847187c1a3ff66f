//! # fivcglue - Provider Implementations
//!
//! Concrete components for the domain ports. Each provider module exposes a
//! `factory()` describing how to construct it from a component spec;
//! [`register_default_factories`] adds all of them to a builder.
//!
//! ## Provider Categories
//!
//! | Class | Type | Port |
//! |-------|------|------|
//! | `caches.memory` | [`cache::MemoryCacheProvider`] | `CacheProvider`, `HealthCheckProvider` |
//! | `caches.null` | [`cache::NullCacheProvider`] | `CacheProvider` |
//! | `configs.file` | [`config::FileConfigProvider`] | `ConfigProvider` |
//! | `loggers.tracing` | [`logging::TracingLoggerProvider`] | `LoggerProvider` |
//! | `mutexes.local` | [`lock::LocalLockProvider`] | `LockProvider` |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! fivcglue-providers = { version = "0.1", default-features = false }
//! ```

pub use fivcglue_domain::error::{Error, Result};
pub use fivcglue_domain::ports::{
    CacheProvider, ConfigProvider, HealthCheckProvider, LockProvider, LoggerProvider,
};

use fivcglue_application::ComponentSiteBuilder;

/// Provider-specific constants
pub mod constants;

/// Cache provider implementations
pub mod cache;

/// Configuration provider implementations
pub mod config;

/// Lock provider implementations
pub mod lock;

/// Logger provider implementations
pub mod logging;

/// Add every provider factory in this crate to `builder`
pub fn register_default_factories(builder: &mut ComponentSiteBuilder) {
    #[cfg(feature = "cache-moka")]
    builder.register_factory(cache::moka::factory());
    builder
        .register_factory(cache::null::factory())
        .register_factory(config::file::factory())
        .register_factory(lock::local::factory())
        .register_factory(logging::tracing_logger::factory());
}
