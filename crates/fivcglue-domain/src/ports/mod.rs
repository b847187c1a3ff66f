//! Domain Port Interfaces
//!
//! Interface contracts that components are registered under in a
//! component site. Callers resolve a port by its trait object type
//! (for example `dyn CacheProvider`) and never see the concrete type.
//!
//! ## Architecture
//!
//! Ports follow the Dependency Inversion Principle:
//! - The domain defines the capability contracts
//! - Providers implement them and register themselves in the site
//! - Consumers look them up from the site during construction
//!
//! ## Organization
//!
//! | Port | Purpose |
//! |------|---------|
//! | [`ConfigProvider`] | Named configuration sessions of string values |
//! | [`CacheProvider`] | Byte cache with per-entry expiration |
//! | [`LoggerProvider`] | Topic-scoped loggers |
//! | [`LockProvider`] | Named mutual exclusion with expiration |
//! | [`HealthCheckProvider`] | Component self-checks |

/// Cache port
pub mod cache;
/// Configuration port
pub mod config;
/// Health check port
pub mod health;
/// Lock (mutex) port
pub mod lock;
/// Logger port
pub mod logger;

pub use cache::CacheProvider;
pub use config::{ConfigProvider, ConfigSession};
pub use health::{HealthCheck, HealthCheckProvider, HealthStatus};
pub use lock::{LockGuard, LockProvider};
pub use logger::{Logger, LoggerProvider};
