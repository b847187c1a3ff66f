//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the component site: loading the
//! application configuration, installing the tracing subscriber, building the
//! site from the configured components and aggregating health checks.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Startup
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Default factory table and site construction |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`health`] | Aggregated component health |
//! | [`logging`] | Structured logging with tracing |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod health;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{bootstrap, default_builder};
pub use config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
pub use error_ext::ErrorContext;
pub use health::{HealthResponse, check_all};
