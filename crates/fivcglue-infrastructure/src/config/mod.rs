//! Configuration management
//!
//! [`AppConfig`] holds the logging settings and the declarative component
//! list the site is built from. [`ConfigLoader`] reads it from defaults, a
//! TOML file and environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig};
