//! Logger Provider Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`TracingLoggerProvider`] | Topic loggers emitting `tracing` events |

pub mod tracing_logger;

pub use tracing_logger::{TracingLogger, TracingLoggerProvider};
