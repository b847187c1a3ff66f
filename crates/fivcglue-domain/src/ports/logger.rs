//! Logger Provider Port

use std::sync::Arc;

/// Topic-scoped logger
pub trait Logger: Send + Sync + std::fmt::Debug {
    /// Topic this logger writes under
    fn topic(&self) -> &str;

    /// Log an informational message
    fn info(&self, message: &str);

    /// Log a warning
    fn warning(&self, message: &str);

    /// Log an error, optionally with its cause
    fn error(&self, message: &str, error: Option<&(dyn std::error::Error + 'static)>);
}

/// Logger site: hands out one logger per topic
pub trait LoggerProvider: Send + Sync + std::fmt::Debug {
    /// Get the logger for a topic
    fn get_logger(&self, topic: &str) -> Arc<dyn Logger>;
}
