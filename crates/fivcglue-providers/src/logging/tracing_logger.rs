//! Tracing-backed logger site
//!
//! Each topic gets one [`TracingLogger`]; its events carry the topic as a
//! structured field so subscribers can filter on it.

use crate::constants::TRACING_LOGGER_CLASS;
use fivcglue_application::ComponentFactory;
use fivcglue_domain::constants::LOGGER_INTERFACE;
use fivcglue_domain::ports::{Logger, LoggerProvider};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Logger for a single topic
#[derive(Debug, Clone)]
pub struct TracingLogger {
    topic: String,
}

impl TracingLogger {
    /// Create a logger for `topic`
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }
}

impl Logger for TracingLogger {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn info(&self, message: &str) {
        info!(topic = %self.topic, "{message}");
    }

    fn warning(&self, message: &str) {
        warn!(topic = %self.topic, "{message}");
    }

    fn error(&self, message: &str, cause: Option<&(dyn std::error::Error + 'static)>) {
        match cause {
            Some(cause) => error!(topic = %self.topic, error = %cause, "{message}"),
            None => error!(topic = %self.topic, "{message}"),
        }
    }
}

/// Logger site caching one logger per topic
#[derive(Debug, Default)]
pub struct TracingLoggerProvider {
    loggers: DashMap<String, Arc<TracingLogger>>,
}

impl TracingLoggerProvider {
    /// Create an empty logger site
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of topics with a cached logger
    pub fn topic_count(&self) -> usize {
        self.loggers.len()
    }
}

impl LoggerProvider for TracingLoggerProvider {
    fn get_logger(&self, topic: &str) -> Arc<dyn Logger> {
        self.loggers
            .entry(topic.to_string())
            .or_insert_with(|| Arc::new(TracingLogger::new(topic)))
            .clone()
    }
}

/// Factory for `loggers.tracing`; takes no arguments
pub fn factory() -> ComponentFactory {
    ComponentFactory::builder(TRACING_LOGGER_CLASS, |_site, _args| {
        Ok(TracingLoggerProvider::new())
    })
    .description("Topic loggers emitting tracing events")
    .provides::<dyn LoggerProvider>(LOGGER_INTERFACE, |loggers| loggers)
    .build()
}
