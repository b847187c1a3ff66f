//! Tracing logger tests

use fivcglue_domain::ports::LoggerProvider;
use fivcglue_providers::logging::TracingLoggerProvider;
use std::io;
use std::sync::Arc;

#[test]
fn test_logger_per_topic_is_cached() {
    let loggers = TracingLoggerProvider::new();

    let first = loggers.get_logger("app.db");
    let second = loggers.get_logger("app.db");
    let other = loggers.get_logger("app.http");

    assert!(Arc::ptr_eq(&first, &second));
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(first.topic(), "app.db");
    assert_eq!(other.topic(), "app.http");
}

#[test]
fn test_logging_without_subscriber_is_harmless() {
    let logger = TracingLoggerProvider::new().get_logger("app");
    let cause = io::Error::other("disk full");

    logger.info("starting");
    logger.warning("slow");
    logger.error("write failed", Some(&cause));
    logger.error("write failed", None);
}

#[test]
fn test_concurrent_lookups_share_one_logger() {
    let loggers = Arc::new(TracingLoggerProvider::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let loggers = Arc::clone(&loggers);
            std::thread::spawn(move || loggers.get_logger("shared"))
        })
        .collect();
    let resolved: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(resolved.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    assert_eq!(loggers.topic_count(), 1);
}
