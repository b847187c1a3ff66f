//! Configuration Provider Port
//!
//! Configuration is organized into named sessions; each session maps string
//! keys to string values.

use std::sync::Arc;

/// A named group of configuration values
pub trait ConfigSession: Send + Sync + std::fmt::Debug {
    /// Get a value by key, None if the key is not set
    fn get_value(&self, key: &str) -> Option<String>;

    /// All keys in this session, sorted
    fn keys(&self) -> Vec<String>;
}

/// Configuration provider interface
///
/// # Example
///
/// ```ignore
/// use fivcglue_domain::ports::ConfigProvider;
///
/// let config = site.get_component::<dyn ConfigProvider>(None)?;
/// let url = config
///     .get_session("redis")
///     .and_then(|session| session.get_value("url"));
/// ```
pub trait ConfigProvider: Send + Sync + std::fmt::Debug {
    /// Get a session by name, None if it does not exist
    fn get_session(&self, name: &str) -> Option<Arc<dyn ConfigSession>>;
}
