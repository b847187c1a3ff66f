//! Cache Provider Port
//!
//! Port for cache backends. Values are opaque byte strings; every entry
//! carries its own expiration.

use crate::error::Result;
use std::time::Duration;

/// Cache Provider Port
///
/// # Implementations
///
/// - **Memory**: In-process cache with per-entry TTL
/// - **Null**: No-op provider for testing
///
/// # Example
///
/// ```ignore
/// use fivcglue_domain::ports::CacheProvider;
/// use std::time::Duration;
///
/// let cache = site.get_component::<dyn CacheProvider>(Some("memory"))?;
/// cache.set_value("user:123", Some(b"{}"), Duration::from_secs(30))?;
/// assert_eq!(cache.get_value("user:123")?, Some(b"{}".to_vec()));
/// ```
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache
    ///
    /// # Returns
    /// The cached bytes if present, None if missing or expired
    fn get_value(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store a value with the given expiration
    ///
    /// A `None` value is stored as empty bytes.
    ///
    /// # Returns
    /// True if the value was stored
    fn set_value(&self, key: &str, value: Option<&[u8]>, expire: Duration) -> Result<bool>;

    /// Delete a value from the cache
    ///
    /// # Returns
    /// True if the key was present
    fn delete(&self, key: &str) -> Result<bool>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
