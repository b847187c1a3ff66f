//! Null cache provider for testing
//!
//! A cache provider implementation that doesn't store anything.

use crate::constants::NULL_CACHE_CLASS;
use fivcglue_application::ComponentFactory;
use fivcglue_domain::constants::CACHE_INTERFACE;
use fivcglue_domain::error::Result;
use fivcglue_domain::ports::CacheProvider;
use std::time::Duration;

/// Null cache provider that doesn't store anything
///
/// Always misses on reads and accepts writes without storing them.
/// Useful for testing and disabling caching.
#[derive(Debug, Clone, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

impl CacheProvider for NullCacheProvider {
    fn get_value(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn set_value(&self, _key: &str, _value: Option<&[u8]>, _expire: Duration) -> Result<bool> {
        Ok(true)
    }

    fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// Factory for `caches.null`; takes no arguments
pub fn factory() -> ComponentFactory {
    ComponentFactory::builder(NULL_CACHE_CLASS, |_site, _args| Ok(NullCacheProvider::new()))
        .description("No-op cache that never stores anything")
        .provides::<dyn CacheProvider>(CACHE_INTERFACE, |cache| cache)
        .build()
}
