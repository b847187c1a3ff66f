//! Moka in-memory cache provider
//!
//! Concurrent in-process cache. Unlike a single cache-wide TTL, every entry
//! expires according to the duration passed to `set_value`.
//!
//! ## Example
//!
//! ```ignore
//! use fivcglue_providers::cache::MemoryCacheProvider;
//! use std::time::Duration;
//!
//! let cache = MemoryCacheProvider::with_capacity(1000);
//! cache.set_value("demo:user:123", Some(b"{}"), Duration::from_secs(30))?;
//! ```

use crate::constants::{CACHE_DEFAULT_MAX_CAPACITY, MEMORY_CACHE_CLASS, PROVIDER_LOG_TOPIC};
use fivcglue_application::{ComponentFactory, ComponentSite};
use fivcglue_domain::constants::{CACHE_INTERFACE, HEALTH_CHECK_INTERFACE};
use fivcglue_domain::error::Result;
use fivcglue_domain::ports::{CacheProvider, HealthCheck, HealthCheckProvider, LoggerProvider};
use fivcglue_domain::value_objects::ComponentArgs;
use moka::Expiry;
use moka::sync::Cache;
use std::time::{Duration, Instant};

#[derive(Clone)]
struct CacheEntry {
    value: Vec<u8>,
    ttl: Duration,
}

/// Expires each entry after its own TTL, restarting it on overwrite
struct EntryExpiry;

impl Expiry<String, CacheEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Moka-based in-memory cache provider
#[derive(Clone)]
pub struct MemoryCacheProvider {
    cache: Cache<String, CacheEntry>,
    max_capacity: u64,
}

impl Default for MemoryCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCacheProvider {
    /// Create a cache with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(CACHE_DEFAULT_MAX_CAPACITY)
    }

    /// Create a cache holding at most `max_capacity` entries
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryExpiry)
            .build();

        Self {
            cache,
            max_capacity,
        }
    }

    /// Construct from component arguments
    ///
    /// Arguments: `max_capacity` (optional, entries).
    pub fn from_args(site: &ComponentSite, args: &ComponentArgs) -> Result<Self> {
        let max_capacity = args.get_or("max_capacity", CACHE_DEFAULT_MAX_CAPACITY)?;
        let provider = Self::with_capacity(max_capacity);

        if let Some(loggers) = site.query_component::<dyn LoggerProvider>(None) {
            loggers
                .get_logger(PROVIDER_LOG_TOPIC)
                .info(&format!("memory cache created (max_capacity={max_capacity})"));
        }

        Ok(provider)
    }

    /// Get the maximum capacity of the cache
    pub fn max_capacity(&self) -> u64 {
        self.max_capacity
    }

    /// Number of live entries
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl CacheProvider for MemoryCacheProvider {
    fn get_value(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.cache.get(key).map(|entry| entry.value))
    }

    fn set_value(&self, key: &str, value: Option<&[u8]>, expire: Duration) -> Result<bool> {
        let entry = CacheEntry {
            value: value.map(<[u8]>::to_vec).unwrap_or_default(),
            ttl: expire,
        };
        self.cache.insert(key.to_string(), entry);
        Ok(true)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.cache.remove(key).is_some())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

impl HealthCheckProvider for MemoryCacheProvider {
    fn check(&self) -> HealthCheck {
        let entries = self.entry_count();
        if entries >= self.max_capacity {
            HealthCheck::degraded(
                "cache.memory",
                Some(format!("at capacity ({entries}/{})", self.max_capacity)),
            )
        } else {
            HealthCheck::healthy("cache.memory")
        }
    }
}

impl std::fmt::Debug for MemoryCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheProvider")
            .field("max_capacity", &self.max_capacity)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

/// Factory for `caches.memory`
pub fn factory() -> ComponentFactory {
    ComponentFactory::builder(MEMORY_CACHE_CLASS, MemoryCacheProvider::from_args)
        .description("Moka in-memory cache with per-entry expiration")
        .provides::<dyn CacheProvider>(CACHE_INTERFACE, |cache| cache)
        .provides::<dyn HealthCheckProvider>(HEALTH_CHECK_INTERFACE, |cache| cache)
        .build()
}
