//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Testing | No-op stub for testing |
//! | [`MemoryCacheProvider`] | Local | Moka-backed in-memory cache with per-entry TTL |

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;

#[cfg(feature = "cache-moka")]
pub use self::moka::MemoryCacheProvider;
pub use null::NullCacheProvider;
