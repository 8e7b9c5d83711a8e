//! Cache service trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for the external key/value cache.
///
/// The cache stores opaque text payloads under string keys with an absolute
/// expiry fixed at write time. There is no delete and no compare-and-swap:
/// entries are only ever replaced wholesale or left to expire.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the application (cache failures should degrade to store lookups).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::MemoryCache`] - Process-local cache for tests and development
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the payload stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(payload))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Production implementations absorb transport errors and report a miss;
    /// callers must still tolerate `Err` and treat it as a miss.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key` with an absolute time-to-live.
    ///
    /// The expiry is fixed at write time and never extended by reads; a later
    /// `set` on the same key replaces both payload and expiry.
    ///
    /// # Errors
    ///
    /// Production implementations log failures and return `Ok(())` so a cache
    /// outage never disrupts the request flow.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;
}
