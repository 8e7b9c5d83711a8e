//! Caching layer for fast catalog lookups.
//!
//! Provides a [`CacheService`] trait with three implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`MemoryCache`] - Process-local cache for tests and development
//! - [`NullCache`] - No-op implementation for disabled caching
//!
//! Alongside the client trait live the two pieces that define what a cache
//! entry *is*: [`key::CacheKey`] (the single place keys are constructed) and
//! [`codec`] (the single encode/decode path for payloads).

pub mod codec;
pub mod key;
mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use key::CacheKey;
pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};

#[cfg(test)]
pub use service::MockCacheService;
