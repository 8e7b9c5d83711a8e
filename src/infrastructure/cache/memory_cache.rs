//! Process-local cache implementation for tests and development.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry {
    payload: String,
    expires_at: Instant,
}

/// An in-process cache with per-entry absolute expiry.
///
/// Behaves like the Redis implementation from the caller's point of view:
/// entries expire at the instant fixed when they were written, reads never
/// extend a lifetime, and a later write on the same key replaces payload and
/// expiry wholesale.
///
/// Expired entries are dropped lazily on the next read of their key; there is
/// no background sweeper. That keeps the type trivial, which is all the test
/// and single-process development use cases need. It is not a substitute for
/// a shared cache across instances.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// Creates an empty in-memory cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut entries = self.entries.lock().unwrap();

        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.payload.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let entry = Entry {
            payload: value.to_string(),
            expires_at: Instant::now() + ttl,
        };

        self.entries.lock().unwrap().insert(key.to_string(), entry);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
