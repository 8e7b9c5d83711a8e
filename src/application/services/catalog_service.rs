//! Catalog read/write service implementing cache-aside access.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheKey, CacheService, codec};

/// Expiration and latency knobs for the catalog's caching behavior.
#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    /// Absolute lifetime of every cache entry, fixed at write time. Reads
    /// never extend it; only a fresh write resets it.
    pub ttl: Duration,
    /// Artificial delay applied before a store fetch on the cache-miss path
    /// of read operations. Zero in production; raising it makes the
    /// hit/miss latency asymmetry visible in demos and tests.
    pub fetch_delay: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(180),
            fetch_delay: Duration::ZERO,
        }
    }
}

/// Service for reading and creating catalog products.
///
/// Reads are cache-aside: the cache is consulted first, a miss falls back to
/// the durable store, and the fetched value is written back with the fixed
/// TTL. Writes go to the store first; afterwards the cached full listing, if
/// present, is patched best-effort so list views reflect the new product
/// without waiting for expiry.
///
/// # Consistency
///
/// The store is the source of truth and the cache a disposable projection of
/// it. Cache faults (transport errors, corrupt payloads) are absorbed here
/// and degrade the affected operation to a plain store access; store faults
/// always surface to the caller. Entries diverging from the store for up to
/// one TTL window after an out-of-band store mutation is accepted behavior.
///
/// # Concurrency
///
/// The service holds no mutable state of its own. Concurrent misses on the
/// same key may each fetch from the store and race to populate it; all of
/// them write the same value derived from the same store state, so the last
/// write winning is harmless. There is no single-flight deduplication of
/// concurrent misses.
pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
    cache: Arc<dyn CacheService>,
    policy: CachePolicy,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheService>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            repository,
            cache,
            policy,
        }
    }

    /// Retrieves a product by id, cache first.
    ///
    /// On a cache miss (or an unusable cache entry) the product is fetched
    /// from the store and, when found, written back under `product:{id}` with
    /// the fixed TTL. An id unknown to the store yields `Ok(None)` and leaves
    /// the cache untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fetch fails.
    pub async fn get_product(&self, id: i64) -> Result<Option<Product>, AppError> {
        let key = CacheKey::Product(id).to_string();

        if let Some(product) = self.cache_lookup::<Product>(&key).await {
            return Ok(Some(product));
        }

        self.simulate_fetch_delay().await;

        let Some(product) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        self.cache_store(&key, &product).await;

        Ok(Some(product))
    }

    /// Retrieves the full catalog, cache first.
    ///
    /// The listing is cached as a single blob under `product:all`, preserving
    /// the store's scan order verbatim. An empty catalog is a cacheable
    /// result like any other.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store scan fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let key = CacheKey::ProductList.to_string();

        if let Some(products) = self.cache_lookup::<Vec<Product>>(&key).await {
            return Ok(products);
        }

        self.simulate_fetch_delay().await;

        let products = self.repository.list_all().await?;

        self.cache_store(&key, &products).await;

        Ok(products)
    }

    /// Creates a product, letting the store assign its id.
    ///
    /// After the insert succeeds, the cached `product:all` listing - if one
    /// exists and decodes - is appended to and rewritten with a fresh TTL, so
    /// list views pick up the new product immediately. An uncached listing is
    /// left alone to populate lazily on the next [`Self::list_products`]
    /// miss. The per-id entry is deliberately not written either: single
    /// products enter the cache on first demand, not on creation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `price` is negative.
    /// Returns [`AppError::Internal`] if the store insert fails.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, AppError> {
        if new_product.price < 0 {
            return Err(AppError::bad_request(
                "Price must be non-negative",
                json!({ "price": new_product.price }),
            ));
        }

        let created = self.repository.insert(new_product).await?;
        debug!("Created product {} in store", created.id);

        self.patch_cached_listing(&created).await;

        Ok(created)
    }

    /// Appends a freshly created product to the cached listing, best-effort.
    ///
    /// Failures here never bubble up: the entry either gets patched or stays
    /// on its current TTL until the next listing miss rewrites it wholesale.
    async fn patch_cached_listing(&self, created: &Product) {
        let key = CacheKey::ProductList.to_string();

        let Some(mut products) = self.cache_lookup::<Vec<Product>>(&key).await else {
            return;
        };

        products.push(created.clone());
        self.cache_store(&key, &products).await;
        debug!("Patched cached listing with product {}", created.id);
    }

    /// Reads and decodes a cache entry, reporting every failure as a miss.
    ///
    /// Transport errors and undecodable payloads both degrade to `None`; the
    /// caller falls through to the store either way.
    async fn cache_lookup<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.get(key).await {
            Ok(Some(payload)) => match codec::decode(&payload) {
                Ok(value) => {
                    debug!("Cache HIT: {}", key);
                    Some(value)
                }
                Err(e) => {
                    warn!("Unusable cache entry for {}: {}. Treating as miss", key, e);
                    None
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                None
            }
            Err(e) => {
                warn!("Cache degraded for {}: {}. Falling back to store", key, e);
                None
            }
        }
    }

    /// Encodes and writes a cache entry with the policy TTL, best-effort.
    async fn cache_store<T: Serialize>(&self, key: &str, value: &T) {
        let payload = match codec::encode(value) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to encode cache payload for {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.cache.set(key, &payload, self.policy.ttl).await {
            warn!("Failed to cache {}: {}", key, e);
        }
    }

    /// Sleeps for the configured fetch delay, miss path only.
    async fn simulate_fetch_delay(&self) {
        if !self.policy.fetch_delay.is_zero() {
            tokio::time::sleep(self.policy.fetch_delay).await;
        }
    }
}
