#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use product_catalog::application::services::{CachePolicy, CatalogService};
use product_catalog::domain::entities::{NewProduct, Product};
use product_catalog::domain::repositories::ProductRepository;
use product_catalog::error::AppError;
use product_catalog::infrastructure::cache::MemoryCache;
use product_catalog::state::AppState;
use serde_json::json;

/// In-memory product store standing in for PostgreSQL.
///
/// Counts read fetches so tests can assert which requests were answered from
/// the cache and which had to touch the store.
pub struct MemoryRepository {
    products: Mutex<Vec<Product>>,
    next_id: AtomicI64,
    fetch_count: AtomicUsize,
    healthy: AtomicBool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::seeded(vec![])
    }

    /// Creates a store pre-populated with `products`. Ids must be distinct;
    /// new inserts continue above the highest seeded id.
    pub fn seeded(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        Self {
            products: Mutex::new(products),
            next_id: AtomicI64::new(next_id),
            fetch_count: AtomicUsize::new(0),
            healthy: AtomicBool::new(true),
        }
    }

    /// Number of read fetches (by id or full scan) served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProductRepository for MemoryRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if !self.healthy.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }

        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if !self.healthy.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }

        let mut products = self.products.lock().unwrap().clone();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn insert(&self, new_product: NewProduct) -> Result<Product, AppError> {
        if !self.healthy.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product::new(id, new_product.name, new_product.price);

        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn health_check(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}

pub fn keyboard() -> Product {
    Product::new(1, Some("Keyboard".to_string()), 30)
}

pub fn mouse() -> Product {
    Product::new(2, Some("Mouse".to_string()), 20)
}

/// Builds application state over the given store double and a fresh
/// process-local cache.
pub fn create_test_state(repository: Arc<MemoryRepository>) -> AppState {
    let cache = Arc::new(MemoryCache::new());

    let catalog = Arc::new(CatalogService::new(
        repository.clone(),
        cache.clone(),
        CachePolicy::default(),
    ));

    AppState::new(catalog, repository, cache)
}
