//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::CatalogService;
use crate::domain::repositories::ProductRepository;
use crate::infrastructure::cache::CacheService;

/// Application state shared across all request handlers.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Catalog use cases. All product reads and writes go through here.
    pub catalog: Arc<CatalogService>,
    /// Direct store handle, used by the health endpoint.
    pub store: Arc<dyn ProductRepository>,
    /// Direct cache handle, used by the health endpoint.
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Creates application state from its wired-up components.
    pub fn new(
        catalog: Arc<CatalogService>,
        store: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            catalog,
            store,
            cache,
        }
    }
}
