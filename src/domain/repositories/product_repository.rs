//! Repository trait for product data access.

use crate::domain::entities::{NewProduct, Product};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the durable product store.
///
/// The store is the single source of truth for catalog data. The caching
/// layer above it (see [`crate::application::services::CatalogService`]) only
/// ever holds disposable projections of what these operations return.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Finds a product by its store-assigned id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))` if found
    /// - `Ok(None)` if no product has this id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Returns the full catalog in stable scan order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Product>, AppError>;

    /// Inserts a new product and returns it with the assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Checks if the backing database is reachable.
    ///
    /// Used by health check endpoints to report store status.
    async fn health_check(&self) -> bool;
}
