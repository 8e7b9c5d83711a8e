//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// PostgreSQL repository for product storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Queries are
/// runtime-checked so the crate builds without a live database; the schema
/// they target is pinned by the migrations shipped with the binary.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(product)
    }

    async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        // Ascending id keeps the scan order identical to insertion order, so
        // appending a newly created product to a cached copy of this listing
        // yields the same sequence a fresh scan would.
        let products =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(products)
    }

    async fn insert(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id, name, price",
        )
        .bind(new_product.name)
        .bind(new_product.price)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(product)
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
