//! Product entity for the catalog.

use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// The store assigns `id` on insert; it is stable and unique. `name` is
/// optional and `price` is a non-negative integer amount.
///
/// Serde derives double as the cache wire format: a cached entry is exactly
/// this record (or an ordered sequence of them) encoded as JSON, so a decoded
/// entry always reproduces the original value, `name: None` included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub price: i64,
}

impl Product {
    /// Creates a new Product instance.
    pub fn new(id: i64, name: Option<String>, price: i64) -> Self {
        Self { id, name, price }
    }
}

/// Input data for creating a new product.
///
/// Carries no `id`: identity is assigned by the store, never by callers.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: Option<String>,
    pub price: i64,
}
