//! DTOs for product catalog endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Product;

/// Request to add a product to the catalog.
///
/// The id is assigned by the store and must not be supplied here.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Optional display name. Nameless products are allowed.
    pub name: Option<String>,

    /// Price in minor currency units.
    #[validate(range(min = 0, message = "Price must be non-negative"))]
    pub price: i64,
}

/// JSON representation of a catalog product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: Option<String>,
    pub price: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}
