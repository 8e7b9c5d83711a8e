//! API route configuration.

use crate::api::handlers::{create_product_handler, get_product_handler, list_products_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All catalog API routes.
///
/// # Endpoints
///
/// - `GET  /products`      - Full catalog listing
/// - `POST /products`      - Create a product
/// - `GET  /products/{id}` - Single product by id
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route("/products/{id}", get(get_product_handler))
}
