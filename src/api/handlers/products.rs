//! Handlers for product catalog endpoints.
//!
//! Handlers stay thin: they decode the request, delegate to
//! [`crate::application::services::CatalogService`], and map the outcome to
//! HTTP. Caching is invisible from here.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::product::{CreateProductRequest, ProductResponse};
use crate::domain::entities::NewProduct;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a single product by id.
///
/// # Endpoint
///
/// `GET /api/products/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no product has this id. A store failure returns
/// 500; the two cases are never conflated.
pub async fn get_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.catalog.get_product(id).await?;

    match product {
        Some(product) => Ok(Json(product.into())),
        None => Err(AppError::not_found(
            "Product not found",
            json!({ "id": id }),
        )),
    }
}

/// Returns the full product catalog.
///
/// # Endpoint
///
/// `GET /api/products`
///
/// # Response
///
/// Products in ascending id order. An empty catalog returns `[]` with 200.
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.catalog.list_products().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Creates a product and returns it with its store-assigned id.
///
/// # Endpoint
///
/// `POST /api/products`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Keyboard",  // optional
///   "price": 30
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `price` is negative.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;

    let created = state
        .catalog
        .create_product(NewProduct {
            name: payload.name,
            price: payload.price,
        })
        .await?;

    Ok(Json(created.into()))
}
