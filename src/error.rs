//! Error taxonomy and the HTTP error envelope.
//!
//! Every failure leaving the API has the same JSON shape:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Product not found", "details": { "id": 99 } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// Application error taxonomy.
///
/// - [`Validation`](Self::Validation): malformed input, rejected before it
///   reaches the store (400)
/// - [`NotFound`](Self::NotFound): the requested id has no row, a valid
///   empty result distinct from a fault (404)
/// - [`Internal`](Self::Internal): the store or another required collaborator
///   failed; surfaced to the caller (500)
///
/// Cache failures never appear here: the caching layer absorbs them and falls
/// back to the store.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation { message: message.into(), details }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound { message: message.into(), details }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal { message: message.into(), details }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let (AppError::Validation { message, details }
        | AppError::NotFound { message, details }
        | AppError::Internal { message, details }) = self;

        let body = json!({
            "error": { "code": code, "message": message, "details": details }
        });

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        // The store is authoritative; its failures are fatal to the request.
        // Details go to the log, not the response body.
        tracing::error!("Database error: {}", e);
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}
