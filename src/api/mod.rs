//! HTTP surface of the service.
//!
//! Everything HTTP-specific lives here: request and response shapes, handler
//! functions, middleware, route wiring. Nothing below this layer knows about
//! axum.
//!
//! # Modules
//!
//! - [`dto`] - request/response types with validation rules
//! - [`handlers`] - endpoint implementations
//! - [`middleware`] - request tracing
//! - [`routes`] - route composition under `/api`

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
