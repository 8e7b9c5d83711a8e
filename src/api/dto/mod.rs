//! Request and response types for the HTTP API.
//!
//! Serde handles the JSON mapping; validator carries the input rules that
//! run before a request reaches the catalog service.

pub mod health;
pub mod product;
