//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.

pub mod pg_product_repository;

pub use pg_product_repository::PgProductRepository;
