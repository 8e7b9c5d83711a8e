//! Repository trait definitions for the domain layer.
//!
//! Traits here define the contract for data access following the Repository
//! pattern; concrete implementations live in
//! [`crate::infrastructure::persistence`]. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod product_repository;

pub use product_repository::ProductRepository;

#[cfg(test)]
pub use product_repository::MockProductRepository;
