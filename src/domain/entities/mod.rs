//! Core domain entities representing the catalog data model.
//!
//! Entities are plain data structures without business logic, following the
//! "New Type" pattern with a separate struct for creation:
//!
//! - [`Product`] - A catalog product as stored and served
//! - [`NewProduct`] - Input for creating a product (no id yet)

pub mod product;

pub use product::{NewProduct, Product};
