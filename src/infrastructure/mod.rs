//! Concrete integrations with external systems.
//!
//! The [`crate::domain`] repository contracts are implemented here, and the
//! caching abstraction lives here end to end.
//!
//! # Modules
//!
//! - [`cache`] - cache trait, Redis implementation, and in-memory/no-op stand-ins
//! - [`persistence`] - PostgreSQL repositories

pub mod cache;
pub mod persistence;
