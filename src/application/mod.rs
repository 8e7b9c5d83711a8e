//! Application layer: use cases orchestrating domain and infrastructure.

pub mod services;
