//! Domain entities and the contracts the rest of the crate programs against.
//!
//! - [`entities`] - the product model as it exists independent of storage
//! - [`repositories`] - data access traits implemented by the infrastructure
//!   layer
//!
//! Nothing in here touches a database, a cache or HTTP. Orchestration lives
//! in services (see [`crate::application::services`]).

pub mod entities;
pub mod repositories;
