//! Tower middleware applied to the whole router.

pub mod tracing;
