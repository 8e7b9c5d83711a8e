//! Cache key construction for catalog entries.

use std::fmt;

/// Key of a cache entry, derived from entity kind and identity.
///
/// Every read and write path renders its key through this type, so the key
/// shape cannot drift between the paths that populate an entry and the paths
/// that look it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey {
    /// A single product, keyed by its store-assigned id.
    Product(i64),
    /// The full catalog listing, cached as one ordered blob.
    ProductList,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product(id) => write!(f, "product:{id}"),
            Self::ProductList => f.write_str("product:all"),
        }
    }
}
