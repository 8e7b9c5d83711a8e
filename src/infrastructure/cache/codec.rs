//! Wire codec for cached catalog payloads.
//!
//! Cache values are stored as JSON text. The codec is the only place that
//! encodes or decodes cache payloads, so every entry this service writes is
//! guaranteed to decode again with the same functions: `decode(encode(x))`
//! reproduces `x` exactly, optional fields included.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors produced while encoding or decoding cache payloads.
///
/// Decode errors are expected in the wild (an operator may poke at Redis, or
/// an old deployment may have written a different shape); callers treat them
/// as cache misses rather than failures.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode cache payload: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode cache payload: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encodes a value into its textual cache representation.
pub fn encode<T: Serialize>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(CodecError::Encode)
}

/// Decodes a textual cache payload back into a value.
pub fn decode<T: DeserializeOwned>(payload: &str) -> Result<T, CodecError> {
    serde_json::from_str(payload).map_err(CodecError::Decode)
}
