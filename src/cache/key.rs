//! Cache Key Module
//!
//! Derives deterministic cache keys from an endpoint path and optional
//! request parameters.

use serde::Serialize;

use crate::error::{ClientError, Result};

/// Separator between the endpoint and the serialized parameters.
const KEY_SEPARATOR: char = ':';

// == Generate Key ==
/// Derives the cache key for `endpoint` with optional `params`.
///
/// The key is the endpoint, a `:` separator, and the canonical JSON form of
/// the parameters (the empty string when `params` is `None`). Canonical means
/// object keys are sorted at every nesting level, so structurally equal
/// parameter sets always produce the same key regardless of how they were
/// constructed.
///
/// # Errors
/// Returns [`ClientError::KeySerialization`] for parameters that have no JSON
/// representation, such as maps with non-string keys.
pub fn generate_key<P>(endpoint: &str, params: Option<&P>) -> Result<String>
where
    P: Serialize + ?Sized,
{
    let serialized = match params {
        Some(params) => canonical_json(params)?,
        None => String::new(),
    };

    Ok(format!("{}{}{}", endpoint, KEY_SEPARATOR, serialized))
}

/// Serializes `params` to compact JSON with sorted object keys.
///
/// Round-trips through `serde_json::Value`, whose object representation is a
/// BTreeMap: insertion order is discarded and keys come out sorted.
fn canonical_json<P>(params: &P) -> Result<String>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params)
        .map_err(|e| ClientError::KeySerialization(e.to_string()))?;
    Ok(value.to_string())
}
