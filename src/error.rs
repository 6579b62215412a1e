//! Error types for the NutriTrack client
//!
//! Provides unified error handling using thiserror.
//!
//! Cache operations themselves are total and never fail; a miss is reported
//! as an absent value, not an error. The variants here cover key derivation,
//! HTTP transport, response decoding, and client construction.

use thiserror::Error;

// == Client Error Enum ==
/// Unified error type for the NutriTrack client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Cache key parameters could not be canonically serialized
    #[error("Key serialization failed: {0}")]
    KeySerialization(String),

    /// Transport failure, timeout, or non-success response status
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

// == Result Type Alias ==
/// Convenience Result type for the NutriTrack client.
pub type Result<T> = std::result::Result<T, ClientError>;
