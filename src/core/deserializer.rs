//! Deserialization of Rust data structures.
//!
//! This module contains the `Deserializer` trait which is used to decode
//! response bodies into caller types.

use super::PipelineError;

/// Trait for deserializing Rust data structures.
///
/// This trait is used by the [`Client`] to decode response bodies into the
/// model types requested by the caller.
///
/// Decoding failures must be reported as [`PipelineError::Decoding`] so that
/// they are distinguishable from other failures. The client attaches the
/// offending response to them.
///
/// # Examples
/// ```
/// use netpipe::core::{Deserializer, PipelineError};
///
/// struct Utf8Deserializer;
///
/// impl Deserializer for Utf8Deserializer {
///     fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, PipelineError>
///     where
///         T: for<'de> serde::Deserialize<'de>,
///     {
///         let text = std::str::from_utf8(bytes)
///             .map_err(|err| PipelineError::decoding(err.to_string()))?;
///         serde_json::from_str(text).map_err(|err| PipelineError::decoding(err.to_string()))
///     }
/// }
/// ```
///
/// [`Client`]: crate::dx::Client
pub trait Deserializer: Send + Sync {
    /// Deserialize a `&[u8]` into a `Result<T, PipelineError>`.
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, PipelineError>
    where
        T: for<'de> serde::Deserialize<'de>;
}
