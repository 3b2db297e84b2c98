//! Serde implementation for the [`Deserializer`] trait.
//!
//! This module provides a `serde_json` based deserializer for response
//! bodies.
//!
//! # Examples
//! ```
//! use netpipe::{core::Deserializer, providers::DeserializerSerde};
//!
//! #[derive(serde::Deserialize, Debug, PartialEq)]
//! struct Foo {
//!    bar: String,
//! }
//!
//! let foo: Foo = DeserializerSerde.deserialize(br#"{"bar":"baz"}"#).unwrap();
//! assert_eq!(foo, Foo { bar: "baz".into() });
//! ```

use crate::core::{Deserializer, PipelineError};

/// Serde implementation for the [`Deserializer`] trait.
///
/// Used by [`Client`] by default to decode JSON response bodies.
///
/// [`Client`]: crate::dx::Client
#[derive(Debug, Clone, Copy, Default)]
pub struct DeserializerSerde;

impl Deserializer for DeserializerSerde {
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, PipelineError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        serde_json::from_slice(bytes).map_err(|e| PipelineError::decoding(e.to_string()))
    }
}
