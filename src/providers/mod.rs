//! # Providers module
//!
//! This module contains the providers that can be used by the [`Client`].
//!
//! [`Client`]: crate::dx::Client

pub use deserialization_serde::DeserializerSerde;
pub mod deserialization_serde;
