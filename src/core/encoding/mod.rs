//! # Parameter encoding
//!
//! This module contains the [`ParameterEncoding`] trait and its standard
//! implementations: [`JsonEncoding`] and [`UrlEncoding`].
//!
//! Custom encodings can be provided by implementing [`ParameterEncoding`].

use std::fmt::Debug;

use crate::core::{PipelineError, TransportRequest};

pub use json::JsonEncoding;
pub mod json;

pub use url::{ArrayEncoding, BoolEncoding, Destination, UrlEncoding};
pub mod url;

/// Key / value parameters of a request.
///
/// Values may be nested objects and arrays.
pub type Parameters = serde_json::Map<String, serde_json::Value>;

/// Attaches parameters to a [`TransportRequest`].
///
/// # Examples
/// ```
/// use netpipe::core::{
///     encoding::{ParameterEncoding, Parameters},
///     PipelineError, TransportRequest,
/// };
///
/// #[derive(Debug)]
/// struct KeysOnly;
///
/// impl ParameterEncoding for KeysOnly {
///     fn encode(
///         &self,
///         mut request: TransportRequest,
///         parameters: Option<&Parameters>,
///     ) -> Result<TransportRequest, PipelineError> {
///         if let Some(parameters) = parameters {
///             let keys = parameters.keys().cloned().collect::<Vec<_>>().join(",");
///             request.body = Some(keys.into_bytes());
///         }
///         Ok(request)
///     }
/// }
/// ```
pub trait ParameterEncoding: Debug + Send + Sync {
    /// Attach `parameters` to `request`.
    ///
    /// `request` is returned unchanged when there are no `parameters`.
    ///
    /// # Errors
    /// Should return [`PipelineError::Encoding`] when parameters can't be
    /// encoded, and [`PipelineError::Unexpected`] for any other failure.
    fn encode(
        &self,
        request: TransportRequest,
        parameters: Option<&Parameters>,
    ) -> Result<TransportRequest, PipelineError>;
}
