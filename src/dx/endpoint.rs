//! # Endpoint
//!
//! The [`Endpoint`] is a ready-made [`Target`] for callers which don't need
//! a type of their own per call.

use std::{collections::HashMap, time::Duration};

use derive_builder::Builder;

use crate::core::{
    default_headers, target::DEFAULT_TIMEOUT, BodyStrategy, HeaderField, PluginScope, Target,
    TransportMethod,
};

/// Plain-data [`Target`].
///
/// # Examples
/// ```
/// use netpipe::{
///     core::{BodyStrategy, Target, TransportMethod},
///     dx::EndpointBuilder,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let endpoint = EndpointBuilder::default()
///     .base_url("https://api.example.com")
///     .path("/v1/items")
///     .method(TransportMethod::Post)
///     .body(BodyStrategy::json(&serde_json::json!({"name": "abc"}))?)
///     .build()?;
///
/// assert_eq!(endpoint.path(), "/v1/items");
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Debug, Clone)]
#[builder(pattern = "owned", build_fn(validate = "Self::validate"))]
pub struct Endpoint {
    /// Base URL of the service.
    #[builder(setter(into))]
    base_url: String,

    /// Path appended to the base URL.
    #[builder(setter(into), default = "String::new()")]
    path: String,

    /// HTTP method of the call.
    #[builder(default)]
    method: TransportMethod,

    /// Interval after which the transport gives up on the call.
    #[builder(default = "DEFAULT_TIMEOUT")]
    timeout: Duration,

    /// How the request body or query is built.
    #[builder(default)]
    body: BodyStrategy,

    /// Header fields of the call.
    ///
    /// Method-dependent [`default_headers`] are used when not set.
    #[builder(setter(strip_option), default = "None")]
    headers: Option<HashMap<HeaderField, String>>,

    /// Scopes used to select plugins.
    #[builder(default = "vec![PluginScope::UNIVERSAL]")]
    scopes: Vec<PluginScope>,
}

impl EndpointBuilder {
    /// Validate user-provided data for endpoint builder.
    fn validate(&self) -> Result<(), String> {
        match self.base_url.as_deref() {
            Some(url) if !url.trim().is_empty() => Ok(()),
            Some(_) => Err("Base URL is empty".into()),
            None => Err("Base URL is missing".into()),
        }
    }
}

impl Target for Endpoint {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn method(&self) -> TransportMethod {
        self.method
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn body(&self) -> BodyStrategy {
        self.body.clone()
    }

    fn headers(&self) -> HashMap<HeaderField, String> {
        self.headers
            .clone()
            .unwrap_or_else(|| default_headers(self.method))
    }

    fn scopes(&self) -> Vec<PluginScope> {
        self.scopes.clone()
    }
}
