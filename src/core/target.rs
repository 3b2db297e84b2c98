//! # Target module
//!
//! This module contains the [`Target`] trait which describes one logical
//! call declaratively, and the types a target is made of: [`BodyStrategy`],
//! [`HeaderField`] and [`PluginScope`].

use std::{borrow::Cow, collections::HashMap, fmt::Debug, sync::Arc, time::Duration};

use crate::core::{
    encoding::{ParameterEncoding, Parameters},
    utils::headers::APPLICATION_JSON,
    PipelineError, TransportMethod,
};

/// Timeout used when a target doesn't specify its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Language used for `accept-language` when the environment doesn't tell.
const DEFAULT_LANGUAGE: &str = "en";

/// Declarative description of a single HTTP call.
///
/// Targets are owned by the caller and only read by the pipeline. Every
/// accessor is expected to return the same value for the lifetime of the
/// target.
///
/// # Examples
/// ```
/// use netpipe::core::{BodyStrategy, Target, TransportMethod};
///
/// #[derive(Debug)]
/// struct Profile;
///
/// impl Target for Profile {
///     fn base_url(&self) -> &str {
///         "https://api.example.com"
///     }
///
///     fn path(&self) -> &str {
///         "/v1/profile"
///     }
///
///     fn method(&self) -> TransportMethod {
///         TransportMethod::Get
///     }
///
///     fn body(&self) -> BodyStrategy {
///         BodyStrategy::Empty
///     }
/// }
/// ```
pub trait Target: Debug + Send + Sync {
    /// Base URL of the service, e.g. `https://api.example.com`.
    fn base_url(&self) -> &str;

    /// Path appended to [`base_url`](Target::base_url). Empty by default.
    fn path(&self) -> &str {
        ""
    }

    /// HTTP method of the call.
    fn method(&self) -> TransportMethod;

    /// Interval after which the transport gives up on the call.
    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }

    /// How the request body or query is built.
    fn body(&self) -> BodyStrategy;

    /// Header fields of the call.
    ///
    /// Defaults to [`default_headers`] for the target's method.
    fn headers(&self) -> HashMap<HeaderField, String> {
        default_headers(self.method())
    }

    /// Scopes used to select plugins which apply to this target.
    fn scopes(&self) -> Vec<PluginScope> {
        vec![PluginScope::UNIVERSAL]
    }
}

/// Request body construction strategy.
#[derive(Debug, Clone, Default)]
pub enum BodyStrategy {
    /// Request without body or parameters.
    #[default]
    Empty,

    /// Request with raw body bytes.
    Raw(Vec<u8>),

    /// Request with parameters which are attached by `encoding`.
    Parameters {
        /// Key / value parameters.
        parameters: Parameters,

        /// Encoding which attaches `parameters` to the request.
        encoding: Arc<dyn ParameterEncoding>,
    },
}

impl BodyStrategy {
    /// Parameters attached to the request with `encoding`.
    pub fn parameters<E>(parameters: Parameters, encoding: E) -> Self
    where
        E: ParameterEncoding + 'static,
    {
        Self::Parameters {
            parameters,
            encoding: Arc::new(encoding),
        }
    }

    /// Raw JSON body serialized from `entity`.
    ///
    /// # Errors
    /// Returns [`PipelineError::Encoding`] when `entity` can't be serialized.
    pub fn json<E>(entity: &E) -> Result<Self, PipelineError>
    where
        E: serde::Serialize + ?Sized,
    {
        serde_json::to_vec(entity)
            .map(Self::Raw)
            .map_err(|err| PipelineError::encoding(err.to_string()))
    }
}

/// Name of an HTTP header field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderField(Cow<'static, str>);

impl HeaderField {
    /// `accept-language` header.
    pub const ACCEPT_LANGUAGE: HeaderField = HeaderField(Cow::Borrowed("accept-language"));

    /// `Content-Type` header.
    pub const CONTENT_TYPE: HeaderField = HeaderField(Cow::Borrowed("Content-Type"));

    /// `Authorization` header.
    pub const AUTHORIZATION: HeaderField = HeaderField(Cow::Borrowed("Authorization"));

    /// Custom header field.
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self(Cow::Owned(name.into()))
    }

    /// Field name as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HeaderField {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Tag used to select which plugins apply to which targets.
///
/// A plugin applies to a target when their scope lists intersect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginScope(Cow<'static, str>);

impl PluginScope {
    /// Scope used by targets and plugins which don't specify one.
    pub const UNIVERSAL: PluginScope = PluginScope(Cow::Borrowed("universal"));

    /// Custom scope with `identifier`.
    pub fn new<S>(identifier: S) -> Self
    where
        S: Into<String>,
    {
        Self(Cow::Owned(identifier.into()))
    }

    /// Scope identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PluginScope {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Default header fields for `method`.
///
/// Always carries `accept-language` (language part of the `LANG` environment
/// variable, `en` when unavailable). `POST`, `PATCH` and `PUT` also get
/// `Content-Type: application/json`.
pub fn default_headers(method: TransportMethod) -> HashMap<HeaderField, String> {
    let mut headers = HashMap::from([(HeaderField::ACCEPT_LANGUAGE, preferred_language())]);

    if matches!(
        method,
        TransportMethod::Post | TransportMethod::Patch | TransportMethod::Put
    ) {
        headers.insert(HeaderField::CONTENT_TYPE, APPLICATION_JSON.into());
    }

    headers
}

fn preferred_language() -> String {
    std::env::var("LANG")
        .ok()
        .as_deref()
        .and_then(language_code)
        .unwrap_or_else(|| DEFAULT_LANGUAGE.into())
}

/// Language part of a POSIX locale name like `de_DE.UTF-8`.
fn language_code(locale: &str) -> Option<String> {
    let code = locale
        .split(|c: char| c == '_' || c == '.' || c == '@')
        .next()
        .unwrap_or_default();

    ((2..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| code.to_ascii_lowercase())
}
