//! URL (form) parameter encoding.
//!
//! Parameters are flattened into `key=value` pairs joined with `&`. Nested
//! objects become `parent[child]` keys and arrays become `parent[]` (or bare
//! `parent`) keys. Keys are processed in ascending order at every nesting
//! level, so the same parameters always produce the same output.

use serde_json::Value;

use crate::core::{
    encoding::{ParameterEncoding, Parameters},
    utils::{
        encoding::url_encode,
        headers::{CONTENT_TYPE, FORM_URL_ENCODED},
    },
    PipelineError, TransportMethod, TransportRequest,
};

/// Where encoded parameters are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Destination {
    /// Query string for `GET`, `HEAD` and `DELETE`, body for anything else.
    #[default]
    MethodDependent,

    /// Always the query string.
    QueryString,

    /// Always the body.
    HttpBody,
}

impl Destination {
    /// Whether parameters for `method` go to the URL query.
    pub fn encodes_in_url(&self, method: TransportMethod) -> bool {
        match self {
            Destination::MethodDependent => matches!(
                method,
                TransportMethod::Get | TransportMethod::Head | TransportMethod::Delete
            ),
            Destination::QueryString => true,
            Destination::HttpBody => false,
        }
    }
}

/// Key notation for array elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayEncoding {
    /// `key[]=a&key[]=b`
    #[default]
    Brackets,

    /// `key=a&key=b`
    NoBrackets,
}

impl ArrayEncoding {
    fn encode(&self, key: &str) -> String {
        match self {
            ArrayEncoding::Brackets => format!("{key}[]"),
            ArrayEncoding::NoBrackets => key.to_string(),
        }
    }
}

/// Notation for boolean values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoolEncoding {
    /// `1` / `0`
    #[default]
    Numeric,

    /// `true` / `false`
    Literal,
}

impl BoolEncoding {
    fn encode(&self, value: bool) -> &'static str {
        match (self, value) {
            (BoolEncoding::Numeric, true) => "1",
            (BoolEncoding::Numeric, false) => "0",
            (BoolEncoding::Literal, true) => "true",
            (BoolEncoding::Literal, false) => "false",
        }
    }
}

/// Encodes parameters as `application/x-www-form-urlencoded` pairs.
///
/// When the query string is the destination, pairs are appended to any
/// existing query. When the body is the destination, the body is replaced
/// and `Content-Type: application/x-www-form-urlencoded; charset=utf-8` is
/// added unless the request already has a content type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlEncoding {
    destination: Destination,
    array_encoding: ArrayEncoding,
    bool_encoding: BoolEncoding,
}

impl UrlEncoding {
    /// Create encoding with explicit notations.
    pub fn new(
        destination: Destination,
        array_encoding: ArrayEncoding,
        bool_encoding: BoolEncoding,
    ) -> Self {
        Self {
            destination,
            array_encoding,
            bool_encoding,
        }
    }

    /// Encoding which always targets the query string.
    pub fn query_string() -> Self {
        Self {
            destination: Destination::QueryString,
            ..Default::default()
        }
    }

    /// Encoding which always targets the body.
    pub fn http_body() -> Self {
        Self {
            destination: Destination::HttpBody,
            ..Default::default()
        }
    }

    /// Percent-encoded `key=value` pairs joined with `&`.
    pub fn query(&self, parameters: &Parameters) -> String {
        sorted_entries(parameters)
            .flat_map(|(key, value)| self.components(key, value))
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn components(&self, key: &str, value: &Value) -> Vec<(String, String)> {
        match value {
            Value::Object(map) => sorted_entries(map)
                .flat_map(|(nested, value)| self.components(&format!("{key}[{nested}]"), value))
                .collect(),
            Value::Array(values) => {
                let key = self.array_encoding.encode(key);
                values
                    .iter()
                    .flat_map(|value| self.components(&key, value))
                    .collect()
            }
            Value::Bool(flag) => vec![(url_encode(key), self.bool_encoding.encode(*flag).into())],
            Value::Number(number) => vec![(url_encode(key), url_encode(&number.to_string()))],
            Value::String(string) => vec![(url_encode(key), url_encode(string))],
            Value::Null => vec![(url_encode(key), String::new())],
        }
    }
}

fn sorted_entries(parameters: &Parameters) -> impl Iterator<Item = (&String, &Value)> {
    let mut entries = parameters.iter().collect::<Vec<_>>();
    entries.sort_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));
    entries.into_iter()
}

impl ParameterEncoding for UrlEncoding {
    fn encode(
        &self,
        mut request: TransportRequest,
        parameters: Option<&Parameters>,
    ) -> Result<TransportRequest, PipelineError> {
        let Some(parameters) = parameters else {
            return Ok(request);
        };

        if self.destination.encodes_in_url(request.method) {
            if request.url.is_empty() {
                return Err(PipelineError::unexpected("request has no URL to encode into"));
            }

            if !parameters.is_empty() {
                request.append_query(&self.query(parameters));
            }
        } else {
            request.set_header_if_absent(CONTENT_TYPE, FORM_URL_ENCODED);
            request.body = Some(self.query(parameters).into_bytes());
        }

        Ok(request)
    }
}
