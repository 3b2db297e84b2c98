//! # Transport Request
//!
//! This module contains the `TransportRequest` struct and related types.
//!
//! A [`TransportRequest`] is the transport-ready form of a call. It is built
//! once per call from a [`Target`], may be rewritten by plugins and is then
//! handed over to the [`Transport`].
//!
//! [`Target`]: crate::core::Target
//! [`Transport`]: crate::core::Transport

use std::{collections::HashMap, fmt::Display, time::Duration};

/// The method to use for a request.
///
/// This enum represents the method to use for a request. It is used by the
/// [`TransportRequest`] struct.
///
/// [`TransportRequest`]: struct.TransportRequest.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum TransportMethod {
    /// `CONNECT` method.
    Connect,

    /// `DELETE` method.
    Delete,

    /// `GET` method.
    #[default]
    Get,

    /// `HEAD` method.
    Head,

    /// `OPTIONS` method.
    Options,

    /// `PATCH` method.
    Patch,

    /// `POST` method.
    Post,

    /// `PUT` method.
    Put,

    /// `TRACE` method.
    Trace,
}

impl TransportMethod {
    /// Upper-case method token as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMethod::Connect => "CONNECT",
            TransportMethod::Delete => "DELETE",
            TransportMethod::Get => "GET",
            TransportMethod::Head => "HEAD",
            TransportMethod::Options => "OPTIONS",
            TransportMethod::Patch => "PATCH",
            TransportMethod::Post => "POST",
            TransportMethod::Put => "PUT",
            TransportMethod::Trace => "TRACE",
        }
    }
}

impl Display for TransportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// This struct represents a request to be sent by a [`Transport`].
///
/// All fields are representing certain parts of the request that can be used
/// to prepare one.
///
/// Header names are stored as provided; use [`header`] and
/// [`set_header_if_absent`] for case-insensitive access.
///
/// [`Transport`]: ../transport/trait.Transport.html
/// [`header`]: #method.header
/// [`set_header_if_absent`]: #method.set_header_if_absent
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TransportRequest {
    /// absolute URL of the resource, including the percent-encoded query
    pub url: String,

    /// method to use for the request
    pub method: TransportMethod,

    /// headers to be sent with the request
    pub headers: HashMap<String, String>,

    /// body to be sent with the request
    pub body: Option<Vec<u8>>,

    /// interval after which the transport gives up on the request
    pub timeout: Duration,
}

impl Default for TransportRequest {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: TransportMethod::default(),
            headers: HashMap::new(),
            body: None,
            timeout: Duration::from_secs(60),
        }
    }
}

impl TransportRequest {
    /// Value of the header with `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set header `name` to `value` unless a header with the same name (in
    /// any letter case) is already present.
    pub fn set_header_if_absent<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if self.header(&name).is_none() {
            self.headers.insert(name, value.into());
        }
    }

    /// Percent-encoded query of the URL, if any.
    pub fn query(&self) -> Option<&str> {
        let without_fragment = self.url.split('#').next().unwrap_or_default();
        without_fragment
            .split_once('?')
            .map(|(_, query)| query)
            .filter(|query| !query.is_empty())
    }

    /// Append already percent-encoded `query` to the URL query.
    ///
    /// Pairs are joined to an existing query with `&`; the fragment, if any,
    /// stays at the end of the URL.
    pub fn append_query(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }

        let (base, fragment) = match self.url.split_once('#') {
            Some((base, fragment)) => (base.to_string(), Some(fragment.to_string())),
            None => (self.url.clone(), None),
        };

        let mut url = match base.split_once('?') {
            Some((_, existing)) if !existing.is_empty() => format!("{base}&{query}"),
            Some(_) => format!("{base}{query}"),
            None => format!("{base}?{query}"),
        };

        if let Some(fragment) = fragment {
            url.push('#');
            url.push_str(&fragment);
        }

        self.url = url;
    }
}
