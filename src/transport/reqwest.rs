//! # Reqwest Transport Implementation
//!
//! This module contains the [`TransportReqwest`] struct.
//! It is used to perform HTTP exchanges using the [`reqwest`] crate.
//!
//! It requires the [`reqwest` feature] to be enabled.
//!
//! [`reqwest`]: https://docs.rs/reqwest
//! [`reqwest` feature]: ../../index.html#features

use std::collections::HashMap;

use bytes::Bytes;
use log::info;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Method, StatusCode,
};

use crate::core::{Transport, TransportFailure, TransportMethod, TransportRequest, TransportResponse};

/// This struct is used to send requests using the [`reqwest`] crate.
///
/// The request URL, headers, body and timeout are taken from the
/// [`TransportRequest`] as they are. Any response which arrives is returned
/// regardless of its status code.
///
/// [`reqwest`]: https://docs.rs/reqwest
#[derive(Clone, Debug, Default)]
pub struct TransportReqwest {
    reqwest_client: reqwest::Client,
}

#[async_trait::async_trait]
impl Transport for TransportReqwest {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportFailure> {
        info!("{} {}", request.method, request.url);
        let headers = prepare_headers(&request.headers)?;

        let mut builder = self
            .reqwest_client
            .request(prepare_method(request.method), request.url)
            .headers(headers)
            .timeout(request.timeout);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let result = builder.send().await.map_err(map_failure)?;
        let status = result.status();
        let headers = collect_headers(result.headers());

        result
            .bytes()
            .await
            .map_err(map_failure)
            .map(|bytes| create_result(status, headers, bytes))
    }
}

impl TransportReqwest {
    /// Create a new [`TransportReqwest`] instance.
    ///
    /// It provides a default [`reqwest`] client using
    /// [`reqwest::Client::default()`].
    ///
    /// # Example
    /// ```
    /// use netpipe::transport::TransportReqwest;
    ///
    /// let transport = TransportReqwest::new();
    /// ```
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an instance which sends requests through a pre-configured
    /// [`reqwest::Client`] (proxies, TLS roots, connection pool limits).
    pub fn with_client(reqwest_client: reqwest::Client) -> Self {
        Self { reqwest_client }
    }
}

fn prepare_method(method: TransportMethod) -> Method {
    match method {
        TransportMethod::Connect => Method::CONNECT,
        TransportMethod::Delete => Method::DELETE,
        TransportMethod::Get => Method::GET,
        TransportMethod::Head => Method::HEAD,
        TransportMethod::Options => Method::OPTIONS,
        TransportMethod::Patch => Method::PATCH,
        TransportMethod::Post => Method::POST,
        TransportMethod::Put => Method::PUT,
        TransportMethod::Trace => Method::TRACE,
    }
}

fn prepare_headers(request_headers: &HashMap<String, String>) -> Result<HeaderMap, TransportFailure> {
    request_headers
        .iter()
        .map(|(name, value)| {
            let name = HeaderName::try_from(name.as_str());
            let value = HeaderValue::try_from(value.as_str());

            match (name, value) {
                (Ok(name), Ok(value)) => Ok((name, value)),
                (Err(err), _) => Err(TransportFailure::Other {
                    details: err.to_string(),
                }),
                (_, Err(err)) => Err(TransportFailure::Other {
                    details: err.to_string(),
                }),
            }
        })
        .collect()
}

fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect()
}

fn map_failure(error: reqwest::Error) -> TransportFailure {
    let details = error.to_string();

    if error.is_timeout() {
        TransportFailure::TimedOut { details }
    } else if error.is_connect() {
        TransportFailure::NotConnected { details }
    } else {
        TransportFailure::Other { details }
    }
}

fn create_result(status: StatusCode, headers: HashMap<String, String>, body: Bytes) -> TransportResponse {
    TransportResponse {
        status: status.as_u16(),
        headers,
        body: (!body.is_empty()).then(|| body.to_vec()),
    }
}
