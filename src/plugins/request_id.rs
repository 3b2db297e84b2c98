//! # Request ID plugin
//!
//! [`RequestIdPlugin`] tags every outgoing request with a unique identifier
//! so it can be correlated with server-side logs.

use log::debug;
use uuid::Uuid;

use crate::core::{Plugin, Target, TransportRequest};

/// Default name of the header carrying the request identifier.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Adds a random (v4) UUID header to every request.
///
/// An identifier already present on the request is kept.
#[derive(Debug, Clone)]
pub struct RequestIdPlugin {
    header: String,
}

impl Default for RequestIdPlugin {
    fn default() -> Self {
        Self {
            header: REQUEST_ID_HEADER.into(),
        }
    }
}

impl RequestIdPlugin {
    /// Create a plugin which writes [`REQUEST_ID_HEADER`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plugin which writes the identifier into `header`.
    pub fn with_header<S>(header: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            header: header.into(),
        }
    }
}

#[async_trait::async_trait]
impl Plugin for RequestIdPlugin {
    async fn prepare(&self, mut request: TransportRequest, _target: &dyn Target) -> TransportRequest {
        if request.header(&self.header).is_none() {
            let request_id = Uuid::new_v4().to_string();
            debug!("Tagging {} with {}: {request_id}", request.url, self.header);
            request.set_header_if_absent(self.header.as_str(), request_id);
        }

        request
    }
}
