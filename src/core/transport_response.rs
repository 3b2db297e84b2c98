//! This module contains the `TransportResponse` struct.
//!
//! This struct is used to represent the response from a request sent by a
//! [`Transport`]. It is immutable once produced by the transport.
//!
//! [`Transport`]: ../transport/trait.Transport.html

use std::collections::HashMap;

/// This struct is used to represent the response from a request.
/// It is used as the response type for the [`Transport`] trait.
///
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportResponse {
    /// status code of the response
    pub status: u16,

    /// headers of the response
    pub headers: HashMap<String, String>,

    /// body of the response
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    /// Response body bytes, empty when the service sent no body.
    pub fn data(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }
}
