//! # Transport module
//!
//! This module contains the [`Transport`] trait.
//!
//! You can implement this trait for your own types, or use the `reqwest`
//! feature to use the provided transport.

use super::{TransportFailure, TransportRequest, TransportResponse};

/// This trait is used to put [`TransportRequest`]s on the wire.
///
/// The transport owns connection pooling, TLS and redirects, and it enforces
/// [`TransportRequest::timeout`]. Any HTTP status (including error statuses)
/// is a successful send; only failures to obtain a response are reported as
/// [`TransportFailure`].
///
/// # Examples
/// ```
/// use netpipe::core::{Transport, TransportFailure, TransportRequest, TransportResponse};
///
/// struct MyTransport;
///
/// #[async_trait::async_trait]
/// impl Transport for MyTransport {
///    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, TransportFailure> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///    }
/// }
/// ```
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and wait for the complete response.
    ///
    /// # Errors
    /// Should return [`TransportFailure::NotConnected`] when there is no
    /// connectivity, [`TransportFailure::TimedOut`] when the request timeout
    /// elapsed and [`TransportFailure::Other`] for anything else.
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, TransportFailure>;
}
