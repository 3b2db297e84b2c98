//! # Error types
//!
//! This module contains the error types for the [`netpipe`] crate.
//!
//! [`PipelineError`] is the closed taxonomy every failed call ends up in.
//! [`TransportFailure`] is the signal a [`Transport`] implementation reports
//! when no HTTP response could be obtained; it is turned into a
//! [`PipelineError`] by the classifier and never reaches the caller as is.
//!
//! [`netpipe`]: ../index.html
//! [`Transport`]: crate::core::Transport

use snafu::Snafu;

use crate::core::TransportResponse;

/// Pipeline error type
///
/// Every failure produced while a call travels through the pipeline is
/// exactly one of these cases. Transport and serialization library errors are
/// normalized into it before reaching plugins or the domain error mapper.
///
/// Status-based cases carry the full [`TransportResponse`] for diagnostics.
///
/// # Examples
/// ```
/// use netpipe::core::PipelineError;
///
/// fn describe(error: &PipelineError) -> &'static str {
///     match error {
///         PipelineError::NotFound { .. } => "missing",
///         PipelineError::ServiceCancelled => "cancelled",
///         _ => "other",
///     }
/// }
///
/// assert_eq!(describe(&PipelineError::ServiceCancelled), "cancelled");
/// ```
#[derive(Snafu, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// The service responded with `401`.
    #[snafu(display("Unauthorized"))]
    Unauthorized {
        /// Response returned by the service.
        response: Box<TransportResponse>,
    },

    /// The service responded with `403`.
    #[snafu(display("Forbidden"))]
    Forbidden {
        /// Response returned by the service.
        response: Box<TransportResponse>,
    },

    /// The service responded with `404`.
    #[snafu(display("Not found"))]
    NotFound {
        /// Response returned by the service.
        response: Box<TransportResponse>,
    },

    /// The service responded with a status in `405..500`.
    #[snafu(display("Client error: status {status}"))]
    Client {
        /// Status code of the response.
        status: u16,

        /// Response returned by the service.
        response: Box<TransportResponse>,
    },

    /// The service responded with a status in `500..600`.
    #[snafu(display("Server error: status {status}"))]
    Server {
        /// Status code of the response.
        status: u16,

        /// Response returned by the service.
        response: Box<TransportResponse>,
    },

    /// The response body couldn't be decoded into the requested type.
    #[snafu(display("Decoding error: {details}"))]
    Decoding {
        /// Decoder failure description.
        details: String,

        /// Response whose body couldn't be decoded.
        ///
        /// Empty only when decoding failed outside of a call.
        response: Option<Box<TransportResponse>>,
    },

    /// Request parameters or body couldn't be encoded.
    #[snafu(display("Encoding error: {details}"))]
    Encoding {
        /// Encoder failure description.
        details: String,
    },

    /// The call has been cancelled before it resolved.
    #[snafu(display("Service cancelled"))]
    ServiceCancelled,

    /// The transport reported that there is no network connectivity.
    #[snafu(display("Not connected to internet"))]
    NotConnectedToInternet,

    /// Any failure which doesn't fit into other cases.
    #[snafu(display("Unexpected error: {details}"))]
    Unexpected {
        /// Failure description.
        details: String,
    },
}

impl PipelineError {
    /// Create an [`PipelineError::Unexpected`] with provided details.
    pub fn unexpected<S>(details: S) -> Self
    where
        S: Into<String>,
    {
        Self::Unexpected {
            details: details.into(),
        }
    }

    /// Create an [`PipelineError::Encoding`] with provided details.
    pub fn encoding<S>(details: S) -> Self
    where
        S: Into<String>,
    {
        Self::Encoding {
            details: details.into(),
        }
    }

    /// Create an [`PipelineError::Decoding`] which is not bound to any
    /// response yet.
    pub fn decoding<S>(details: S) -> Self
    where
        S: Into<String>,
    {
        Self::Decoding {
            details: details.into(),
            response: None,
        }
    }

    /// Retrieve the response which caused the error, if any.
    pub fn transport_response(&self) -> Option<&TransportResponse> {
        match self {
            Self::Unauthorized { response }
            | Self::Forbidden { response }
            | Self::NotFound { response }
            | Self::Client { response, .. }
            | Self::Server { response, .. } => Some(response),
            Self::Decoding { response, .. } => response.as_deref(),
            _ => None,
        }
    }

    /// Status code of the response which caused the error, if any.
    pub fn status(&self) -> Option<u16> {
        self.transport_response().map(|response| response.status)
    }

    /// Whether the error represents call cancellation rather than a genuine
    /// failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::ServiceCancelled)
    }

    /// Attach `response` to a decoding error.
    ///
    /// Other error cases are returned unchanged.
    pub(crate) fn with_response(self, response: &TransportResponse) -> Self {
        match self {
            Self::Decoding { details, .. } => Self::Decoding {
                details,
                response: Some(Box::new(response.clone())),
            },
            other => other,
        }
    }
}

/// Failure reported by a [`Transport`] implementation.
///
/// [`Transport`]: crate::core::Transport
#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// The transport operation has been cancelled.
    #[snafu(display("Transport operation cancelled"))]
    Cancelled,

    /// There is no network connectivity.
    #[snafu(display("Not connected: {details}"))]
    NotConnected {
        /// Failure description.
        details: String,
    },

    /// The configured request timeout elapsed.
    #[snafu(display("Timed out: {details}"))]
    TimedOut {
        /// Failure description.
        details: String,
    },

    /// Any other transport failure.
    #[snafu(display("Transport failure: {details}"))]
    Other {
        /// Failure description.
        details: String,
    },
}
