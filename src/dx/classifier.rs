//! # Error classifier
//!
//! Maps HTTP statuses, transport failures and decoder failures into the
//! [`PipelineError`] taxonomy. Every input produces exactly one outcome.

use log::debug;

use crate::core::{PipelineError, TransportFailure, TransportResponse};

/// Classify `response` by its status code.
///
/// First match wins: `401` unauthorized, `403` forbidden, `404` not found,
/// `405..500` client error, `500..600` server error. Any other status,
/// including `400`, is not an error and yields `None`.
pub fn classify_status(response: &TransportResponse) -> Option<PipelineError> {
    let status = response.status;
    let boxed = || Box::new(response.clone());

    let error = match status {
        401 => PipelineError::Unauthorized {
            response: boxed(),
        },
        403 => PipelineError::Forbidden {
            response: boxed(),
        },
        404 => PipelineError::NotFound {
            response: boxed(),
        },
        405..=499 => PipelineError::Client {
            status,
            response: boxed(),
        },
        500..=599 => PipelineError::Server {
            status,
            response: boxed(),
        },
        _ => return None,
    };

    debug!("Status {status} classified as: {error}");
    Some(error)
}

/// Classify a failure reported by the transport.
///
/// Timeouts are not a case of their own and end up as
/// [`PipelineError::Unexpected`].
pub fn classify_failure(failure: TransportFailure) -> PipelineError {
    match failure {
        TransportFailure::Cancelled => PipelineError::ServiceCancelled,
        TransportFailure::NotConnected { .. } => PipelineError::NotConnectedToInternet,
        other @ (TransportFailure::TimedOut { .. } | TransportFailure::Other { .. }) => {
            PipelineError::unexpected(other.to_string())
        }
    }
}

/// Classify a failure reported by the model decoder for `response`.
///
/// Decoding failures get `response` attached; anything else the decoder
/// reports is unexpected.
pub fn classify_decode_failure(error: PipelineError, response: &TransportResponse) -> PipelineError {
    match error {
        decoding @ PipelineError::Decoding { .. } => decoding.with_response(response),
        other => PipelineError::unexpected(other.to_string()),
    }
}
