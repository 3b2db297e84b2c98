//! # Domain error mapping
//!
//! This module contains the [`DomainErrorMapper`] trait which turns a
//! [`PipelineError`] into the caller's own error type.

use super::PipelineError;

/// Maps [`PipelineError`] into a caller-specific error type.
///
/// Invoked exactly once per failed call, after all plugins have been
/// notified. Any `Fn(PipelineError) -> E` closure is a mapper.
///
/// # Examples
/// ```
/// use netpipe::core::{DomainErrorMapper, PipelineError};
///
/// #[derive(Debug, PartialEq)]
/// enum AppError {
///     SignInRequired,
///     Offline,
///     Other(String),
/// }
///
/// struct AppErrorMapper;
///
/// impl DomainErrorMapper for AppErrorMapper {
///     type Error = AppError;
///
///     fn map_error(&self, error: PipelineError) -> AppError {
///         match error {
///             PipelineError::Unauthorized { .. } => AppError::SignInRequired,
///             PipelineError::NotConnectedToInternet => AppError::Offline,
///             other => AppError::Other(other.to_string()),
///         }
///     }
/// }
///
/// assert_eq!(
///     AppErrorMapper.map_error(PipelineError::NotConnectedToInternet),
///     AppError::Offline
/// );
/// ```
pub trait DomainErrorMapper: Send + Sync {
    /// Caller-specific error type.
    type Error;

    /// Map `error` into [`Self::Error`].
    fn map_error(&self, error: PipelineError) -> Self::Error;
}

impl<F, E> DomainErrorMapper for F
where
    F: Fn(PipelineError) -> E + Send + Sync,
{
    type Error = E;

    fn map_error(&self, error: PipelineError) -> E {
        self(error)
    }
}

/// Mapper which hands [`PipelineError`] to the caller unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineErrorMapper;

impl DomainErrorMapper for PipelineErrorMapper {
    type Error = PipelineError;

    fn map_error(&self, error: PipelineError) -> PipelineError {
        error
    }
}
