//! # Plugin module
//!
//! This module contains the [`Plugin`] trait which lets callers intercept
//! every call made through the [`Client`].
//!
//! [`Client`]: crate::dx::Client

use crate::core::{PipelineError, PluginScope, Target, TransportRequest, TransportResponse};

/// Terminal outcome of a call as observed by plugins.
pub type CallOutcome = Result<TransportResponse, PipelineError>;

/// Request / response interceptor.
///
/// All hooks have no-op defaults, so a plugin implements only what it needs.
/// A plugin is consulted only for targets whose [`scopes`] intersect the
/// plugin's [`scopes`](Plugin::scopes).
///
/// Hooks of a single call never run concurrently with each other, but hooks
/// of different calls may interleave. Plugins which keep mutable state must
/// synchronize it themselves.
///
/// # Examples
/// ```
/// use netpipe::core::{Plugin, Target, TransportRequest};
///
/// struct BearerToken(String);
///
/// #[async_trait::async_trait]
/// impl Plugin for BearerToken {
///     async fn prepare(&self, mut request: TransportRequest, _target: &dyn Target) -> TransportRequest {
///         request
///             .headers
///             .insert("Authorization".into(), format!("Bearer {}", self.0));
///         request
///     }
/// }
/// ```
///
/// [`scopes`]: crate::core::Target::scopes
#[async_trait::async_trait]
pub trait Plugin: Send + Sync {
    /// Scopes of targets this plugin applies to.
    fn scopes(&self) -> Vec<PluginScope> {
        vec![PluginScope::UNIVERSAL]
    }

    /// Modify the request before it is sent.
    ///
    /// May suspend, e.g. to refresh credentials. The returned request is
    /// handed to the next plugin in registration order.
    async fn prepare(&self, request: TransportRequest, _target: &dyn Target) -> TransportRequest {
        request
    }

    /// Observe the final request right before it is sent.
    fn will_send(&self, _request: &TransportRequest, _target: &dyn Target) {}

    /// Observe the terminal outcome of the call.
    ///
    /// Called exactly once per call which got past request building,
    /// including cancelled calls which observe
    /// [`PipelineError::ServiceCancelled`].
    fn did_receive(&self, _outcome: &CallOutcome, _target: &dyn Target) {}
}
