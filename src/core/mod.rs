//! # Core
//!
//! Contracts and data types the request pipeline is built from.
//!
//! The `core` module contains the types which flow through a call
//! ([`Target`], [`TransportRequest`], [`TransportResponse`],
//! [`PipelineError`]) and the traits implemented by collaborators
//! ([`Transport`], [`Plugin`], [`ParameterEncoding`], [`Deserializer`],
//! [`DomainErrorMapper`]).
//!
//! [`ParameterEncoding`]: encoding::ParameterEncoding

pub use error::{PipelineError, TransportFailure};
pub mod error;

pub use error_mapper::{DomainErrorMapper, PipelineErrorMapper};
pub mod error_mapper;

pub use transport::Transport;
pub mod transport;

pub use transport_request::{TransportMethod, TransportRequest};
pub mod transport_request;

pub use transport_response::TransportResponse;
pub mod transport_response;

pub use target::{default_headers, BodyStrategy, HeaderField, PluginScope, Target};
pub mod target;

pub use plugin::{CallOutcome, Plugin};
pub mod plugin;

pub use deserializer::Deserializer;
pub mod deserializer;

pub use cancel::{cancellation, CancellationTask, Canceller};
pub mod cancel;

pub mod encoding;

pub(crate) mod utils;
