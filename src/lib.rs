//! # netpipe
//!
//! Declarative HTTP request pipeline.
//!
//! A call is described by a [`Target`] (base URL, path, method, timeout,
//! headers, body strategy and plugin scopes). The [`Client`] turns it into a
//! [`TransportRequest`], lets [`Plugin`]s adjust and observe it, sends it
//! through a pluggable [`Transport`], classifies the HTTP status, decodes the
//! body and reports failures as [`PipelineError`] mapped into the caller's
//! own error type.
//!
//! - Fully `async`/`await` ready.
//! - Modular, bring your own [`Transport`], [`Deserializer`] and
//!   [`DomainErrorMapper`].
//! - Cancellable calls with exactly-once outcome notification.
//!
//! ```no_run
//! use netpipe::{
//!     core::{BodyStrategy, TransportMethod},
//!     dx::{ClientBuilder, EndpointBuilder},
//!     plugins::LoggerPlugin,
//! };
//!
//! #[derive(serde::Deserialize)]
//! struct Created {
//!     id: u64,
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::with_reqwest_transport()
//!     .with_plugin(LoggerPlugin::new("api"))
//!     .build();
//!
//! let endpoint = EndpointBuilder::default()
//!     .base_url("https://api.example.com")
//!     .path("/items")
//!     .method(TransportMethod::Post)
//!     .body(BodyStrategy::json(&serde_json::json!({"name": "abc"}))?)
//!     .build()?;
//!
//! let created: Created = client.request_model(&endpoint).await?;
//! println!("created item {}", created.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! * `reqwest` (default): [`TransportReqwest`] and
//!   [`ClientBuilder::with_reqwest_transport`].
//!
//! [`Target`]: crate::core::Target
//! [`TransportRequest`]: crate::core::TransportRequest
//! [`Plugin`]: crate::core::Plugin
//! [`Transport`]: crate::core::Transport
//! [`Deserializer`]: crate::core::Deserializer
//! [`DomainErrorMapper`]: crate::core::DomainErrorMapper
//! [`PipelineError`]: crate::core::PipelineError
//! [`Client`]: crate::dx::Client
//! [`ClientBuilder::with_reqwest_transport`]: crate::dx::ClientBuilder::with_reqwest_transport
//! [`TransportReqwest`]: crate::transport::TransportReqwest

#![warn(missing_docs, missing_debug_implementations)]
#![forbid(unsafe_code)]

pub use crate::core::{PipelineError, Target};
pub use crate::dx::{Client, ClientBuilder, Endpoint, EndpointBuilder};

pub mod core;
pub mod dx;
pub mod plugins;
pub mod providers;

#[cfg(feature = "reqwest")]
pub mod transport;
