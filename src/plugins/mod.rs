//! # Plugins
//!
//! Ready-made [`Plugin`] implementations.
//!
//! [`Plugin`]: crate::core::Plugin

pub use logger::LoggerPlugin;
pub mod logger;

pub use request_id::RequestIdPlugin;
pub mod request_id;
