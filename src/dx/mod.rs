//! # Developer Experience
//!
//! This module provides the [`Client`] which executes calls described by a
//! [`Target`], and the building blocks it runs them with.
//!
//! [`Target`]: crate::core::Target

pub use client::{Client, ClientBuilder};
pub mod client;

pub use endpoint::{Endpoint, EndpointBuilder};
pub mod endpoint;

pub use request_builder::build_request;
pub mod request_builder;

pub use plugin_manager::PluginManager;
pub mod plugin_manager;

pub mod classifier;
