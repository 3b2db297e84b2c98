//! # Transport Providers Module
//!
//! This module contains the [`Transport`] implementations which can be used
//! by the [`Client`].
//!
//! [`Transport`]: crate::core::Transport
//! [`Client`]: crate::dx::Client

pub use self::reqwest::TransportReqwest;
pub mod reqwest;
