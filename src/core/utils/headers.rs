//! Headers module
//!
//! This module provides constants for HTTP headers.
//!

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const APPLICATION_JSON: &str = "application/json";
pub(crate) const FORM_URL_ENCODED: &str = "application/x-www-form-urlencoded; charset=utf-8";
