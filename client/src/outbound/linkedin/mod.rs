//! LinkedIn people-API outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `ProfileSource`
//! port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_API_BASE_URL, LinkedInHttpSource};
