//! Helper functions for request handling.
//!
//! - [`request_url`] - Origin extraction from HTTP headers

pub mod request_url;
