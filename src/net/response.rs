//! Minimal HTTP response model.
//!
//! This struct represents a **fully buffered** HTTP response returned by an
//! [`HttpClient`](crate::net::HttpClient). It contains the final URL (after
//! redirects, if the client follows them), status code + reason, response
//! headers, and the raw body bytes.
//!
//! ## Notes
//! - The fetch unit hands this back untouched; nothing here is parsed or
//!   branched on.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//! - `status_text` is derived from the status code's canonical reason phrase
//!   and may be `"Unknown"` for non-standard codes.
use std::fmt;

use http::HeaderMap;

/// Simple structure for HTTP responses.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP {} {} ({}, {} bytes)",
            self.status,
            self.status_text,
            self.url,
            self.body.len()
        )
    }
}
