//! Cross-origin header application.
//!
//! Every response, error responses included, carries this header set so
//! browser clients can always read the envelope.

use hyper::http::response::Builder;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, GET";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Attach the CORS header set to a response under construction.
pub fn apply(builder: Builder) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
}
