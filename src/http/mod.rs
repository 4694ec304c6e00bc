//! HTTP response building module
//!
//! Cross-origin headers and the JSON response envelope, decoupled from
//! routing and per-service business logic.

pub mod cors;
pub mod envelope;

pub use envelope::{envelope_response, Envelope};
