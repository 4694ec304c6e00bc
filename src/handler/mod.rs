//! Request handling module
//!
//! Endpoint descriptors, the request-scoped error taxonomy, and the
//! routing dispatch shared by every service.

pub mod router;

pub use router::Router;

use hyper::{Method, StatusCode};

use crate::payload::BodySchema;

/// Everything that can go wrong inside a single request.
///
/// All variants are request-scoped and non-fatal; each maps to a fixed
/// status code and envelope message and is fully reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    PathNotFound,
    MethodNotAllowed,
    BodyRead,
    MalformedPayload { expects_array: bool },
}

impl RequestError {
    pub const fn status(self) -> StatusCode {
        match self {
            Self::PathNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BodyRead | Self::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::PathNotFound => "path not exist.",
            Self::MethodNotAllowed => "method not allowed",
            Self::BodyRead => "failed to read request body",
            Self::MalformedPayload {
                expects_array: false,
            } => "invalid JSON format.",
            Self::MalformedPayload {
                expects_array: true,
            } => "invalid JSON format: make sure use array payload",
        }
    }
}

/// A single routable endpoint.
///
/// The same handling contract serves every endpoint; only these parameters
/// differ between services.
pub struct Endpoint {
    /// Exact request path this endpoint is bound to.
    pub path: &'static str,
    /// Methods admitted by the method gate.
    pub allowed: &'static [Method],
    /// Shape a POST body must decode into.
    pub schema: BodySchema,
    /// Message returned for GET and OPTIONS. Unused when neither method
    /// is allowed.
    pub greeting: &'static str,
    /// Message returned after a successful POST decode. Unused when POST
    /// is not allowed.
    pub accepted: &'static str,
    /// Root endpoints only: reject any other unmatched path with 404.
    /// When unset, a root endpoint handles every unmatched path instead,
    /// mirroring catch-all registration.
    pub path_gate: bool,
    /// Stamp responses with a generated request identifier.
    pub request_id: bool,
}
