//! Auth service: greeting root plus a login endpoint.
//!
//! The auth service stamps every response with a generated request
//! identifier, including gate rejections.

use hyper::Method;

use crate::handler::{Endpoint, Router};
use crate::payload::BodySchema;

pub const SERVICE_NAME: &str = "auth";
pub const DEFAULT_PORT: u16 = 8082;

pub fn router() -> Router {
    Router::new(vec![
        Endpoint {
            path: "/",
            allowed: &[Method::GET, Method::OPTIONS],
            schema: BodySchema::None,
            greeting: "hello from auth services.",
            accepted: "",
            path_gate: true,
            request_id: true,
        },
        Endpoint {
            path: "/login",
            allowed: &[Method::POST],
            schema: BodySchema::Login,
            greeting: "",
            accepted: "successfully logged in.",
            path_gate: false,
            request_id: true,
        },
    ])
}
