//! Payment service: a single root endpoint answering both GET and POST.
//!
//! The root endpoint is registered without a path gate, so it handles any
//! path, the way the service has always been mounted.

use hyper::Method;

use crate::handler::{Endpoint, Router};
use crate::payload::BodySchema;

pub const SERVICE_NAME: &str = "payment";
pub const DEFAULT_PORT: u16 = 8081;

pub fn router() -> Router {
    Router::new(vec![Endpoint {
        path: "/",
        allowed: &[Method::GET, Method::POST],
        schema: BodySchema::ProductList,
        greeting: "Hello from payment services.",
        accepted: "payment success.",
        path_gate: false,
        request_id: false,
    }])
}
