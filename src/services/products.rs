//! Products service: greeting root plus the pay endpoint.

use hyper::Method;

use crate::handler::{Endpoint, Router};
use crate::payload::BodySchema;

pub const SERVICE_NAME: &str = "products";
pub const DEFAULT_PORT: u16 = 8081;

pub fn router() -> Router {
    Router::new(vec![
        Endpoint {
            path: "/",
            allowed: &[Method::GET, Method::OPTIONS],
            schema: BodySchema::None,
            greeting: "hello from products services.",
            accepted: "",
            path_gate: true,
            request_id: false,
        },
        Endpoint {
            path: "/pay",
            allowed: &[Method::POST],
            schema: BodySchema::ProductList,
            greeting: "",
            accepted: "products payment sucessfully.",
            path_gate: false,
            request_id: false,
        },
    ])
}
