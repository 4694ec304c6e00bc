//! JSON response envelope shared by every endpoint.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::{Response, StatusCode};
use serde::Serialize;
use uuid::Uuid;

use super::cors;
use crate::logger;

/// Uniform response body: `status` always mirrors the HTTP status code.
///
/// `request_id` is generated fresh per response and omitted from the JSON
/// for endpoints that do not stamp one.
#[derive(Debug, Serialize)]
pub struct Envelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    pub message: String,
    pub status: u16,
}

impl Envelope {
    pub fn new(message: &str, status: StatusCode, with_request_id: bool) -> Self {
        Self {
            request_id: with_request_id.then(Uuid::new_v4),
            message: message.to_string(),
            status: status.as_u16(),
        }
    }
}

/// Build the JSON envelope response for a terminal outcome.
///
/// The status header is written exactly once and always equals the
/// envelope's `status` field. CORS headers are attached here, the single
/// emission point, so no error path can skip them.
pub fn envelope_response(
    status: StatusCode,
    message: &str,
    with_request_id: bool,
) -> Response<Full<Bytes>> {
    let envelope = Envelope::new(message, status, with_request_id);

    let json = match serde_json::to_string(&envelope) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize envelope: {e}"));
            return fallback_response();
        }
    };

    cors::apply(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            fallback_response()
        })
}

/// Last-resort 500 used when the envelope itself cannot be built.
fn fallback_response() -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(Bytes::from(
        r#"{"message":"internal server error","status":500}"#,
    )));
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp.headers_mut().insert(
        "Content-Type",
        HeaderValue::from_static("application/json"),
    );
    resp.headers_mut().insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static(cors::ALLOW_ORIGIN),
    );
    resp
}
