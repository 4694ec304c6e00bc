//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: path gate, method gate, body
//! decoding, and envelope emission. Every terminal outcome, success or
//! rejection, is written exactly once through `envelope_response`.

use http_body_util::BodyExt;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;

use super::{Endpoint, RequestError};
use crate::http::envelope_response;
use crate::logger;

/// Route table built once at startup and shared across requests.
///
/// Requests carry no state between them, so the table is read-only after
/// construction and needs no locking.
pub struct Router {
    endpoints: Vec<Endpoint>,
    access_log: bool,
}

impl Router {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self {
            endpoints,
            access_log: true,
        }
    }

    #[must_use]
    pub fn with_access_log(mut self, enabled: bool) -> Self {
        self.access_log = enabled;
        self
    }

    /// Handle one request end to end.
    ///
    /// State machine: CORS is applied at emission, then path gate, method
    /// gate, and the method branch run in order; the first rejection is
    /// terminal.
    pub async fn handle<B>(&self, req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible>
    where
        B: Body,
    {
        if self.access_log {
            logger::log_request(req.method(), req.uri(), req.version());
        }

        let outcome = match self.select(req.uri().path()) {
            Ok(endpoint) => dispatch(endpoint, req)
                .await
                .map(|message| (message, endpoint.request_id))
                .map_err(|e| (e, endpoint.request_id)),
            Err(rejection) => Err(rejection),
        };

        let (status, message, request_id) = match outcome {
            Ok((message, request_id)) => (StatusCode::OK, message, request_id),
            Err((e, request_id)) => (e.status(), e.message(), request_id),
        };

        if self.access_log {
            logger::log_response(status.as_u16(), message);
        }

        Ok(envelope_response(status, message, request_id))
    }

    /// Select the endpoint responsible for `path`.
    ///
    /// Exact match wins. Otherwise the root endpoint acts as catch-all:
    /// with its path gate enabled it rejects the stray path, without it
    /// the root endpoint handles the request as its own. The error carries
    /// the rejecting endpoint's request-id flag so gate rejections are
    /// stamped the same way its successes are.
    fn select(&self, path: &str) -> Result<&Endpoint, (RequestError, bool)> {
        if let Some(endpoint) = self.endpoints.iter().find(|e| e.path == path) {
            return Ok(endpoint);
        }

        match self.endpoints.iter().find(|e| e.path == "/") {
            Some(root) if root.path_gate => Err((RequestError::PathNotFound, root.request_id)),
            Some(root) => Ok(root),
            None => Err((RequestError::PathNotFound, false)),
        }
    }
}

/// Method gate followed by a single exhaustive dispatch.
///
/// Matching on the method once means at most one branch can run, so a
/// request can never produce two response writes.
async fn dispatch<B>(endpoint: &Endpoint, req: Request<B>) -> Result<&'static str, RequestError>
where
    B: Body,
{
    let method = req.method().clone();
    if !endpoint.allowed.contains(&method) {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return Err(RequestError::MethodNotAllowed);
    }

    match method {
        Method::GET | Method::OPTIONS => Ok(endpoint.greeting),
        Method::POST => {
            let body = read_body(req).await?;
            let payload = endpoint.schema.decode(&body).map_err(|_| {
                RequestError::MalformedPayload {
                    expects_array: endpoint.schema.expects_array(),
                }
            })?;
            logger::log_payload(&payload);
            Ok(endpoint.accepted)
        }
        // No configured endpoint admits anything else through the gate.
        _ => Err(RequestError::MethodNotAllowed),
    }
}

/// Collect the whole request body; the stream is released on return
/// regardless of outcome.
async fn read_body<B>(req: Request<B>) -> Result<Bytes, RequestError>
where
    B: Body,
{
    match req.into_body().collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(_) => Err(RequestError::BodyRead),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{auth, payment, products};
    use hyper::header::HeaderMap;

    async fn send(
        router: &Router,
        method: Method,
        path: &str,
        body: &str,
    ) -> (StatusCode, HeaderMap, serde_json::Value) {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Full::new(Bytes::from(body.to_string())))
            .unwrap();
        let resp = router.handle(req).await.unwrap();
        let (parts, body) = resp.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (parts.status, parts.headers, json)
    }

    /// Every response must be a valid envelope with matching status.
    fn assert_envelope(status: StatusCode, headers: &HeaderMap, json: &serde_json::Value) {
        assert_eq!(
            json["status"].as_u64().unwrap(),
            u64::from(status.as_u16())
        );
        assert!(json["message"].is_string());
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "POST, GET");
        assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
        assert_eq!(headers["Content-Type"], "application/json");
    }

    #[tokio::test]
    async fn test_auth_home_get() {
        let router = auth::router().with_access_log(false);
        let (status, headers, json) = send(&router, Method::GET, "/", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_envelope(status, &headers, &json);
        assert_eq!(json["message"], "hello from auth services.");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_auth_path_gate_rejects_before_method_gate() {
        let router = auth::router().with_access_log(false);
        // DELETE is not allowed anywhere, but the stray path must win.
        let (status, headers, json) = send(&router, Method::DELETE, "/unknown", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_envelope(status, &headers, &json);
        assert_eq!(json["message"], "path not exist.");
        // The auth service stamps gate rejections too.
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_auth_home_post_not_allowed() {
        let router = auth::router().with_access_log(false);
        let (status, headers, json) = send(&router, Method::POST, "/", "{}").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_envelope(status, &headers, &json);
        assert_eq!(json["message"], "method not allowed");
    }

    #[tokio::test]
    async fn test_auth_login_success() {
        let router = auth::router().with_access_log(false);
        let (status, headers, json) = send(
            &router,
            Method::POST,
            "/login",
            r#"{"id":1,"name":"Alice","age":30}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_envelope(status, &headers, &json);
        assert_eq!(json["message"], "successfully logged in.");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_auth_login_get_not_allowed() {
        let router = auth::router().with_access_log(false);
        let (status, _, json) = send(&router, Method::GET, "/login", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json["message"], "method not allowed");
    }

    #[tokio::test]
    async fn test_auth_login_malformed_json() {
        let router = auth::router().with_access_log(false);
        let (status, headers, json) = send(&router, Method::POST, "/login", "\"not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_envelope(status, &headers, &json);
        assert_eq!(json["message"], "invalid JSON format.");
    }

    #[tokio::test]
    async fn test_auth_login_wrong_shape() {
        let router = auth::router().with_access_log(false);
        let (status, _, json) = send(&router, Method::POST, "/login", "[1,2,3]").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "invalid JSON format.");
    }

    #[tokio::test]
    async fn test_payment_home_get() {
        let router = payment::router().with_access_log(false);
        let (status, headers, json) = send(&router, Method::GET, "/", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_envelope(status, &headers, &json);
        assert_eq!(json["message"], "Hello from payment services.");
        assert!(json.get("request_id").is_none());
    }

    #[tokio::test]
    async fn test_payment_root_is_catch_all() {
        let router = payment::router().with_access_log(false);
        let (status, _, json) = send(&router, Method::GET, "/anything", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Hello from payment services.");
    }

    #[tokio::test]
    async fn test_payment_post_array_success() {
        let router = payment::router().with_access_log(false);
        let body = r#"[{"id":1,"title":"Widget","price":9.99,"description":"d","category":"c","image":"i","quantity":2}]"#;
        let (status, headers, json) = send(&router, Method::POST, "/", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_envelope(status, &headers, &json);
        assert_eq!(json["message"], "payment success.");
    }

    #[tokio::test]
    async fn test_payment_post_object_where_array_required() {
        let router = payment::router().with_access_log(false);
        let (status, headers, json) =
            send(&router, Method::POST, "/", r#"{"id":1,"title":"Widget"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_envelope(status, &headers, &json);
        assert_eq!(
            json["message"],
            "invalid JSON format: make sure use array payload"
        );
    }

    #[tokio::test]
    async fn test_payment_options_not_allowed() {
        let router = payment::router().with_access_log(false);
        let (status, _, json) = send(&router, Method::OPTIONS, "/", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json["message"], "method not allowed");
    }

    #[tokio::test]
    async fn test_products_home_get() {
        let router = products::router().with_access_log(false);
        let (status, headers, json) = send(&router, Method::GET, "/", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_envelope(status, &headers, &json);
        assert_eq!(json["message"], "hello from products services.");
        assert!(json.get("request_id").is_none());
    }

    #[tokio::test]
    async fn test_products_path_gate() {
        let router = products::router().with_access_log(false);
        let (status, headers, json) = send(&router, Method::GET, "/missing", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_envelope(status, &headers, &json);
        assert_eq!(json["message"], "path not exist.");
    }

    #[tokio::test]
    async fn test_products_pay_success() {
        let router = products::router().with_access_log(false);
        let body = r#"[{"id":1,"title":"Widget","price":9.99,"description":"d","category":"c","image":"i","quantity":2}]"#;
        let (status, headers, json) = send(&router, Method::POST, "/pay", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_envelope(status, &headers, &json);
        assert_eq!(json["message"], "products payment sucessfully.");
    }

    #[tokio::test]
    async fn test_products_pay_requires_array_hint() {
        let router = products::router().with_access_log(false);
        let (status, _, json) = send(&router, Method::POST, "/pay", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["message"],
            "invalid JSON format: make sure use array payload"
        );
    }

    #[tokio::test]
    async fn test_products_pay_get_not_allowed() {
        let router = products::router().with_access_log(false);
        let (status, _, json) = send(&router, Method::GET, "/pay", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json["message"], "method not allowed");
    }

    #[tokio::test]
    async fn test_options_preflight_on_gated_roots() {
        for router in [auth::router(), products::router()] {
            let router = router.with_access_log(false);
            let (status, headers, json) = send(&router, Method::OPTIONS, "/", "").await;
            assert_eq!(status, StatusCode::OK);
            assert_envelope(status, &headers, &json);
        }
    }

    #[tokio::test]
    async fn test_empty_router_rejects_everything() {
        let router = Router::new(vec![]).with_access_log(false);
        let (status, _, json) = send(&router, Method::GET, "/", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "path not exist.");
        assert!(json.get("request_id").is_none());
    }
}
