//! Request Middleware
//!
//! Request-id propagation and response timing. The incoming `x-request-id`
//! header is honored when present so ids stay stable across a proxy hop;
//! otherwise a fresh UUID is minted.

use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

/// Request id carried through handler extensions
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Attach a request id, time the request, and log one line per request
pub async fn request_id_and_timing(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request.extensions_mut().insert(RequestId(request_id.clone()));

    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let mut response = next.run(request).await;
    let elapsed_ms = started.elapsed().as_millis();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    if let Ok(value) = HeaderValue::from_str(&elapsed_ms.to_string()) {
        response.headers_mut().insert("x-response-time-ms", value);
    }

    tracing::info!("{} {} {} {}ms", method, path, request_id, elapsed_ms);

    response
}
