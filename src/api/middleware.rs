//! Request logging middleware.
//!
//! Logs one event per request with a generated request id, method, path,
//! response status, and latency.

use std::time::Instant;

use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub async fn log_requests(req: Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = Uuid::new_v4();
    let started = Instant::now();

    tracing::debug!(%request_id, %method, path, "Request received");

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::info!(%request_id, %method, path, status, elapsed_ms, "Request completed");

    response
}
