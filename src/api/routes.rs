use super::handlers::*;
use crate::storage::SharedStore;

use axum::{
    Router,
    body::{Body, HttpBody},
    extract::{Extension, Request},
    http::{StatusCode, header::CONTENT_LENGTH},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use std::time::Instant;

pub const ENDPOINT_ROOT: &str = "/";
pub const ENDPOINT_PERSONS: &str = "/api/persons";
pub const ENDPOINT_PERSON: &str = "/api/persons/:id";
pub const ENDPOINT_INFO: &str = "/info";

/// Builds the HTTP router with `store` injected into every handler.
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route(ENDPOINT_ROOT, get(handle_welcome))
        .route(
            ENDPOINT_PERSONS,
            get(handle_list_persons).post(handle_create_person),
        )
        .route(
            ENDPOINT_PERSON,
            get(handle_get_person).delete(handle_delete_person),
        )
        .route(ENDPOINT_INFO, get(handle_info))
        .fallback(handle_unknown_endpoint)
        .layer(Extension(store))
        .layer(middleware::from_fn(log_requests))
}

/// Largest request body the logging middleware buffers.
pub const MAX_LOGGED_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Emits one log line per request: method, path, status, response length,
/// latency and the request body.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let (parts, body) = req.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_LOGGED_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("{} {} body rejected: {}", method, path, e);
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };
    let data = describe_body(&bytes);

    let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    tracing::info!(
        "{} {} {} {} - {} ms {}",
        method,
        path,
        response.status().as_u16(),
        response_length(&response),
        started.elapsed().as_millis(),
        data
    );
    response
}

/// Compact JSON for JSON bodies, lossy text otherwise, `-` when empty.
pub fn describe_body(body: &[u8]) -> String {
    if body.is_empty() {
        return "-".to_string();
    }
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

/// The `Content-Length` header, or the exact body size when the header is
/// not set yet, or `-`.
pub fn response_length(response: &Response) -> String {
    if let Some(length) = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
    {
        return length.to_string();
    }
    match response.body().size_hint().exact() {
        Some(length) => length.to_string(),
        None => "-".to_string(),
    }
}
