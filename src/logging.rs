//! Middleware for logging requests and responses.

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Responses with a body longer than this many bytes are truncated in the
/// `info` log.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the response body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    tracing::info!("Received request: {} {}", request.method(), request.uri());

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    log_response(parts.status, &String::from_utf8_lossy(&body_bytes));

    Response::from_parts(parts, Body::from(body_bytes))
}

fn log_response(status: StatusCode, body: &str) {
    match body.char_indices().nth(LOG_BODY_LENGTH_LIMIT) {
        Some((end, _)) => {
            tracing::info!("Sending response: {status}\nbody: {}...", &body[..end]);
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {status}\nbody: {body:?}"),
    }
}
