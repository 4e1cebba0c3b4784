//! Middleware for logging requests and responses.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

/// The maximum number of body bytes logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated
/// and logged in full at the `debug` level. The `Authorization` header value
/// is redacted.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = extract_body_text(body).await;

    let headers = redact_authorization(&parts.headers);
    log_body(
        &format!(
            "Received request: {} {}\nheaders: {headers:#?}",
            parts.method, parts.uri
        ),
        &body_text,
    );

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_text = extract_body_text(body).await;

    log_body(
        &format!("Sending response: {}\nheaders: {:#?}", parts.status, parts.headers),
        &body_text,
    );

    Response::from_parts(parts, body_text.into())
}

async fn extract_body_text(body: axum::body::Body) -> String {
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    String::from_utf8_lossy(&body_bytes).to_string()
}

fn redact_authorization(headers: &HeaderMap) -> HeaderMap {
    let mut headers = headers.clone();

    if headers.contains_key(AUTHORIZATION) {
        headers.insert(AUTHORIZATION, HeaderValue::from_static("********"));
    }

    headers
}

fn log_body(prefix: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        let truncated: String = body.chars().take(LOG_BODY_LENGTH_LIMIT).collect();
        tracing::info!("{prefix}\nbody: {truncated}...");
        tracing::debug!("Full body: {body:?}");
    } else {
        tracing::info!("{prefix}\nbody: {body:?}");
    }
}
