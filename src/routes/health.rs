//! The unauthenticated health check endpoint.

use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct HealthBody {
    message: &'static str,
}

/// Report that the server is up and able to respond.
pub async fn get_health() -> impl IntoResponse {
    Json(HealthBody { message: "OK" })
}
