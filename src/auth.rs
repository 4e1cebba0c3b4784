//! Authentication middleware that validates the API token on protected routes.

use axum::{
    extract::{FromRef, Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{AppState, stores::ExpenseStore};

/// The state needed for the auth middleware.
#[derive(Clone)]
pub struct AuthState {
    /// The token clients must present in the `Authorization` header.
    pub auth_token: String,
}

impl<E> FromRef<AppState<E>> for AuthState
where
    E: ExpenseStore + Send + Sync,
{
    fn from_ref(state: &AppState<E>) -> Self {
        Self {
            auth_token: state.auth_token.clone(),
        }
    }
}

/// Middleware function that checks the request carries the configured API
/// token in its `Authorization` header.
///
/// Requests with a missing or mismatched token are rejected with 401 before
/// they reach the route handler.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header_value| header_value.to_str().ok());

    if token != Some(state.auth_token.as_str()) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod auth_guard_tests {
    use axum::{Router, http::StatusCode, middleware, routing::get};
    use axum_test::TestServer;

    use super::{AuthState, auth_guard};

    const TEST_TOKEN: &str = "November 10, 2009";

    async fn get_protected() -> &'static str {
        "OK"
    }

    fn get_test_server() -> TestServer {
        let state = AuthState {
            auth_token: TEST_TOKEN.to_owned(),
        };

        let app = Router::new()
            .route("/protected", get(get_protected))
            .layer(middleware::from_fn_with_state(state, auth_guard));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn request_with_valid_token_passes_through() {
        let server = get_test_server();

        let response = server
            .get("/protected")
            .add_header("Authorization", TEST_TOKEN)
            .await;

        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn request_without_token_is_rejected() {
        let server = get_test_server();

        let response = server.get("/protected").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn request_with_wrong_token_is_rejected() {
        let server = get_test_server();

        let response = server
            .get("/protected")
            .add_header("Authorization", "wrong token")
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
