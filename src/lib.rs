//! Expenseur is a small HTTP service for recording expenses.
//!
//! This library provides a JSON REST API over a single `expenses` table:
//! clients can create, fetch, list, and update expense records. Each record
//! has a title, a monetary amount, a free-text note, and an ordered list of
//! string tags.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

mod auth;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod models;
mod routes;
mod routing;
mod state;
pub mod stores;
mod tag_array;

pub use database_id::DatabaseID;
pub use db::initialize as initialize_db;
pub use logging::logging_middleware;
pub use models::{Expense, NewExpense};
pub use routing::build_router;
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The path segment used to look up an expense was not a non-negative integer.
    #[error("invalid expense id \"{0}\"")]
    InvalidExpenseId(String),

    /// The request body could not be parsed as an expense payload.
    #[error("could not parse the request body: {0}")]
    InvalidExpenseBody(String),

    /// The requested expense could not be found.
    ///
    /// The client should check that the id is correct and that the expense
    /// has been created.
    #[error("the requested expense could not be found")]
    NotFound,

    /// Tried to update an expense that does not exist.
    #[error("tried to update an expense that is not in the database")]
    UpdateMissingExpense,

    /// A stored tag array could not be decoded back into a list of tags.
    #[error("malformed tag array literal \"{0}\"")]
    MalformedTagArray(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body sent with every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match self {
            Error::InvalidExpenseId(_) | Error::InvalidExpenseBody(_) => StatusCode::BAD_REQUEST,
            Error::NotFound | Error::UpdateMissingExpense => StatusCode::NOT_FOUND,
            ref error => {
                tracing::error!("An unexpected error occurred: {}", error);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status_code,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
