//! This file defines the API route handlers for the expense type.
//!
//! The handlers own the request-to-domain mapping: they parse the raw body
//! and path segment themselves so that every validation failure produces a
//! 400 with the same `{"error": ...}` body shape, rather than axum's default
//! rejections.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState, Error,
    models::{Expense, parse_expense_body, parse_expense_id},
    stores::ExpenseStore,
};

/// A route handler for creating a new expense.
///
/// Returns 201 with the stored expense on success, or 400 if the body is not
/// a valid expense payload.
pub async fn create_expense_endpoint<E>(
    State(state): State<AppState<E>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Expense>), Error>
where
    E: ExpenseStore + Send + Sync,
{
    let new_expense = parse_expense_body(&body)?;
    let expense = state.expense_store.create(new_expense)?;

    Ok((StatusCode::CREATED, Json(expense)))
}

/// A route handler for getting an expense by its ID.
///
/// Returns 400 if the path segment is not a non-negative integer and 404 if
/// no expense has the given ID.
pub async fn get_expense_endpoint<E>(
    State(state): State<AppState<E>>,
    Path(expense_id): Path<String>,
) -> Result<Json<Expense>, Error>
where
    E: ExpenseStore + Send + Sync,
{
    let expense_id = parse_expense_id(&expense_id)?;

    state.expense_store.get(expense_id).map(Json)
}

/// A route handler for listing every expense, ordered by ID ascending.
///
/// An empty store yields `[]`, never null.
pub async fn get_all_expenses_endpoint<E>(
    State(state): State<AppState<E>>,
) -> Result<Json<Vec<Expense>>, Error>
where
    E: ExpenseStore + Send + Sync,
{
    state.expense_store.get_all().map(Json)
}

/// A route handler for replacing an expense.
///
/// Every field is overwritten with the supplied values; there are no partial
/// updates. Returns 400 if the id or body is invalid and 404 if no expense
/// has the given ID.
pub async fn update_expense_endpoint<E>(
    State(state): State<AppState<E>>,
    Path(expense_id): Path<String>,
    body: Bytes,
) -> Result<Json<Expense>, Error>
where
    E: ExpenseStore + Send + Sync,
{
    let expense_id = parse_expense_id(&expense_id)?;
    let new_expense = parse_expense_body(&body)?;

    state.expense_store.update(expense_id, new_expense).map(Json)
}
