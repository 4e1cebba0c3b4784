//! Implements a struct that holds the state of the REST server.

use crate::stores::ExpenseStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<E>
where
    E: ExpenseStore + Send + Sync,
{
    /// The token clients must present in the `Authorization` header.
    pub auth_token: String,
    /// The store for managing [expenses](crate::models::Expense).
    pub expense_store: E,
}

impl<E> AppState<E>
where
    E: ExpenseStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(auth_token: &str, expense_store: E) -> Self {
        Self {
            auth_token: auth_token.to_owned(),
            expense_store,
        }
    }
}
