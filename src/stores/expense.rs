//! Defines the expense store trait.

use crate::{
    DatabaseID, Error,
    models::{Expense, NewExpense},
};

/// Handles the creation and retrieval of expenses.
///
/// Implementations must be safe to call concurrently from multiple request
/// workers sharing the same backend.
pub trait ExpenseStore {
    /// Insert a new expense into the store and return it with the ID the
    /// backend assigned.
    fn create(&self, expense: NewExpense) -> Result<Expense, Error>;

    /// Get an expense by its ID.
    ///
    /// Returns [Error::NotFound] if no expense has the given ID.
    fn get(&self, expense_id: DatabaseID) -> Result<Expense, Error>;

    /// Get every expense in the store, ordered by ID ascending.
    ///
    /// An empty store yields an empty vector.
    fn get_all(&self) -> Result<Vec<Expense>, Error>;

    /// Replace every field of the expense `expense_id` with the supplied
    /// values and return the stored result.
    ///
    /// Returns [Error::UpdateMissingExpense] if no expense has the given ID.
    fn update(&self, expense_id: DatabaseID, expense: NewExpense) -> Result<Expense, Error>;
}
