//! Implements a SQLite backed expense store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    AppState, DatabaseID, Error,
    db::initialize,
    models::{Expense, NewExpense},
    stores::ExpenseStore,
    tag_array::{decode_tag_array, encode_tag_array},
};

/// Stores expenses in a SQLite database.
///
/// The connection is shared behind a mutex so that clones of the store can be
/// used concurrently by multiple request workers.
#[derive(Debug, Clone)]
pub struct SqliteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn map_row(row: &Row) -> Result<Expense, rusqlite::Error> {
        let id = row.get(0)?;
        let title = row.get(1)?;
        let amount = row.get(2)?;
        let note = row.get(3)?;

        let raw_tags: String = row.get(4)?;
        let tags = decode_tag_array(&raw_tags).map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                rusqlite::types::Type::Text,
                Box::new(error),
            )
        })?;

        Ok(Expense {
            id,
            title,
            amount,
            note,
            tags,
        })
    }
}

impl ExpenseStore for SqliteExpenseStore {
    /// Insert a new expense and return it with the row ID SQLite assigned.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn create(&self, expense: NewExpense) -> Result<Expense, Error> {
        let connection = self.connection.lock().map_err(|_| Error::DatabaseLockError)?;

        connection
            .prepare(
                "INSERT INTO expenses (title, amount, note, tags)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, title, amount, note, tags",
            )?
            .query_row(
                (
                    &expense.title,
                    expense.amount,
                    &expense.note,
                    encode_tag_array(&expense.tags),
                ),
                Self::map_row,
            )
            .map_err(|error| error.into())
    }

    /// Retrieve an expense by its `expense_id`.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no row matches, or an
    /// [Error::SqlError] if there is an unexpected SQL error.
    fn get(&self, expense_id: DatabaseID) -> Result<Expense, Error> {
        let connection = self.connection.lock().map_err(|_| Error::DatabaseLockError)?;

        connection
            .prepare("SELECT id, title, amount, note, tags FROM expenses WHERE id = :id")?
            .query_row(&[(":id", &expense_id)], Self::map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve every expense, ordered by ID ascending.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        let connection = self.connection.lock().map_err(|_| Error::DatabaseLockError)?;

        connection
            .prepare("SELECT id, title, amount, note, tags FROM expenses ORDER BY id ASC")?
            .query_map([], Self::map_row)?
            .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
            .collect()
    }

    /// Replace every field of the expense `expense_id` and return the stored
    /// result.
    ///
    /// # Errors
    /// Returns an [Error::UpdateMissingExpense] if no row matches, or an
    /// [Error::SqlError] if there is an unexpected SQL error.
    fn update(&self, expense_id: DatabaseID, expense: NewExpense) -> Result<Expense, Error> {
        let connection = self.connection.lock().map_err(|_| Error::DatabaseLockError)?;

        let rows_affected = connection.execute(
            "UPDATE expenses SET title = ?1, amount = ?2, note = ?3, tags = ?4 WHERE id = ?5",
            (
                &expense.title,
                expense.amount,
                &expense.note,
                encode_tag_array(&expense.tags),
                expense_id,
            ),
        )?;

        if rows_affected == 0 {
            return Err(Error::UpdateMissingExpense);
        }

        connection
            .prepare("SELECT id, title, amount, note, tags FROM expenses WHERE id = :id")?
            .query_row(&[(":id", &expense_id)], Self::map_row)
            .map_err(|error| error.into())
    }
}

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SqlAppState = AppState<SqliteExpenseStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the expenses table if it
/// does not exist yet.
pub fn create_app_state(
    db_connection: Connection,
    auth_token: &str,
) -> Result<SqlAppState, rusqlite::Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let expense_store = SqliteExpenseStore::new(connection);

    Ok(AppState::new(auth_token, expense_store))
}
