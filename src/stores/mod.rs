//! Contains the trait and implementations for objects that store [expenses](crate::models::Expense).

mod expense;

pub mod sqlite;

pub use expense::ExpenseStore;
pub use sqlite::SqliteExpenseStore;
