//! This module defines the REST API's route handlers.

mod expense;
mod health;

pub use expense::{
    create_expense_endpoint, get_all_expenses_endpoint, get_expense_endpoint,
    update_expense_endpoint,
};
pub use health::get_health;
