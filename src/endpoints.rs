//! The API endpoint URIs.

/// The route to create or list expenses.
pub const EXPENSES: &str = "/expenses";
/// The route to fetch or update a single expense.
pub const EXPENSE: &str = "/expenses/{expense_id}";
/// The route for the unauthenticated health check.
pub const HEALTH: &str = "/health";
