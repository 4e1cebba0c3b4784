//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState,
    auth::auth_guard,
    endpoints,
    logging::logging_middleware,
    routes::{
        create_expense_endpoint, get_all_expenses_endpoint, get_expense_endpoint, get_health,
        update_expense_endpoint,
    },
    stores::ExpenseStore,
};

/// Return a router with all the app's routes.
///
/// Every route except the health check sits behind the auth middleware.
pub fn build_router<E>(state: AppState<E>) -> Router
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
{
    let unprotected_routes = Router::new().route(endpoints::HEALTH, get(get_health));

    let protected_routes = Router::new()
        .route(
            endpoints::EXPENSES,
            post(create_expense_endpoint::<E>).get(get_all_expenses_endpoint::<E>),
        )
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint::<E>).put(update_expense_endpoint::<E>),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    protected_routes
        .merge(unprotected_routes)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
