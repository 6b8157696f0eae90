pub mod auth;
pub mod health;
pub mod invoices;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /invoices                 list, create
/// /invoices/{id}            get, update, delete
/// /auth/sign-in             authenticate
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/invoices", invoices::router())
        .nest("/auth", auth::router())
}
