//! Route definitions for the invoice form actions.
//!
//! Mounted at `/invoices` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::invoices;
use crate::state::AppState;

/// Invoice routes.
///
/// ```text
/// GET    /          -> list_invoices (cached listing)
/// POST   /          -> create_invoice
/// GET    /{id}      -> get_invoice
/// PUT    /{id}      -> update_invoice
/// DELETE /{id}      -> delete_invoice
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route(
            "/{id}",
            get(invoices::get_invoice)
                .put(invoices::update_invoice)
                .delete(invoices::delete_invoice),
        )
}
