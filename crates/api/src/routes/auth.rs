//! Route definitions for authentication.
//!
//! Mounted at `/auth` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes.
///
/// ```text
/// POST /sign-in -> sign_in
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/sign-in", post(auth::sign_in))
}
