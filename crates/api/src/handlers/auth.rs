//! Handler for the sign-in action.
//!
//! Credentials are forwarded to the configured
//! [`IdentityProvider`](crate::auth::provider::IdentityProvider);
//! classified authentication failures map to exactly two user-facing
//! strings, and anything else is re-raised unchanged to the generic
//! error path.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;

use crate::auth::provider::{Credentials, SignInError};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Where a successful sign-in navigates the client.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Returned verbatim when the provider rejects the credentials.
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
/// Returned for every other classified authentication failure.
pub const MSG_SIGN_IN_GENERIC: &str = "Something went wrong";

/// Error-state object returned to the sign-in form.
#[derive(Debug, Serialize)]
pub struct AuthState {
    pub message: String,
}

/// POST /auth/sign-in
///
/// Authenticate with email + password from the sign-in form.
pub async fn sign_in(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> AppResult<Response> {
    match state.identity.sign_in(&credentials).await {
        Ok(()) => Ok(Redirect::to(DASHBOARD_PATH).into_response()),
        Err(err) => {
            let message = map_sign_in_error(err)?;
            Ok((
                StatusCode::UNAUTHORIZED,
                Json(AuthState {
                    message: message.to_string(),
                }),
            )
                .into_response())
        }
    }
}

/// Map a classified sign-in failure to its user-facing string.
///
/// Infrastructure failures are not an authentication outcome and are
/// re-raised unchanged.
fn map_sign_in_error(err: SignInError) -> Result<&'static str, AppError> {
    match err {
        SignInError::CredentialsSignin => Ok(MSG_INVALID_CREDENTIALS),
        SignInError::Auth(reason) => {
            tracing::warn!(reason = %reason, "Sign-in failed with non-credential auth error");
            Ok(MSG_SIGN_IN_GENERIC)
        }
        SignInError::Other(e) => Err(AppError::Database(e)),
    }
}
