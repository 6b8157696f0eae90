//! Identity provider seam for the sign-in action.
//!
//! The sign-in handler forwards submitted credentials to an
//! [`IdentityProvider`] and maps its classified failures to the two
//! user-facing strings; anything the provider does not classify as an
//! authentication outcome is re-raised unchanged.

use async_trait::async_trait;
use serde::Deserialize;

use acme_db::repositories::UserRepo;
use acme_db::DbPool;

use crate::auth::password::verify_password;

/// Credentials submitted by the sign-in form.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// How a sign-in attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    /// The provider rejected the credentials themselves.
    #[error("invalid credentials")]
    CredentialsSignin,

    /// Any other failure the provider classifies as an authentication
    /// outcome (e.g. an unreadable stored hash).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// An infrastructure failure, not an authentication outcome.
    /// Callers must re-raise this rather than map it to a message.
    #[error(transparent)]
    Other(#[from] sqlx::Error),
}

/// External identity provider the sign-in action delegates to.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Attempt to sign in with the given credentials.
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), SignInError>;
}

/// Identity provider backed by the `users` table and Argon2id hashes.
pub struct CredentialsProvider {
    pool: DbPool,
}

impl CredentialsProvider {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityProvider for CredentialsProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), SignInError> {
        // SignInError::Other via the From impl.
        let user = UserRepo::find_by_email(&self.pool, &credentials.email)
            .await?
            .ok_or(SignInError::CredentialsSignin)?;

        // A hash that fails to parse is an auth failure of the non-credential
        // kind: the account cannot be verified, but the caller learns no more.
        let valid = verify_password(&credentials.password, &user.password_hash)
            .map_err(|e| SignInError::Auth(format!("password verification error: {e}")))?;

        if !valid {
            return Err(SignInError::CredentialsSignin);
        }

        Ok(())
    }
}
