//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`provider`] -- the identity provider seam the sign-in action
//!   forwards credentials to.

pub mod password;
pub mod provider;
