//! Shared response envelope types for API handlers.

use serde::Serialize;

use acme_core::invoice::FieldErrors;

/// Standard `{ "data": T }` response envelope for read endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Error-state object returned to the form when a mutating action fails.
///
/// Mirrors the shape the invoice form consumes: `errors` carries the
/// field-keyed validation messages (absent for persistence failures),
/// `message` the operation-level summary.
#[derive(Debug, Serialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    pub message: String,
}

impl FormState {
    /// Validation failed: return every field error plus a summary line.
    pub fn invalid(errors: FieldErrors, message: &str) -> Self {
        Self {
            errors: Some(errors),
            message: message.to_string(),
        }
    }

    /// The write failed: one generic message, no field detail.
    pub fn failed(message: &str) -> Self {
        Self {
            errors: None,
            message: message.to_string(),
        }
    }
}
