//! Handlers for the invoice form actions.
//!
//! Each mutating action runs the same three steps: validate the raw
//! form fields, issue one parameterized statement, then invalidate the
//! cached listing and (for create/update) navigate the client back to
//! it. Failures never escape as raw errors: validation failures come
//! back as a field-keyed [`FormState`], write failures collapse to one
//! generic message per operation.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use chrono::Utc;

use acme_core::invoice::{validate_invoice_form, InvoiceForm};
use acme_core::types::DbId;
use acme_db::models::invoice::{NewInvoice, UpdateInvoice};
use acme_db::repositories::InvoiceRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, FormState};
use crate::state::AppState;

/// Where create and update navigate the client after a successful write.
pub const INVOICES_LISTING_PATH: &str = "/dashboard/invoices";

/// Operation-level summary lines returned with the error state.
pub const MSG_CREATE_VALIDATION: &str = "Missing Fields. Failed to Create Invoice";
pub const MSG_UPDATE_VALIDATION: &str = "Update Invoice Failed";
pub const MSG_CREATE_FAILED: &str = "Error creating invoice";
pub const MSG_UPDATE_FAILED: &str = "Error updating invoice";
pub const MSG_DELETE_FAILED: &str = "Error deleting invoice";

// ---------------------------------------------------------------------------
// Read side
// ---------------------------------------------------------------------------

/// GET /invoices
///
/// The invoices listing, served through the in-process cache.
pub async fn list_invoices(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let invoices = state.listing_cache.get_or_load(&state.pool).await?;
    Ok(Json(DataResponse { data: invoices }))
}

/// GET /invoices/{id}
///
/// Fetch a single invoice (the edit form's read path).
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let invoice = InvoiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound {
            entity: "Invoice",
            id,
        })?;

    Ok(Json(DataResponse { data: invoice }))
}

// ---------------------------------------------------------------------------
// Form actions
// ---------------------------------------------------------------------------

/// POST /invoices
///
/// Create an invoice from the submitted form fields. The issue date is
/// today's UTC date; the id comes from the table default.
pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Response {
    let record = match validate_invoice_form(&form) {
        Ok(record) => record,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(FormState::invalid(errors, MSG_CREATE_VALIDATION)),
            )
                .into_response();
        }
    };

    let input = NewInvoice::from_validated(record, Utc::now().date_naive());

    match InvoiceRepo::create(&state.pool, &input).await {
        Ok(invoice) => {
            tracing::info!(invoice_id = %invoice.id, amount = invoice.amount, "Invoice created");
            state.listing_cache.invalidate().await;
            Redirect::to(INVOICES_LISTING_PATH).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Invoice create failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FormState::failed(MSG_CREATE_FAILED)),
            )
                .into_response()
        }
    }
}

/// PUT /invoices/{id}
///
/// Update customer, amount, and status for an existing invoice. The id
/// and issue date are immutable; no existence check is performed, so an
/// unknown id still counts as success (last-write-wins, matching the
/// database's own semantics for the statement).
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<InvoiceForm>,
) -> Response {
    let record = match validate_invoice_form(&form) {
        Ok(record) => record,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(FormState::invalid(errors, MSG_UPDATE_VALIDATION)),
            )
                .into_response();
        }
    };

    let input = UpdateInvoice::from(record);

    match InvoiceRepo::update(&state.pool, id, &input).await {
        Ok(_) => {
            tracing::info!(invoice_id = %id, "Invoice updated");
            state.listing_cache.invalidate().await;
            Redirect::to(INVOICES_LISTING_PATH).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, invoice_id = %id, "Invoice update failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FormState::failed(MSG_UPDATE_FAILED)),
            )
                .into_response()
        }
    }
}

/// DELETE /invoices/{id}
///
/// Delete an invoice. Invalidates the listing but performs no
/// navigation; deleting an id that does not exist is still success.
pub async fn delete_invoice(State(state): State<AppState>, Path(id): Path<DbId>) -> Response {
    match InvoiceRepo::delete(&state.pool, id).await {
        Ok(deleted) => {
            tracing::info!(invoice_id = %id, deleted, "Invoice delete issued");
            state.listing_cache.invalidate().await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, invoice_id = %id, "Invoice delete failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FormState::failed(MSG_DELETE_FAILED)),
            )
                .into_response()
        }
    }
}
