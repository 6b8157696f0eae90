//! Invoice form validation.
//!
//! Turns the raw string-valued form fields `{customerId, amount, status}`
//! into a [`ValidatedInvoice`] or a field-keyed map of human-readable
//! error messages. Validation never fails the request pipeline: both
//! outcomes are ordinary values for the caller to render or persist.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Invoice awaiting payment.
pub const STATUS_PENDING: &str = "pending";
/// Invoice settled by the customer.
pub const STATUS_PAID: &str = "paid";

/// All valid invoice status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_PAID];

/// Shown when the customer reference is missing or empty.
pub const MSG_CUSTOMER_REQUIRED: &str = "Please select a customer";
/// Shown when the amount is missing, non-numeric, or not positive.
pub const MSG_AMOUNT_INVALID: &str = "Please enter an amount greater than 0";
/// Shown when the status is missing or not one of [`VALID_STATUSES`].
pub const MSG_STATUS_INVALID: &str = "Please select an invoice status";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Raw form fields exactly as submitted by the client.
///
/// Every field is optional: absence and emptiness are validation
/// concerns, not deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceForm {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A fully validated invoice record, ready to persist.
///
/// `amount` is in minor units (cents); the form accepts major units
/// ("10.50") and the conversion is exact for two-decimal inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInvoice {
    pub customer_id: String,
    pub amount: i64,
    pub status: String,
}

/// Per-field validation error lists, keyed the way the form UI consumes them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate raw form fields into a [`ValidatedInvoice`].
///
/// All fields are checked independently so the caller gets every error
/// in one pass rather than one per round trip.
pub fn validate_invoice_form(form: &InvoiceForm) -> Result<ValidatedInvoice, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = match form.customer_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => Some(id.to_string()),
        _ => {
            errors.customer_id.push(MSG_CUSTOMER_REQUIRED.to_string());
            None
        }
    };

    let amount = match form.amount.as_deref().and_then(parse_amount_cents) {
        Some(cents) if cents > 0 => Some(cents),
        _ => {
            errors.amount.push(MSG_AMOUNT_INVALID.to_string());
            None
        }
    };

    let status = match form.status.as_deref() {
        Some(s) if VALID_STATUSES.contains(&s) => Some(s.to_string()),
        _ => {
            errors.status.push(MSG_STATUS_INVALID.to_string());
            None
        }
    };

    match (customer_id, amount, status) {
        (Some(customer_id), Some(amount), Some(status)) => Ok(ValidatedInvoice {
            customer_id,
            amount,
            status,
        }),
        _ => Err(errors),
    }
}

/// Parse a major-unit decimal string ("10.50") into minor units (1050).
///
/// Decimal string arithmetic, not float multiplication, so the cents
/// boundary is exact. At most two fraction digits are accepted; sub-cent
/// precision does not coerce. Negative amounts parse (the caller applies
/// the `> 0` rule and reports the same field error either way).
pub fn parse_amount_cents(input: &str) -> Option<i64> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (whole, frac) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };
    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };

    let cents = whole.checked_mul(100)?.checked_add(frac_cents)?;
    Some(if negative { -cents } else { cents })
}
