//! Invoice entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use acme_core::invoice::ValidatedInvoice;
use acme_core::types::{CalendarDate, DbId};

/// A row from the `invoices` table.
///
/// `amount` is in minor units (cents). `date` is the issue date, set at
/// creation and never updated.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Invoice {
    pub id: DbId,
    pub customer_id: String,
    pub amount: i64,
    pub status: String,
    pub date: CalendarDate,
}

/// DTO for inserting a new invoice.
///
/// Built from a [`ValidatedInvoice`] plus the issue date the caller
/// assigns; the database generates the id.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount: i64,
    pub status: String,
    pub date: CalendarDate,
}

impl NewInvoice {
    /// Stamp a validated record with its issue date.
    pub fn from_validated(record: ValidatedInvoice, date: CalendarDate) -> Self {
        Self {
            customer_id: record.customer_id,
            amount: record.amount,
            status: record.status,
            date,
        }
    }
}

/// DTO for updating an existing invoice.
///
/// Only customer_id, amount, and status are updatable; id and date are
/// immutable after creation.
#[derive(Debug, Clone)]
pub struct UpdateInvoice {
    pub customer_id: String,
    pub amount: i64,
    pub status: String,
}

impl From<ValidatedInvoice> for UpdateInvoice {
    fn from(record: ValidatedInvoice) -> Self {
        Self {
            customer_id: record.customer_id,
            amount: record.amount,
            status: record.status,
        }
    }
}
