//! Repository for the `invoices` table.

use sqlx::PgPool;

use acme_core::types::DbId;

use crate::models::invoice::{Invoice, NewInvoice, UpdateInvoice};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, amount, status, date";

/// Provides the invoice write path plus the reads the listing view needs.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice, returning the created row.
    ///
    /// The id comes from the table default; the date is supplied by the
    /// caller and never touched again.
    pub async fn create(pool: &PgPool, input: &NewInvoice) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices (customer_id, amount, status, date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(&input.customer_id)
            .bind(input.amount)
            .bind(&input.status)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// Find an invoice by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all invoices, newest issue date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices ORDER BY date DESC, id");
        sqlx::query_as::<_, Invoice>(&query).fetch_all(pool).await
    }

    /// Update customer_id, amount, and status for an invoice.
    ///
    /// The date column is deliberately untouched. Returns `None` if no
    /// row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices
             SET customer_id = $2, amount = $3, status = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(&input.customer_id)
            .bind(input.amount)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an invoice by ID.
    ///
    /// The statement is issued unconditionally; deleting a nonexistent
    /// id is not an error. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
