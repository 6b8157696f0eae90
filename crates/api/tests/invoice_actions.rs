//! HTTP-level integration tests for the invoice form actions:
//! validation, persistence, listing invalidation, and navigation.

mod common;

use axum::http::StatusCode;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use acme_db::models::invoice::{NewInvoice, UpdateInvoice};
use acme_db::repositories::InvoiceRepo;
use common::{assert_redirects_to, body_json, delete, get, post_form, put_form};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed an invoice directly through the repository and return its row.
async fn seed_invoice(
    pool: &PgPool,
    customer_id: &str,
    amount: i64,
    status: &str,
    date: NaiveDate,
) -> acme_db::models::invoice::Invoice {
    let input = NewInvoice {
        customer_id: customer_id.to_string(),
        amount,
        status: status.to_string(),
        date,
    };
    InvoiceRepo::create(pool, &input)
        .await
        .expect("seeding an invoice should succeed")
}

async fn count_invoices(pool: &PgPool) -> usize {
    InvoiceRepo::list(pool).await.expect("list should succeed").len()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// A valid form creates one row with the amount in minor units and
/// today's date, then redirects back to the listing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_persists_minor_units_and_redirects(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_form(
        app,
        "/api/v1/invoices",
        "customerId=c1&amount=10.50&status=pending",
    )
    .await;

    assert_redirects_to(&response, "/dashboard/invoices");

    let invoices = InvoiceRepo::list(&pool).await.unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].customer_id, "c1");
    assert_eq!(invoices[0].amount, 1050);
    assert_eq!(invoices[0].status, "pending");
    assert_eq!(invoices[0].date, Utc::now().date_naive());
}

/// Non-positive amounts return the amount field error and write nothing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_non_positive_amounts(pool: PgPool) {
    for amount in ["0", "-5", "0.00"] {
        let app = common::build_test_app(pool.clone());
        let body = format!("customerId=c1&amount={amount}&status=paid");
        let response = post_form(app, "/api/v1/invoices", &body).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(
            json["errors"]["amount"][0],
            "Please enter an amount greater than 0"
        );
    }

    assert_eq!(count_invoices(&pool).await, 0, "no row may be written");
}

/// A status outside {pending, paid} returns the status field error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_unknown_status(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_form(
        app,
        "/api/v1/invoices",
        "customerId=c1&amount=10&status=overdue",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["errors"]["status"][0], "Please select an invoice status");
    assert_eq!(count_invoices(&pool).await, 0);
}

/// An empty submission reports every field error in one pass.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_reports_all_missing_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_form(app, "/api/v1/invoices", "").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Missing Fields. Failed to Create Invoice");
    assert_eq!(json["errors"]["customerId"][0], "Please select a customer");
    assert_eq!(
        json["errors"]["amount"][0],
        "Please enter an amount greater than 0"
    );
    assert_eq!(json["errors"]["status"][0], "Please select an invoice status");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Update rewrites customer, amount, and status but never the issue date.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_changes_fields_but_not_date(pool: PgPool) {
    let issued = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let invoice = seed_invoice(&pool, "c1", 500, "pending", issued).await;

    let app = common::build_test_app(pool.clone());
    let response = put_form(
        app,
        &format!("/api/v1/invoices/{}", invoice.id),
        "customerId=c2&amount=99.99&status=paid",
    )
    .await;

    assert_redirects_to(&response, "/dashboard/invoices");

    let updated = InvoiceRepo::find_by_id(&pool, invoice.id)
        .await
        .unwrap()
        .expect("row must still exist");
    assert_eq!(updated.id, invoice.id);
    assert_eq!(updated.customer_id, "c2");
    assert_eq!(updated.amount, 9999);
    assert_eq!(updated.status, "paid");
    assert_eq!(updated.date, issued, "date must be untouched");
}

/// A failed validation leaves the stored row exactly as it was.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_validation_failure_leaves_row_unchanged(pool: PgPool) {
    let issued = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let invoice = seed_invoice(&pool, "c1", 500, "pending", issued).await;

    let app = common::build_test_app(pool.clone());
    let response = put_form(
        app,
        &format!("/api/v1/invoices/{}", invoice.id),
        "customerId=c2&amount=not-a-number&status=paid",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Update Invoice Failed");

    let stored = InvoiceRepo::find_by_id(&pool, invoice.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.customer_id, "c1");
    assert_eq!(stored.amount, 500);
    assert_eq!(stored.status, "pending");
}

/// No existence precondition: updating an unknown id still redirects.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_unknown_id_is_not_an_error(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = put_form(
        app,
        &format!("/api/v1/invoices/{}", Uuid::new_v4()),
        "customerId=c1&amount=10&status=paid",
    )
    .await;

    assert_redirects_to(&response, "/dashboard/invoices");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Delete removes the row and answers 204 with no navigation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_row(pool: PgPool) {
    let issued = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let invoice = seed_invoice(&pool, "c1", 500, "paid", issued).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/invoices/{}", invoice.id)).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.headers().get("location").is_none());

    let gone = InvoiceRepo::find_by_id(&pool, invoice.id).await.unwrap();
    assert!(gone.is_none());
}

/// Deleting an id that never existed is still success.
#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_unknown_id_is_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = delete(app, &format!("/api/v1/invoices/{}", Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Listing cache
// ---------------------------------------------------------------------------

/// The listing is cached between reads, and every successful write
/// marks it stale so the next read re-fetches.
#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_is_cached_until_a_write_invalidates_it(pool: PgPool) {
    let issued = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    seed_invoice(&pool, "c1", 500, "pending", issued).await;

    let app = common::build_test_app(pool.clone());

    // Prime the cache.
    let json = body_json(get(app.clone(), "/api/v1/invoices").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // A write that bypasses the handlers is invisible to the cached view.
    seed_invoice(&pool, "c2", 700, "paid", issued).await;
    let json = body_json(get(app.clone(), "/api/v1/invoices").await).await;
    assert_eq!(
        json["data"].as_array().unwrap().len(),
        1,
        "listing must still be served from cache"
    );

    // A write through the action invalidates, so the next read sees both
    // earlier rows plus the new one.
    let response = post_form(
        app.clone(),
        "/api/v1/invoices",
        "customerId=c3&amount=1&status=pending",
    )
    .await;
    assert_redirects_to(&response, "/dashboard/invoices");

    let json = body_json(get(app, "/api/v1/invoices").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

/// GET /invoices/{id} serves the row or a 404 envelope.
#[sqlx::test(migrations = "../../db/migrations")]
async fn get_invoice_by_id(pool: PgPool) {
    let issued = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let invoice = seed_invoice(&pool, "c9", 1234, "paid", issued).await;

    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), &format!("/api/v1/invoices/{}", invoice.id)).await).await;
    assert_eq!(json["data"]["customer_id"], "c9");
    assert_eq!(json["data"]["amount"], 1234);

    let response = get(app, &format!("/api/v1/invoices/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// SQL injection
// ---------------------------------------------------------------------------

/// User-controlled values are bound, never interpolated: a hostile
/// customer id is stored verbatim and the table survives.
#[sqlx::test(migrations = "../../db/migrations")]
async fn customer_id_is_bound_not_interpolated(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let hostile = "c1%27%3B+DROP+TABLE+invoices%3B--"; // "c1'; DROP TABLE invoices;--"
    let body = format!("customerId={hostile}&amount=5&status=paid");
    let response = post_form(app, "/api/v1/invoices", &body).await;

    assert_redirects_to(&response, "/dashboard/invoices");

    let invoices = InvoiceRepo::list(&pool).await.unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].customer_id, "c1'; DROP TABLE invoices;--");
}

// Keep the repository-level contract honest as well: update touches
// exactly the three mutable columns.
#[sqlx::test(migrations = "../../db/migrations")]
async fn repo_update_returns_none_for_unknown_id(pool: PgPool) {
    let input = UpdateInvoice {
        customer_id: "c1".to_string(),
        amount: 100,
        status: "paid".to_string(),
    };
    let updated = InvoiceRepo::update(&pool, Uuid::new_v4(), &input)
        .await
        .unwrap();
    assert!(updated.is_none());
}
