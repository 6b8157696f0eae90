//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and issue exactly one
//! parameterized statement per operation.

pub mod invoice_repo;
pub mod user_repo;

pub use invoice_repo::InvoiceRepo;
pub use user_repo::UserRepo;
