//! Domain types and validation for the Acme invoice backend.
//!
//! This crate is I/O-free: it defines the id/date aliases and the
//! invoice form validation that turns raw form fields into a typed
//! record or a field-keyed error map.

pub mod invoice;
pub mod types;
