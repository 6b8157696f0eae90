//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row, plus the insert/update DTOs the
//! repositories bind from.

pub mod invoice;
pub mod user;
