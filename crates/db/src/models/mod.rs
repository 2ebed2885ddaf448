//! Row structs and DTOs.
//!
//! Each submodule contains `FromRow` entity structs matching database rows
//! and the insert DTOs the repositories accept.

pub mod favorite;
