//! Domain layer for the favorites service.
//!
//! Holds the polymorphic asset model, the error taxonomy shared by every
//! backend, the [`store::FavoriteStore`] contract and its in-memory
//! implementation.

pub mod assets;
pub mod error;
pub mod memory_store;
pub mod pagination;
pub mod seed;
pub mod store;
pub mod types;
