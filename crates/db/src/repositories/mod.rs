//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod asset_catalog_repo;
pub mod favorite_repo;

pub use asset_catalog_repo::AssetCatalogRepo;
pub use favorite_repo::FavoriteRepo;
