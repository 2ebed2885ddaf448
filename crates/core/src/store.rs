//! The favorites store contract.
//!
//! Both the in-memory and the relational backend implement
//! [`FavoriteStore`]. The request layer resolves the authenticated user id
//! and decodes incoming assets before calling into a store; the store trusts
//! the user id as supplied.

use async_trait::async_trait;

use crate::assets::{Asset, AssetType};
use crate::error::CoreError;
use crate::pagination::Page;

/// Per-user repository of favorited assets.
///
/// Favorites are identified by `(user, asset type, external id)`. Listings
/// are ordered by asset type (chart, insight, audience) and then by the
/// order in which the favorites were added; `page` is applied once over that
/// whole sequence. All methods are safe to call concurrently.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// List a window of the user's favorites. An unknown user has an empty
    /// listing.
    async fn list_favorites(&self, user_id: &str, page: Page) -> Result<Vec<Asset>, CoreError>;

    /// Validate `asset` and add it to the user's favorites.
    ///
    /// Fails with `ValidationFailed` if the asset is invalid and with
    /// `DuplicateFavorite` if the user already favorited the same
    /// `(type, external id)`.
    async fn add_favorite(&self, user_id: &str, asset: &Asset) -> Result<(), CoreError>;

    /// Remove a favorite. Fails with `AssetNotFound` if it does not exist.
    async fn remove_favorite(
        &self,
        user_id: &str,
        asset_type: AssetType,
        external_id: &str,
    ) -> Result<(), CoreError>;

    /// Overwrite the description of a favorite, leaving every other field
    /// untouched. Fails with `AssetNotFound` if it does not exist.
    async fn edit_favorite_description(
        &self,
        user_id: &str,
        asset_type: AssetType,
        external_id: &str,
        description: &str,
    ) -> Result<(), CoreError>;
}
