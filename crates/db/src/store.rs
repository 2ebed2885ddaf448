//! Relational implementation of the favorites store.
//!
//! Every operation borrows one pooled connection for one short statement
//! (plus the external-id lookup on writes). Concurrency control is left to
//! Postgres: the `uq_favorites_user_asset` constraint is what rejects a
//! duplicate when two adds race.

use async_trait::async_trait;
use favorites_core::assets::{Asset, AssetType};
use favorites_core::error::{CoreError, NotFoundReason};
use favorites_core::pagination::Page;
use favorites_core::store::FavoriteStore;
use favorites_core::types::DbId;

use crate::config::DbConfig;
use crate::error::{is_duplicate_favorite, storage_error};
use crate::models::favorite::NewFavorite;
use crate::repositories::{AssetCatalogRepo, FavoriteRepo};
use crate::DbPool;

/// Postgres-backed [`FavoriteStore`].
#[derive(Debug, Clone)]
pub struct PgFavoriteStore {
    pool: DbPool,
}

impl PgFavoriteStore {
    /// Wrap an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect eagerly using `config`; an unreachable database fails here.
    pub async fn connect(config: &DbConfig) -> Result<Self, CoreError> {
        let pool = crate::create_pool(config).await.map_err(storage_error)?;
        tracing::info!(
            max_connections = config.max_connections,
            "Database connection pool created"
        );
        Ok(Self::new(pool))
    }

    /// The pool owned by this store.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    async fn resolve(
        &self,
        asset_type: AssetType,
        external_id: &str,
    ) -> Result<Option<DbId>, CoreError> {
        AssetCatalogRepo::resolve_internal_id(&self.pool, asset_type, external_id)
            .await
            .map_err(storage_error)
    }
}

#[async_trait]
impl FavoriteStore for PgFavoriteStore {
    async fn list_favorites(&self, user_id: &str, page: Page) -> Result<Vec<Asset>, CoreError> {
        let rows = FavoriteRepo::list_for_user(&self.pool, user_id, page.limit(), page.offset())
            .await
            .map_err(storage_error)?;

        let assets = rows
            .into_iter()
            .map(|row| row.into_asset())
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(user_id, count = assets.len(), "Listed favorites");
        Ok(assets)
    }

    async fn add_favorite(&self, user_id: &str, asset: &Asset) -> Result<(), CoreError> {
        asset.validate()?;

        let asset_type = asset.asset_type();
        let external_id = asset.external_id();
        let asset_id = self.resolve(asset_type, external_id).await?.ok_or_else(|| {
            CoreError::UnresolvedReference {
                asset_type,
                external_id: external_id.to_string(),
            }
        })?;

        let input = NewFavorite {
            user_id,
            asset_id,
            asset_type,
            description: asset.description(),
        };
        match FavoriteRepo::insert(&self.pool, &input).await {
            Ok(favorite) => {
                tracing::info!(
                    user_id,
                    %asset_type,
                    external_id,
                    favorite_id = favorite.id,
                    "Added favorite"
                );
                Ok(())
            }
            Err(e) if is_duplicate_favorite(&e) => {
                tracing::warn!(user_id, %asset_type, external_id, "Rejected duplicate favorite");
                Err(CoreError::DuplicateFavorite {
                    asset_type,
                    external_id: external_id.to_string(),
                })
            }
            Err(e) => Err(storage_error(e)),
        }
    }

    async fn remove_favorite(
        &self,
        user_id: &str,
        asset_type: AssetType,
        external_id: &str,
    ) -> Result<(), CoreError> {
        let asset_id = self.resolve(asset_type, external_id).await?.ok_or_else(|| {
            CoreError::not_found(asset_type, external_id, NotFoundReason::UnknownAsset)
        })?;

        let removed = FavoriteRepo::delete(&self.pool, user_id, asset_type, asset_id)
            .await
            .map_err(storage_error)?;
        if !removed {
            return Err(CoreError::not_found(
                asset_type,
                external_id,
                NotFoundReason::NotFavorited,
            ));
        }

        tracing::info!(user_id, %asset_type, external_id, "Removed favorite");
        Ok(())
    }

    async fn edit_favorite_description(
        &self,
        user_id: &str,
        asset_type: AssetType,
        external_id: &str,
        description: &str,
    ) -> Result<(), CoreError> {
        let asset_id = self.resolve(asset_type, external_id).await?.ok_or_else(|| {
            CoreError::not_found(asset_type, external_id, NotFoundReason::UnknownAsset)
        })?;

        let updated =
            FavoriteRepo::update_description(&self.pool, user_id, asset_type, asset_id, description)
                .await
                .map_err(storage_error)?;
        if !updated {
            return Err(CoreError::not_found(
                asset_type,
                external_id,
                NotFoundReason::NotFavorited,
            ));
        }

        tracing::info!(user_id, %asset_type, external_id, "Edited favorite description");
        Ok(())
    }
}
