//! Process-local favorites store.
//!
//! Intended for development and tests. One readers-writer lock guards the
//! whole collection; reads overlap, writes are exclusive. No I/O happens
//! while the lock is held.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::assets::{Asset, AssetKey, AssetType};
use crate::error::{CoreError, NotFoundReason};
use crate::pagination::Page;
use crate::store::FavoriteStore;

/// A favorited asset plus its insertion sequence number.
#[derive(Debug, Clone)]
struct StoredFavorite {
    seq: u64,
    asset: Asset,
}

/// user id -> asset identity -> favorite.
#[derive(Debug, Default)]
struct FavoritesCollection {
    users: HashMap<String, HashMap<AssetKey, StoredFavorite>>,
    next_seq: u64,
}

/// In-memory [`FavoriteStore`].
///
/// Each instance owns its own collection; wrap it in an `Arc` to share it
/// across tasks.
#[derive(Debug, Default)]
pub struct InMemoryFavoriteStore {
    favorites: RwLock<FavoritesCollection>,
}

impl InMemoryFavoriteStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of favorites currently held for `user_id`.
    pub async fn favorite_count(&self, user_id: &str) -> usize {
        self.favorites
            .read()
            .await
            .users
            .get(user_id)
            .map_or(0, HashMap::len)
    }
}

#[async_trait]
impl FavoriteStore for InMemoryFavoriteStore {
    async fn list_favorites(&self, user_id: &str, page: Page) -> Result<Vec<Asset>, CoreError> {
        let mut entries: Vec<StoredFavorite> = {
            let favorites = self.favorites.read().await;
            match favorites.users.get(user_id) {
                Some(inner) => inner.values().cloned().collect(),
                None => Vec::new(),
            }
        };

        entries.sort_by_key(|entry| (entry.asset.asset_type().rank(), entry.seq));
        let assets: Vec<Asset> = page.apply(entries.into_iter()).map(|e| e.asset).collect();

        tracing::debug!(user_id, count = assets.len(), "Listed in-memory favorites");
        Ok(assets)
    }

    async fn add_favorite(&self, user_id: &str, asset: &Asset) -> Result<(), CoreError> {
        asset.validate()?;
        let key = asset.key();

        {
            let mut favorites = self.favorites.write().await;
            let seq = favorites.next_seq;
            let inner = favorites.users.entry(user_id.to_string()).or_default();
            if inner.contains_key(&key) {
                drop(favorites);
                tracing::warn!(
                    user_id,
                    asset_type = %key.asset_type,
                    external_id = %key.external_id,
                    "Rejected duplicate favorite"
                );
                return Err(CoreError::DuplicateFavorite {
                    asset_type: key.asset_type,
                    external_id: key.external_id,
                });
            }
            inner.insert(
                key.clone(),
                StoredFavorite {
                    seq,
                    asset: asset.clone(),
                },
            );
            favorites.next_seq += 1;
        }

        tracing::info!(
            user_id,
            asset_type = %key.asset_type,
            external_id = %key.external_id,
            "Added favorite"
        );
        Ok(())
    }

    async fn remove_favorite(
        &self,
        user_id: &str,
        asset_type: AssetType,
        external_id: &str,
    ) -> Result<(), CoreError> {
        let key = AssetKey::new(asset_type, external_id);

        {
            let mut favorites = self.favorites.write().await;
            let inner = favorites.users.get_mut(user_id).ok_or_else(|| {
                CoreError::not_found(asset_type, external_id, NotFoundReason::UnknownUser)
            })?;
            if inner.remove(&key).is_none() {
                return Err(CoreError::not_found(
                    asset_type,
                    external_id,
                    NotFoundReason::NotFavorited,
                ));
            }
            if inner.is_empty() {
                favorites.users.remove(user_id);
            }
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
        let key = AssetKey::new(asset_type, external_id);

        {
            let mut favorites = self.favorites.write().await;
            let inner = favorites.users.get_mut(user_id).ok_or_else(|| {
                CoreError::not_found(asset_type, external_id, NotFoundReason::UnknownUser)
            })?;
            let entry = inner.get_mut(&key).ok_or_else(|| {
                CoreError::not_found(asset_type, external_id, NotFoundReason::NotFavorited)
            })?;
            entry.asset.set_description(description);
        }

        tracing::info!(user_id, %asset_type, external_id, "Edited favorite description");
        Ok(())
    }
}
