use std::fmt;

use crate::assets::AssetType;

/// Why a favorite lookup came back empty.
///
/// Callers treat every reason as "not found"; the distinction only exists
/// for diagnostics and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The user has no favorites at all.
    UnknownUser,
    /// The asset is not registered in the catalog.
    UnknownAsset,
    /// The asset exists but the user has not favorited it.
    NotFavorited,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnknownUser => "no favorites for user",
            Self::UnknownAsset => "asset not in catalog",
            Self::NotFavorited => "asset not in favorites",
        };
        f.write_str(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid asset kind: {0}")]
    InvalidAssetKind(String),

    #[error("Malformed asset fields: {0}")]
    MalformedAssetFields(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Asset already in favorites: {asset_type} '{external_id}'")]
    DuplicateFavorite {
        asset_type: AssetType,
        external_id: String,
    },

    #[error("Asset not found: {asset_type} '{external_id}' ({reason})")]
    AssetNotFound {
        asset_type: AssetType,
        external_id: String,
        reason: NotFoundReason,
    },

    #[error("Could not resolve asset reference: {asset_type} '{external_id}'")]
    UnresolvedReference {
        asset_type: AssetType,
        external_id: String,
    },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl CoreError {
    /// Build an [`CoreError::AssetNotFound`] for the given identity.
    pub fn not_found(asset_type: AssetType, external_id: &str, reason: NotFoundReason) -> Self {
        Self::AssetNotFound {
            asset_type,
            external_id: external_id.to_string(),
            reason,
        }
    }
}
