//! Favorite models and DTOs.
//!
//! A favorite joins a user to a row of one of the catalog tables
//! (`charts`, `insights`, `audiences`) and carries the user's own
//! description of it.

use favorites_core::assets::{Asset, AssetType, Audience, Chart, Insight};
use favorites_core::error::CoreError;
use favorites_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `favorites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: String,
    pub asset_id: DbId,
    pub asset_type: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One row of a user's favorites listing.
///
/// The listing query left-joins every catalog table, so only the columns of
/// the row's own asset type are populated.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteListingRow {
    pub favorite_id: DbId,
    pub asset_type: String,
    pub description: String,

    pub chart_external_id: Option<String>,
    pub chart_title: Option<String>,
    pub chart_x_axis_title: Option<String>,
    pub chart_y_axis_title: Option<String>,
    pub chart_data: Option<Vec<i32>>,

    pub insight_external_id: Option<String>,
    pub insight_text: Option<String>,

    pub audience_external_id: Option<String>,
    pub audience_gender: Option<String>,
    pub audience_birth_country: Option<String>,
    pub audience_age_groups: Option<Vec<String>>,
    pub audience_hours_on_social: Option<i32>,
    pub audience_purchases_last_month: Option<i32>,
}

impl FavoriteListingRow {
    /// Assemble the typed asset, using the favorite's description.
    ///
    /// Fails with `InvalidAssetKind` if the stored type is unknown and with
    /// `MalformedAssetFields` if the joined catalog columns are missing.
    pub fn into_asset(self) -> Result<Asset, CoreError> {
        let asset_type: AssetType = self.asset_type.parse()?;
        let favorite_id = self.favorite_id;
        let missing = |column: &str| {
            CoreError::MalformedAssetFields(format!(
                "favorite {favorite_id}: {asset_type} row has no {column}"
            ))
        };

        let asset = match asset_type {
            AssetType::Chart => Asset::Chart(Chart {
                id: self.chart_external_id.ok_or_else(|| missing("external_id"))?,
                title: self.chart_title.ok_or_else(|| missing("title"))?,
                x_axis_title: self.chart_x_axis_title.unwrap_or_default(),
                y_axis_title: self.chart_y_axis_title.unwrap_or_default(),
                data: self.chart_data.unwrap_or_default(),
                description: self.description,
            }),
            AssetType::Insight => Asset::Insight(Insight {
                id: self.insight_external_id.ok_or_else(|| missing("external_id"))?,
                text: self.insight_text.ok_or_else(|| missing("text"))?,
                description: self.description,
            }),
            AssetType::Audience => Asset::Audience(Audience {
                id: self
                    .audience_external_id
                    .ok_or_else(|| missing("external_id"))?,
                gender: self.audience_gender.ok_or_else(|| missing("gender"))?,
                birth_country: self
                    .audience_birth_country
                    .ok_or_else(|| missing("birth_country"))?,
                age_groups: self.audience_age_groups.unwrap_or_default(),
                hours_on_social: self.audience_hours_on_social.unwrap_or_default(),
                purchases_last_month: self.audience_purchases_last_month.unwrap_or_default(),
                description: self.description,
            }),
        };
        Ok(asset)
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a favorite once the asset's internal key is resolved.
#[derive(Debug, Clone)]
pub struct NewFavorite<'a> {
    pub user_id: &'a str,
    pub asset_id: DbId,
    pub asset_type: AssetType,
    pub description: &'a str,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn empty_row(asset_type: &str) -> FavoriteListingRow {
        FavoriteListingRow {
            favorite_id: 1,
            asset_type: asset_type.to_string(),
            description: "mine".to_string(),
            chart_external_id: None,
            chart_title: None,
            chart_x_axis_title: None,
            chart_y_axis_title: None,
            chart_data: None,
            insight_external_id: None,
            insight_text: None,
            audience_external_id: None,
            audience_gender: None,
            audience_birth_country: None,
            audience_age_groups: None,
            audience_hours_on_social: None,
            audience_purchases_last_month: None,
        }
    }

    #[test]
    fn chart_row_uses_favorite_description() {
        let row = FavoriteListingRow {
            chart_external_id: Some("c1".into()),
            chart_title: Some("T".into()),
            chart_data: Some(vec![1, 2, 3]),
            ..empty_row("chart")
        };

        let asset = row.into_asset().unwrap();
        assert_eq!(asset.description(), "mine");
        assert_matches!(asset, Asset::Chart(ref c) if c.id == "c1" && c.data == vec![1, 2, 3]);
    }

    #[test]
    fn audience_row_maps_every_column() {
        let row = FavoriteListingRow {
            audience_external_id: Some("a1".into()),
            audience_gender: Some("female".into()),
            audience_birth_country: Some("UK".into()),
            audience_age_groups: Some(vec!["18-24".into()]),
            audience_hours_on_social: Some(6),
            audience_purchases_last_month: Some(5),
            ..empty_row("audience")
        };

        let asset = row.into_asset().unwrap();
        assert_eq!(
            asset,
            Asset::Audience(Audience {
                id: "a1".into(),
                gender: "female".into(),
                birth_country: "UK".into(),
                age_groups: vec!["18-24".into()],
                hours_on_social: 6,
                purchases_last_month: 5,
                description: "mine".into(),
            })
        );
    }

    #[test]
    fn unknown_type_is_invalid_kind() {
        assert_matches!(
            empty_row("dashboard").into_asset(),
            Err(CoreError::InvalidAssetKind(_))
        );
    }

    #[test]
    fn missing_joined_columns_are_malformed() {
        assert_matches!(
            empty_row("insight").into_asset(),
            Err(CoreError::MalformedAssetFields(_))
        );
    }
}
