//! Repository for the asset catalog tables (`charts`, `insights`,
//! `audiences`).
//!
//! Favorites can only reference assets already present in the catalog.
//! The catalog maps each asset's external id to the internal key that the
//! `favorites` table stores.

use favorites_core::assets::{Asset, AssetType};
use favorites_core::types::DbId;
use sqlx::PgPool;

/// Catalog table backing each asset type.
fn table_for(asset_type: AssetType) -> &'static str {
    match asset_type {
        AssetType::Chart => "charts",
        AssetType::Insight => "insights",
        AssetType::Audience => "audiences",
    }
}

/// Provides lookups and registration for catalog assets.
pub struct AssetCatalogRepo;

impl AssetCatalogRepo {
    /// Resolve an external id to the internal key of its catalog row.
    ///
    /// Returns `None` if the asset is not in the catalog. Called on every
    /// write; resolved keys are never cached.
    pub async fn resolve_internal_id(
        pool: &PgPool,
        asset_type: AssetType,
        external_id: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let query = format!(
            "SELECT id FROM {} WHERE external_id = $1",
            table_for(asset_type)
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(external_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or refresh the catalog row for `asset`, keyed by external id.
    ///
    /// Returns the row's internal key.
    pub async fn register(pool: &PgPool, asset: &Asset) -> Result<DbId, sqlx::Error> {
        match asset {
            Asset::Chart(chart) => {
                sqlx::query_scalar::<_, DbId>(
                    "INSERT INTO charts \
                         (external_id, title, x_axis_title, y_axis_title, data, description) \
                     VALUES ($1, $2, $3, $4, $5, $6) \
                     ON CONFLICT (external_id) DO UPDATE SET \
                         title = EXCLUDED.title, \
                         x_axis_title = EXCLUDED.x_axis_title, \
                         y_axis_title = EXCLUDED.y_axis_title, \
                         data = EXCLUDED.data, \
                         description = EXCLUDED.description, \
                         updated_at = NOW() \
                     RETURNING id",
                )
                .bind(&chart.id)
                .bind(&chart.title)
                .bind(&chart.x_axis_title)
                .bind(&chart.y_axis_title)
                .bind(&chart.data)
                .bind(&chart.description)
                .fetch_one(pool)
                .await
            }
            Asset::Insight(insight) => {
                sqlx::query_scalar::<_, DbId>(
                    "INSERT INTO insights (external_id, text, description) \
                     VALUES ($1, $2, $3) \
                     ON CONFLICT (external_id) DO UPDATE SET \
                         text = EXCLUDED.text, \
                         description = EXCLUDED.description, \
                         updated_at = NOW() \
                     RETURNING id",
                )
                .bind(&insight.id)
                .bind(&insight.text)
                .bind(&insight.description)
                .fetch_one(pool)
                .await
            }
            Asset::Audience(audience) => {
                sqlx::query_scalar::<_, DbId>(
                    "INSERT INTO audiences \
                         (external_id, gender, birth_country, age_groups, \
                          hours_on_social, purchases_last_month, description) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7) \
                     ON CONFLICT (external_id) DO UPDATE SET \
                         gender = EXCLUDED.gender, \
                         birth_country = EXCLUDED.birth_country, \
                         age_groups = EXCLUDED.age_groups, \
                         hours_on_social = EXCLUDED.hours_on_social, \
                         purchases_last_month = EXCLUDED.purchases_last_month, \
                         description = EXCLUDED.description, \
                         updated_at = NOW() \
                     RETURNING id",
                )
                .bind(&audience.id)
                .bind(&audience.gender)
                .bind(&audience.birth_country)
                .bind(&audience.age_groups)
                .bind(audience.hours_on_social)
                .bind(audience.purchases_last_month)
                .bind(&audience.description)
                .fetch_one(pool)
                .await
            }
        }
    }

    /// Delete a catalog row and every favorite pointing at it, in one
    /// transaction. Returns `true` if a catalog row was removed.
    pub async fn remove(
        pool: &PgPool,
        asset_type: AssetType,
        external_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "DELETE FROM {} WHERE external_id = $1 RETURNING id",
            table_for(asset_type)
        );
        let removed = sqlx::query_scalar::<_, DbId>(&query)
            .bind(external_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(asset_id) = removed else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM favorites WHERE asset_type = $1 AND asset_id = $2")
            .bind(asset_type.as_str())
            .bind(asset_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
