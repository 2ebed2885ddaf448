//! Repository for the `favorites` table.

use favorites_core::assets::AssetType;
use favorites_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::{Favorite, FavoriteListingRow, NewFavorite};

/// Column list for `favorites` queries.
const COLUMNS: &str = "\
    id, user_id, asset_id, asset_type, description, \
    created_at, updated_at";

/// One ordered listing over all three catalog tables.
///
/// Rows are ordered by asset type (chart, insight, audience) and then by
/// favorite id, so LIMIT/OFFSET page over the whole union. Rows without a
/// matching catalog row are skipped.
const LISTING_QUERY: &str = "\
    SELECT f.id AS favorite_id, f.asset_type, f.description, \
           c.external_id AS chart_external_id, c.title AS chart_title, \
           c.x_axis_title AS chart_x_axis_title, c.y_axis_title AS chart_y_axis_title, \
           c.data AS chart_data, \
           i.external_id AS insight_external_id, i.text AS insight_text, \
           a.external_id AS audience_external_id, a.gender AS audience_gender, \
           a.birth_country AS audience_birth_country, a.age_groups AS audience_age_groups, \
           a.hours_on_social AS audience_hours_on_social, \
           a.purchases_last_month AS audience_purchases_last_month \
    FROM favorites f \
    LEFT JOIN charts c ON f.asset_type = 'chart' AND c.id = f.asset_id \
    LEFT JOIN insights i ON f.asset_type = 'insight' AND i.id = f.asset_id \
    LEFT JOIN audiences a ON f.asset_type = 'audience' AND a.id = f.asset_id \
    WHERE f.user_id = $1 \
      AND COALESCE(c.id, i.id, a.id) IS NOT NULL \
    ORDER BY CASE f.asset_type \
                 WHEN 'chart' THEN 0 \
                 WHEN 'insight' THEN 1 \
                 WHEN 'audience' THEN 2 \
                 ELSE 3 \
             END, \
             f.id \
    LIMIT $2 OFFSET $3";

/// Provides data access for user favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite. A second insert for the same
    /// `(user_id, asset_type, asset_id)` violates `uq_favorites_user_asset`.
    pub async fn insert(pool: &PgPool, input: &NewFavorite<'_>) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_id, asset_id, asset_type, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(input.user_id)
            .bind(input.asset_id)
            .bind(input.asset_type.as_str())
            .bind(input.description)
            .fetch_one(pool)
            .await
    }

    /// List a window of a user's favorites joined to their catalog rows.
    ///
    /// A `limit` of `None` returns every row from `offset` on. Negative
    /// values are floored at zero.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<FavoriteListingRow>, sqlx::Error> {
        sqlx::query_as::<_, FavoriteListingRow>(LISTING_QUERY)
            .bind(user_id)
            .bind(limit.map(|l| l.max(0)))
            .bind(offset.max(0))
            .fetch_all(pool)
            .await
    }

    /// Count all favorites of a user.
    pub async fn count_for_user(pool: &PgPool, user_id: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM favorites WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Delete a favorite. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        user_id: &str,
        asset_type: AssetType,
        asset_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM favorites \
             WHERE user_id = $1 AND asset_type = $2 AND asset_id = $3",
        )
        .bind(user_id)
        .bind(asset_type.as_str())
        .bind(asset_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite a favorite's description. Returns `true` if a row was updated.
    pub async fn update_description(
        pool: &PgPool,
        user_id: &str,
        asset_type: AssetType,
        asset_id: DbId,
        description: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE favorites SET description = $1, updated_at = NOW() \
             WHERE user_id = $2 AND asset_type = $3 AND asset_id = $4",
        )
        .bind(description)
        .bind(user_id)
        .bind(asset_type.as_str())
        .bind(asset_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
