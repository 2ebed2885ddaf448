//! Demo favorites for local development.

use crate::assets::{Asset, Audience, Chart, Insight};
use crate::error::CoreError;
use crate::store::FavoriteStore;

/// The demo users and their favorites, in insertion order.
pub fn demo_favorites() -> Vec<(&'static str, Asset)> {
    vec![
        (
            "johnsmith",
            Chart {
                id: "chart_engagement_2024".into(),
                title: "Q1 2024 Social Media Engagement".into(),
                x_axis_title: "Month".into(),
                y_axis_title: "Engagement (k)".into(),
                data: vec![85, 92, 110, 130],
                description: "Tracks monthly engagement for all channels in Q1 2024.".into(),
            }
            .into(),
        ),
        (
            "johnsmith",
            Insight {
                id: "insight_active_users".into(),
                text: "78% of millennials engage with branded content daily.".into(),
                description: "Based on 2024 survey data across EMEA.".into(),
            }
            .into(),
        ),
        (
            "johnsmith",
            Audience {
                id: "aud_greece_men_24_35".into(),
                gender: "male".into(),
                birth_country: "Greece".into(),
                age_groups: vec!["24-35".into()],
                hours_on_social: 4,
                purchases_last_month: 3,
                description: "Digitally active Greek men aged 24-35 with high purchasing intent."
                    .into(),
            }
            .into(),
        ),
        (
            "maria.papadopoulou",
            Chart {
                id: "chart_ecom_conversion".into(),
                title: "E-commerce Conversion Rates 2024".into(),
                x_axis_title: "Week".into(),
                y_axis_title: "Conversion Rate (%)".into(),
                data: vec![2, 2, 3, 4, 3, 5, 4],
                description: "Weekly conversion rate trend for Q2 2024.".into(),
            }
            .into(),
        ),
        (
            "maria.papadopoulou",
            Insight {
                id: "insight_genz_tiktok".into(),
                text: "Gen Z users are 3x more likely to purchase after seeing a TikTok ad."
                    .into(),
                description: "Finding from global digital consumer study 2024.".into(),
            }
            .into(),
        ),
        (
            "maria.papadopoulou",
            Audience {
                id: "aud_uk_females_18_24".into(),
                gender: "female".into(),
                birth_country: "UK".into(),
                age_groups: vec!["18-24".into()],
                hours_on_social: 6,
                purchases_last_month: 5,
                description: "UK-based young women, highly active on Instagram and TikTok."
                    .into(),
            }
            .into(),
        ),
    ]
}

/// Add the demo favorites to `store`.
///
/// Favorites that are already present are skipped, so seeding twice is
/// harmless. Returns the number of favorites added.
pub async fn seed_store(store: &dyn FavoriteStore) -> Result<usize, CoreError> {
    let mut added = 0;
    for (user_id, asset) in demo_favorites() {
        match store.add_favorite(user_id, &asset).await {
            Ok(()) => added += 1,
            Err(CoreError::DuplicateFavorite { .. }) => {}
            Err(e) => return Err(e),
        }
    }
    tracing::info!(added, "Seeded demo favorites");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_store::InMemoryFavoriteStore;
    use crate::pagination::Page;

    #[test]
    fn demo_assets_are_valid() {
        for (_, asset) in demo_favorites() {
            asset.validate().unwrap();
        }
    }

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let store = InMemoryFavoriteStore::new();
        assert_eq!(seed_store(&store).await.unwrap(), 6);
        assert_eq!(seed_store(&store).await.unwrap(), 0);

        let listed = store.list_favorites("johnsmith", Page::all()).await.unwrap();
        assert_eq!(listed.len(), 3);
    }
}
