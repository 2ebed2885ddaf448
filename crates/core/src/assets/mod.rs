//! Favoritable asset model.
//!
//! An [`Asset`] is one of a closed set of variants (chart, insight,
//! audience). Every variant carries a business-facing external id, a
//! user-editable description and a validation predicate. Adding a variant
//! means extending the enum; every consumption point matches exhaustively.

pub mod decode;
pub mod variants;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use decode::decode_asset;
pub use variants::{Audience, Chart, Insight};

/* --------------------------------------------------------------------------
   Asset type discriminator
   -------------------------------------------------------------------------- */

/// Discriminator for the asset variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Chart,
    Insight,
    Audience,
}

impl AssetType {
    /// All asset types, in listing order.
    pub const ALL: [AssetType; 3] = [AssetType::Chart, AssetType::Insight, AssetType::Audience];

    /// The discriminator string used on the wire and in the `favorites` table.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Chart => "chart",
            AssetType::Insight => "insight",
            AssetType::Audience => "audience",
        }
    }

    /// Position of this type in a favorites listing.
    pub fn rank(self) -> u8 {
        match self {
            AssetType::Chart => 0,
            AssetType::Insight => 1,
            AssetType::Audience => 2,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chart" => Ok(AssetType::Chart),
            "insight" => Ok(AssetType::Insight),
            "audience" => Ok(AssetType::Audience),
            other => Err(CoreError::InvalidAssetKind(format!(
                "Unknown asset type '{other}'. Must be one of: chart, insight, audience"
            ))),
        }
    }
}

/* --------------------------------------------------------------------------
   Asset identity
   -------------------------------------------------------------------------- */

/// Identity of an asset within one user's favorites.
///
/// External ids are only unique per asset type, so the type is part of the
/// key on every backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey {
    pub asset_type: AssetType,
    pub external_id: String,
}

impl AssetKey {
    pub fn new(asset_type: AssetType, external_id: impl Into<String>) -> Self {
        Self {
            asset_type,
            external_id: external_id.into(),
        }
    }
}

/* --------------------------------------------------------------------------
   Asset sum type
   -------------------------------------------------------------------------- */

/// A favoritable unit of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Asset {
    Chart(Chart),
    Insight(Insight),
    Audience(Audience),
}

impl Asset {
    pub fn asset_type(&self) -> AssetType {
        match self {
            Asset::Chart(_) => AssetType::Chart,
            Asset::Insight(_) => AssetType::Insight,
            Asset::Audience(_) => AssetType::Audience,
        }
    }

    pub fn external_id(&self) -> &str {
        match self {
            Asset::Chart(chart) => &chart.id,
            Asset::Insight(insight) => &insight.id,
            Asset::Audience(audience) => &audience.id,
        }
    }

    pub fn key(&self) -> AssetKey {
        AssetKey::new(self.asset_type(), self.external_id())
    }

    pub fn description(&self) -> &str {
        match self {
            Asset::Chart(chart) => &chart.description,
            Asset::Insight(insight) => &insight.description,
            Asset::Audience(audience) => &audience.description,
        }
    }

    /// Replace the description. This is the only field that may change
    /// after an asset has been favorited.
    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        match self {
            Asset::Chart(chart) => chart.description = description,
            Asset::Insight(insight) => insight.description = description,
            Asset::Audience(audience) => audience.description = description,
        }
    }

    /// Check the variant's own required fields. Does not consult any store.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Asset::Chart(chart) => chart.validate(),
            Asset::Insight(insight) => insight.validate(),
            Asset::Audience(audience) => audience.validate(),
        }
    }
}

impl From<Chart> for Asset {
    fn from(chart: Chart) -> Self {
        Asset::Chart(chart)
    }
}

impl From<Insight> for Asset {
    fn from(insight: Insight) -> Self {
        Asset::Insight(insight)
    }
}

impl From<Audience> for Asset {
    fn from(audience: Audience) -> Self {
        Asset::Audience(audience)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn chart(id: &str) -> Asset {
        Chart {
            id: id.to_string(),
            title: "T".to_string(),
            data: vec![1, 2, 3],
            ..Default::default()
        }
        .into()
    }

    #[test]
    fn asset_type_round_trips_through_str() {
        for asset_type in AssetType::ALL {
            assert_eq!(asset_type.as_str().parse::<AssetType>().unwrap(), asset_type);
        }
    }

    #[test]
    fn unknown_asset_type_is_invalid_kind() {
        assert_matches!("graph".parse::<AssetType>(), Err(CoreError::InvalidAssetKind(_)));
        assert_matches!("Chart".parse::<AssetType>(), Err(CoreError::InvalidAssetKind(_)));
    }

    #[test]
    fn rank_follows_all_order() {
        let ranks: Vec<u8> = AssetType::ALL.iter().map(|t| t.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn key_combines_type_and_external_id() {
        assert_eq!(chart("c1").key(), AssetKey::new(AssetType::Chart, "c1"));
    }

    #[test]
    fn set_description_touches_only_description() {
        let mut asset = chart("c1");
        asset.set_description("new");

        assert_eq!(asset.description(), "new");
        assert_matches!(&asset, Asset::Chart(c) if c.title == "T" && c.data == vec![1, 2, 3]);
        assert_eq!(asset.external_id(), "c1");
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(chart("c1")).unwrap();
        assert_eq!(json["type"], "chart");
        assert_eq!(json["id"], "c1");
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }
}
