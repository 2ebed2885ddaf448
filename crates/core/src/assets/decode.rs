//! Decoding untyped key/value maps into typed assets.
//!
//! The request layer hands over a JSON object with a mandatory `type`
//! discriminator. The discriminator picks the variant; the remaining keys
//! are deserialized into that variant's struct.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{Asset, AssetType};
use crate::error::CoreError;

/// Decode a raw object into a typed [`Asset`].
///
/// - `type` missing, not a string, or not a known kind: `InvalidAssetKind`.
/// - Known kind, but `id` missing or a field of the wrong shape:
///   `MalformedAssetFields`.
///
/// Other missing fields take their empty defaults and are left for
/// [`Asset::validate`] to judge.
pub fn decode_asset(raw: &Map<String, Value>) -> Result<Asset, CoreError> {
    let kind = match raw.get("type") {
        Some(Value::String(kind)) => kind.as_str(),
        Some(other) => {
            return Err(CoreError::InvalidAssetKind(format!(
                "asset type must be a string, got {other}"
            )))
        }
        None => {
            return Err(CoreError::InvalidAssetKind(
                "missing asset type".to_string(),
            ))
        }
    };

    match kind.parse::<AssetType>()? {
        AssetType::Chart => decode_variant(raw, AssetType::Chart).map(Asset::Chart),
        AssetType::Insight => decode_variant(raw, AssetType::Insight).map(Asset::Insight),
        AssetType::Audience => decode_variant(raw, AssetType::Audience).map(Asset::Audience),
    }
}

fn decode_variant<T: DeserializeOwned>(
    raw: &Map<String, Value>,
    asset_type: AssetType,
) -> Result<T, CoreError> {
    serde_json::from_value(Value::Object(raw.clone()))
        .map_err(|e| CoreError::MalformedAssetFields(format!("invalid {asset_type} fields: {e}")))
}

impl TryFrom<Value> for Asset {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => decode_asset(&map),
            other => Err(CoreError::MalformedAssetFields(format!(
                "asset must be a JSON object, got {other}"
            ))),
        }
    }
}
