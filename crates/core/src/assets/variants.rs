//! Concrete asset variants and their validation rules.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A chart: titled axes over a series of integer data points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_axis_title: String,
    #[serde(default)]
    pub y_axis_title: String,
    #[serde(default)]
    pub data: Vec<i32>,
    #[serde(default)]
    pub description: String,
}

impl Chart {
    /// A chart needs an id and a title.
    pub fn validate(&self) -> Result<(), CoreError> {
        if is_blank(&self.id) || is_blank(&self.title) {
            return Err(CoreError::ValidationFailed(
                "chart must have id and title".to_string(),
            ));
        }
        Ok(())
    }
}

/// A free-text insight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub description: String,
}

impl Insight {
    pub fn validate(&self) -> Result<(), CoreError> {
        if is_blank(&self.id) || is_blank(&self.text) {
            return Err(CoreError::ValidationFailed(
                "insight must have id and text".to_string(),
            ));
        }
        Ok(())
    }
}

/// An audience segment described by demographics and behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audience {
    pub id: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birth_country: String,
    #[serde(default)]
    pub age_groups: Vec<String>,
    #[serde(default)]
    pub hours_on_social: i32,
    #[serde(default)]
    pub purchases_last_month: i32,
    #[serde(default)]
    pub description: String,
}

impl Audience {
    pub fn validate(&self) -> Result<(), CoreError> {
        if is_blank(&self.id) || is_blank(&self.gender) || is_blank(&self.birth_country) {
            return Err(CoreError::ValidationFailed(
                "audience must have id, gender, and birth country".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
