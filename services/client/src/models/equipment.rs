//! Equipment models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rental equipment item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Equipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EquipmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<EquipmentCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_rental_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_rental_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_deposit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Equipment {
    /// Letter shown in place of a missing picture
    pub fn initial(&self) -> Option<char> {
        self.name
            .as_deref()
            .and_then(|name| name.trim().chars().next())
            .map(|c| c.to_ascii_uppercase())
    }
}

/// Equipment availability status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentStatus {
    Available,
    Rented,
    Maintenance,
    Reserved,
    OutOfService,
    Retired,
    /// Value not known to this client, kept verbatim
    #[serde(untagged)]
    Other(String),
}

/// Physical condition of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentCondition {
    Excellent,
    Good,
    Fair,
    Poor,
    NeedsRepair,
    /// Value not known to this client, kept verbatim
    #[serde(untagged)]
    Other(String),
}

/// Query filters for the availability listing
///
/// Pairs are sent in insertion order as URL query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentFilters {
    pairs: Vec<(String, String)>,
}

impl EquipmentFilters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Whether no filter is set
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Filters as query pairs
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EquipmentFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
