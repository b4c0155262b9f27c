//! Equipment lookups
//!
//! List queries never fail: errors are logged and an empty list is returned,
//! so callers cannot tell "no results" from "request failed". Single-record
//! lookups propagate.

use rust_decimal::Decimal;
use tracing::{error, info};

use crate::{
    error::ClientResult,
    http::{ApiClient, RequestOptions},
    models::{Equipment, EquipmentFilters},
};

/// Equipment endpoints of the backend
#[derive(Clone)]
pub struct EquipmentApi {
    client: ApiClient,
}

impl EquipmentApi {
    /// Create a new equipment API
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Load equipment currently available for rent
    pub async fn load_equipment(&self, filters: &EquipmentFilters) -> Vec<Equipment> {
        info!("Loading available equipment");

        let mut options = RequestOptions::get();
        for (key, value) in filters.pairs() {
            options = options.query(key.as_str(), value.as_str());
        }

        self.list("/api/equipment/available", options, "Error loading equipment")
            .await
    }

    /// Search equipment by keyword
    pub async fn search_equipment(&self, keyword: &str) -> Vec<Equipment> {
        info!("Searching equipment for: {}", keyword);

        let options = RequestOptions::get().query("keyword", keyword);
        self.list("/api/equipment/search", options, "Error searching equipment")
            .await
    }

    /// Load featured equipment
    pub async fn featured_equipment(&self) -> Vec<Equipment> {
        info!("Loading featured equipment");

        self.list(
            "/api/equipment/featured",
            RequestOptions::get(),
            "Error loading featured equipment",
        )
        .await
    }

    /// Load equipment in a category
    pub async fn equipment_by_category(&self, category_id: &str) -> Vec<Equipment> {
        info!("Loading equipment for category: {}", category_id);

        self.list(
            &format!("/api/equipment/category/{}", category_id),
            RequestOptions::get(),
            "Error loading equipment by category",
        )
        .await
    }

    /// Load equipment stocked at a location
    pub async fn equipment_by_location(&self, location_id: &str) -> Vec<Equipment> {
        info!("Loading equipment for location: {}", location_id);

        self.list(
            &format!("/api/equipment/location/{}", location_id),
            RequestOptions::get(),
            "Error loading equipment by location",
        )
        .await
    }

    /// Load equipment whose daily rate lies within a range
    pub async fn equipment_by_price_range(&self, min: Decimal, max: Decimal) -> Vec<Equipment> {
        info!("Loading equipment priced between {} and {}", min, max);

        let options = RequestOptions::get()
            .query("minPrice", min.to_string())
            .query("maxPrice", max.to_string());
        self.list(
            "/api/equipment/price-range",
            options,
            "Error loading equipment by price range",
        )
        .await
    }

    /// Get a single item by ID
    pub async fn get_equipment(&self, id: &str) -> ClientResult<Equipment> {
        info!("Getting equipment: {}", id);

        self.client
            .fetch_api(&format!("/api/equipment/{}", id), RequestOptions::get())
            .await
            .inspect_err(|e| error!("Error getting equipment {}: {}", id, e))
    }

    async fn list(&self, path: &str, options: RequestOptions, context: &str) -> Vec<Equipment> {
        match self.client.fetch_api(path, options).await {
            Ok(equipment) => equipment,
            Err(e) => {
                error!("{}: {}", context, e);
                Vec::new()
            }
        }
    }
}
