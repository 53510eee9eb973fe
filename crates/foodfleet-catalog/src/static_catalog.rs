//! # Static Catalog
//!
//! An in-memory [`Catalog`] built from the demo fixture or a JSON file.
//!
//! ## File Shape
//! ```text
//! {
//!   "restaurants": [ RestaurantSummary, ... ],   // home page cards
//!   "details":     [ RestaurantDetail, ... ]     // menu pages (optional)
//! }
//! ```
//!
//! A restaurant listed in `restaurants` without a matching entry in
//! `details` still opens: its detail page is derived from the card with an
//! empty menu.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use foodfleet_core::validation::validate_price_cents;
use foodfleet_core::{RestaurantDetail, RestaurantSummary};

use crate::error::{CatalogError, CatalogResult};
use crate::fixtures;
use crate::Catalog;

/// Serialized form of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    restaurants: Vec<RestaurantSummary>,
    #[serde(default)]
    details: Vec<RestaurantDetail>,
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    restaurants: Vec<RestaurantSummary>,
    details: Vec<RestaurantDetail>,
}

impl StaticCatalog {
    /// Builds a catalog after checking its shape.
    pub fn new(
        restaurants: Vec<RestaurantSummary>,
        details: Vec<RestaurantDetail>,
    ) -> CatalogResult<Self> {
        validate(&restaurants, &details)?;
        Ok(StaticCatalog {
            restaurants,
            details,
        })
    }

    /// The built-in demo catalog.
    pub fn fixture() -> Self {
        StaticCatalog {
            restaurants: fixtures::restaurants(),
            details: vec![fixtures::sample_restaurant()],
        }
    }

    /// Parses a catalog from JSON text.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        StaticCatalog::new(file.restaurants, file.details)
    }

    /// Loads a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading catalog file");

        let json = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let catalog = StaticCatalog::from_json(&json)?;

        info!(
            path = %path.display(),
            restaurants = catalog.restaurants.len(),
            details = catalog.details.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Serializes the catalog in the file shape.
    pub fn to_json(&self) -> CatalogResult<String> {
        let file = CatalogFile {
            restaurants: self.restaurants.clone(),
            details: self.details.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Writes the catalog to a file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> CatalogResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|e| CatalogError::io(path, e))
    }
}

impl Catalog for StaticCatalog {
    fn restaurants(&self) -> &[RestaurantSummary] {
        &self.restaurants
    }

    fn restaurant(&self, id: &str) -> CatalogResult<RestaurantDetail> {
        if let Some(detail) = self.details.iter().find(|d| d.id == id) {
            return Ok(detail.clone());
        }

        self.restaurants
            .iter()
            .find(|r| r.id == id)
            .map(detail_from_summary)
            .ok_or_else(|| CatalogError::RestaurantNotFound(id.to_string()))
    }
}

fn detail_from_summary(summary: &RestaurantSummary) -> RestaurantDetail {
    RestaurantDetail {
        id: summary.id.clone(),
        name: summary.name.clone(),
        logo_url: summary.image_url.clone(),
        cover_image_url: summary.image_url.clone(),
        rating: summary.rating,
        cuisine_types: summary.cuisine_types.clone(),
        description: String::new(),
        address: String::new(),
        menu: Vec::new(),
    }
}

// =============================================================================
// Shape Checks
// =============================================================================

/// ## Rules
/// - Restaurant ids are unique, and detail ids are unique
/// - Ratings lie in `0.0..=5.0`
/// - Cuisine tags are non-empty strings
/// - Menu prices lie in `0..=MAX_PRICE_CENTS` and menu item ids are unique
///   per restaurant
fn validate(restaurants: &[RestaurantSummary], details: &[RestaurantDetail]) -> CatalogResult<()> {
    let mut ids = HashSet::new();
    for r in restaurants {
        if !ids.insert(r.id.as_str()) {
            return Err(CatalogError::Invalid(format!("duplicate restaurant id {}", r.id)));
        }
        check_restaurant(&r.id, r.rating, &r.cuisine_types)?;
    }

    let mut detail_ids = HashSet::new();
    for d in details {
        if !detail_ids.insert(d.id.as_str()) {
            return Err(CatalogError::Invalid(format!("duplicate detail id {}", d.id)));
        }
        check_restaurant(&d.id, d.rating, &d.cuisine_types)?;

        let mut item_ids = HashSet::new();
        for item in &d.menu {
            if !item_ids.insert(item.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate menu item {} in restaurant {}",
                    item.id, d.id
                )));
            }
            validate_price_cents(item.price_cents).map_err(|e| {
                CatalogError::Invalid(format!("menu item {}: {}", item.id, e))
            })?;
        }
    }

    Ok(())
}

fn check_restaurant(id: &str, rating: f64, cuisines: &[String]) -> CatalogResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(CatalogError::Invalid(format!(
            "restaurant {} has rating {} outside 0-5",
            id, rating
        )));
    }
    if cuisines.iter().any(|c| c.trim().is_empty()) {
        return Err(CatalogError::Invalid(format!(
            "restaurant {} has an empty cuisine tag",
            id
        )));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
