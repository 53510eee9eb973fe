//! # foodfleet-catalog: Catalog Provider for FoodFleet
//!
//! Supplies restaurant cards and menus to the storefront.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FoodFleet Data Flow                              │
//! │                                                                         │
//! │  Storefront command (search_restaurants, get_restaurant)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                foodfleet-catalog (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐    │   │
//! │  │   │ Catalog trait │◄───│ StaticCatalog │◄───│  fixtures    │    │   │
//! │  │   │ restaurants() │    │ in memory     │    │  demo data   │    │   │
//! │  │   │ restaurant()  │    │ JSON file     │    └──────────────┘    │   │
//! │  │   │ menu()        │    └───────────────┘                        │   │
//! │  │   └───────────────┘                                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  foodfleet-core listing engine (filter / sort / paginate)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use foodfleet_catalog::{Catalog, StaticCatalog};
//!
//! let catalog = StaticCatalog::fixture();
//! assert_eq!(catalog.restaurants().len(), 6);
//! assert!(catalog.restaurant("3").is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fixtures;
pub mod static_catalog;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use static_catalog::StaticCatalog;

use foodfleet_core::{MenuItem, RestaurantDetail, RestaurantSummary};

/// Source of restaurants and menus.
///
/// Catalog values are read-only for the storefront; the listing engine
/// borrows [`Catalog::restaurants`] for the duration of one query.
pub trait Catalog {
    /// All restaurant cards, in catalog order.
    fn restaurants(&self) -> &[RestaurantSummary];

    /// Detail page data for one restaurant.
    fn restaurant(&self, id: &str) -> CatalogResult<RestaurantDetail>;

    /// Menu of one restaurant, in menu order.
    fn menu(&self, restaurant_id: &str) -> CatalogResult<Vec<MenuItem>> {
        self.restaurant(restaurant_id).map(|detail| detail.menu)
    }
}
