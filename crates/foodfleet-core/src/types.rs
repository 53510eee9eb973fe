//! # Domain Types
//!
//! Catalog types shared by the listing engine, the menu page and the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌───────────────────┐   ┌───────────────────┐   ┌─────────────────┐   │
//! │  │ RestaurantSummary │   │ RestaurantDetail  │   │    MenuItem     │   │
//! │  │ ───────────────── │   │ ───────────────── │   │  ─────────────  │   │
//! │  │ id                │◄──│ summary           │──►│  id             │   │
//! │  │ name              │   │ logo / cover      │   │  price_cents    │   │
//! │  │ cuisine_types     │   │ description       │   │  category       │   │
//! │  │ rating            │   │ address           │   │  is_available   │   │
//! │  │ delivery minutes  │   │ menu              │   │  customizable   │   │
//! │  └───────────────────┘   └───────────────────┘   └─────────────────┘   │
//! │                                                                         │
//! │  ┌───────────────────┐                                                  │
//! │  │   DiscountRate    │   bps (u32): 1000 = 10%                          │
//! │  └───────────────────┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All catalog values are immutable for the lifetime of a query; they are
//! produced by the catalog provider and only read by this crate.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (`SAVE10`), 2000 bps = 20% (`FOODAPP20`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Restaurant Summary
// =============================================================================

/// A restaurant as shown on the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RestaurantSummary {
    /// Unique identifier.
    pub id: String,

    /// Display name; also the default sort key.
    pub name: String,

    /// Card image reference.
    pub image_url: String,

    /// Ordered cuisine tags ("Italian", "Pizza", ...).
    pub cuisine_types: Vec<String>,

    /// Average rating, 0.0 to 5.0.
    pub rating: f64,

    /// Base delivery time in minutes.
    pub delivery_time_minutes: u32,

    /// Optional badge such as "20% OFF".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotional_tag: Option<String>,
}

impl RestaurantSummary {
    /// Checks if this restaurant carries the given cuisine tag (exact match).
    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.cuisine_types.iter().any(|c| c == cuisine)
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Base price in cents, before any customization surcharge.
    pub price_cents: i64,
    pub image_url: String,
    /// Unavailable items are listed but cannot be added to the cart.
    #[serde(default = "default_true")]
    pub is_available: bool,
    /// Customizable items open the options dialog instead of adding directly.
    #[serde(default)]
    pub customization_available: bool,
    /// Menu section, e.g. "Pizzas", "Desserts".
    pub category: String,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// Returns the base price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Restaurant Detail
// =============================================================================

/// A restaurant as shown on its menu page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RestaurantDetail {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub cover_image_url: String,
    pub rating: f64,
    pub cuisine_types: Vec<String>,
    pub description: String,
    pub address: String,
    pub menu: Vec<MenuItem>,
}

impl RestaurantDetail {
    /// Finds a menu item by id.
    pub fn menu_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == item_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
