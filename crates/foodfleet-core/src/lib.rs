//! # foodfleet-core: Pure Storefront Logic for FoodFleet
//!
//! This crate is the **heart** of the FoodFleet storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Where it Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FoodFleet Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Front-end (React)                        │   │
//! │  │   Home ──► Restaurant Menu ──► Cart ──► Profile / Orders        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront Commands                          │   │
//! │  │    search_restaurants, add_menu_item, apply_promo_code, ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ foodfleet-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ listing │ │  cart   │ │  menu   │ │  order  │ │ profile │  │   │
//! │  │   │ filter  │ │ totals  │ │ options │ │ status  │ │ details │  │   │
//! │  │   │ sort    │ │ promo   │ │ pricing │ │ tracking│ │ address │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   takes catalog data in, hands totals and views back out        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                foodfleet-catalog (Catalog Provider)             │   │
//! │  │              Static fixture, JSON catalog files                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (RestaurantSummary, MenuItem, ...)
//! - [`money`] - Cent amounts and half-up percentage rounding
//! - [`listing`] - Restaurant search/filter/sort/paginate engine
//! - [`cart`] - Cart lines and derived totals
//! - [`promo`] - Promo code table
//! - [`menu`] - Menu categories and item customization
//! - [`order`] - Order status transitions, tracking, checkout
//! - [`profile`] - User profile, addresses, payment methods
//! - [`error`] - Rule and field errors
//! - [`validation`] - Field validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use foodfleet_core::cart::{Cart, CartLine};
//! use foodfleet_core::money::Money;
//!
//! let mut cart = Cart::new();
//! cart.add_item(CartLine::new("item1", "Margherita Pizza", Money::from_cents(1500), 2)).unwrap();
//! cart.apply_promo("save10").unwrap();
//!
//! let totals = cart.totals(Money::from_cents(500));
//! assert_eq!(totals.subtotal.cents(), 3000);
//! assert_eq!(totals.discount.cents(), 300);
//! assert_eq!(totals.total.cents(), 3200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod listing;
pub mod menu;
pub mod money;
pub mod order;
pub mod profile;
pub mod promo;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of restaurants shown per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Flat delivery fee charged on any non-empty cart ($5.00).
pub const DEFAULT_DELIVERY_FEE_CENTS: i64 = 500;

/// Highest menu price or delivery fee accepted from a catalog file or the
/// environment ($100,000.00). Keeps a full cart's totals well inside `i64`.
pub const MAX_PRICE_CENTS: i64 = 10_000_000;

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
