//! # FoodFleet Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FoodFleet Storefront                             │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │                      Web Front-end                               │   │
//! │  │  • Restaurant listing   • Menu & options dialog                  │   │
//! │  │  • Cart & promo codes   • Profile & order tracking               │   │
//! │  └──────────────────────────────┬───────────────────────────────────┘   │
//! │                                 │ JSON lines (stdin / stdout)           │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │                    Rust Backend (this crate)                     │   │
//! │  │                                                                  │   │
//! │  │  main.rs ────► Calls run()                                       │   │
//! │  │  lib.rs ─────► Logging, config, catalog, session, serve loop     │   │
//! │  │  commands/ ──► search_restaurants, add_menu_item, checkout, ...  │   │
//! │  │  state/ ─────► ConfigState, ListingState, CartState, Profile     │   │
//! │  └──────────────────────────────┬───────────────────────────────────┘   │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │            Catalog (built-in, or FOODFLEET_CATALOG_PATH)         │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Session setup and the serve loop live in lib.rs
    foodfleet_storefront::run()
}
