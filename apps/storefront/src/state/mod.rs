//! # Session State
//!
//! State owned by one storefront session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             Session                                     │
//! │                                                                         │
//! │  ConfigState   read-only after startup                                  │
//! │  ListingState  home page query (search, cuisines, sort, page)           │
//! │  CartState     cart lines + active promo code                           │
//! │  ProfileState  profile, addresses, cards, order history                 │
//! │                                                                         │
//! │  Commands borrow the session (&Session / &mut Session); there are no    │
//! │  locks and no globals.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod listing;
mod profile;

pub use cart::{CartState, CartView};
pub use config::{ConfigError, ConfigState};
pub use listing::{ListingState, ListingView};
pub use profile::ProfileState;
