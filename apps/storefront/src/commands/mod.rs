//! # Storefront Commands Module
//!
//! All commands exposed to the web front-end.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch table)
//! ├── listing.rs  ◄─── Home page search, cuisine filters, sort, paging
//! ├── menu.rs     ◄─── Restaurant page, add to cart, option pricing
//! ├── cart.rs     ◄─── Cart manipulation and promo codes
//! ├── order.rs    ◄─── Checkout, order history, tracking
//! ├── profile.rs  ◄─── Profile details, addresses, cards
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front-end                                                              │
//! │  ─────────                                                              │
//! │  {"command": "toggle_cuisine", "args": {"cuisine": "Pizza"}}            │
//! │         │                                                               │
//! │         │ (one JSON line on stdin)                                      │
//! │         ▼                                                               │
//! │  dispatch(&mut session, "toggle_cuisine", args)                         │
//! │         │                                                               │
//! │         │ args ──► CuisineArgs (serde)                                  │
//! │         ▼                                                               │
//! │  pub fn toggle_cuisine(                                                 │
//! │      session: &mut Session,  ◄── Owned by the driver                    │
//! │      args: CuisineArgs,      ◄── From the request                       │
//! │  ) -> ListingView                                                       │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  {"ok": {...ListingView...}}  or  {"error": {"code", "message"}}        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod config;
pub mod listing;
pub mod menu;
pub mod order;
pub mod profile;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::Session;

/// Routes a command to its handler.
///
/// Unknown command names are reported as `NOT_FOUND`; arguments that do not
/// fit the command's shape as `VALIDATION_ERROR`.
pub fn dispatch(session: &mut Session, command: &str, args: Value) -> Result<Value, ApiError> {
    match command {
        // Listing
        "get_listing" => reply(listing::get_listing(session)),
        "search_restaurants" => reply(listing::search_restaurants(session, parse(args)?)?),
        "toggle_cuisine" => reply(listing::toggle_cuisine(session, parse(args)?)),
        "clear_filters" => reply(listing::clear_filters(session)),
        "set_sort" => reply(listing::set_sort(session, parse(args)?)),
        "change_page" => reply(listing::change_page(session, parse(args)?)),

        // Menu
        "get_restaurant" => reply(menu::get_restaurant(session, parse(args)?)?),
        "price_customization" => reply(menu::price_customization(session, parse(args)?)?),
        "add_menu_item" => reply(menu::add_menu_item(session, parse(args)?)?),

        // Cart
        "get_cart" => reply(cart::get_cart(session)),
        "update_cart_item" => reply(cart::update_cart_item(session, parse(args)?)?),
        "increment_cart_item" => reply(cart::increment_cart_item(session, parse(args)?)?),
        "decrement_cart_item" => reply(cart::decrement_cart_item(session, parse(args)?)?),
        "remove_from_cart" => reply(cart::remove_from_cart(session, parse(args)?)?),
        "clear_cart" => reply(cart::clear_cart(session)),
        "apply_promo_code" => reply(cart::apply_promo_code(session, parse(args)?)?),
        "clear_promo_code" => reply(cart::clear_promo_code(session)),

        // Orders
        "checkout" => reply(order::checkout(session)?),
        "list_orders" => reply(order::list_orders(session)),
        "get_order" => reply(order::get_order(session, parse(args)?)?),
        "track_order" => reply(order::track_order(session, parse(args)?)?),
        "advance_order" => reply(order::advance_order(session, parse(args)?)?),

        // Profile
        "get_profile" => reply(profile::get_profile(session)),
        "update_profile" => reply(profile::update_profile(session, parse(args)?)?),
        "add_address" => reply(profile::add_address(session, parse(args)?)?),
        "remove_address" => reply(profile::remove_address(session, parse(args)?)?),
        "set_default_address" => reply(profile::set_default_address(session, parse(args)?)?),
        "add_payment_method" => reply(profile::add_payment_method(session, parse(args)?)?),
        "remove_payment_method" => reply(profile::remove_payment_method(session, parse(args)?)?),

        // Config
        "get_config" => reply(config::get_config(session)),

        _ => Err(ApiError::not_found("Command", command)),
    }
}

/// Decodes command arguments; a missing `args` reads as an empty object.
fn parse<T: DeserializeOwned>(args: Value) -> Result<T, ApiError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    Ok(serde_json::from_value(args)?)
}

fn reply<T: Serialize>(response: T) -> Result<Value, ApiError> {
    serde_json::to_value(response)
        .map_err(|e| ApiError::internal(format!("Failed to encode response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_session;
    use serde_json::json;

    #[test]
    fn test_unknown_command() {
        let mut session = test_session();
        let err = dispatch(&mut session, "launch_rocket", Value::Null).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Command not found: launch_rocket");
    }

    #[test]
    fn test_missing_required_argument() {
        let mut session = test_session();
        let err = dispatch(&mut session, "toggle_cuisine", json!({})).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_no_args_for_argless_command() {
        let mut session = test_session();
        let value = dispatch(&mut session, "get_cart", Value::Null).unwrap();
        assert_eq!(value["totals"]["totalQuantity"], 7);
    }

    #[test]
    fn test_listing_round_trip() {
        let mut session = test_session();
        dispatch(&mut session, "toggle_cuisine", json!({ "cuisine": "Italian" })).unwrap();
        let value = dispatch(&mut session, "set_sort", json!({ "sort": "rating" })).unwrap();

        assert_eq!(value["heading"], "Matching Restaurants");
        assert_eq!(value["page"]["totalMatches"], 1);
        assert_eq!(value["page"]["restaurants"][0]["name"], "Pizza Paradise");
    }
}
