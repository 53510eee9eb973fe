//! # Menu Commands
//!
//! Commands behind a restaurant's menu page.
//!
//! ## Add To Cart Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu card button                                                       │
//! │       │                                                                 │
//! │       ├── unavailable ──► button disabled (no command)                  │
//! │       │                                                                 │
//! │       ├── customize ────► options dialog                                │
//! │       │                     │  price_customization (live price)         │
//! │       │                     ▼                                           │
//! │       │                   add_menu_item { customization }               │
//! │       │                                                                 │
//! │       └── add to cart ──► add_menu_item                                 │
//! │                             │                                           │
//! │                             ▼                                           │
//! │                   catalog lookup ──► cart_line() ──► Cart::add_item     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use foodfleet_core::menu::{cart_line, menu_sections, Customization, MenuAction, MenuSection};
use foodfleet_core::{Money, RestaurantDetail};

use crate::error::ApiError;
use crate::state::CartView;
use crate::Session;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantArgs {
    pub restaurant_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMenuItemArgs {
    pub restaurant_id: String,
    pub item_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub customization: Option<Customization>,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCustomizationArgs {
    pub restaurant_id: String,
    pub item_id: String,
    #[serde(default)]
    pub customization: Customization,
}

/// A restaurant page: header, menu grouped by category, and the main button
/// action for every item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPage {
    pub restaurant: RestaurantDetail,
    pub sections: Vec<MenuSection>,
    /// Item id to menu card action.
    pub actions: BTreeMap<String, MenuAction>,
}

/// Live price shown in the customization dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationQuote {
    pub line_id: String,
    pub unit_price: Money,
    pub summary: String,
}

/// Gets a restaurant with its menu.
///
/// ## Errors
/// `NOT_FOUND` for unknown restaurant ids.
pub fn get_restaurant(session: &Session, args: RestaurantArgs) -> Result<RestaurantPage, ApiError> {
    debug!(restaurant_id = %args.restaurant_id, "get_restaurant command");

    let restaurant = session.catalog.restaurant(&args.restaurant_id)?;
    let sections = menu_sections(&restaurant.menu);
    let actions = restaurant
        .menu
        .iter()
        .map(|item| (item.id.clone(), item.primary_action()))
        .collect();

    Ok(RestaurantPage {
        restaurant,
        sections,
        actions,
    })
}

/// Prices a customization without touching the cart.
pub fn price_customization(
    session: &Session,
    args: PriceCustomizationArgs,
) -> Result<CustomizationQuote, ApiError> {
    debug!(restaurant_id = %args.restaurant_id, item_id = %args.item_id, "price_customization command");

    let restaurant = session.catalog.restaurant(&args.restaurant_id)?;
    let item = restaurant
        .menu_item(&args.item_id)
        .ok_or_else(|| ApiError::not_found("Menu item", &args.item_id))?;

    let line = cart_line(item, &restaurant.name, Some(args.customization), 1)?;
    Ok(CustomizationQuote {
        unit_price: line.unit_price(),
        summary: line.options.unwrap_or_default(),
        line_id: line.line_id,
    })
}

/// Adds a menu item to the cart.
///
/// ## Behavior
/// - Same item with the same options already in cart: quantity increases
/// - Otherwise a new line is added with the price frozen at this moment
///
/// ## Errors
/// - `NOT_FOUND` for unknown restaurants or menu items
/// - `CART_ERROR` for unavailable items or a full cart
/// - `VALIDATION_ERROR` for bad quantities or options on plain items
pub fn add_menu_item(session: &mut Session, args: AddMenuItemArgs) -> Result<CartView, ApiError> {
    debug!(
        restaurant_id = %args.restaurant_id,
        item_id = %args.item_id,
        quantity = args.quantity,
        "add_menu_item command"
    );

    let restaurant = session.catalog.restaurant(&args.restaurant_id)?;
    let item = restaurant
        .menu_item(&args.item_id)
        .ok_or_else(|| ApiError::not_found("Menu item", &args.item_id))?;

    let line = cart_line(item, &restaurant.name, args.customization, args.quantity)?;
    session.cart.cart_mut().add_item(line)?;

    Ok(session.cart.view(session.config.delivery_fee()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_session;
    use foodfleet_catalog::fixtures::SAMPLE_RESTAURANT_ID;
    use foodfleet_core::menu::{Size, Topping};

    fn add(item_id: &str, customization: Option<Customization>) -> AddMenuItemArgs {
        AddMenuItemArgs {
            restaurant_id: SAMPLE_RESTAURANT_ID.to_string(),
            item_id: item_id.to_string(),
            quantity: 1,
            customization,
        }
    }

    #[test]
    fn test_get_restaurant_sections_and_actions() {
        let session = test_session();
        let page = get_restaurant(
            &session,
            RestaurantArgs {
                restaurant_id: SAMPLE_RESTAURANT_ID.to_string(),
            },
        )
        .unwrap();

        assert_eq!(page.restaurant.name, "The Gourmet Place");
        assert_eq!(page.sections[0].category, "Pizzas");
        assert_eq!(page.sections[0].items.len(), 2);
        assert_eq!(page.actions["m1"], MenuAction::Customize);
        assert_eq!(page.actions["m2"], MenuAction::AddToCart);
        assert_eq!(page.actions["m4"], MenuAction::Unavailable);
    }

    #[test]
    fn test_unknown_restaurant() {
        let session = test_session();
        let err = get_restaurant(
            &session,
            RestaurantArgs {
                restaurant_id: "nope".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_plain_item_twice_merges() {
        let mut session = test_session();
        session.cart.cart_mut().clear();

        add_menu_item(&mut session, add("m2", None)).unwrap();
        let view = add_menu_item(&mut session, add("m2", None)).unwrap();

        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.lines[0].restaurant_name.as_deref(), Some("The Gourmet Place"));
        assert_eq!(view.totals.subtotal.cents(), 3100);
    }

    #[test]
    fn test_add_customized_item() {
        let mut session = test_session();
        session.cart.cart_mut().clear();

        let large = Customization::new(Size::Large, [Topping::ExtraCheese]);
        let view = add_menu_item(&mut session, add("m1", Some(large))).unwrap();

        // 12.99 + 4.00 + 1.50
        assert_eq!(view.lines[0].unit_price_cents, 1849);
        assert_eq!(view.lines[0].line_id, "m1:Large+ExtraCheese");
    }

    #[test]
    fn test_add_unavailable_item() {
        let mut session = test_session();
        let err = add_menu_item(&mut session, add("m4", None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_add_unknown_item() {
        let mut session = test_session();
        let err = add_menu_item(&mut session, add("m99", None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_price_customization_leaves_cart_alone() {
        let session = test_session();
        let before = session.cart.cart().total_quantity();

        let quote = price_customization(
            &session,
            PriceCustomizationArgs {
                restaurant_id: SAMPLE_RESTAURANT_ID.to_string(),
                item_id: "m5".to_string(),
                customization: Customization::new(Size::Small, [Topping::Olives]),
            },
        )
        .unwrap();

        assert_eq!(quote.unit_price.cents(), 1525);
        assert_eq!(quote.summary, "Small, Olives");
        assert_eq!(session.cart.cart().total_quantity(), before);
    }
}
