//! # Cart Commands
//!
//! Commands for cart manipulation and promo codes.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │  │  Empty   │────►│ In Cart  │────►│  Promo   │────►│ Checkout │        │
//! │  │  Cart    │     │          │     │ applied  │     │ (order)  │        │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘        │
//! │                        │                                  │             │
//! │                   add_menu_item                      checkout          │
//! │                   update_cart_item                   (order.rs)        │
//! │                   increment / decrement                   │             │
//! │                   remove_from_cart                        │             │
//! │                        │                                  ▼             │
//! │                   clear_cart ─────────────────────► (back to empty)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with the whole cart, totals recomputed.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use foodfleet_core::cart::QuantityChange;

use crate::error::ApiError;
use crate::state::CartView;
use crate::Session;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineArgs {
    pub line_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityArgs {
    pub line_id: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoArgs {
    pub code: String,
}

fn view(session: &Session) -> CartView {
    session.cart.view(session.config.delivery_fee())
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with lines and calculated totals
pub fn get_cart(session: &Session) -> CartView {
    debug!("get_cart command");
    view(session)
}

/// Sets a line's quantity; zero or less removes the line.
pub fn update_cart_item(session: &mut Session, args: UpdateQuantityArgs) -> Result<CartView, ApiError> {
    debug!(line_id = %args.line_id, quantity = args.quantity, "update_cart_item command");

    let change = session
        .cart
        .cart_mut()
        .set_quantity(&args.line_id, args.quantity)?;
    if change == QuantityChange::Removed {
        debug!(line_id = %args.line_id, "Line removed");
    }

    Ok(view(session))
}

pub fn increment_cart_item(session: &mut Session, args: LineArgs) -> Result<CartView, ApiError> {
    debug!(line_id = %args.line_id, "increment_cart_item command");
    session.cart.cart_mut().increment(&args.line_id)?;
    Ok(view(session))
}

/// Decreases a line by one; the last unit removes the line.
pub fn decrement_cart_item(session: &mut Session, args: LineArgs) -> Result<CartView, ApiError> {
    debug!(line_id = %args.line_id, "decrement_cart_item command");
    session.cart.cart_mut().decrement(&args.line_id)?;
    Ok(view(session))
}

pub fn remove_from_cart(session: &mut Session, args: LineArgs) -> Result<CartView, ApiError> {
    debug!(line_id = %args.line_id, "remove_from_cart command");
    session.cart.cart_mut().remove_item(&args.line_id)?;
    Ok(view(session))
}

/// Empties the cart and drops the promo code.
pub fn clear_cart(session: &mut Session) -> CartView {
    debug!("clear_cart command");
    session.cart.cart_mut().clear();
    view(session)
}

/// Applies a promo code (case-insensitive, surrounding spaces ignored).
///
/// ## Errors
/// - `VALIDATION_ERROR` for a blank code
/// - `INVALID_PROMO_CODE` for codes not in the promo table; any previously
///   applied code is dropped so the discount returns to zero
pub fn apply_promo_code(session: &mut Session, args: PromoArgs) -> Result<CartView, ApiError> {
    debug!(code = %args.code, "apply_promo_code command");

    match session.cart.cart_mut().apply_promo(&args.code) {
        Ok(promo) => {
            debug!(code = %promo.code, bps = promo.rate.bps(), "Promo code applied");
            Ok(view(session))
        }
        Err(e) => {
            warn!(error = %e, "Promo code rejected");
            Err(e.into())
        }
    }
}

pub fn clear_promo_code(session: &mut Session) -> CartView {
    debug!("clear_promo_code command");
    session.cart.cart_mut().clear_promo();
    view(session)
}
