//! # Order Commands
//!
//! Checkout, order history and delivery tracking.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Flow                                      │
//! │                                                                         │
//! │  1. Snapshot cart lines and totals ──► Order (ORDER_CONFIRMED, today)   │
//! │  2. Record order at the top of the history                              │
//! │  3. Clear cart (lines and promo code)                                   │
//! │                                                                         │
//! │  An empty cart fails at step 1 and nothing changes.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use foodfleet_core::order::{checkout as place_order, Order, TrackingStep};

use crate::error::ApiError;
use crate::Session;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderArgs {
    pub order_id: String,
}

/// An order together with its tracking stepper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingView {
    pub order: Order,
    pub steps: Vec<TrackingStep>,
}

/// Places an order for the current cart.
///
/// ## Errors
/// `CART_ERROR` when the cart is empty
pub fn checkout(session: &mut Session) -> Result<Order, ApiError> {
    debug!("checkout command");

    let today = Local::now().date_naive();
    let order = place_order(session.cart.cart(), session.config.delivery_fee(), today)?;

    info!(
        order_id = %order.id,
        total = order.total.cents(),
        items = order.items.len(),
        "Order placed"
    );

    session.profile.book_mut().record_order(order.clone());
    session.cart.cart_mut().clear();

    Ok(order)
}

/// Order history, newest first.
pub fn list_orders(session: &Session) -> Vec<Order> {
    debug!("list_orders command");
    session.profile.book().orders.clone()
}

pub fn get_order(session: &Session, args: OrderArgs) -> Result<Order, ApiError> {
    debug!(order_id = %args.order_id, "get_order command");
    Ok(session.profile.book().order(&args.order_id)?.clone())
}

/// Tracking stepper for an order on its way.
///
/// ## Errors
/// - `NOT_FOUND` for unknown order ids
/// - `ORDER_ERROR` for delivered orders
pub fn track_order(session: &Session, args: OrderArgs) -> Result<TrackingView, ApiError> {
    debug!(order_id = %args.order_id, "track_order command");

    let book = session.profile.book();
    let steps = book.track_order(&args.order_id)?;
    let order = book.order(&args.order_id)?.clone();

    Ok(TrackingView { order, steps })
}

/// Moves an order to its next status.
///
/// ## Errors
/// `ORDER_ERROR` when the order is already delivered
pub fn advance_order(session: &mut Session, args: OrderArgs) -> Result<Order, ApiError> {
    debug!(order_id = %args.order_id, "advance_order command");

    let status = session.profile.book_mut().advance_order(&args.order_id)?;
    info!(order_id = %args.order_id, status = %status, "Order status advanced");

    get_order(session, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_session;
    use foodfleet_core::order::{OrderStatus, StepState};

    fn order(id: &str) -> OrderArgs {
        OrderArgs {
            order_id: id.to_string(),
        }
    }

    #[test]
    fn test_checkout_records_order_and_clears_cart() {
        let mut session = test_session();
        let order = checkout(&mut session).unwrap();

        assert_eq!(order.status, OrderStatus::OrderConfirmed);
        assert_eq!(order.total.cents(), 4295);
        assert_eq!(order.restaurant_name, "Multiple restaurants");
        assert_eq!(order.items.len(), 3);

        assert!(session.cart.cart().is_empty());
        assert_eq!(list_orders(&session)[0].id, order.id);
        assert_eq!(list_orders(&session).len(), 5);
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut session = test_session();
        session.cart.cart_mut().clear();

        let err = checkout(&mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(list_orders(&session).len(), 4);
    }

    #[test]
    fn test_track_order() {
        let session = test_session();
        let view = track_order(&session, order("ORD002")).unwrap();

        assert_eq!(view.order.status, OrderStatus::OutForDelivery);
        assert_eq!(view.steps[2].state, StepState::Active);
        assert_eq!(view.steps[3].state, StepState::Pending);

        let err = track_order(&session, order("ORD001")).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderError);

        let err = track_order(&session, order("ORD999")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_advance_until_delivered() {
        let mut session = test_session();

        let advanced = advance_order(&mut session, order("ORD002")).unwrap();
        assert_eq!(advanced.status, OrderStatus::Delivered);

        let err = advance_order(&mut session, order("ORD002")).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderError);
    }
}
