//! # Orders
//!
//! Order status lifecycle, tracking steps and checkout.
//!
//! ## Status Lifecycle
//! ```text
//! ┌──────────────────┐   ┌────────────────┐   ┌──────────────────┐   ┌───────────┐
//! │ ORDER_CONFIRMED  │──►│ PREPARING_FOOD │──►│ OUT_FOR_DELIVERY │──►│ DELIVERED │
//! └──────────────────┘   └────────────────┘   └──────────────────┘   └───────────┘
//!
//! Only single forward steps. DELIVERED is terminal and not trackable.
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Shown as the restaurant of an order whose lines come from several places.
pub const MULTIPLE_RESTAURANTS: &str = "Multiple restaurants";

// =============================================================================
// Order Status
// =============================================================================

/// Delivery progress of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    OrderConfirmed,
    PreparingFood,
    OutForDelivery,
    /// Terminal.
    Delivered,
}

impl OrderStatus {
    /// Every status in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::OrderConfirmed,
        OrderStatus::PreparingFood,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// The following status, `None` once delivered.
    pub const fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::OrderConfirmed => Some(OrderStatus::PreparingFood),
            OrderStatus::PreparingFood => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    /// Checks the transition table (single forward step only).
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.next() == Some(target)
    }

    /// Anything not yet delivered can be tracked.
    pub const fn is_trackable(&self) -> bool {
        !matches!(self, OrderStatus::Delivered)
    }

    /// Position in the lifecycle, 0-based.
    pub const fn index(&self) -> usize {
        match self {
            OrderStatus::OrderConfirmed => 0,
            OrderStatus::PreparingFood => 1,
            OrderStatus::OutForDelivery => 2,
            OrderStatus::Delivered => 3,
        }
    }

    /// Wire code, e.g. `OUT_FOR_DELIVERY`.
    pub const fn code(&self) -> &'static str {
        match self {
            OrderStatus::OrderConfirmed => "ORDER_CONFIRMED",
            OrderStatus::PreparingFood => "PREPARING_FOOD",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
        }
    }

    /// Step label for the tracking stepper.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::OrderConfirmed => "Order Confirmed",
            OrderStatus::PreparingFood => "Preparing Food",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::OrderConfirmed
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Tracking
// =============================================================================

/// State of one step in the tracking stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

/// One step of the tracking stepper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStep {
    pub status: OrderStatus,
    pub label: String,
    pub state: StepState,
}

/// The four stepper steps relative to `current`.
///
/// ## Example
/// ```rust
/// use foodfleet_core::order::{tracking_steps, OrderStatus, StepState};
///
/// let steps = tracking_steps(OrderStatus::PreparingFood);
/// assert_eq!(steps[0].state, StepState::Completed);
/// assert_eq!(steps[1].state, StepState::Active);
/// assert_eq!(steps[3].state, StepState::Pending);
/// ```
pub fn tracking_steps(current: OrderStatus) -> Vec<TrackingStep> {
    OrderStatus::ALL
        .iter()
        .map(|status| {
            let state = match status.index().cmp(&current.index()) {
                std::cmp::Ordering::Less => StepState::Completed,
                std::cmp::Ordering::Equal => StepState::Active,
                std::cmp::Ordering::Greater => StepState::Pending,
            };
            TrackingStep {
                status: *status,
                label: status.label().to_string(),
                state,
            }
        })
        .collect()
}

// =============================================================================
// Order
// =============================================================================

/// A line of a placed order; `price` is the unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub price: Money,
}

/// A placed order as shown in the order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[ts(as = "String")]
    pub placed_on: NaiveDate,
    pub restaurant_name: String,
    pub total: Money,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Moves the order to its next status.
    pub fn advance(&mut self) -> CoreResult<OrderStatus> {
        let next = self.status.next().ok_or_else(|| CoreError::InvalidStatusTransition {
            order_id: self.id.clone(),
            from: self.status.to_string(),
            to: "(none)".to_string(),
        })?;
        self.transition_to(next)?;
        Ok(next)
    }

    /// Moves the order to `target` if the transition table allows it.
    pub fn transition_to(&mut self, target: OrderStatus) -> CoreResult<()> {
        if !self.status.can_transition_to(target) {
            return Err(CoreError::InvalidStatusTransition {
                order_id: self.id.clone(),
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        self.status = target;
        Ok(())
    }

    /// Tracking stepper for this order.
    pub fn tracking(&self) -> Vec<TrackingStep> {
        tracking_steps(self.status)
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// Turns the cart into a freshly confirmed order.
///
/// The cart itself is left untouched; callers clear it once the order has
/// been recorded.
pub fn checkout(cart: &Cart, delivery_fee: Money, today: NaiveDate) -> CoreResult<Order> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let totals = cart.totals(delivery_fee);
    let items = cart
        .lines()
        .iter()
        .map(|line| OrderItem {
            id: line.line_id.clone(),
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.unit_price(),
        })
        .collect();

    Ok(Order {
        id: uuid::Uuid::new_v4().to_string(),
        placed_on: today,
        restaurant_name: common_restaurant(cart),
        total: totals.total,
        status: OrderStatus::OrderConfirmed,
        items,
    })
}

fn common_restaurant(cart: &Cart) -> String {
    let mut names = cart.lines().iter().map(|l| l.restaurant_name.as_deref());
    let first = names.next().flatten();
    match first {
        Some(name) if names.all(|n| n == Some(name)) => name.to_string(),
        _ => MULTIPLE_RESTAURANTS.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 24).unwrap()
    }

    fn order(status: OrderStatus) -> Order {
        Order {
            id: "ORD002".to_string(),
            placed_on: date(),
            restaurant_name: "Burger Joint".to_string(),
            total: Money::from_cents(1550),
            status,
            items: vec![],
        }
    }

    #[test]
    fn test_transition_table() {
        use OrderStatus::*;
        assert!(OrderConfirmed.can_transition_to(PreparingFood));
        assert!(PreparingFood.can_transition_to(OutForDelivery));
        assert!(OutForDelivery.can_transition_to(Delivered));

        assert!(!OrderConfirmed.can_transition_to(Delivered));
        assert!(!Delivered.can_transition_to(PreparingFood));
        assert!(!PreparingFood.can_transition_to(PreparingFood));
        assert_eq!(Delivered.next(), None);
    }

    #[test]
    fn test_trackable() {
        assert!(OrderStatus::OrderConfirmed.is_trackable());
        assert!(OrderStatus::OutForDelivery.is_trackable());
        assert!(!OrderStatus::Delivered.is_trackable());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"OUT_FOR_DELIVERY\"");
        let parsed: OrderStatus = serde_json::from_str("\"ORDER_CONFIRMED\"").unwrap();
        assert_eq!(parsed, OrderStatus::OrderConfirmed);
    }

    #[test]
    fn test_tracking_steps_when_delivered() {
        let steps = tracking_steps(OrderStatus::Delivered);
        assert_eq!(steps.len(), 4);
        assert!(steps[..3].iter().all(|s| s.state == StepState::Completed));
        assert_eq!(steps[3].state, StepState::Active);
        assert_eq!(steps[2].label, "Out for Delivery");
    }

    #[test]
    fn test_advance_through_lifecycle() {
        let mut o = order(OrderStatus::OrderConfirmed);
        assert_eq!(o.advance().unwrap(), OrderStatus::PreparingFood);
        assert_eq!(o.advance().unwrap(), OrderStatus::OutForDelivery);
        assert_eq!(o.advance().unwrap(), OrderStatus::Delivered);
        assert!(matches!(
            o.advance(),
            Err(CoreError::InvalidStatusTransition { .. })
        ));
        assert_eq!(o.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_transition_to_rejects_skips() {
        let mut o = order(OrderStatus::OrderConfirmed);
        let err = o.transition_to(OrderStatus::Delivered).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order ORD002 cannot move from ORDER_CONFIRMED to DELIVERED"
        );
        assert_eq!(o.status, OrderStatus::OrderConfirmed);
    }

    #[test]
    fn test_checkout_empty_cart() {
        assert!(matches!(
            checkout(&Cart::new(), Money::from_cents(500), date()),
            Err(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_checkout_single_restaurant() {
        let mut cart = Cart::new();
        cart.add_item(
            CartLine::new("item2", "Classic Beef Burger", Money::from_cents(850), 2)
                .with_restaurant("Burger Haven"),
        )
        .unwrap();
        cart.add_item(
            CartLine::new("item3", "Soda Can (Coke)", Money::from_cents(199), 4)
                .with_restaurant("Burger Haven"),
        )
        .unwrap();

        let placed = checkout(&cart, Money::from_cents(500), date()).unwrap();
        assert_eq!(placed.restaurant_name, "Burger Haven");
        assert_eq!(placed.status, OrderStatus::OrderConfirmed);
        assert_eq!(placed.total.cents(), 1700 + 796 + 500);
        assert_eq!(placed.items.len(), 2);
        assert_eq!(placed.placed_on, date());
        assert!(uuid::Uuid::parse_str(&placed.id).is_ok());
    }

    #[test]
    fn test_checkout_multiple_restaurants() {
        let cart = Cart::with_lines([
            CartLine::new("item1", "Margherita Pizza", Money::from_cents(1299), 1)
                .with_restaurant("Luigi's Pizzeria"),
            CartLine::new("item2", "Classic Beef Burger", Money::from_cents(850), 1)
                .with_restaurant("Burger Haven"),
        ])
        .unwrap();

        let placed = checkout(&cart, Money::zero(), date()).unwrap();
        assert_eq!(placed.restaurant_name, MULTIPLE_RESTAURANTS);
    }

    #[test]
    fn test_checkout_applies_promo() {
        let mut cart = Cart::with_lines([CartLine::new("a", "A", Money::from_cents(3000), 1)]).unwrap();
        cart.apply_promo("FOODAPP20").unwrap();
        let placed = checkout(&cart, Money::from_cents(500), date()).unwrap();
        assert_eq!(placed.total.cents(), 2400 + 500);
    }
}
