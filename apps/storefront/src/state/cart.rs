//! # Cart State
//!
//! The session's cart plus the view sent to the cart page.
//!
//! ## Demo Cart
//! ```text
//! ┌────────┬─────────────────────┬────────┬─────┬───────────────────┐
//! │ line   │ name                │ price  │ qty │ restaurant        │
//! ├────────┼─────────────────────┼────────┼─────┼───────────────────┤
//! │ item1  │ Margherita Pizza    │ $12.99 │  1  │ Luigi's Pizzeria  │
//! │ item2  │ Classic Beef Burger │  $8.50 │  2  │ Burger Haven      │
//! │ item3  │ Soda Can (Coke)     │  $1.99 │  4  │ Burger Haven      │
//! └────────┴─────────────────────┴────────┴─────┴───────────────────┘
//! subtotal $37.95 + delivery $5.00 = $42.95
//! ```

use serde::{Deserialize, Serialize};

use foodfleet_core::cart::{Cart, CartLine, CartTotals};
use foodfleet_core::{CoreResult, Money};

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

/// The session's cart.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Cart,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Creates the demo cart shown on first launch.
    pub fn demo() -> CoreResult<Self> {
        let cart = Cart::with_lines([
            CartLine::new("item1", "Margherita Pizza", Money::from_cents(1299), 1)
                .with_image("https://via.placeholder.com/100x100.png?text=Pizza")
                .with_restaurant("Luigi's Pizzeria"),
            CartLine::new("item2", "Classic Beef Burger", Money::from_cents(850), 2)
                .with_image("https://via.placeholder.com/100x100.png?text=Burger")
                .with_restaurant("Burger Haven"),
            CartLine::new("item3", "Soda Can (Coke)", Money::from_cents(199), 4)
                .with_image("https://via.placeholder.com/100x100.png?text=Soda")
                .with_restaurant("Burger Haven"),
        ])?;
        Ok(CartState { cart })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Lines and freshly derived totals.
    pub fn view(&self, delivery_fee: Money) -> CartView {
        CartView {
            lines: self.cart.lines().to_vec(),
            totals: self.cart.totals(delivery_fee),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_cart_totals() {
        let state = CartState::demo().unwrap();
        let view = state.view(Money::from_cents(500));

        assert_eq!(view.lines.len(), 3);
        assert_eq!(view.totals.total_quantity, 7);
        assert_eq!(view.totals.subtotal.cents(), 3795);
        assert_eq!(view.totals.total.cents(), 4295);
    }

    #[test]
    fn test_new_cart_is_empty() {
        let view = CartState::new().view(Money::from_cents(500));
        assert!(view.lines.is_empty());
        assert!(view.totals.total.is_zero());
    }
}
