//! # Cart
//!
//! Cart lines, quantity rules, promo code state and derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Front-end Action         Cart Method             Cart Change           │
//! │  ────────────────         ───────────             ───────────           │
//! │                                                                         │
//! │  Add to Cart ────────────► add_item() ──────────► push or merge         │
//! │  [+] / [−] ──────────────► increment()/decrement()                      │
//! │  Type a quantity ────────► set_quantity() ──────► qty < 1 removes line  │
//! │  Trash icon ─────────────► remove_item() ───────► line removed          │
//! │  Apply promo ────────────► apply_promo() ───────► active code set/clear │
//! │  Render ─────────────────► totals() ────────────► (read only, derived)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Totals
//! The discount is never stored. Only the active promo *code* is kept, and
//! [`CartTotals::compute`] re-derives the discount from the current subtotal
//! on every call, so quantity changes can never leave a stale discount.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promo::{self, PromoCode};
use crate::validation::{validate_promo_code, validate_quantity};
use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the cart.
///
/// ## Design Notes
/// - `line_id`: unique within the cart. Equal to `item_id` for plain items;
///   customized items append their options so each variant gets its own line.
/// - Display fields are denormalized copies taken when the line was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub line_id: String,
    pub item_id: String,
    pub name: String,
    /// Unit price in cents, including any customization surcharge.
    pub unit_price_cents: i64,
    /// Always >= 1 while the line is in a cart.
    pub quantity: i64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    /// Human readable customization summary, e.g. "Large, Extra Cheese".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

impl CartLine {
    /// Creates a plain line whose line id is the item id.
    pub fn new(item_id: impl Into<String>, name: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        let item_id = item_id.into();
        CartLine {
            line_id: item_id.clone(),
            item_id,
            name: name.into(),
            unit_price_cents: unit_price.cents(),
            quantity,
            image_url: String::new(),
            restaurant_name: None,
            options: None,
        }
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets the restaurant the item comes from.
    pub fn with_restaurant(mut self, restaurant_name: impl Into<String>) -> Self {
        self.restaurant_name = Some(restaurant_name.into());
        self
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// What a quantity change did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum QuantityChange {
    Updated,
    /// The requested quantity was below 1, so the line is gone.
    Removed,
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals, derived from the lines and the active promo code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Number of distinct lines.
    pub item_count: usize,
    /// Sum of quantities (the cart badge).
    pub total_quantity: i64,
    pub subtotal: Money,
    pub discount: Money,
    pub delivery_fee: Money,
    pub total: Money,
    /// Active recognized promo code, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

impl CartTotals {
    /// Computes totals from scratch.
    ///
    /// ## Formula
    /// ```text
    /// subtotal     = Σ unit_price × quantity
    /// discount     = subtotal × rate(promo_code)       (0 when no code)
    /// delivery_fee = fee if any line else 0
    /// total        = max(0, subtotal − discount) + delivery_fee
    /// ```
    pub fn compute(lines: &[CartLine], promo_code: Option<&str>, delivery_fee: Money) -> Self {
        let subtotal: Money = lines.iter().map(CartLine::line_total).sum();
        let discount = subtotal.percentage(promo::rate_for(promo_code));
        let delivery_fee = if lines.is_empty() {
            Money::zero()
        } else {
            delivery_fee
        };

        CartTotals {
            item_count: lines.len(),
            total_quantity: lines.iter().map(|l| l.quantity).sum(),
            subtotal,
            discount,
            delivery_fee,
            total: (subtotal - discount).non_negative() + delivery_fee,
            promo_code: promo_code.and_then(promo::lookup).map(|p| p.code),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `line_id` (adding the same line increases quantity)
/// - Every line has `1 <= quantity <= MAX_ITEM_QUANTITY`
/// - At most `MAX_CART_LINES` lines
/// - `promo_code`, when set, is a recognized code
///
/// Only built through [`Cart::new`] and [`Cart::with_lines`], so every line
/// has passed [`Cart::add_item`]. Pages receive lines and totals, not the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    promo_code: Option<String>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Creates a cart pre-filled with lines, merging duplicates.
    pub fn with_lines(lines: impl IntoIterator<Item = CartLine>) -> CoreResult<Self> {
        let mut cart = Cart::new();
        for line in lines {
            cart.add_item(line)?;
        }
        Ok(cart)
    }

    /// Adds a line or increases the quantity of an existing one.
    ///
    /// ## Returns
    /// - `Err(Validation)` if the line's quantity is not in `1..=999`
    /// - `Err(QuantityTooLarge)` if merging would exceed the maximum
    /// - `Err(CartTooLarge)` if the cart is full
    pub fn add_item(&mut self, line: CartLine) -> CoreResult<()> {
        validate_quantity(line.quantity)?;

        if let Some(existing) = self.lines.iter_mut().find(|l| l.line_id == line.line_id) {
            let new_qty = existing.quantity + line.quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            existing.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(line);
        Ok(())
    }

    /// Sets a line's quantity.
    ///
    /// A quantity below 1 removes the line entirely; it is never clamped to 1.
    pub fn set_quantity(&mut self, line_id: &str, quantity: i64) -> CoreResult<QuantityChange> {
        if quantity < 1 {
            self.remove_item(line_id)?;
            return Ok(QuantityChange::Removed);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.line_id == line_id)
            .ok_or_else(|| CoreError::ItemNotInCart(line_id.to_string()))?;
        line.quantity = quantity;
        Ok(QuantityChange::Updated)
    }

    /// Adds one unit to a line.
    pub fn increment(&mut self, line_id: &str) -> CoreResult<QuantityChange> {
        let quantity = self.quantity_of(line_id)?;
        self.set_quantity(line_id, quantity + 1)
    }

    /// Removes one unit from a line; the last unit removes the line.
    pub fn decrement(&mut self, line_id: &str) -> CoreResult<QuantityChange> {
        let quantity = self.quantity_of(line_id)?;
        self.set_quantity(line_id, quantity - 1)
    }

    /// Removes a line and returns it.
    pub fn remove_item(&mut self, line_id: &str) -> CoreResult<CartLine> {
        let index = self
            .lines
            .iter()
            .position(|l| l.line_id == line_id)
            .ok_or_else(|| CoreError::ItemNotInCart(line_id.to_string()))?;
        Ok(self.lines.remove(index))
    }

    /// Empties the cart and drops the active promo code.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.promo_code = None;
    }

    /// Applies a promo code.
    ///
    /// ## Behavior
    /// - Empty code: `Err(Validation(Required))`, nothing changes
    /// - Recognized code: becomes the active code
    /// - Unrecognized code: active code is cleared (discount back to 0) and
    ///   `Err(InvalidPromoCode)` is returned so the caller can notify the user
    pub fn apply_promo(&mut self, code: &str) -> CoreResult<PromoCode> {
        let code = validate_promo_code(code)?;

        match promo::lookup(code) {
            Some(promo) => {
                self.promo_code = Some(promo.code.clone());
                Ok(promo)
            }
            None => {
                self.promo_code = None;
                Err(CoreError::InvalidPromoCode(code.to_string()))
            }
        }
    }

    /// Drops the active promo code.
    pub fn clear_promo(&mut self) {
        self.promo_code = None;
    }

    /// The active recognized promo code.
    pub fn promo_code(&self) -> Option<&str> {
        self.promo_code.as_deref()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Finds a line by id.
    pub fn line(&self, line_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.line_id == line_id)
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal (before discount and delivery).
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Derives the totals for display or checkout.
    pub fn totals(&self, delivery_fee: Money) -> CartTotals {
        CartTotals::compute(&self.lines, self.promo_code(), delivery_fee)
    }

    fn quantity_of(&self, line_id: &str) -> CoreResult<i64> {
        self.line(line_id)
            .map(|l| l.quantity)
            .ok_or_else(|| CoreError::ItemNotInCart(line_id.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FEE: Money = Money::from_cents(500);

    fn line(id: &str, price_cents: i64, quantity: i64) -> CartLine {
        CartLine::new(id, format!("Item {}", id), Money::from_cents(price_cents), quantity)
    }

    fn thirty_dollar_cart() -> Cart {
        Cart::with_lines([line("a", 1000, 2), line("b", 500, 2)]).unwrap()
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 1299, 2)).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().cents(), 2598);
    }

    #[test]
    fn test_cart_add_same_line_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 850, 2)).unwrap();
        cart.add_item(line("1", 850, 3)).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_add_rejects_bad_quantities() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.add_item(line("1", 100, 0)),
            Err(CoreError::Validation(_))
        ));

        cart.add_item(line("1", 100, 990)).unwrap();
        assert!(matches!(
            cart.add_item(line("1", 100, 10)),
            Err(CoreError::QuantityTooLarge { requested: 1000, .. })
        ));
    }

    #[test]
    fn test_with_lines_goes_through_add_item() {
        let cart = Cart::with_lines([line("a", 100, 2), line("a", 100, 3)]).unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 5);

        assert!(Cart::with_lines([line("a", 100, 1000)]).is_err());
        assert!(Cart::with_lines((0..=MAX_CART_LINES).map(|i| line(&i.to_string(), 100, 1))).is_err());
    }

    #[test]
    fn test_full_cart_at_max_price_stays_in_range() {
        let cart = Cart::with_lines(
            (0..MAX_CART_LINES).map(|i| line(&i.to_string(), crate::MAX_PRICE_CENTS, MAX_ITEM_QUANTITY)),
        )
        .unwrap();

        let totals = cart.totals(FEE);
        assert_eq!(totals.subtotal.cents(), 999_000_000_000);
        assert_eq!(totals.total.cents(), 999_000_000_500);
    }

    #[test]
    fn test_cart_size_limit() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_LINES {
            cart.add_item(line(&i.to_string(), 100, 1)).unwrap();
        }
        assert!(matches!(
            cart.add_item(line("extra", 100, 1)),
            Err(CoreError::CartTooLarge { .. })
        ));
    }

    #[test]
    fn test_quantity_below_one_removes_line() {
        let mut cart = thirty_dollar_cart();

        assert_eq!(cart.set_quantity("a", 0).unwrap(), QuantityChange::Removed);
        assert!(cart.line("a").is_none());
        assert_eq!(cart.item_count(), 1);

        assert_eq!(cart.set_quantity("b", -3).unwrap(), QuantityChange::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_last_unit_removes_line() {
        let mut cart = Cart::with_lines([line("a", 100, 1)]).unwrap();
        assert_eq!(cart.decrement("a").unwrap(), QuantityChange::Removed);
        assert!(cart.lines().iter().all(|l| l.quantity > 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_and_set_quantity() {
        let mut cart = thirty_dollar_cart();
        assert_eq!(cart.increment("a").unwrap(), QuantityChange::Updated);
        assert_eq!(cart.line("a").unwrap().quantity, 3);

        cart.set_quantity("a", 7).unwrap();
        assert_eq!(cart.line("a").unwrap().quantity, 7);

        assert!(matches!(
            cart.set_quantity("a", 1000),
            Err(CoreError::QuantityTooLarge { .. })
        ));
        assert!(matches!(
            cart.set_quantity("missing", 2),
            Err(CoreError::ItemNotInCart(_))
        ));
    }

    #[test]
    fn test_remove_unknown_line() {
        let mut cart = Cart::new();
        assert!(matches!(cart.remove_item("x"), Err(CoreError::ItemNotInCart(_))));
    }

    #[test]
    fn test_save10_on_thirty_dollars() {
        let mut cart = thirty_dollar_cart();
        cart.apply_promo("SAVE10").unwrap();

        let totals = cart.totals(FEE);
        assert_eq!(totals.subtotal.cents(), 3000);
        assert_eq!(totals.discount.cents(), 300);
        assert_eq!(totals.total.cents(), 3200);
        assert_eq!(totals.promo_code.as_deref(), Some("SAVE10"));
    }

    #[test]
    fn test_foodapp20_on_thirty_dollars() {
        let mut cart = thirty_dollar_cart();
        cart.apply_promo("foodapp20").unwrap();
        assert_eq!(cart.totals(FEE).discount.cents(), 600);
    }

    #[test]
    fn test_unrecognized_code_resets_discount() {
        let mut cart = thirty_dollar_cart();
        cart.apply_promo("SAVE10").unwrap();

        let err = cart.apply_promo("XYZ").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPromoCode(ref c) if c == "XYZ"));
        assert_eq!(cart.promo_code(), None);
        assert_eq!(cart.totals(FEE).discount, Money::zero());
    }

    #[test]
    fn test_empty_code_is_a_validation_error() {
        let mut cart = thirty_dollar_cart();
        cart.apply_promo("SAVE10").unwrap();

        assert!(matches!(cart.apply_promo("   "), Err(CoreError::Validation(_))));
        assert_eq!(cart.promo_code(), Some("SAVE10"));
    }

    #[test]
    fn test_discount_follows_subtotal() {
        let mut cart = thirty_dollar_cart();
        cart.apply_promo("SAVE10").unwrap();
        assert_eq!(cart.totals(FEE).discount.cents(), 300);

        cart.set_quantity("a", 4).unwrap();
        assert_eq!(cart.totals(FEE).subtotal.cents(), 5000);
        assert_eq!(cart.totals(FEE).discount.cents(), 500);
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = Cart::new().totals(FEE);
        assert!(totals.subtotal.is_zero());
        assert!(totals.discount.is_zero());
        assert!(totals.delivery_fee.is_zero());
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_total_never_negative() {
        let lines = [line("a", 100, 1)];
        let totals = CartTotals::compute(&lines, Some("SAVE10"), Money::zero());
        assert!(!totals.total.is_negative());
        assert_eq!(totals.total.cents(), 90);
    }

    #[test]
    fn test_clear_drops_promo() {
        let mut cart = thirty_dollar_cart();
        cart.apply_promo("SAVE10").unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.promo_code(), None);
    }
}
