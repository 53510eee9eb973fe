//! # Money Module
//!
//! Every price, discount, fee and total in the storefront is a [`Money`]
//! value: a count of cents in an `i64`.
//!
//! ## Rounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart: Margherita $12.99 ×1, Burger $8.50 ×2, Soda $1.99 ×4             │
//! │                                                                         │
//! │  subtotal  1299 + 1700 + 796           = 3795 cents   exact             │
//! │  SAVE10    3795 × 1000 bps / 10000     =  379.5       rounds ONCE       │
//! │                                        →  380 cents   (half-up)         │
//! │  total     3795 − 380 + 500            = 3915 cents   exact             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only [`Money::percentage`] rounds; sums, differences and quantity
//! multiples stay exact.
//!
//! ## Usage
//! ```rust
//! use foodfleet_core::money::Money;
//!
//! let soda = Money::from_cents(199);
//! let line = soda.multiply_quantity(4);
//! assert_eq!(line.to_string(), "$7.96");
//! assert_eq!((line + Money::from_cents(500)).cents(), 1296);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::types::DiscountRate;

/// An amount in cents.
///
/// Signed so that `subtotal − discount` can be computed before clamping with
/// [`Money::non_negative`]. Serialized as a bare integer (`1299`).
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► CartLine.unit_price ──► CartLine.line_total
///                                                  │
///                     CartTotals.subtotal ◄────────┘
///                            │
///                            ├──► discount (promo rate)
///                            └──► total ──► Order.total
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// ```rust
    /// use foodfleet_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1299).to_string(), "$12.99");
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps to zero, so a discount larger than the subtotal leaves nothing
    /// owed rather than a credit.
    #[inline]
    pub const fn non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// `rate` of this amount, rounded half-up to the cent.
    ///
    /// Computed as `(cents × bps + 5000) / 10000` in `i128`.
    ///
    /// ## Example
    /// ```rust
    /// use foodfleet_core::money::Money;
    /// use foodfleet_core::types::DiscountRate;
    ///
    /// let ten_percent = DiscountRate::from_bps(1000);
    /// assert_eq!(Money::from_cents(3000).percentage(ten_percent).cents(), 300);
    /// assert_eq!(Money::from_cents(5395).percentage(ten_percent).cents(), 540);
    /// ```
    pub fn percentage(&self, rate: DiscountRate) -> Money {
        let scaled = i128::from(self.0) * i128::from(rate.bps()) + 5000;
        Money((scaled / 10000) as i64)
    }

    /// Line total for `qty` units at this unit price.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// `$12.34`, `-$5.50`. Pages with a configured currency symbol format through
/// the storefront config instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "${}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    #[inline]
    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Money;

    #[inline]
    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}
