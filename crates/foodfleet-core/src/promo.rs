//! # Promo Codes
//!
//! Static table mapping promo code strings to discount rates.
//!
//! ```text
//! ┌──────────────┬──────────┐
//! │ Code         │ Discount │
//! ├──────────────┼──────────┤
//! │ SAVE10       │   10%    │
//! │ FOODAPP20    │   20%    │
//! └──────────────┴──────────┘
//! ```
//!
//! Codes match case-insensitively after trimming surrounding whitespace.
//! Anything else is "unrecognized"; what that means for the cart is decided
//! in [`crate::cart::Cart::apply_promo`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::DiscountRate;

/// Recognized codes and their rates, in basis points.
const PROMO_TABLE: &[(&str, u32)] = &[("SAVE10", 1000), ("FOODAPP20", 2000)];

/// A recognized promo code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PromoCode {
    /// Canonical (upper-case) code.
    pub code: String,
    pub rate: DiscountRate,
}

/// Looks up a code in the promo table.
///
/// ## Example
/// ```rust
/// use foodfleet_core::promo::lookup;
///
/// assert_eq!(lookup(" save10 ").unwrap().rate.bps(), 1000);
/// assert!(lookup("XYZ").is_none());
/// ```
pub fn lookup(code: &str) -> Option<PromoCode> {
    let wanted = code.trim().to_uppercase();
    PROMO_TABLE
        .iter()
        .find(|(known, _)| *known == wanted)
        .map(|(known, bps)| PromoCode {
            code: (*known).to_string(),
            rate: DiscountRate::from_bps(*bps),
        })
}

/// Discount rate for an optional active code; no code means no discount.
pub fn rate_for(code: Option<&str>) -> DiscountRate {
    code.and_then(lookup)
        .map(|promo| promo.rate)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(lookup("SAVE10").unwrap().rate.bps(), 1000);
        assert_eq!(lookup("FOODAPP20").unwrap().rate.bps(), 2000);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let promo = lookup("foodapp20").unwrap();
        assert_eq!(promo.code, "FOODAPP20");
    }

    #[test]
    fn test_unknown_and_empty_codes() {
        assert!(lookup("XYZ").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("SAVE").is_none());
    }

    #[test]
    fn test_rate_for() {
        assert_eq!(rate_for(Some("save10")).bps(), 1000);
        assert!(rate_for(Some("nope")).is_zero());
        assert!(rate_for(None).is_zero());
    }
}
