//! # Storefront Errors
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError   one field is wrong (name too short, bad email, ...)  │
//! │        │ #[from]                                                        │
//! │        ▼                                                                │
//! │  CoreError         a storefront rule said no (unknown promo code,       │
//! │        │           unavailable item, delivered order, ...)              │
//! │        ▼                                                                │
//! │  ApiError          storefront app; code + message sent to the page      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Zero search results and out-of-range pages are not errors; the listing
//! engine returns an empty page for both.

use thiserror::Error;

/// A storefront rule rejected the operation. Session state is unchanged
/// unless the variant says otherwise.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The code is not in the promo table.
    ///
    /// Unlike the other variants this one does change state: the active code
    /// is dropped so the discount returns to $0.00.
    /// ```text
    /// "XYZ" ──► apply_promo ──► promo cleared ──► "The promo code you
    ///                                              entered is not valid."
    /// ```
    #[error("Invalid promo code: {0}")]
    InvalidPromoCode(String),

    #[error("Item {0} is not in the cart")]
    ItemNotInCart(String),

    #[error("Item {0} is currently unavailable")]
    ItemUnavailable(String),

    /// Distinct line limit, not total quantity.
    #[error("The cart is full ({max} different items)")]
    CartTooLarge { max: usize },

    #[error("A line can hold at most {max} units, {requested} requested")]
    QuantityTooLarge { requested: i64, max: i64 },

    #[error("Cannot check out an empty cart")]
    EmptyCart,

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Delivered orders have nothing left to track.
    #[error("Order {0} has already been delivered")]
    OrderAlreadyDelivered(String),

    /// Rejected by the order status transition table.
    #[error("Order {order_id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        order_id: String,
        from: String,
        to: String,
    },

    #[error("Address not found: {0}")]
    AddressNotFound(String),

    #[error("Payment method not found: {0}")]
    PaymentMethodNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A single input field failed its rule. `field` is the label shown to the
/// user ("email", "promo code").
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} needs at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("{field} allows at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be from {min} to {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// `reason` completes the sentence: "email must be a valid email address".
    #[error("{field} {reason}")]
    InvalidFormat { field: String, reason: String },
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promo_and_transition_messages() {
        assert_eq!(
            CoreError::InvalidPromoCode("XYZ".to_string()).to_string(),
            "Invalid promo code: XYZ"
        );

        let err = CoreError::InvalidStatusTransition {
            order_id: "ORD001".to_string(),
            from: "DELIVERED".to_string(),
            to: "PREPARING_FOOD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Order ORD001 cannot move from DELIVERED to PREPARING_FOOD"
        );
    }

    #[test]
    fn test_field_messages_read_as_sentences() {
        let required = ValidationError::Required {
            field: "promo code".to_string(),
        };
        assert_eq!(required.to_string(), "promo code is required");

        let format = ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be a valid email address".to_string(),
        };
        assert_eq!(format.to_string(), "email must be a valid email address");
    }

    #[test]
    fn test_validation_passes_through_core_error() {
        let core: CoreError = ValidationError::TooShort {
            field: "name".to_string(),
            min: 2,
        }
        .into();

        assert!(matches!(core, CoreError::Validation(_)));
        assert_eq!(core.to_string(), "name needs at least 2 characters");
    }
}
