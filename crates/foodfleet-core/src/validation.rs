//! # Validation Module
//!
//! Input validation utilities for the FoodFleet storefront.
//!
//! ## Field Rules
//! ```text
//! ┌──────────────────────┬──────────────────────────────────────────────────┐
//! │ Field                │ Rule                                             │
//! ├──────────────────────┼──────────────────────────────────────────────────┤
//! │ search term          │ ≤ 100 chars, taken as typed                      │
//! │ promo code           │ non-blank after trim                             │
//! │ name                 │ ≥ 2 chars after trim                             │
//! │ email                │ local@label.tld, no empty labels or spaces       │
//! │ phone (optional)     │ +? then 2..15 digits, no leading 0               │
//! │ special instructions │ ≤ 200 chars                                      │
//! │ quantity             │ 1..=999                                          │
//! │ price / fee (cents)  │ 0..=10_000_000                                   │
//! │ page                 │ 1..=total_pages                                  │
//! └──────────────────────┴──────────────────────────────────────────────────┘
//! ```
//!
//! Domain types call these before mutating, so a failed check leaves the
//! cart or profile exactly as it was.
//!
//! ## Usage
//! ```rust
//! use foodfleet_core::validation::{validate_email, validate_quantity};
//!
//! validate_email("jane.doe@example.com").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a listing search term.
pub const MAX_SEARCH_LENGTH: usize = 100;

/// Maximum length of special instructions on a customized item.
pub const MAX_INSTRUCTIONS_LENGTH: usize = 200;

/// Minimum length of a profile name.
pub const MIN_NAME_LENGTH: usize = 2;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a listing search term.
///
/// ## Rules
/// - Can be empty (matches every restaurant)
/// - Maximum 100 characters
/// - Whitespace is NOT trimmed; `" pizza"` only matches names containing
///   a space followed by "pizza"
pub fn validate_search_term(term: &str) -> ValidationResult<()> {
    if term.chars().count() > MAX_SEARCH_LENGTH {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: MAX_SEARCH_LENGTH,
        });
    }

    Ok(())
}

/// Validates a promo code entry and returns the trimmed code.
///
/// ## Example
/// ```rust
/// use foodfleet_core::validation::validate_promo_code;
///
/// assert_eq!(validate_promo_code("  save10 ").unwrap(), "save10");
/// assert!(validate_promo_code("   ").is_err());
/// ```
pub fn validate_promo_code(code: &str) -> ValidationResult<&str> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "promo code".to_string(),
        });
    }

    Ok(code)
}

/// Validates a profile display name.
///
/// ## Rules
/// - Required
/// - At least 2 characters after trimming
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::TooShort {
            field: "name".to_string(),
            min: MIN_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Required
/// - Exactly one `@` with a non-empty local part
/// - Domain has at least two dot-separated labels, none of them empty
/// - No whitespace anywhere
///
/// ## Example
/// ```rust
/// use foodfleet_core::validation::validate_email;
///
/// assert!(validate_email("jane.doe@example.com").is_ok());
/// assert!(validate_email("jane.doe@example").is_err());
/// assert!(validate_email("jane doe@example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must be a valid email address".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(invalid());
    }

    Ok(())
}

/// Validates an optional phone number.
///
/// ## Rules
/// - Empty is allowed (phone is optional)
/// - Spaces and dashes are ignored
/// - Then: optional leading `+`, a non-zero digit, 1 to 14 more digits
///
/// ```text
/// "123-456-7890"    ──► "1234567890"     ✓
/// "+44 20 7946 0958" ──► "+442079460958" ✓
/// "0123"            ──► leading zero     ✗
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let digits: String = phone
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();

    if digits.is_empty() {
        return Ok(());
    }

    let number = digits.strip_prefix('+').unwrap_or(&digits);
    let well_formed = number.len() >= 2
        && number.len() <= 15
        && number.chars().all(|c| c.is_ascii_digit())
        && !number.starts_with('0');

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be a valid phone number".to_string(),
        });
    }

    Ok(())
}

/// Validates special instructions on a customized item (optional, max 200).
pub fn validate_special_instructions(text: &str) -> ValidationResult<()> {
    if text.chars().count() > MAX_INSTRUCTIONS_LENGTH {
        return Err(ValidationError::TooLong {
            field: "special instructions".to_string(),
            max: MAX_INSTRUCTIONS_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// Setting an existing cart line below 1 is a removal, handled by the cart
/// before this check runs.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price or fee in cents.
///
/// ## Rules
/// - Zero is allowed (free items, free delivery)
/// - At most MAX_PRICE_CENTS, so line and cart sums cannot overflow
///
/// ```rust
/// use foodfleet_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1299).is_ok());
/// assert!(validate_price_cents(-1).is_err());
/// assert!(validate_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a requested listing page against the current page count.
///
/// ## Rules
/// - Must be between 1 and `total_pages` inclusive
/// - With zero pages every request is out of range
pub fn validate_page(page: usize, total_pages: usize) -> ValidationResult<()> {
    if page < 1 || page > total_pages {
        return Err(ValidationError::OutOfRange {
            field: "page".to_string(),
            min: 1,
            max: total_pages as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_search_term() {
        assert!(validate_search_term("").is_ok());
        assert!(validate_search_term(" pizza ").is_ok());
        assert!(validate_search_term(&"a".repeat(100)).is_ok());
        assert!(validate_search_term(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Jane Doe").is_ok());
        assert!(validate_name("Al").is_ok());
        assert!(matches!(
            validate_name("J"),
            Err(ValidationError::TooShort { min: 2, .. })
        ));
        assert!(matches!(
            validate_name("   "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane.doe@example.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("jane.doe").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("jane@.com").is_err());
        assert!(validate_email("jane@example.").is_err());
        assert!(validate_email("jane@@example.com").is_err());
        assert!(validate_email("jane@a..com").is_err());
        assert!(validate_email("jane@.a.com").is_err());
        assert!(validate_email("jane@mail.example.co.uk").is_ok());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("123-456-7890").is_ok());
        assert!(validate_phone("+44 20 7946 0958").is_ok());
        assert!(validate_phone("12").is_ok());

        assert!(validate_phone("0123456").is_err());
        assert!(validate_phone("1").is_err());
        assert!(validate_phone("555-CALL-NOW").is_err());
        assert!(validate_phone(&"1".repeat(16)).is_err());
        assert!(validate_phone("++123").is_err());
    }

    #[test]
    fn test_validate_special_instructions() {
        assert!(validate_special_instructions("").is_ok());
        assert!(validate_special_instructions(&"x".repeat(200)).is_ok());
        assert!(validate_special_instructions(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert!(validate_price_cents(MAX_PRICE_CENTS + 1).is_err());
        assert!(validate_price_cents(9_223_372_036_854_775_000).is_err());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_page() {
        assert!(validate_page(1, 2).is_ok());
        assert!(validate_page(2, 2).is_ok());
        assert!(validate_page(0, 2).is_err());
        assert!(validate_page(3, 2).is_err());
        assert!(validate_page(1, 0).is_err());
    }
}
