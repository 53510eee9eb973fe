//! # API Error Types
//!
//! Errors as the web front-end sees them.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError ──► CoreError ──┐                                      │
//! │                                  ├──► ApiError ──► {"error": {...}}     │
//! │  CatalogError ───────────────────┘                                      │
//! │                                                                         │
//! │  Malformed request JSON ─────────────► ApiError(VALIDATION_ERROR)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::error;

use foodfleet_catalog::CatalogError;
use foodfleet_core::{CoreError, ValidationError};

use crate::state::ConfigError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the front-end receives when a command fails:
/// ```json
/// {
///   "code": "INVALID_PROMO_CODE",
///   "message": "Invalid promo code: XYZ"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Front-end
/// ```typescript
/// const reply = await send({ command: 'apply_promo_code', args: { code } });
/// if (reply.error?.code === 'INVALID_PROMO_CODE') {
///   toast.error('The promo code you entered is not valid.');
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Restaurant, cart line, order, address or command not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Promo code not in the promo table
    InvalidPromoCode,

    /// Cart operation failed (unavailable item, full cart, empty checkout)
    CartError,

    /// Order lifecycle violation
    OrderError,

    /// Catalog could not be loaded
    CatalogError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::InvalidPromoCode(_) => ApiError::new(ErrorCode::InvalidPromoCode, message),
            CoreError::ItemNotInCart(id) => ApiError::not_found("Cart item", &id),
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            CoreError::AddressNotFound(id) => ApiError::not_found("Address", &id),
            CoreError::PaymentMethodNotFound(id) => ApiError::not_found("Payment method", &id),
            CoreError::ItemUnavailable(_) | CoreError::CartTooLarge { .. } | CoreError::EmptyCart => {
                ApiError::cart(message)
            }
            CoreError::QuantityTooLarge { .. } => ApiError::validation(message),
            CoreError::OrderAlreadyDelivered(_) | CoreError::InvalidStatusTransition { .. } => {
                ApiError::new(ErrorCode::OrderError, message)
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::RestaurantNotFound(id) => ApiError::not_found("Restaurant", &id),
            other => {
                // Log the actual error but return a generic message
                error!(error = %other, "Catalog failure");
                ApiError::new(ErrorCode::CatalogError, "Catalog is unavailable")
            }
        }
    }
}

/// Malformed request or arguments.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("Malformed request: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Errors
// =============================================================================

/// Failures while building a session, before any command runs.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to seed demo data: {0}")]
    DemoData(#[from] CoreError),
}
