//! # Profile
//!
//! User details, saved addresses, saved payment methods and order history.
//!
//! ## Ownership
//! ```text
//! ProfileBook
//! ├── UserProfile          name / email / phone (validated on every update)
//! ├── Vec<Address>         at most one default
//! ├── Vec<PaymentMethod>   at most one default
//! └── Vec<Order>           newest first
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::order::{Order, OrderStatus, TrackingStep};
use crate::validation::{validate_email, validate_name, validate_phone, ValidationResult};

// =============================================================================
// User Profile
// =============================================================================

/// Personal details shown on the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserProfile {
    /// Creates a validated profile.
    pub fn new(name: &str, email: &str, phone: &str) -> ValidationResult<Self> {
        validate_name(name)?;
        validate_email(email)?;
        validate_phone(phone)?;

        Ok(UserProfile {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: normalize_phone(phone),
        })
    }

    /// Replaces all three fields, or none of them if any is invalid.
    pub fn update(&mut self, name: &str, email: &str, phone: &str) -> ValidationResult<()> {
        *self = UserProfile::new(name, email, phone)?;
        Ok(())
    }
}

fn normalize_phone(phone: &str) -> Option<String> {
    let phone = phone.trim();
    if phone.is_empty() {
        None
    } else {
        Some(phone.to_string())
    }
}

// =============================================================================
// Addresses
// =============================================================================

/// Label of a saved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AddressKind {
    Home,
    Work,
    Other,
}

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub kind: AddressKind,
    pub street: String,
    pub city: String,
    pub zip: String,
    #[serde(default)]
    pub is_default: bool,
}

// =============================================================================
// Payment Methods
// =============================================================================

/// Card network of a saved card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
}

/// A saved card; only the last four digits are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub brand: CardBrand,
    pub last4: String,
    /// `MM/YY`.
    pub expiry: String,
    #[serde(default)]
    pub is_default: bool,
}

impl PaymentMethod {
    /// Checks `last4` and `expiry` shapes.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.last4.len() != 4 || !self.last4.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "last4".to_string(),
                reason: "must be exactly 4 digits".to_string(),
            });
        }

        let month = self
            .expiry
            .split_once('/')
            .filter(|(mm, yy)| mm.len() == 2 && yy.len() == 2 && yy.chars().all(|c| c.is_ascii_digit()))
            .and_then(|(mm, _)| mm.parse::<u32>().ok());
        match month {
            Some(1..=12) => Ok(()),
            _ => Err(ValidationError::InvalidFormat {
                field: "expiry".to_string(),
                reason: "must be MM/YY".to_string(),
            }),
        }
    }

    /// Masked display, e.g. `Visa ending in 1234`.
    pub fn display_name(&self) -> String {
        format!("{:?} ending in {}", self.brand, self.last4)
    }
}

// =============================================================================
// Profile Book
// =============================================================================

/// Everything on the profile page, owned by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBook {
    pub profile: UserProfile,
    pub addresses: Vec<Address>,
    pub payment_methods: Vec<PaymentMethod>,
    /// Newest first.
    pub orders: Vec<Order>,
}

impl ProfileBook {
    /// Creates an empty book for a profile.
    pub fn new(profile: UserProfile) -> Self {
        ProfileBook {
            profile,
            addresses: Vec::new(),
            payment_methods: Vec::new(),
            orders: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Addresses
    // -------------------------------------------------------------------------

    /// Saves an address. A default address demotes the previous default; the
    /// first address saved always becomes the default.
    pub fn add_address(&mut self, mut address: Address) -> ValidationResult<()> {
        for (field, value) in [
            ("street", &address.street),
            ("city", &address.city),
            ("zip", &address.zip),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: field.to_string(),
                });
            }
        }

        if self.addresses.is_empty() {
            address.is_default = true;
        }
        if address.is_default {
            self.addresses.iter_mut().for_each(|a| a.is_default = false);
        }
        self.addresses.push(address);
        Ok(())
    }

    /// Removes an address; if it was the default, the first remaining one
    /// takes over.
    pub fn remove_address(&mut self, id: &str) -> CoreResult<Address> {
        let index = self
            .addresses
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| CoreError::AddressNotFound(id.to_string()))?;
        let removed = self.addresses.remove(index);
        if removed.is_default {
            if let Some(first) = self.addresses.first_mut() {
                first.is_default = true;
            }
        }
        Ok(removed)
    }

    /// Makes an address the default.
    pub fn set_default_address(&mut self, id: &str) -> CoreResult<()> {
        if !self.addresses.iter().any(|a| a.id == id) {
            return Err(CoreError::AddressNotFound(id.to_string()));
        }
        self.addresses
            .iter_mut()
            .for_each(|a| a.is_default = a.id == id);
        Ok(())
    }

    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }

    // -------------------------------------------------------------------------
    // Payment methods
    // -------------------------------------------------------------------------

    /// Saves a card, with the same default rules as addresses.
    pub fn add_payment_method(&mut self, mut card: PaymentMethod) -> ValidationResult<()> {
        card.validate()?;

        if self.payment_methods.is_empty() {
            card.is_default = true;
        }
        if card.is_default {
            self.payment_methods
                .iter_mut()
                .for_each(|c| c.is_default = false);
        }
        self.payment_methods.push(card);
        Ok(())
    }

    /// Removes a card; if it was the default, the first remaining one takes
    /// over.
    pub fn remove_payment_method(&mut self, id: &str) -> CoreResult<PaymentMethod> {
        let index = self
            .payment_methods
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CoreError::PaymentMethodNotFound(id.to_string()))?;
        let removed = self.payment_methods.remove(index);
        if removed.is_default {
            if let Some(first) = self.payment_methods.first_mut() {
                first.is_default = true;
            }
        }
        Ok(removed)
    }

    pub fn default_payment_method(&self) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|c| c.is_default)
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Adds a placed order to the top of the history.
    pub fn record_order(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    pub fn order(&self, id: &str) -> CoreResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))
    }

    /// Tracking stepper for an order still on its way.
    pub fn track_order(&self, id: &str) -> CoreResult<Vec<TrackingStep>> {
        let order = self.order(id)?;
        if !order.status.is_trackable() {
            return Err(CoreError::OrderAlreadyDelivered(id.to_string()));
        }
        Ok(order.tracking())
    }

    /// Moves an order one step along its lifecycle.
    pub fn advance_order(&mut self, id: &str) -> CoreResult<OrderStatus> {
        self.orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))?
            .advance()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
