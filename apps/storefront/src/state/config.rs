//! # Configuration State
//!
//! Storefront settings, read once from the environment at startup.
//!
//! ## Environment Variables
//! ```text
//! ┌──────────────────────────────┬──────────────┬───────────────────────────┐
//! │ Variable                     │ Default      │ Meaning                   │
//! ├──────────────────────────────┼──────────────┼───────────────────────────┤
//! │ FOODFLEET_STORE_NAME         │ FoodFleet    │ Header / title            │
//! │ FOODFLEET_CURRENCY_SYMBOL    │ $            │ Display symbol            │
//! │ FOODFLEET_DELIVERY_FEE_CENTS │ 500          │ Fee on non-empty carts    │
//! │ FOODFLEET_PAGE_SIZE          │ 8            │ Restaurants per page (≥1) │
//! │ FOODFLEET_CATALOG_PATH       │ (fixture)    │ JSON catalog file         │
//! │ FOODFLEET_DEMO_DATA          │ true         │ Seed demo cart & profile  │
//! └──────────────────────────────┴──────────────┴───────────────────────────┘
//! ```

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use foodfleet_core::validation::validate_price_cents;
use foodfleet_core::{Money, DEFAULT_DELIVERY_FEE_CENTS, DEFAULT_PAGE_SIZE};

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Flat delivery fee in cents
    pub delivery_fee_cents: i64,

    /// Restaurants per listing page
    pub page_size: usize,

    /// Optional JSON catalog; the built-in fixture is used otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Start with the demo cart, profile and order history
    pub demo_data: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "FoodFleet"
    /// - Currency: USD ($), 2 decimals
    /// - Delivery fee: $5.00
    /// - Page size: 8
    fn default() -> Self {
        ConfigState {
            store_name: "FoodFleet".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            delivery_fee_cents: DEFAULT_DELIVERY_FEE_CENTS,
            page_size: DEFAULT_PAGE_SIZE,
            catalog_path: None,
            demo_data: true,
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        ConfigState::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration from any key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("FOODFLEET_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("FOODFLEET_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(fee) = lookup("FOODFLEET_DELIVERY_FEE_CENTS") {
            config.delivery_fee_cents = fee
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|fee| validate_price_cents(*fee).is_ok())
                .ok_or_else(|| ConfigError::InvalidValue("FOODFLEET_DELIVERY_FEE_CENTS".to_string()))?;
        }

        if let Some(size) = lookup("FOODFLEET_PAGE_SIZE") {
            config.page_size = size
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size >= 1)
                .ok_or_else(|| ConfigError::InvalidValue("FOODFLEET_PAGE_SIZE".to_string()))?;
        }

        config.catalog_path = lookup("FOODFLEET_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        if let Some(flag) = lookup("FOODFLEET_DEMO_DATA") {
            config.demo_data = flag
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue("FOODFLEET_DEMO_DATA".to_string()))?;
        }

        Ok(config)
    }

    /// Delivery fee as Money.
    pub fn delivery_fee(&self) -> Money {
        Money::from_cents(self.delivery_fee_cents)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use foodfleet_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
