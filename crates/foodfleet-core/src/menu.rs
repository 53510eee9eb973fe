//! # Menu
//!
//! Menu page logic: category sections, per-item actions and customization
//! pricing.
//!
//! ## Add-to-Cart Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MenuItem.primary_action()                                              │
//! │       │                                                                 │
//! │       ├── Unavailable ──► button disabled                               │
//! │       │                                                                 │
//! │       ├── Customize ────► options dialog ──► Customization              │
//! │       │                                           │                     │
//! │       │                                           ▼                     │
//! │       └── AddToCart ───────────────────────► cart_line() ──► Cart       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Surcharges
//! ```text
//! Size:     Small +$0.00   Medium +$2.00 (default)   Large +$4.00
//! Toppings: Extra Cheese +$1.50   Olives +$0.75
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::MenuItem;
use crate::validation::{validate_quantity, validate_special_instructions, ValidationResult};

// =============================================================================
// Size & Toppings
// =============================================================================

/// Portion size of a customizable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// Surcharge over the item's base price.
    pub const fn surcharge(&self) -> Money {
        match self {
            Size::Small => Money::from_cents(0),
            Size::Medium => Money::from_cents(200),
            Size::Large => Money::from_cents(400),
        }
    }

    /// Name used in line ids and summaries.
    pub const fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

/// Optional extra on a customizable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Topping {
    ExtraCheese,
    Olives,
}

impl Topping {
    /// Surcharge per unit.
    pub const fn surcharge(&self) -> Money {
        match self {
            Topping::ExtraCheese => Money::from_cents(150),
            Topping::Olives => Money::from_cents(75),
        }
    }

    /// Key used in line ids.
    pub const fn key(&self) -> &'static str {
        match self {
            Topping::ExtraCheese => "ExtraCheese",
            Topping::Olives => "Olives",
        }
    }

    /// Display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Topping::ExtraCheese => "Extra Cheese",
            Topping::Olives => "Olives",
        }
    }
}

// =============================================================================
// Customization
// =============================================================================

/// Options chosen in the customization dialog.
///
/// `toppings` is kept sorted and free of duplicates so that equal choices
/// always produce the same line id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Customization {
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub toppings: Vec<Topping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl Customization {
    /// Creates a customization, normalizing the topping list.
    pub fn new(size: Size, toppings: impl IntoIterator<Item = Topping>) -> Self {
        let mut customization = Customization {
            size,
            toppings: toppings.into_iter().collect(),
            special_instructions: None,
        };
        customization.normalize();
        customization
    }

    /// Attaches free-text instructions for the kitchen.
    pub fn with_instructions(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.special_instructions = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self
    }

    fn normalize(&mut self) {
        self.toppings.sort();
        self.toppings.dedup();
    }

    /// Checks the free-text field.
    pub fn validate(&self) -> ValidationResult<()> {
        match &self.special_instructions {
            Some(text) => validate_special_instructions(text),
            None => Ok(()),
        }
    }

    /// Base price plus size and topping surcharges.
    ///
    /// ## Example
    /// ```rust
    /// use foodfleet_core::menu::{Customization, Size, Topping};
    /// use foodfleet_core::money::Money;
    ///
    /// let large_cheese = Customization::new(Size::Large, [Topping::ExtraCheese]);
    /// // $12.99 + $4.00 + $1.50
    /// assert_eq!(large_cheese.unit_price(Money::from_cents(1299)).cents(), 1849);
    /// ```
    pub fn unit_price(&self, base: Money) -> Money {
        base + self.size.surcharge() + self.toppings.iter().map(Topping::surcharge).sum::<Money>()
    }

    /// Cart line id for this item and these options: `"m1:Large+ExtraCheese"`.
    pub fn line_id(&self, item_id: &str) -> String {
        let mut id = format!("{}:{}", item_id, self.size.label());
        for topping in &self.toppings {
            id.push('+');
            id.push_str(topping.key());
        }
        id
    }

    /// Human readable summary shown under the cart line.
    pub fn summary(&self) -> String {
        let mut parts = vec![self.size.label().to_string()];
        parts.extend(self.toppings.iter().map(|t| t.label().to_string()));
        if let Some(text) = &self.special_instructions {
            parts.push(format!("Note: {}", text));
        }
        parts.join(", ")
    }
}

// =============================================================================
// Menu Actions
// =============================================================================

/// What the menu card's main button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum MenuAction {
    /// Button disabled, item cannot be ordered right now.
    Unavailable,
    /// Opens the customization dialog.
    Customize,
    AddToCart,
}

impl MenuItem {
    /// Main action for this item on the menu page.
    pub fn primary_action(&self) -> MenuAction {
        if !self.is_available {
            MenuAction::Unavailable
        } else if self.customization_available {
            MenuAction::Customize
        } else {
            MenuAction::AddToCart
        }
    }
}

/// A category heading with its items, in menu order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuSection {
    pub category: String,
    pub items: Vec<MenuItem>,
}

// =============================================================================
// Menu Queries
// =============================================================================

/// Distinct categories in first-appearance order.
pub fn menu_categories(menu: &[MenuItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in menu {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

/// Items of one category, in menu order.
pub fn items_in_category<'a>(menu: &'a [MenuItem], category: &str) -> Vec<&'a MenuItem> {
    menu.iter().filter(|item| item.category == category).collect()
}

/// Groups the menu into sections for rendering.
pub fn menu_sections(menu: &[MenuItem]) -> Vec<MenuSection> {
    menu_categories(menu)
        .into_iter()
        .map(|category| {
            let items = items_in_category(menu, &category)
                .into_iter()
                .cloned()
                .collect();
            MenuSection { category, items }
        })
        .collect()
}

/// Builds the cart line for adding `item` to the cart.
///
/// ## Rules
/// - Unavailable items: `Err(ItemUnavailable)`
/// - Customizable items without options get `Customization::default()`
/// - Options on a non-customizable item: `Err(Validation)`
pub fn cart_line(
    item: &MenuItem,
    restaurant_name: &str,
    customization: Option<Customization>,
    quantity: i64,
) -> CoreResult<CartLine> {
    if !item.is_available {
        return Err(CoreError::ItemUnavailable(item.id.clone()));
    }
    validate_quantity(quantity)?;

    let base = CartLine::new(item.id.clone(), item.name.clone(), item.price(), quantity)
        .with_image(item.image_url.clone())
        .with_restaurant(restaurant_name);

    if !item.customization_available {
        if customization.is_some() {
            return Err(ValidationError::InvalidFormat {
                field: "customization".to_string(),
                reason: format!("is not offered for {}", item.name),
            }
            .into());
        }
        return Ok(base);
    }

    let mut customization = customization.unwrap_or_default();
    customization.normalize();
    customization.validate()?;

    Ok(CartLine {
        line_id: customization.line_id(&item.id),
        unit_price_cents: customization.unit_price(item.price()).cents(),
        options: Some(customization.summary()),
        ..base
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str, price_cents: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Dish {}", id),
            description: None,
            price_cents,
            image_url: String::new(),
            is_available: true,
            customization_available: false,
            category: category.to_string(),
        }
    }

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            item("m1", "Pizzas", 1299),
            item("m2", "Main Courses", 1550),
            item("m3", "Appetizers", 975),
            item("m5", "Pizzas", 1450),
        ]
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        assert_eq!(
            menu_categories(&sample_menu()),
            vec!["Pizzas", "Main Courses", "Appetizers"]
        );
    }

    #[test]
    fn test_items_in_category() {
        let menu = sample_menu();
        let pizzas: Vec<&str> = items_in_category(&menu, "Pizzas")
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(pizzas, vec!["m1", "m5"]);
        assert!(items_in_category(&menu, "Desserts").is_empty());
    }

    #[test]
    fn test_menu_sections() {
        let sections = menu_sections(&sample_menu());
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].items.len(), 2);
    }

    #[test]
    fn test_primary_action() {
        let mut dish = item("m1", "Pizzas", 1299);
        assert_eq!(dish.primary_action(), MenuAction::AddToCart);

        dish.customization_available = true;
        assert_eq!(dish.primary_action(), MenuAction::Customize);

        dish.is_available = false;
        assert_eq!(dish.primary_action(), MenuAction::Unavailable);
    }

    #[test]
    fn test_unit_price_surcharges() {
        let base = Money::from_cents(1000);
        assert_eq!(Customization::default().unit_price(base).cents(), 1200);
        assert_eq!(Customization::new(Size::Small, []).unit_price(base).cents(), 1000);

        let everything = Customization::new(Size::Large, [Topping::Olives, Topping::ExtraCheese]);
        assert_eq!(everything.unit_price(base).cents(), 1625);
    }

    #[test]
    fn test_line_id_is_normalized() {
        let a = Customization::new(Size::Large, [Topping::Olives, Topping::ExtraCheese]);
        let b = Customization::new(
            Size::Large,
            [Topping::ExtraCheese, Topping::Olives, Topping::Olives],
        );
        assert_eq!(a.line_id("m1"), "m1:Large+ExtraCheese+Olives");
        assert_eq!(a.line_id("m1"), b.line_id("m1"));
        assert_eq!(Customization::default().line_id("m1"), "m1:Medium");
    }

    #[test]
    fn test_summary() {
        let c = Customization::new(Size::Large, [Topping::ExtraCheese]).with_instructions("No basil");
        assert_eq!(c.summary(), "Large, Extra Cheese, Note: No basil");
    }

    #[test]
    fn test_cart_line_plain_item() {
        let line = cart_line(&item("m2", "Main Courses", 1550), "The Gourmet Place", None, 2).unwrap();
        assert_eq!(line.line_id, "m2");
        assert_eq!(line.unit_price_cents, 1550);
        assert_eq!(line.restaurant_name.as_deref(), Some("The Gourmet Place"));
        assert_eq!(line.options, None);
    }

    #[test]
    fn test_cart_line_customizable_uses_default() {
        let mut dish = item("m1", "Pizzas", 1299);
        dish.customization_available = true;

        let line = cart_line(&dish, "The Gourmet Place", None, 1).unwrap();
        assert_eq!(line.line_id, "m1:Medium");
        assert_eq!(line.unit_price_cents, 1499);
        assert_eq!(line.options.as_deref(), Some("Medium"));
    }

    #[test]
    fn test_cart_line_rejects_unavailable() {
        let mut dish = item("m4", "Desserts", 600);
        dish.is_available = false;
        assert!(matches!(
            cart_line(&dish, "x", None, 1),
            Err(CoreError::ItemUnavailable(id)) if id == "m4"
        ));
    }

    #[test]
    fn test_cart_line_rejects_options_on_plain_item() {
        let dish = item("m2", "Main Courses", 1550);
        let result = cart_line(&dish, "x", Some(Customization::default()), 1);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_cart_line_rejects_long_instructions() {
        let mut dish = item("m1", "Pizzas", 1299);
        dish.customization_available = true;
        let c = Customization::default().with_instructions("x".repeat(201));
        assert!(matches!(
            cart_line(&dish, "x", Some(c), 1),
            Err(CoreError::Validation(ValidationError::TooLong { max: 200, .. }))
        ));
    }

    #[test]
    fn test_customization_from_json_defaults() {
        let c: Customization = serde_json::from_str(r#"{"toppings":["Olives"]}"#).unwrap();
        assert_eq!(c.size, Size::Medium);
        assert_eq!(c.toppings, vec![Topping::Olives]);
    }
}
