//! # Profile State
//!
//! The signed-in user's profile book. With demo data enabled it starts with
//! two addresses, two cards and four orders at every stage of delivery.

use chrono::NaiveDate;

use foodfleet_core::order::{Order, OrderItem, OrderStatus};
use foodfleet_core::profile::{
    Address, AddressKind, CardBrand, PaymentMethod, ProfileBook, UserProfile,
};
use foodfleet_core::validation::ValidationResult;
use foodfleet_core::Money;

/// The session's profile book.
#[derive(Debug, Clone)]
pub struct ProfileState {
    book: ProfileBook,
}

impl ProfileState {
    /// Wraps an existing book.
    pub fn new(book: ProfileBook) -> Self {
        ProfileState { book }
    }

    /// An anonymous profile with nothing saved, used when demo data is off.
    pub fn guest() -> Self {
        ProfileState::new(ProfileBook::new(UserProfile {
            name: "Guest".to_string(),
            email: String::new(),
            phone: None,
        }))
    }

    /// Builds the demo profile.
    pub fn demo() -> ValidationResult<Self> {
        let profile = UserProfile::new("Jane Doe", "jane.doe@example.com", "123-456-7890")?;
        let mut book = ProfileBook::new(profile);

        book.add_address(address("1", AddressKind::Home, "123 Main St", "Anytown", "12345", true))?;
        book.add_address(address("2", AddressKind::Work, "456 Office Ave", "Business City", "67890", false))?;

        book.add_payment_method(card("1", CardBrand::Visa, "1234", "12/25", true))?;
        book.add_payment_method(card("2", CardBrand::Mastercard, "5678", "06/27", false))?;

        // Recorded oldest first so the newest ends up on top
        for order in demo_orders().into_iter().rev() {
            book.record_order(order);
        }

        Ok(ProfileState { book })
    }

    pub fn book(&self) -> &ProfileBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut ProfileBook {
        &mut self.book
    }
}

fn address(id: &str, kind: AddressKind, street: &str, city: &str, zip: &str, is_default: bool) -> Address {
    Address {
        id: id.to_string(),
        kind,
        street: street.to_string(),
        city: city.to_string(),
        zip: zip.to_string(),
        is_default,
    }
}

fn card(id: &str, brand: CardBrand, last4: &str, expiry: &str, is_default: bool) -> PaymentMethod {
    PaymentMethod {
        id: id.to_string(),
        brand,
        last4: last4.to_string(),
        expiry: expiry.to_string(),
        is_default,
    }
}

/// Demo order history, newest first.
fn demo_orders() -> Vec<Order> {
    let order = |id: &str, day: u32, restaurant: &str, total: i64, status, item: (&str, &str, i64)| Order {
        id: id.to_string(),
        placed_on: NaiveDate::from_ymd_opt(2024, 7, day).unwrap_or_default(),
        restaurant_name: restaurant.to_string(),
        total: Money::from_cents(total),
        status,
        items: vec![OrderItem {
            id: item.0.to_string(),
            name: item.1.to_string(),
            quantity: 1,
            price: Money::from_cents(item.2),
        }],
    };

    vec![
        order("ORD004", 23, "Taco Town", 1275, OrderStatus::OrderConfirmed, ("t1", "3 Tacos", 875)),
        order("ORD003", 22, "Sushi Spot", 4500, OrderStatus::PreparingFood, ("s1", "Sushi Platter", 3500)),
        order("ORD002", 21, "Burger Joint", 1550, OrderStatus::OutForDelivery, ("b1", "Cheeseburger", 950)),
        order("ORD001", 20, "Pizza Place", 2599, OrderStatus::Delivered, ("p1", "Pepperoni Pizza", 1999)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile() {
        let state = ProfileState::demo().unwrap();
        let book = state.book();

        assert_eq!(book.profile.name, "Jane Doe");
        assert_eq!(book.default_address().unwrap().street, "123 Main St");
        assert_eq!(book.default_payment_method().unwrap().last4, "1234");
    }

    #[test]
    fn test_demo_orders_newest_first() {
        let state = ProfileState::demo().unwrap();
        let ids: Vec<&str> = state.book().orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD004", "ORD003", "ORD002", "ORD001"]);
        assert_eq!(
            state.book().order("ORD001").unwrap().placed_on,
            NaiveDate::from_ymd_opt(2024, 7, 20).unwrap()
        );
    }
}
