//! # Demo Catalog
//!
//! The built-in catalog the storefront starts with when no catalog file is
//! configured: six restaurants for the home page and one fully described
//! restaurant with a sample menu.
//!
//! ```text
//! ┌────┬────────────────┬──────────────────────────────┬────────┬─────────┐
//! │ id │ name           │ cuisines                     │ rating │ minutes │
//! ├────┼────────────────┼──────────────────────────────┼────────┼─────────┤
//! │ 1  │ Pizza Paradise │ Italian, Pizza               │  4.5   │   30    │
//! │ 2  │ Burger Bonanza │ American, Burgers, Fast Food │  4.2   │   25    │
//! │ 3  │ Sushi Central  │ Japanese, Sushi              │  4.8   │   40    │
//! │ 4  │ Taco Town      │ Mexican, Tacos               │  4.3   │   20    │
//! │ 5  │ Curry Corner   │ Indian, Curry                │  4.6   │   35    │
//! │ 6  │ Healthy Bites  │ Salads, Healthy, Vegan       │  4.0   │   30    │
//! └────┴────────────────┴──────────────────────────────┴────────┴─────────┘
//! ```

use foodfleet_core::{MenuItem, RestaurantDetail, RestaurantSummary};

/// Id of the restaurant that carries the sample menu.
pub const SAMPLE_RESTAURANT_ID: &str = "gourmet-place";

const UNSPLASH_QUERY: &str = "ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=800&q=60";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{}?{}", photo, UNSPLASH_QUERY)
}

fn placeholder(size: &str, text: &str) -> String {
    format!("https://via.placeholder.com/{}?text={}", size, text)
}

fn summary(
    id: &str,
    name: &str,
    photo: &str,
    cuisines: &[&str],
    rating: f64,
    minutes: u32,
    tag: Option<&str>,
) -> RestaurantSummary {
    RestaurantSummary {
        id: id.to_string(),
        name: name.to_string(),
        image_url: unsplash(photo),
        cuisine_types: cuisines.iter().map(|c| c.to_string()).collect(),
        rating,
        delivery_time_minutes: minutes,
        promotional_tag: tag.map(str::to_string),
    }
}

/// Restaurants shown on the home page, in catalog order.
pub fn restaurants() -> Vec<RestaurantSummary> {
    vec![
        summary("1", "Pizza Paradise", "1513104890138-7c749659a591", &["Italian", "Pizza"], 4.5, 30, Some("20% OFF")),
        summary("2", "Burger Bonanza", "1568901346375-23c9450c58cd", &["American", "Burgers", "Fast Food"], 4.2, 25, None),
        summary("3", "Sushi Central", "1579871494447-9811cf80d66c", &["Japanese", "Sushi"], 4.8, 40, Some("Free Edamame")),
        summary("4", "Taco Town", "1552332386-f8dd00dc2f85", &["Mexican", "Tacos"], 4.3, 20, None),
        summary("5", "Curry Corner", "1589302168068-964664d93dc0", &["Indian", "Curry"], 4.6, 35, None),
        summary("6", "Healthy Bites", "1490645935967-10de6ba17061", &["Salads", "Healthy", "Vegan"], 4.0, 30, Some("New User Discount")),
    ]
}

#[allow(clippy::too_many_arguments)]
fn menu_item(
    id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    image_text: &str,
    category: &str,
    customizable: bool,
    available: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        price_cents,
        image_url: placeholder("400x300", image_text),
        is_available: available,
        customization_available: customizable,
        category: category.to_string(),
    }
}

/// The fully described sample restaurant and its menu.
pub fn sample_restaurant() -> RestaurantDetail {
    RestaurantDetail {
        id: SAMPLE_RESTAURANT_ID.to_string(),
        name: "The Gourmet Place".to_string(),
        logo_url: placeholder("100", "Logo"),
        cover_image_url: placeholder("1200x300", "Restaurant+Cover"),
        rating: 4.5,
        cuisine_types: vec!["Italian".to_string(), "Pizza".to_string(), "Pasta".to_string()],
        description: "Experience authentic Italian cuisine with our selection of freshly made \
                      pasta, wood-fired pizzas, and delectable desserts."
            .to_string(),
        address: "123 Foodie Lane, Gourmet City".to_string(),
        menu: vec![
            menu_item("m1", "Margherita Pizza", "Classic tomato sauce, fresh mozzarella, basil, and a drizzle of olive oil.", 1299, "Margherita+Pizza", "Pizzas", true, true),
            menu_item("m2", "Pasta Carbonara", "Spaghetti with creamy egg sauce, pancetta, pecorino romano, and black pepper.", 1550, "Pasta+Carbonara", "Main Courses", false, true),
            menu_item("m3", "Caprese Salad", "Fresh mozzarella, ripe tomatoes, basil, balsamic glaze.", 975, "Caprese+Salad", "Appetizers", false, true),
            menu_item("m4", "Tiramisu", "Ladyfingers dipped in coffee, layered with mascarpone and cocoa.", 600, "Tiramisu", "Desserts", false, false),
            menu_item("m5", "Pepperoni Pizza", "Classic pizza with generous pepperoni and mozzarella.", 1450, "Pepperoni+Pizza", "Pizzas", true, true),
            menu_item("m6", "Mushroom Risotto", "Creamy risotto with wild mushrooms and parmesan cheese.", 1600, "Risotto", "Main Courses", false, true),
        ],
    }
}
