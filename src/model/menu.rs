//! The static menu catalog.
//!
//! The catalog is immutable once built. [`Menu::little_lemon`] returns the
//! house menu; tests and alternative front ends can assemble their own from
//! [`MenuCategory`] values.

use serde::{Deserialize, Serialize};

/// A single dish on the menu.
///
/// Prices are whole currency units (rupees), so totals never need rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    ///
    /// # Arguments
    /// * `id` - Catalog-wide unique identifier (e.g. `"b1"`)
    /// * `name` - Display name
    /// * `description` - Short ingredient list
    /// * `price` - Price in whole currency units
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// A titled group of menu items, rendered as one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    pub fn new(id: impl Into<String>, title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items,
        }
    }
}

/// The full catalog, categories in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    categories: Vec<MenuCategory>,
}

impl Menu {
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    /// The Little Lemon house menu: burgers, pizza and desserts.
    pub fn little_lemon() -> Self {
        Self::new(vec![
            MenuCategory::new(
                "burgers",
                "Burgers",
                vec![
                    MenuItem::new("b1", "Classic Beef Burger", "Beef patty, lettuce, tomato, cheese", 650),
                    MenuItem::new("b2", "Spicy Chicken Burger", "Crispy chicken, spicy mayo, pickles", 560),
                    MenuItem::new("b3", "Veggie Burger", "House veg patty, lettuce, tomato", 480),
                ],
            ),
            MenuCategory::new(
                "pizza",
                "Pizza",
                vec![
                    MenuItem::new("p1", "Margherita", "Tomato, fresh mozzarella, basil", 900),
                    MenuItem::new("p2", "Peri Peri Chicken", "Chicken, peri peri sauce, onions", 1150),
                    MenuItem::new("p3", "Seafood Special", "Prawns, calamari, herbs", 1500),
                ],
            ),
            MenuCategory::new(
                "desserts",
                "Desserts",
                vec![
                    MenuItem::new("d1", "Gulab Jamun", "Traditional syrup-soaked sweet", 220),
                    MenuItem::new("d2", "Chocolate Brownie", "Warm brownie with ice cream", 350),
                    MenuItem::new("d3", "Kulfi", "Traditional ice cream", 200),
                ],
            ),
        ])
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// The category shown when the menu first opens.
    pub fn default_category(&self) -> Option<&MenuCategory> {
        self.categories.first()
    }

    pub fn category(&self, id: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Looks an item up across every category.
    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.id == id)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::little_lemon()
    }
}
