//! Product and category types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Menu category a product belongs to.
///
/// Wire strings follow the menu data ("makanan"/"minuman"/"snack").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    /// Main dishes.
    #[default]
    #[serde(rename = "makanan")]
    Food,
    /// Drinks.
    #[serde(rename = "minuman")]
    Drink,
    /// Snacks and sides.
    Snack,
}

impl MenuCategory {
    /// All categories, in menu display order.
    pub const ALL: [MenuCategory; 3] = [MenuCategory::Food, MenuCategory::Drink, MenuCategory::Snack];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Food => "makanan",
            MenuCategory::Drink => "minuman",
            MenuCategory::Snack => "snack",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "makanan" | "food" => Some(MenuCategory::Food),
            "minuman" | "drink" => Some(MenuCategory::Drink),
            "snack" => Some(MenuCategory::Snack),
            _ => None,
        }
    }

    /// Customer-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Food => "Makanan",
            MenuCategory::Drink => "Minuman",
            MenuCategory::Snack => "Snack",
        }
    }
}

/// A product on the menu.
///
/// Immutable once seeded into the catalog; the cart embeds copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image reference (URL or asset path).
    pub image: String,
    /// Menu category.
    pub category: MenuCategory,
    /// Calories, when listed.
    #[serde(default)]
    pub calories: Option<u32>,
    /// Average rating out of 5, when rated.
    #[serde(default)]
    pub rating: Option<f32>,
}

impl Product {
    /// Create a new product with empty description and image.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: MenuCategory,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category,
            calories: None,
            rating: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the calorie count.
    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Format the price for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product() -> Product {
        Product::new(
            ProductId::new("nasi-goreng"),
            "Nasi Goreng Spesial",
            Money::new(25_000, Currency::IDR),
            MenuCategory::Food,
        )
    }

    #[test]
    fn test_product_builder() {
        let p = product()
            .with_description("Nasi goreng dengan telur dan ayam")
            .with_image("/img/nasi-goreng.jpg")
            .with_calories(650)
            .with_rating(4.8);

        assert_eq!(p.name, "Nasi Goreng Spesial");
        assert_eq!(p.calories, Some(650));
        assert_eq!(p.rating, Some(4.8));
        assert_eq!(p.image, "/img/nasi-goreng.jpg");
    }

    #[test]
    fn test_product_price_display() {
        assert_eq!(product().price_display(), "Rp25.000");
    }

    #[test]
    fn test_category_round_trip() {
        for cat in MenuCategory::ALL {
            assert_eq!(MenuCategory::from_str(cat.as_str()), Some(cat));
        }
    }

    #[test]
    fn test_category_from_str_english_alias() {
        assert_eq!(MenuCategory::from_str("food"), Some(MenuCategory::Food));
        assert_eq!(MenuCategory::from_str("DRINK"), Some(MenuCategory::Drink));
        assert_eq!(MenuCategory::from_str("dessert"), None);
    }
}
