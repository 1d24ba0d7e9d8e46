//! The immutable product catalog.

use crate::catalog::{MenuCategory, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// The full set of purchasable products, external to the cart core.
///
/// Built once at startup and read-only afterwards. Construction validates
/// the seed data so the cart never sees a malformed product: ids must be
/// unique, prices non-negative, and every price in the same currency.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from seed products.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        for (i, product) in products.iter().enumerate() {
            if product.price.is_negative() {
                return Err(CommerceError::InvalidPrice {
                    product_id: product.id.as_str().to_string(),
                    amount: product.price.amount,
                });
            }
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CommerceError::DuplicateProduct(
                    product.id.as_str().to_string(),
                ));
            }
            if product.price.currency != products[0].price.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: products[0].price.currency.code().to_string(),
                    got: product.price.currency.code().to_string(),
                });
            }
        }
        Ok(Self { products })
    }

    /// All products in menu order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look a product up by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in a category, preserving menu order.
    pub fn by_category(&self, category: MenuCategory) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// The highest-rated products, for the home page's popular section.
    ///
    /// Unrated products never appear here. Ties keep menu order.
    pub fn popular(&self, limit: usize) -> Vec<&Product> {
        let mut rated: Vec<&Product> =
            self.products.iter().filter(|p| p.rating.is_some()).collect();
        rated.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rated.truncate(limit);
        rated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, price: i64, category: MenuCategory) -> Product {
        Product::new(
            ProductId::new(id),
            id.to_string(),
            Money::new(price, Currency::IDR),
            category,
        )
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(vec![
            product("nasi-goreng", 25_000, MenuCategory::Food),
            product("es-teh", 5_000, MenuCategory::Drink),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(&ProductId::new("es-teh")).is_some());
        assert!(catalog.get(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_catalog_by_category() {
        let catalog = Catalog::new(vec![
            product("nasi-goreng", 25_000, MenuCategory::Food),
            product("es-teh", 5_000, MenuCategory::Drink),
            product("sate-ayam", 30_000, MenuCategory::Food),
        ])
        .unwrap();

        let food = catalog.by_category(MenuCategory::Food);
        assert_eq!(food.len(), 2);
        assert_eq!(food[0].id.as_str(), "nasi-goreng");
        assert_eq!(food[1].id.as_str(), "sate-ayam");
        assert!(catalog.by_category(MenuCategory::Snack).is_empty());
    }

    #[test]
    fn test_catalog_popular_ranks_by_rating() {
        let catalog = Catalog::new(vec![
            product("a", 10_000, MenuCategory::Food).with_rating(4.2),
            product("b", 10_000, MenuCategory::Food),
            product("c", 10_000, MenuCategory::Food).with_rating(4.9),
            product("d", 10_000, MenuCategory::Food).with_rating(4.5),
        ])
        .unwrap();

        let popular = catalog.popular(2);
        assert_eq!(popular.len(), 2);
        assert_eq!(popular[0].id.as_str(), "c");
        assert_eq!(popular[1].id.as_str(), "d");
    }

    #[test]
    fn test_catalog_rejects_duplicate_id() {
        let result = Catalog::new(vec![
            product("nasi-goreng", 25_000, MenuCategory::Food),
            product("nasi-goreng", 20_000, MenuCategory::Food),
        ]);
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(_))));
    }

    #[test]
    fn test_catalog_rejects_negative_price() {
        let result = Catalog::new(vec![product("broken", -1, MenuCategory::Food)]);
        assert!(matches!(result, Err(CommerceError::InvalidPrice { .. })));
    }

    #[test]
    fn test_catalog_rejects_mixed_currency() {
        let mut usd = product("import", 10, MenuCategory::Snack);
        usd.price = Money::new(10, Currency::USD);
        let result = Catalog::new(vec![
            product("nasi-goreng", 25_000, MenuCategory::Food),
            usd,
        ]);
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
    }
}
