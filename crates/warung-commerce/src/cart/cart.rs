//! Cart and line item types.
//!
//! The cart holds at most one line item per product id; adding a product
//! that is already present increments its quantity instead of appending a
//! second line. Insertion order is preserved for display and carries no
//! other meaning.
//!
//! Every operation is a total function over the current state. Lookups for
//! ids that are not in the cart are benign no-ops: a rendered-but-stale UI
//! list is an expected occurrence, not a bug signal. The one invariant the
//! cart actively protects is that a line item's quantity never drops below
//! one; deletion happens only through [`Cart::remove`].

use crate::cart::CartSummary;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart: a product plus quantity and optional notes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product this line was created from.
    pub product: Product,
    /// Quantity; at least 1 while the line exists.
    pub quantity: i64,
    /// Customer note (e.g., "pedas", "tanpa bawang").
    #[serde(default)]
    pub notes: Option<String>,
}

impl LineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            notes: None,
        }
    }

    /// Line subtotal: unit price times quantity.
    ///
    /// Saturates rather than failing; the subtotal is a display value and
    /// must stay a total function.
    pub fn subtotal(&self) -> Money {
        self.product.price.saturating_multiply(self.quantity)
    }
}

/// An ordered collection of line items, keyed by product identity.
///
/// Created empty at session start; lives for the session; no persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line item for a product, if present.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product.id == id)
    }

    /// Add a product to the cart.
    ///
    /// If a line for the product already exists its quantity goes up by one
    /// and nothing else changes; otherwise a new line with quantity 1 is
    /// appended. Never fails. Returns the line's resulting quantity.
    pub fn add(&mut self, product: Product) -> i64 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }
        self.items.push(LineItem::new(product));
        1
    }

    /// Adjust a line's quantity by a signed delta.
    ///
    /// Absent id: no-op, returns None. Present: the new quantity applies
    /// only when it stays above zero; otherwise the line is left unchanged,
    /// so a quantity can never reach zero through this operation; the UI
    /// must call [`Cart::remove`] to delete a line. Returns the line's
    /// quantity after the call.
    pub fn adjust_quantity(&mut self, id: &ProductId, delta: i64) -> Option<i64> {
        let item = self.items.iter_mut().find(|i| &i.product.id == id)?;
        let new_quantity = item.quantity.saturating_add(delta);
        if new_quantity > 0 {
            item.quantity = new_quantity;
        }
        Some(item.quantity)
    }

    /// Remove a line item. No-op when the id is not in the cart.
    ///
    /// Returns whether a line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != id);
        self.items.len() < len_before
    }

    /// Attach a note to a line item. No-op when the id is not in the cart.
    pub fn set_note(&mut self, id: &ProductId, note: impl Into<String>) -> bool {
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == id) {
            item.notes = Some(note.into());
            true
        } else {
            false
        }
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count: the sum of quantities over all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// The cart's currency: that of its first line, or the default when
    /// empty. Catalog construction guarantees a single currency.
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.product.price.currency)
            .unwrap_or_default()
    }

    /// Cart subtotal: the sum of line subtotals.
    ///
    /// Saturating for the same reason as [`LineItem::subtotal`].
    pub fn subtotal(&self) -> Money {
        let currency = self.currency();
        debug_assert!(
            self.items
                .iter()
                .all(|i| i.product.price.currency == currency),
            "cart lines must share one currency"
        );
        let amount = self
            .items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.subtotal().amount));
        Money::new(amount, currency)
    }

    /// Compute the derived totals for the current state.
    ///
    /// Always recomputed; the cart stores no aggregate that could go stale.
    pub fn summarize(&self) -> CartSummary {
        CartSummary {
            item_count: self.item_count(),
            unique_items: self.unique_item_count(),
            subtotal: self.subtotal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCategory;

    fn product(id: &str, price: i64) -> Product {
        Product::new(
            ProductId::new(id),
            id.to_string(),
            Money::new(price, Currency::IDR),
            MenuCategory::Food,
        )
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), Money::zero(Currency::IDR));
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        cart.add(product("nasi-goreng", 25_000));
        cart.add(product("nasi-goreng", 25_000));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.get(&ProductId::new("nasi-goreng")).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(product("b", 10_000));
        cart.add(product("a", 20_000));
        cart.add(product("b", 10_000));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_adjust_quantity_applies_positive_result() {
        let mut cart = Cart::new();
        cart.add(product("sate", 30_000));
        cart.add(product("sate", 30_000));
        cart.add(product("sate", 30_000));

        assert_eq!(cart.adjust_quantity(&ProductId::new("sate"), -1), Some(2));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_adjust_quantity_clamps_at_one() {
        let mut cart = Cart::new();
        cart.add(product("sate", 30_000));

        // Decrementing at quantity 1 leaves the line unchanged.
        assert_eq!(cart.adjust_quantity(&ProductId::new("sate"), -1), Some(1));
        assert_eq!(cart.adjust_quantity(&ProductId::new("sate"), -5), Some(1));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_adjust_quantity_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("sate", 30_000));
        let before = cart.clone();

        assert_eq!(cart.adjust_quantity(&ProductId::new("nonexistent-id"), 1), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_then_adjust_stays_absent() {
        let mut cart = Cart::new();
        cart.add(product("sate", 30_000));

        assert!(cart.remove(&ProductId::new("sate")));
        assert_eq!(cart.adjust_quantity(&ProductId::new("sate"), 1), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("sate", 30_000));
        let before = cart.clone();

        assert!(!cart.remove(&ProductId::new("missing")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_note() {
        let mut cart = Cart::new();
        cart.add(product("sate", 30_000));

        assert!(cart.set_note(&ProductId::new("sate"), "tanpa bumbu kacang"));
        assert_eq!(
            cart.get(&ProductId::new("sate")).unwrap().notes.as_deref(),
            Some("tanpa bumbu kacang")
        );
        assert!(!cart.set_note(&ProductId::new("missing"), "x"));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(product("a", 10_000));
        cart.add(product("b", 5_000));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_summary_scenario() {
        // Add A, add A again, add B: [{A, qty 2}, {B, qty 1}].
        let mut cart = Cart::new();
        cart.add(product("a", 10_000));
        cart.add(product("a", 10_000));
        cart.add(product("b", 5_000));

        let summary = cart.summarize();
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.unique_items, 2);
        assert_eq!(summary.subtotal, Money::new(25_000, Currency::IDR));

        let lines: Vec<(&str, i64)> = cart
            .items()
            .iter()
            .map(|i| (i.product.id.as_str(), i.quantity))
            .collect();
        assert_eq!(lines, vec![("a", 2), ("b", 1)]);
    }

    #[test]
    fn test_item_count_matches_quantities_after_every_operation() {
        let mut cart = Cart::new();
        let check = |cart: &Cart| {
            let expected: i64 = cart.items().iter().map(|i| i.quantity).sum();
            assert_eq!(cart.item_count(), expected);
            assert_eq!(cart.summarize().item_count, expected);
        };

        cart.add(product("a", 10_000));
        check(&cart);
        cart.add(product("a", 10_000));
        check(&cart);
        cart.adjust_quantity(&ProductId::new("a"), 3);
        check(&cart);
        cart.adjust_quantity(&ProductId::new("a"), -4);
        check(&cart);
        cart.add(product("b", 5_000));
        check(&cart);
        cart.remove(&ProductId::new("a"));
        check(&cart);
        cart.clear();
        check(&cart);
    }

    #[test]
    fn test_line_subtotal() {
        let mut cart = Cart::new();
        cart.add(product("sate", 30_000));
        cart.adjust_quantity(&ProductId::new("sate"), 2);

        let line = cart.get(&ProductId::new("sate")).unwrap();
        assert_eq!(line.subtotal(), Money::new(90_000, Currency::IDR));
    }
}
