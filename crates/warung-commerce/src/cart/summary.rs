//! Derived cart totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Aggregate view of the cart, computed on demand from its line items.
///
/// This is a value, not a cache: [`Cart::summarize`](crate::cart::Cart::summarize)
/// derives a fresh one from the current state, so it can never disagree
/// with the cart it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Sum of quantities over all line items (the navbar badge count).
    pub item_count: i64,
    /// Number of distinct line items.
    pub unique_items: usize,
    /// Sum of line subtotals.
    pub subtotal: Money,
}

impl CartSummary {
    /// Whether there is anything to show a badge for.
    pub fn has_items(&self) -> bool {
        self.item_count > 0
    }
}
