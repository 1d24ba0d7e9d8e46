//! Shopping cart module.
//!
//! Contains the cart, its line items, and the derived summary totals.

mod cart;
mod summary;

pub use cart::{Cart, LineItem};
pub use summary::CartSummary;
