//! Commerce domain types and logic for the Warung Sedap storefront.
//!
//! This crate provides the storefront's domain layer:
//!
//! - **Catalog**: Menu products and categories
//! - **Cart**: Shopping cart with line items and derived totals
//! - **Search**: Text search over the catalog
//! - **Money**: Rupiah-first monetary values in integer minor units
//!
//! The cart is a volatile, session-local structure: created empty, mutated
//! through its operations, gone when the session ends. Its operations are
//! total functions over the current state: absent ids are benign no-ops,
//! never errors.
//!
//! # Example
//!
//! ```rust
//! use warung_commerce::prelude::*;
//!
//! let nasi_goreng = Product::new(
//!     ProductId::new("nasi-goreng"),
//!     "Nasi Goreng Spesial",
//!     Money::new(25_000, Currency::IDR),
//!     MenuCategory::Food,
//! );
//!
//! let mut cart = Cart::new();
//! cart.add(nasi_goreng.clone());
//! cart.add(nasi_goreng);
//!
//! let summary = cart.summarize();
//! assert_eq!(summary.item_count, 2);
//! assert_eq!(summary.subtotal.display(), "Rp50.000");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, MenuCategory, Product};

    // Cart
    pub use crate::cart::{Cart, CartSummary, LineItem};

    // Search
    pub use crate::search::{search, SearchQuery};
}
