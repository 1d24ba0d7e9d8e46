//! Commerce error types.

use thiserror::Error;

/// Errors that can occur around the commerce domain.
///
/// Cart operations themselves are total and never return these; the errors
/// cover the edges: resolving a product id at the storefront boundary,
/// money arithmetic across currencies, and catalog validation at seed time.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Duplicate product id supplied to the catalog.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Product priced with a negative amount.
    #[error("Invalid price for {product_id}: {amount}")]
    InvalidPrice { product_id: String, amount: i64 },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
