//! Search query and matching.

use crate::catalog::{Catalog, MenuCategory, Product};

/// Default number of matches returned, sized for the search overlay.
pub const DEFAULT_LIMIT: usize = 10;

/// A text search over the catalog.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    text: String,
    category: Option<MenuCategory>,
    limit: usize,
}

impl SearchQuery {
    /// Create a new query from free text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Narrow the query to one category.
    pub fn with_category(mut self, category: MenuCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Cap the number of results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the query has any text to match on.
    ///
    /// A blank query matches nothing: the overlay shows its idle hint, not
    /// the whole menu.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Check a single product against the query.
    ///
    /// Case-insensitive substring match on name or description, optionally
    /// narrowed by category.
    pub fn matches(&self, product: &Product) -> bool {
        if self.is_blank() {
            return false;
        }
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        let needle = self.text.trim().to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }
}

/// Run a query against the catalog, preserving menu order.
pub fn search<'a>(catalog: &'a Catalog, query: &SearchQuery) -> Vec<&'a Product> {
    if query.is_blank() {
        return Vec::new();
    }
    catalog
        .products()
        .iter()
        .filter(|p| query.matches(p))
        .take(query.limit)
        .collect()
}
