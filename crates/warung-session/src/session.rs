//! The storefront session: cart plus navigation state.

use serde::{Deserialize, Serialize};
use tracing::debug;
use warung_commerce::cart::{Cart, CartSummary};
use warung_commerce::catalog::Product;
use warung_commerce::ids::ProductId;

use crate::nav::{navbar_scrolled, Overlays, Page};

/// All mutable state for one customer's visit.
///
/// Created once per session and owned exclusively by the application root;
/// every mutation goes through the operations below. Presentational code
/// only ever reads: the accessors hand out shared references, and there is
/// no `cart_mut`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    cart: Cart,
    page: Page,
    overlays: Overlays,
    scroll_offset: u32,
}

impl Session {
    /// Start a fresh session: empty cart, home page, nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Read side ---

    /// The cart, read-only.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The active page.
    pub fn page(&self) -> Page {
        self.page
    }

    /// Current overlay flags.
    pub fn overlays(&self) -> Overlays {
        self.overlays
    }

    /// Latest scroll observation, in pixels from the top.
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Derived cart totals, recomputed from the current cart state.
    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summarize()
    }

    /// Whether the navbar renders past the scroll threshold.
    pub fn navbar_scrolled(&self) -> bool {
        navbar_scrolled(self.scroll_offset)
    }

    /// Whether the navbar renders with its solid background.
    ///
    /// Solid when scrolled, when off the home page, or while the mobile
    /// menu covers the screen.
    pub fn navbar_solid(&self) -> bool {
        self.navbar_scrolled() || self.page != Page::Home || self.overlays.mobile_menu
    }

    // --- Cart operations ---

    /// Add a product to the cart and open the cart drawer.
    ///
    /// A composite of two independently testable steps: the cart add
    /// (increment-or-append, see [`Cart::add`]) and the drawer opening.
    /// The drawer coupling lives here so the cart itself stays free of UI
    /// concerns. Returns the line's resulting quantity.
    pub fn add_to_cart(&mut self, product: Product) -> i64 {
        let quantity = self.cart.add(product);
        self.overlays.cart_drawer = true;
        debug!(item_count = self.cart.item_count(), "added to cart");
        quantity
    }

    /// Adjust a line's quantity by a delta; see [`Cart::adjust_quantity`].
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> Option<i64> {
        self.cart.adjust_quantity(id, delta)
    }

    /// Remove a line item; no-op for ids not in the cart.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        self.cart.remove(id)
    }

    // --- Navigation ---

    /// Switch to a page.
    ///
    /// Always resets the scroll position to the top and forces the mobile
    /// menu closed, whatever its prior state. Runs the same way when the
    /// target page is already active.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.scroll_offset = 0;
        self.overlays.mobile_menu = false;
        debug!(page = %page, "navigated");
    }

    /// Record a scroll observation from the UI.
    pub fn observe_scroll(&mut self, offset: u32) {
        self.scroll_offset = offset;
    }

    // --- Overlays ---

    pub fn open_cart_drawer(&mut self) {
        self.overlays.cart_drawer = true;
    }

    pub fn close_cart_drawer(&mut self) {
        self.overlays.cart_drawer = false;
    }

    pub fn open_search(&mut self) {
        self.overlays.search = true;
    }

    pub fn close_search(&mut self) {
        self.overlays.search = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.overlays.mobile_menu = !self.overlays.mobile_menu;
    }

    /// The mobile menu's search shortcut: close the menu, open the search
    /// overlay, one tap.
    pub fn open_search_from_mobile_menu(&mut self) {
        self.overlays.mobile_menu = false;
        self.overlays.search = true;
    }
}
