//! Storefront application: composes session state into full pages.

use warung_commerce::catalog::{Catalog, Product};
use warung_commerce::error::CommerceError;
use warung_commerce::ids::ProductId;
use warung_commerce::search::{search, SearchQuery};
use warung_session::{Page, Session};

use crate::sections;

/// Number of products shown in the home page popular section.
const POPULAR_LIMIT: usize = 4;

/// The storefront: an immutable catalog plus one customer session.
///
/// UI callbacks land on the methods here. Cart adds go through
/// [`Storefront::add_to_cart`] (which resolves the id against the catalog);
/// navigation and overlay toggles go straight to the owned
/// [`Session`] via [`Storefront::session_mut`]. Rendering reads a snapshot
/// and never mutates.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    session: Session,
    search_query: String,
}

impl Storefront {
    /// Open the storefront with a catalog and a fresh session.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            session: Session::new(),
            search_query: String::new(),
        }
    }

    /// The product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session state, read-only.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The session state, for navigation and overlay operations.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Add a catalog product to the cart by id.
    ///
    /// The id-based variant the rendered buttons use; unknown ids surface
    /// as [`CommerceError::ProductNotFound`] rather than silently adding
    /// nothing. Returns the line's resulting quantity.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<i64, CommerceError> {
        let product = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(id.as_str().to_string()))?;
        Ok(self.session.add_to_cart(product))
    }

    /// Current search overlay query text.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Update the search overlay query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Close the search overlay and reset its query.
    pub fn close_search(&mut self) {
        self.search_query.clear();
        self.session.close_search();
    }

    /// Products matching the current search query.
    pub fn search_results(&self) -> Vec<&Product> {
        search(&self.catalog, &SearchQuery::new(self.search_query.clone()))
    }

    /// Document title for the active page.
    pub fn page_title(&self) -> String {
        match self.session.page() {
            Page::Home => "Warung Sedap".to_string(),
            Page::Menu => "Menu | Warung Sedap".to_string(),
            Page::About => "Tentang Kami | Warung Sedap".to_string(),
        }
    }

    /// Render the full HTML document for the current state.
    pub fn render(&self) -> String {
        let summary = self.session.cart_summary();
        let navbar = sections::render_navbar(&self.session, &summary);
        let main = self.render_main();
        let footer = sections::render_footer();

        let mut overlays = String::new();
        if self.session.overlays().cart_drawer {
            overlays.push_str(&sections::render_cart_drawer(self.session.cart(), &summary));
        }
        if self.session.overlays().search {
            overlays.push_str(&sections::render_search_overlay(
                &self.search_query,
                &self.search_results(),
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
{navbar}
<main>
{main}
</main>
{footer}
{overlays}
</body>
</html>"#,
            title = self.page_title(),
            styles = STOREFRONT_STYLES,
            navbar = navbar,
            main = main,
            footer = footer,
            overlays = overlays,
        )
    }

    fn render_main(&self) -> String {
        match self.session.page() {
            Page::Home => [
                sections::render_hero(),
                sections::render_why_choose_us(),
                sections::render_popular_menu(&self.catalog.popular(POPULAR_LIMIT)),
                sections::render_newsletter_cta(),
            ]
            .join("\n"),
            Page::Menu => sections::render_menu(&self.catalog),
            Page::About => sections::render_about(),
        }
    }
}

/// Stylesheet for the storefront.
const STOREFRONT_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; color: #1f2933; }
main { min-height: 70vh; }
h1, h2, h3 { color: #102a1e; }
.btn { border: none; border-radius: 999px; padding: 0.75rem 1.5rem; font-weight: 700; cursor: pointer; }
.btn-primary { background: #1f7a4d; color: white; }
.btn-outline { background: transparent; color: #1f7a4d; border: 2px solid #1f7a4d; }
.btn-dark { background: #102a1e; color: white; }
.btn-small { padding: 0.4rem 1rem; background: #1f7a4d; color: white; }
.icon-button { background: none; border: none; cursor: pointer; font-size: 1.1rem; }

/* Navbar */
.navbar { position: fixed; top: 0; width: 100%; z-index: 30; padding: 1.25rem 0; background: transparent; }
.navbar--solid { background: rgba(255, 255, 255, 0.95); box-shadow: 0 1px 4px rgba(0,0,0,0.08); padding: 0.75rem 0; }
.navbar-inner { max-width: 1100px; margin: 0 auto; display: flex; justify-content: space-between; align-items: center; padding: 0 1.5rem; }
.brand-mark { background: #1f7a4d; color: white; border-radius: 50%; width: 2.2rem; height: 2.2rem; display: inline-flex; align-items: center; justify-content: center; font-weight: 800; }
.brand-name { font-weight: 800; font-size: 1.3rem; margin-left: 0.5rem; }
.navbar-brand, .nav-link { background: none; border: none; cursor: pointer; }
.nav-link { margin: 0 1rem; color: #3e4c59; font-weight: 500; }
.nav-link--active { color: #1f7a4d; font-weight: 700; }
.cart-button { position: relative; }
.cart-badge { position: absolute; top: -6px; right: -8px; background: #1f7a4d; color: white; border-radius: 50%; font-size: 0.7rem; width: 1.2rem; height: 1.2rem; display: flex; align-items: center; justify-content: center; }
.mobile-menu { position: fixed; inset: 0; background: white; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 2rem; z-index: 20; }

/* Home */
.hero { padding: 9rem 1.5rem 6rem; text-align: center; background: #f2f8f4; }
.hero h1 { font-size: 2.6rem; max-width: 32rem; margin: 0 auto 1rem; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; }
.why-choose-us { max-width: 1100px; margin: 0 auto; padding: 4rem 1.5rem; text-align: center; }
.feature-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-top: 2rem; }
.feature-icon { font-size: 2rem; }
.popular-menu { max-width: 1100px; margin: 0 auto; padding: 4rem 1.5rem; }
.section-heading { display: flex; justify-content: space-between; align-items: baseline; }
.link-button { background: none; border: none; color: #1f7a4d; cursor: pointer; font-weight: 600; }
.popular-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; margin-top: 1.5rem; }
.product-card { border: 1px solid #e4ece7; border-radius: 16px; overflow: hidden; }
.product-card img { width: 100%; aspect-ratio: 4/3; object-fit: cover; }
.product-card-body { padding: 1rem; }
.product-card-footer { display: flex; justify-content: space-between; align-items: center; margin-top: 0.75rem; }
.price { color: #1f7a4d; font-weight: 700; }
.rating { color: #d9911e; font-size: 0.9rem; }
.newsletter-cta { padding: 4rem 1.5rem; }
.newsletter-card { max-width: 1100px; margin: 0 auto; background: #1f7a4d; color: white; border-radius: 40px; padding: 4rem 2rem; text-align: center; }
.newsletter-card h2 { color: white; }
.newsletter-form { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; }
.newsletter-form input { border: none; border-radius: 999px; padding: 0.9rem 1.4rem; min-width: 18rem; }

/* Menu page */
.menu-page { max-width: 1100px; margin: 0 auto; padding: 7rem 1.5rem 4rem; }
.menu-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin: 1rem 0 2.5rem; }
.menu-item { border: 1px solid #e4ece7; border-radius: 16px; overflow: hidden; }
.menu-item img { width: 100%; aspect-ratio: 4/3; object-fit: cover; }
.menu-item-body { padding: 1rem; }
.menu-item-meta { display: flex; gap: 1rem; font-size: 0.85rem; color: #7b8794; }
.menu-item-footer { display: flex; justify-content: space-between; align-items: center; margin-top: 0.75rem; }
.description { color: #52606d; font-size: 0.9rem; }

/* About */
.about-page { max-width: 700px; margin: 0 auto; padding: 7rem 1.5rem 4rem; line-height: 1.7; }
.about-stats { display: flex; gap: 3rem; margin-top: 2.5rem; }
.about-stats .stat { display: flex; flex-direction: column; }
.about-stats strong { font-size: 2rem; color: #1f7a4d; }

/* Footer */
.site-footer { background: #102a1e; color: #e4ece7; padding: 4rem 1.5rem 2rem; }
.footer-grid { max-width: 1100px; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; gap: 2.5rem; }
.footer-col ul { list-style: none; padding: 0; color: #9aa5b1; }
.footer-col li { margin: 0.6rem 0; }
.footer-col button { background: none; border: none; color: #9aa5b1; cursor: pointer; padding: 0; }
.footer-bottom { text-align: center; border-top: 1px solid #27493a; margin-top: 3rem; padding-top: 1.5rem; color: #7b8794; font-size: 0.85rem; }

/* Overlays */
.cart-drawer { position: fixed; top: 0; right: 0; bottom: 0; width: 24rem; background: white; box-shadow: -4px 0 24px rgba(0,0,0,0.15); padding: 1.5rem; z-index: 40; overflow-y: auto; }
.cart-drawer-header { display: flex; justify-content: space-between; align-items: center; }
.cart-item { display: grid; grid-template-columns: 3.5rem 1fr auto; gap: 0.75rem; padding: 1rem 0; border-bottom: 1px solid #e4ece7; }
.cart-item img { width: 3.5rem; height: 3.5rem; object-fit: cover; border-radius: 8px; }
.cart-item-controls { display: flex; align-items: center; gap: 0.5rem; }
.qty-button { border: 1px solid #e4ece7; background: white; border-radius: 6px; width: 1.6rem; height: 1.6rem; cursor: pointer; }
.remove-button { background: none; border: none; color: #ba2525; cursor: pointer; font-size: 0.8rem; }
.cart-summary { display: flex; justify-content: space-between; padding: 1rem 0; font-size: 1.1rem; }
.cart-checkout { width: 100%; }
.search-overlay { position: fixed; inset: 0; background: rgba(255,255,255,0.98); z-index: 50; padding: 5rem 1.5rem; }
.search-bar { max-width: 640px; margin: 0 auto; display: flex; gap: 1rem; }
.search-input { flex: 1; border: 2px solid #1f7a4d; border-radius: 999px; padding: 0.9rem 1.4rem; font-size: 1rem; }
.search-results { max-width: 640px; margin: 2rem auto 0; }
.search-result { display: flex; align-items: center; gap: 1rem; padding: 0.9rem 0; border-bottom: 1px solid #e4ece7; }
.search-result img { width: 3rem; height: 3rem; border-radius: 8px; object-fit: cover; }
.search-result-body { flex: 1; }
.search-hint, .search-no-results { text-align: center; margin-top: 3rem; color: #7b8794; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_catalog;

    fn storefront() -> Storefront {
        Storefront::new(seed_catalog().unwrap())
    }

    #[test]
    fn test_home_page_sections() {
        let store = storefront();
        let html = store.render();
        assert!(html.contains(r#"data-section="hero""#));
        assert!(html.contains(r#"data-section="why-choose-us""#));
        assert!(html.contains(r#"data-section="popular-menu""#));
        assert!(html.contains(r#"data-section="newsletter-cta""#));
        assert!(html.contains(r#"data-section="footer""#));
        assert!(!html.contains(r#"data-section="menu""#));
    }

    #[test]
    fn test_menu_page_after_navigation() {
        let mut store = storefront();
        store.session_mut().navigate(Page::Menu);
        let html = store.render();
        assert!(html.contains(r#"data-section="menu""#));
        assert!(!html.contains(r#"data-section="hero""#));
        assert_eq!(store.page_title(), "Menu | Warung Sedap");
    }

    #[test]
    fn test_add_to_cart_by_id_renders_drawer() {
        let mut store = storefront();
        let quantity = store.add_to_cart(&ProductId::new("nasi-goreng")).unwrap();
        assert_eq!(quantity, 1);

        let html = store.render();
        assert!(html.contains(r#"data-section="cart-drawer""#));
        assert!(html.contains("Nasi Goreng Spesial"));
    }

    #[test]
    fn test_add_unknown_id_is_an_error() {
        let mut store = storefront();
        let result = store.add_to_cart(&ProductId::new("nonexistent-id"));
        assert!(matches!(result, Err(CommerceError::ProductNotFound(_))));
        assert!(store.session().cart().is_empty());
    }

    #[test]
    fn test_search_overlay_rendering() {
        let mut store = storefront();
        store.session_mut().open_search();
        store.set_search_query("goreng");

        let html = store.render();
        assert!(html.contains(r#"data-section="search-overlay""#));
        assert!(html.contains("Nasi Goreng Spesial"));
        assert!(html.contains("Mie Goreng Jawa"));
    }

    #[test]
    fn test_close_search_clears_query() {
        let mut store = storefront();
        store.session_mut().open_search();
        store.set_search_query("sate");

        store.close_search();

        assert!(store.search_query().is_empty());
        assert!(!store.session().overlays().search);
        assert!(!store.render().contains(r#"data-section="search-overlay""#));
    }
}
