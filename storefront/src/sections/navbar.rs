//! Navigation bar, cart badge, and the mobile menu overlay.

use warung_commerce::cart::CartSummary;
use warung_session::{Page, Session};

use crate::sections::escape_html;

const STORE_NAME: &str = "Warung Sedap";

/// Render the fixed navbar for the current session state.
///
/// Transparent over the home hero; solid once scrolled past the threshold,
/// on any other page, or while the mobile menu is open.
pub fn render_navbar(session: &Session, summary: &CartSummary) -> String {
    let solid_class = if session.navbar_solid() {
        "navbar navbar--solid"
    } else {
        "navbar"
    };

    let links: String = [Page::Home, Page::Menu, Page::About]
        .iter()
        .map(|page| render_nav_link(*page, session.page()))
        .collect();

    let badge = if summary.has_items() {
        format!(r#"<span class="cart-badge">{}</span>"#, summary.item_count)
    } else {
        String::new()
    };

    let mobile_menu = if session.overlays().mobile_menu {
        render_mobile_menu(session.page())
    } else {
        String::new()
    };

    format!(
        r#"<nav class="{solid_class}" data-section="navbar">
    <div class="navbar-inner">
        <button class="navbar-brand" data-action="navigate" data-page="home">
            <span class="brand-mark">W</span>
            <span class="brand-name">{store}</span>
        </button>
        <div class="navbar-links">{links}</div>
        <div class="navbar-actions">
            <button class="icon-button" data-action="open-search" aria-label="Cari menu">&#128269;</button>
            <button class="icon-button cart-button" data-action="open-cart" aria-label="Keranjang">
                &#128722;{badge}
            </button>
            <button class="icon-button mobile-menu-toggle" data-action="toggle-mobile-menu" aria-label="Menu navigasi">&#9776;</button>
        </div>
    </div>
    {mobile_menu}
</nav>"#,
        solid_class = solid_class,
        store = escape_html(STORE_NAME),
        links = links,
        badge = badge,
        mobile_menu = mobile_menu,
    )
}

fn render_nav_link(page: Page, active: Page) -> String {
    let class = if page == active {
        "nav-link nav-link--active"
    } else {
        "nav-link"
    };
    format!(
        r#"<button class="{}" data-action="navigate" data-page="{}">{}</button>"#,
        class,
        page.as_str(),
        escape_html(page.label())
    )
}

fn render_mobile_menu(active: Page) -> String {
    let links: String = [Page::Home, Page::Menu, Page::About]
        .iter()
        .map(|page| {
            format!(
                r#"<button class="mobile-nav-link{}" data-action="navigate" data-page="{}">{}</button>"#,
                if *page == active { " mobile-nav-link--active" } else { "" },
                page.as_str(),
                escape_html(page.label())
            )
        })
        .collect();

    format!(
        r#"<div class="mobile-menu" data-section="mobile-menu">
        {links}
        <button class="mobile-search-link" data-action="open-search-from-menu">&#128269; Cari Menu</button>
    </div>"#,
        links = links
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_transparent_on_fresh_home() {
        let session = Session::new();
        let html = render_navbar(&session, &session.cart_summary());
        assert!(html.contains(r#"class="navbar""#));
        assert!(!html.contains("navbar--solid"));
        assert!(!html.contains("cart-badge"));
    }

    #[test]
    fn test_navbar_solid_off_home() {
        let mut session = Session::new();
        session.navigate(Page::Menu);
        let html = render_navbar(&session, &session.cart_summary());
        assert!(html.contains("navbar--solid"));
        assert!(html.contains("nav-link--active"));
    }

    #[test]
    fn test_navbar_badge_shows_item_count() {
        use warung_commerce::catalog::{MenuCategory, Product};
        use warung_commerce::ids::ProductId;
        use warung_commerce::money::{Currency, Money};

        let mut session = Session::new();
        let product = Product::new(
            ProductId::new("es-teh"),
            "Es Teh Manis",
            Money::new(5_000, Currency::IDR),
            MenuCategory::Drink,
        );
        session.add_to_cart(product.clone());
        session.add_to_cart(product);

        let html = render_navbar(&session, &session.cart_summary());
        assert!(html.contains(r#"<span class="cart-badge">2</span>"#));
    }

    #[test]
    fn test_mobile_menu_rendered_only_when_open() {
        let mut session = Session::new();
        let closed = render_navbar(&session, &session.cart_summary());
        assert!(!closed.contains("mobile-menu\""));

        session.toggle_mobile_menu();
        let open = render_navbar(&session, &session.cart_summary());
        assert!(open.contains("Cari Menu"));
    }
}
