//! Popular menu section on the home page.

use warung_commerce::catalog::Product;

use crate::sections::escape_html;

/// Render the popular picks grid.
///
/// Takes the rating-ranked slice from `Catalog::popular`; falls back to a
/// quiet prompt when the catalog has no rated products yet.
pub fn render_popular_menu(products: &[&Product]) -> String {
    if products.is_empty() {
        return render_popular_menu_fallback();
    }

    let cards: String = products.iter().map(|p| render_popular_card(p)).collect();

    format!(
        r#"<section class="popular-menu" data-section="popular-menu">
    <div class="section-heading">
        <h2>Menu Favorit</h2>
        <button class="link-button" data-action="navigate" data-page="menu">Lihat Semua &rarr;</button>
    </div>
    <div class="popular-grid">
        {cards}
    </div>
</section>"#
    )
}

fn render_popular_card(product: &Product) -> String {
    let rating = product
        .rating
        .map(|r| format!(r#"<span class="rating">&#9733; {:.1}</span>"#, r))
        .unwrap_or_default();

    format!(
        r#"<article class="product-card" data-product-id="{id}">
        <img src="{image}" alt="{name}" loading="lazy">
        <div class="product-card-body">
            <h3>{name}</h3>
            {rating}
            <div class="product-card-footer">
                <span class="price">{price}</span>
                <button class="btn btn-small" data-action="add-to-cart" data-product-id="{id}">Tambah</button>
            </div>
        </div>
    </article>"#,
        id = escape_html(product.id.as_str()),
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        rating = rating,
        price = product.price_display(),
    )
}

/// Fallback when no products carry a rating.
pub fn render_popular_menu_fallback() -> String {
    r#"<section class="popular-menu popular-menu--empty" data-section="popular-menu">
    <h2>Menu Favorit</h2>
    <p>Lihat menu lengkap kami untuk pilihan hari ini.</p>
    <button class="btn btn-primary" data-action="navigate" data-page="menu">Lihat Menu</button>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use warung_commerce::catalog::MenuCategory;
    use warung_commerce::ids::ProductId;
    use warung_commerce::money::{Currency, Money};

    #[test]
    fn test_popular_cards_carry_product_ids() {
        let product = Product::new(
            ProductId::new("sate-ayam"),
            "Sate Ayam Madura",
            Money::new(30_000, Currency::IDR),
            MenuCategory::Food,
        )
        .with_rating(4.9);

        let html = render_popular_menu(&[&product]);
        assert!(html.contains(r#"data-product-id="sate-ayam""#));
        assert!(html.contains("Rp30.000"));
        assert!(html.contains("4.9"));
    }

    #[test]
    fn test_empty_popular_renders_fallback() {
        let html = render_popular_menu(&[]);
        assert!(html.contains("popular-menu--empty"));
    }
}
