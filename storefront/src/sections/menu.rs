//! Full menu page, grouped by category.

use warung_commerce::catalog::{Catalog, MenuCategory, Product};

use crate::sections::escape_html;

/// Render the menu page: one block per category, in menu order.
pub fn render_menu(catalog: &Catalog) -> String {
    let blocks: String = MenuCategory::ALL
        .iter()
        .map(|category| render_category_block(catalog, *category))
        .collect();

    format!(
        r#"<section class="menu-page" data-section="menu">
    <h1>Menu Kami</h1>
    {blocks}
</section>"#
    )
}

fn render_category_block(catalog: &Catalog, category: MenuCategory) -> String {
    let products = catalog.by_category(category);
    if products.is_empty() {
        return String::new();
    }

    let rows: String = products.iter().map(|p| render_menu_row(p)).collect();

    format!(
        r#"<div class="menu-category" data-category="{key}">
        <h2>{label}</h2>
        <div class="menu-grid">
            {rows}
        </div>
    </div>"#,
        key = category.as_str(),
        label = category.label(),
        rows = rows,
    )
}

fn render_menu_row(product: &Product) -> String {
    let calories = product
        .calories
        .map(|c| format!(r#"<span class="calories">{} kal</span>"#, c))
        .unwrap_or_default();
    let rating = product
        .rating
        .map(|r| format!(r#"<span class="rating">&#9733; {:.1}</span>"#, r))
        .unwrap_or_default();

    format!(
        r#"<article class="menu-item" data-product-id="{id}">
            <img src="{image}" alt="{name}" loading="lazy">
            <div class="menu-item-body">
                <h3>{name}</h3>
                <p class="description">{description}</p>
                <div class="menu-item-meta">{calories}{rating}</div>
                <div class="menu-item-footer">
                    <span class="price">{price}</span>
                    <button class="btn btn-small" data-action="add-to-cart" data-product-id="{id}">Tambah</button>
                </div>
            </div>
        </article>"#,
        id = escape_html(product.id.as_str()),
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        description = escape_html(&product.description),
        calories = calories,
        rating = rating,
        price = product.price_display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use warung_commerce::ids::ProductId;
    use warung_commerce::money::{Currency, Money};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(
                ProductId::new("nasi-goreng"),
                "Nasi Goreng Spesial",
                Money::new(25_000, Currency::IDR),
                MenuCategory::Food,
            )
            .with_calories(650),
            Product::new(
                ProductId::new("es-teh"),
                "Es Teh Manis",
                Money::new(5_000, Currency::IDR),
                MenuCategory::Drink,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_menu_groups_by_category() {
        let html = render_menu(&catalog());
        assert!(html.contains(r#"data-category="makanan""#));
        assert!(html.contains(r#"data-category="minuman""#));
        // No snack products, so no snack block at all.
        assert!(!html.contains(r#"data-category="snack""#));
    }

    #[test]
    fn test_menu_row_content() {
        let html = render_menu(&catalog());
        assert!(html.contains("Nasi Goreng Spesial"));
        assert!(html.contains("650 kal"));
        assert!(html.contains("Rp25.000"));
        assert!(html.contains(r#"data-action="add-to-cart""#));
    }
}
