//! Search overlay.

use warung_commerce::catalog::Product;

use crate::sections::escape_html;

/// Render the full-screen search overlay.
///
/// Idle hint while the query is blank, a no-results message when nothing
/// matched, otherwise the result rows.
pub fn render_search_overlay(query: &str, results: &[&Product]) -> String {
    let body = if query.trim().is_empty() {
        r#"<p class="search-hint">Ketik untuk mencari menu&hellip;</p>"#.to_string()
    } else if results.is_empty() {
        format!(
            r#"<p class="search-no-results">Tidak ada menu yang cocok dengan &quot;{}&quot;.</p>"#,
            escape_html(query)
        )
    } else {
        let rows: String = results.iter().map(|p| render_result_row(p)).collect();
        format!(r#"<div class="search-results">{rows}</div>"#)
    };

    format!(
        r#"<div class="search-overlay" data-section="search-overlay">
    <div class="search-bar">
        <input
            type="search"
            class="search-input"
            value="{query}"
            placeholder="Cari nasi goreng, sate, es cendol&hellip;"
            aria-label="Cari menu"
        >
        <button class="icon-button" data-action="close-search" aria-label="Tutup pencarian">&#10005;</button>
    </div>
    {body}
</div>"#,
        query = escape_html(query),
        body = body,
    )
}

fn render_result_row(product: &Product) -> String {
    format!(
        r#"<div class="search-result" data-product-id="{id}">
        <img src="{image}" alt="{name}" loading="lazy">
        <div class="search-result-body">
            <h3>{name}</h3>
            <span class="category">{category}</span>
        </div>
        <span class="price">{price}</span>
        <button class="btn btn-small" data-action="add-to-cart" data-product-id="{id}">Tambah</button>
    </div>"#,
        id = escape_html(product.id.as_str()),
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        category = product.category.label(),
        price = product.price_display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use warung_commerce::catalog::MenuCategory;
    use warung_commerce::ids::ProductId;
    use warung_commerce::money::{Currency, Money};

    #[test]
    fn test_blank_query_shows_hint() {
        let html = render_search_overlay("", &[]);
        assert!(html.contains("search-hint"));
    }

    #[test]
    fn test_no_results_message_includes_query() {
        let html = render_search_overlay("rendang", &[]);
        assert!(html.contains("search-no-results"));
        assert!(html.contains("rendang"));
    }

    #[test]
    fn test_result_rows() {
        let product = Product::new(
            ProductId::new("es-cendol"),
            "Es Cendol",
            Money::new(12_000, Currency::IDR),
            MenuCategory::Drink,
        );
        let html = render_search_overlay("cendol", &[&product]);
        assert!(html.contains(r#"data-product-id="es-cendol""#));
        assert!(html.contains("Minuman"));
        assert!(html.contains("Rp12.000"));
    }
}
