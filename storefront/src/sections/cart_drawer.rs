//! Cart drawer overlay.

use warung_commerce::cart::{Cart, CartSummary, LineItem};

use crate::sections::escape_html;

/// Render the cart drawer for the current cart state.
pub fn render_cart_drawer(cart: &Cart, summary: &CartSummary) -> String {
    let body = if cart.is_empty() {
        r#"<p class="cart-empty">Keranjang Anda masih kosong.</p>"#.to_string()
    } else {
        let rows: String = cart.items().iter().map(render_cart_row).collect();
        format!(
            r#"<div class="cart-items">{rows}</div>
        <div class="cart-summary">
            <span>Total ({count} item)</span>
            <strong>{subtotal}</strong>
        </div>
        <button class="btn btn-primary cart-checkout">Pesan Sekarang</button>"#,
            rows = rows,
            count = summary.item_count,
            subtotal = summary.subtotal.display(),
        )
    };

    format!(
        r#"<aside class="cart-drawer" data-section="cart-drawer">
    <div class="cart-drawer-header">
        <h2>Keranjang</h2>
        <button class="icon-button" data-action="close-cart" aria-label="Tutup keranjang">&#10005;</button>
    </div>
    {body}
</aside>"#
    )
}

fn render_cart_row(item: &LineItem) -> String {
    let notes = item
        .notes
        .as_deref()
        .map(|n| format!(r#"<p class="cart-item-notes">{}</p>"#, escape_html(n)))
        .unwrap_or_default();

    format!(
        r#"<div class="cart-item" data-product-id="{id}">
        <img src="{image}" alt="{name}" loading="lazy">
        <div class="cart-item-body">
            <h3>{name}</h3>
            <span class="price">{price}</span>
            {notes}
        </div>
        <div class="cart-item-controls">
            <button class="qty-button" data-action="decrement" data-product-id="{id}" aria-label="Kurangi">&minus;</button>
            <span class="qty">{quantity}</span>
            <button class="qty-button" data-action="increment" data-product-id="{id}" aria-label="Tambah">+</button>
            <button class="remove-button" data-action="remove" data-product-id="{id}" aria-label="Hapus">Hapus</button>
        </div>
        <span class="cart-item-subtotal">{subtotal}</span>
    </div>"#,
        id = escape_html(item.product.id.as_str()),
        image = escape_html(&item.product.image),
        name = escape_html(&item.product.name),
        price = item.product.price_display(),
        notes = notes,
        quantity = item.quantity,
        subtotal = item.subtotal().display(),
    )
}
