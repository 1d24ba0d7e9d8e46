//! Newsletter call-to-action at the bottom of the home page.

/// Render the first-order discount newsletter signup.
pub fn render_newsletter_cta() -> String {
    r#"<section class="newsletter-cta" data-section="newsletter-cta">
    <div class="newsletter-card">
        <h2>Dapatkan Diskon 10% Pesanan Pertama</h2>
        <p>
            Berlangganan newsletter kami dan dapatkan penawaran serta promo
            eksklusif langsung ke inbox Anda.
        </p>
        <form class="newsletter-form" action="/api/newsletter" method="POST">
            <input
                type="email"
                name="email"
                placeholder="Masukkan email Anda"
                required
                aria-label="Alamat email"
            >
            <button type="submit" class="btn btn-dark">Berlangganan</button>
        </form>
    </div>
</section>"#
        .to_string()
}
