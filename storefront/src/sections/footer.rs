//! Site footer.

/// Render the footer with quick links and contact details.
pub fn render_footer() -> String {
    r#"<footer class="site-footer" data-section="footer">
    <div class="footer-grid">
        <div class="footer-brand">
            <span class="brand-mark">W</span>
            <span class="brand-name">Warung Sedap</span>
            <p>
                Kami menyajikan makanan terbaik di kota, membawa cita rasa
                otentik langsung ke depan pintu Anda.
            </p>
        </div>
        <div class="footer-col">
            <h4>Menu</h4>
            <ul>
                <li><button data-action="navigate" data-page="home">Beranda</button></li>
                <li><button data-action="navigate" data-page="about">Mengapa Kami</button></li>
                <li><button data-action="navigate" data-page="menu">Menu Spesial</button></li>
                <li><button data-action="navigate" data-page="menu">Makanan Reguler</button></li>
            </ul>
        </div>
        <div class="footer-col">
            <h4>Bantuan</h4>
            <ul>
                <li>Kebijakan Privasi</li>
                <li>Syarat &amp; Ketentuan</li>
                <li>Kebijakan</li>
            </ul>
        </div>
        <div class="footer-col">
            <h4>Kontak</h4>
            <ul>
                <li>+62 812 3456 7890</li>
                <li>hello@warungsedap.com</li>
                <li>Jl. Merdeka No. 45, Jakarta</li>
            </ul>
        </div>
    </div>
    <div class="footer-bottom">&copy; 2024 Warung Sedap. All rights reserved.</div>
</footer>"#
        .to_string()
}
