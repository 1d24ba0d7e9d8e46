//! Home page hero section.

/// Render the hero banner with the view-menu call to action.
pub fn render_hero() -> String {
    r#"<section class="hero" data-section="hero">
    <div class="hero-content">
        <h1>Cita Rasa Otentik, Langsung ke Meja Anda</h1>
        <p>
            Masakan rumahan terbaik di kota, diracik dari resep turun-temurun
            dengan bahan segar setiap hari.
        </p>
        <div class="hero-actions">
            <button class="btn btn-primary" data-action="navigate" data-page="menu">Lihat Menu</button>
            <button class="btn btn-outline" data-action="navigate" data-page="about">Tentang Kami</button>
        </div>
    </div>
</section>"#
        .to_string()
}
