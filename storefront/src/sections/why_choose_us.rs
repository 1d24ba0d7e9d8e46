//! "Why choose us" feature strip.

/// Render the three-feature strip on the home page.
pub fn render_why_choose_us() -> String {
    let features = [
        (
            "&#127858;",
            "Resep Otentik",
            "Bumbu diracik sendiri mengikuti resep keluarga sejak 1987.",
        ),
        (
            "&#127807;",
            "Bahan Segar",
            "Belanja pasar setiap pagi; tanpa penyedap berlebihan.",
        ),
        (
            "&#128666;",
            "Antar Cepat",
            "Pesanan diantar hangat ke pintu Anda dalam 30 menit.",
        ),
    ];

    let cards: String = features
        .iter()
        .map(|(icon, title, body)| {
            format!(
                r#"<div class="feature-card">
            <span class="feature-icon">{icon}</span>
            <h3>{title}</h3>
            <p>{body}</p>
        </div>"#
            )
        })
        .collect();

    format!(
        r#"<section class="why-choose-us" data-section="why-choose-us">
    <h2>Mengapa Warung Sedap</h2>
    <div class="feature-grid">
        {cards}
    </div>
</section>"#
    )
}
