//! About page.

pub fn render_about() -> String {
    r#"<section class="about-page" data-section="about">
    <h1>Tentang Kami</h1>
    <p>
        Warung Sedap berdiri sejak 1987 sebagai warung kecil di sudut pasar.
        Tiga generasi kemudian, kami tetap memasak dengan cara yang sama:
        bumbu diulek, santan diperas sendiri, dan semua hidangan dibuat
        setelah Anda memesan.
    </p>
    <p>
        Kami percaya makanan rumahan yang jujur tidak butuh banyak hiasan:
        cukup rasa yang konsisten dan harga yang masuk akal.
    </p>
    <div class="about-stats">
        <div class="stat"><strong>37</strong><span>tahun melayani</span></div>
        <div class="stat"><strong>12</strong><span>hidangan andalan</span></div>
        <div class="stat"><strong>3</strong><span>generasi juru masak</span></div>
    </div>
</section>"#
        .to_string()
}
