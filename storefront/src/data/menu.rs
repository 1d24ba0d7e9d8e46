//! The Warung Sedap menu.
//!
//! In production this would come from a CMS or database; the storefront
//! ships with the house menu seeded in code.

use warung_commerce::catalog::{Catalog, MenuCategory, Product};
use warung_commerce::error::CommerceError;
use warung_commerce::ids::ProductId;
use warung_commerce::money::{Currency, Money};

fn item(id: &str, name: &str, price: i64, category: MenuCategory) -> Product {
    Product::new(
        ProductId::new(id),
        name,
        Money::new(price, Currency::IDR),
        category,
    )
    .with_image(format!("/img/{}.jpg", id))
}

/// Build the seeded menu catalog.
pub fn seed_catalog() -> Result<Catalog, CommerceError> {
    Catalog::new(vec![
        // Makanan
        item("nasi-goreng", "Nasi Goreng Spesial", 25_000, MenuCategory::Food)
            .with_description("Nasi goreng kampung dengan telur mata sapi, ayam suwir, dan kerupuk")
            .with_calories(650)
            .with_rating(4.8),
        item("sate-ayam", "Sate Ayam Madura", 30_000, MenuCategory::Food)
            .with_description("Sepuluh tusuk sate ayam dengan bumbu kacang dan lontong")
            .with_calories(540)
            .with_rating(4.9),
        item("rendang", "Rendang Daging", 35_000, MenuCategory::Food)
            .with_description("Daging sapi dimasak lambat dalam santan dan rempah Minang")
            .with_calories(720)
            .with_rating(4.7),
        item("gado-gado", "Gado-Gado", 20_000, MenuCategory::Food)
            .with_description("Sayuran segar, tahu, tempe, dan telur disiram saus kacang")
            .with_calories(410)
            .with_rating(4.5),
        item("soto-ayam", "Soto Ayam Lamongan", 18_000, MenuCategory::Food)
            .with_description("Kuah kuning ayam dengan soun, telur, dan taburan koya gurih")
            .with_calories(380)
            .with_rating(4.6),
        item("mie-goreng", "Mie Goreng Jawa", 22_000, MenuCategory::Food)
            .with_description("Mie goreng manis pedas dengan sayuran dan ayam")
            .with_calories(580),
        // Minuman
        item("es-teh", "Es Teh Manis", 5_000, MenuCategory::Drink)
            .with_description("Teh melati manis dengan es batu")
            .with_calories(90)
            .with_rating(4.3),
        item("es-jeruk", "Es Jeruk Peras", 7_000, MenuCategory::Drink)
            .with_description("Jeruk peras segar dengan es")
            .with_calories(110),
        item("kopi-tubruk", "Kopi Tubruk", 8_000, MenuCategory::Drink)
            .with_description("Kopi hitam tradisional diseduh kasar")
            .with_calories(10)
            .with_rating(4.4),
        item("es-cendol", "Es Cendol", 12_000, MenuCategory::Drink)
            .with_description("Cendol pandan dengan santan dan gula merah")
            .with_calories(320)
            .with_rating(4.6),
        // Snack
        item("pisang-goreng", "Pisang Goreng Keju", 12_000, MenuCategory::Snack)
            .with_description("Pisang goreng renyah dengan taburan keju dan susu kental manis")
            .with_calories(450)
            .with_rating(4.5),
        item("tahu-isi", "Tahu Isi Pedas", 8_000, MenuCategory::Snack)
            .with_description("Tahu goreng isi sayuran dengan cabai rawit")
            .with_calories(280),
    ])
}
