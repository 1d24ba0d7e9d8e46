//! Menu listing command.

use anyhow::{bail, Result};
use console::style;
use warung_commerce::catalog::MenuCategory;
use warung_storefront::seed_catalog;

use super::MenuArgs;
use crate::context::Context;

/// Run the menu command.
pub fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let catalog = seed_catalog()?;

    let category = match args.category.as_deref() {
        Some(s) => match MenuCategory::from_str(s) {
            Some(c) => Some(c),
            None => bail!("Unknown category: {} (try makanan, minuman, snack)", s),
        },
        None => None,
    };

    let products: Vec<_> = match category {
        Some(c) => catalog.by_category(c),
        None => catalog.products().iter().collect(),
    };

    if ctx.output.json() {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    ctx.output.header(&ctx.config.store.name);
    for category in MenuCategory::ALL {
        let in_category: Vec<_> = products
            .iter()
            .filter(|p| p.category == category)
            .collect();
        if in_category.is_empty() {
            continue;
        }
        println!("\n{}", style(category.label()).bold());
        for product in in_category {
            let rating = product
                .rating
                .map(|r| format!("  ★ {:.1}", r))
                .unwrap_or_default();
            println!(
                "  {:<24} {:>10}{}",
                product.name,
                product.price_display(),
                style(rating).yellow()
            );
            ctx.output.debug(&format!("  id: {}", product.id));
        }
    }
    println!();
    ctx.output
        .info(&format!("{} menu items", catalog.len()));

    Ok(())
}
