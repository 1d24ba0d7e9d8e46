//! Menu search command.

use anyhow::Result;
use console::style;
use warung_commerce::search::{search, SearchQuery};
use warung_storefront::seed_catalog;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = seed_catalog()?;
    let query = SearchQuery::new(args.query.as_str()).with_limit(args.limit);
    let results = search(&catalog, &query);

    if ctx.output.json() {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        ctx.output
            .warn(&format!("No menu items match \"{}\"", args.query));
        return Ok(());
    }

    ctx.output
        .header(&format!("Results for \"{}\"", args.query));
    for product in &results {
        println!(
            "  {:<24} {:<10} {:>10}",
            product.name,
            style(product.category.label()).dim(),
            product.price_display()
        );
    }
    println!();
    ctx.output.info(&format!("{} match(es)", results.len()));

    Ok(())
}
