//! Cart session demo.
//!
//! Exercises the session operations end to end: the scripted walkthrough
//! narrates the cart rules (increment-on-duplicate, clamp-at-one, no-op on
//! stale ids, navigation closing the mobile menu); `--interactive` hands
//! you the session instead.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Select};
use warung_commerce::ids::ProductId;
use warung_session::Page;
use warung_storefront::{seed_catalog, Storefront};

use super::DemoArgs;
use crate::context::Context;

/// Run the demo command.
pub fn run(args: DemoArgs, ctx: &Context) -> Result<()> {
    let store = Storefront::new(seed_catalog()?);
    if args.interactive {
        interactive(store, ctx)
    } else {
        scripted(store, ctx)
    }
}

fn scripted(mut store: Storefront, ctx: &Context) -> Result<()> {
    ctx.output.header("Cart session walkthrough");

    ctx.output.info("Adding Nasi Goreng Spesial");
    store.add_to_cart(&ProductId::new("nasi-goreng"))?;
    ctx.output
        .info("Adding it again - same line, quantity goes to 2");
    store.add_to_cart(&ProductId::new("nasi-goreng"))?;
    ctx.output.info("Adding Es Teh Manis");
    store.add_to_cart(&ProductId::new("es-teh"))?;
    print_cart(&store, ctx);

    ctx.output
        .info("Decrementing Es Teh Manis at quantity 1 - clamped, stays at 1");
    store
        .session_mut()
        .update_quantity(&ProductId::new("es-teh"), -1);
    ctx.output
        .info("Updating a stale id - benign no-op, cart unchanged");
    store
        .session_mut()
        .update_quantity(&ProductId::new("nonexistent-id"), 1);
    print_cart(&store, ctx);

    ctx.output.info("Removing Nasi Goreng Spesial");
    store.session_mut().remove_item(&ProductId::new("nasi-goreng"));
    print_cart(&store, ctx);

    ctx.output
        .info("Opening the mobile menu, then navigating to the menu page");
    store.session_mut().toggle_mobile_menu();
    store.session_mut().navigate(Page::Menu);
    let overlays = store.session().overlays();
    ctx.output.info(&format!(
        "page: {}, mobile menu open: {}, scroll: {}",
        store.session().page(),
        overlays.mobile_menu,
        store.session().scroll_offset()
    ));

    ctx.output.success("Walkthrough complete");
    Ok(())
}

fn interactive(mut store: Storefront, ctx: &Context) -> Result<()> {
    let theme = ColorfulTheme::default();
    ctx.output.header(&ctx.config.store.name);

    loop {
        let choices = [
            "Lihat menu",
            "Tambah item",
            "Ubah jumlah",
            "Hapus item",
            "Lihat keranjang",
            "Selesai",
        ];
        let pick = Select::with_theme(&theme)
            .with_prompt("Apa yang ingin Anda lakukan?")
            .items(&choices)
            .default(0)
            .interact()?;

        match pick {
            0 => {
                for product in store.catalog().products() {
                    println!(
                        "  {:<24} {:<10} {:>10}",
                        product.name,
                        style(product.category.label()).dim(),
                        product.price_display()
                    );
                }
            }
            1 => {
                let (labels, ids): (Vec<String>, Vec<ProductId>) = store
                    .catalog()
                    .products()
                    .iter()
                    .map(|p| {
                        (
                            format!("{} ({})", p.name, p.price_display()),
                            p.id.clone(),
                        )
                    })
                    .unzip();
                let idx = Select::with_theme(&theme)
                    .with_prompt("Pilih menu")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                let quantity = store.add_to_cart(&ids[idx])?;
                ctx.output
                    .success(&format!("{} x{} di keranjang", labels[idx], quantity));
            }
            2 => {
                let Some((labels, ids)) = cart_lines(&store) else {
                    ctx.output.warn("Keranjang masih kosong");
                    continue;
                };
                let idx = Select::with_theme(&theme)
                    .with_prompt("Pilih item")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                let delta_pick = Select::with_theme(&theme)
                    .with_prompt("Ubah jumlah")
                    .items(&["+1", "-1"])
                    .default(0)
                    .interact()?;
                let delta = if delta_pick == 0 { 1 } else { -1 };
                match store.session_mut().update_quantity(&ids[idx], delta) {
                    Some(quantity) => ctx
                        .output
                        .success(&format!("Jumlah sekarang: {}", quantity)),
                    None => ctx.output.warn("Item sudah tidak ada di keranjang"),
                }
            }
            3 => {
                let Some((labels, ids)) = cart_lines(&store) else {
                    ctx.output.warn("Keranjang masih kosong");
                    continue;
                };
                let idx = Select::with_theme(&theme)
                    .with_prompt("Hapus item")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                store.session_mut().remove_item(&ids[idx]);
                ctx.output.success(&format!("{} dihapus", labels[idx]));
            }
            4 => print_cart(&store, ctx),
            _ => break,
        }
    }

    print_cart(&store, ctx);
    ctx.output.success("Sampai jumpa!");
    Ok(())
}

/// Snapshot the cart lines into owned labels and ids, so the picker does
/// not hold a borrow across the mutation that follows.
fn cart_lines(store: &Storefront) -> Option<(Vec<String>, Vec<ProductId>)> {
    let cart = store.session().cart();
    if cart.is_empty() {
        return None;
    }
    Some(
        cart.items()
            .iter()
            .map(|item| {
                (
                    format!("{} x{}", item.product.name, item.quantity),
                    item.product.id.clone(),
                )
            })
            .unzip(),
    )
}

fn print_cart(store: &Storefront, ctx: &Context) {
    let cart = store.session().cart();
    if cart.is_empty() {
        ctx.output.info("Cart is empty");
        return;
    }
    for item in cart.items() {
        println!(
            "  {:<24} x{:<3} {:>10}",
            item.product.name,
            item.quantity,
            item.subtotal().display()
        );
    }
    let summary = store.session().cart_summary();
    println!(
        "  {:<28} {:>10}",
        style(format!("Total ({} item)", summary.item_count)).bold(),
        style(summary.subtotal.display()).bold()
    );
}
