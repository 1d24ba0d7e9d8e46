//! Page render command.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use warung_session::Page;
use warung_storefront::{seed_catalog, Storefront};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command: compose a page and write the HTML document.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let Some(page) = Page::from_str(&args.page) else {
        bail!("Unknown page: {} (try home, menu, about)", args.page);
    };

    let mut store = Storefront::new(seed_catalog()?);
    store.session_mut().navigate(page);
    let html = store.render();

    let out_path = match args.out {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(&ctx.config.render.output_dir).join(format!("{}.html", page)),
    };

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(&out_path, &html)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    ctx.output.debug(&format!("{} bytes", html.len()));
    ctx.output
        .success(&format!("Rendered {} to {}", page, out_path.display()));

    Ok(())
}
