//! CLI command implementations.

pub mod demo;
pub mod menu;
pub mod render;
pub mod search;

use clap::Args;

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Only show one category (makanan, minuman, snack).
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to search for.
    pub query: String,

    /// Maximum number of results.
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Page to render (home, menu, about).
    #[arg(default_value = "home")]
    pub page: String,

    /// Output file path; defaults to `<output_dir>/<page>.html`.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Drive the session yourself instead of the scripted walkthrough.
    #[arg(short, long)]
    pub interactive: bool,
}
