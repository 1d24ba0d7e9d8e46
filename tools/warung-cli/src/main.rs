//! Warung CLI - browse and exercise the storefront from the terminal.
//!
//! Commands:
//! - `warung menu` - List the menu, optionally by category
//! - `warung search` - Search the menu
//! - `warung render` - Render a storefront page to an HTML file
//! - `warung demo` - Walk through a cart session (scripted or interactive)

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DemoArgs, MenuArgs, RenderArgs, SearchArgs};

/// Warung CLI - the Warung Sedap storefront in your terminal
#[derive(Parser)]
#[command(name = "warung")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the menu
    Menu(MenuArgs),

    /// Search the menu by text
    Search(SearchArgs),

    /// Render a storefront page to an HTML file
    Render(RenderArgs),

    /// Walk through a cart session
    Demo(DemoArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Menu(args) => commands::menu::run(args, &ctx),
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Demo(args) => commands::demo::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&e.to_string());
        std::process::exit(1);
    }
    Ok(())
}
