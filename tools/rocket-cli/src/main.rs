//! Rocket CLI - Command line cart for the Rocket Shoes storefront.
//!
//! Commands:
//! - `rocket show` - Show the cart
//! - `rocket add` - Add one unit of a product
//! - `rocket remove` - Remove a product
//! - `rocket update` - Set a product's amount
//! - `rocket config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{ConfigArgs, ItemArgs, ShowArgs, UpdateArgs};

/// Rocket CLI - Keep a stock-checked shopping cart
#[derive(Parser)]
#[command(name = "rocket")]
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

    /// Give up on catalog lookups after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart
    Show(ShowArgs),

    /// Add one unit of a product
    Add(ItemArgs),

    /// Remove a product from the cart
    Remove(ItemArgs),

    /// Set the amount of a product already in the cart
    Update(UpdateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Filter used when `RUST_LOG` is unset. Verbose runs include rejected
/// cart operations, which the store logs at debug.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,rocket=debug,rocket_cart=debug,rocket_data=debug,rocket_cache=debug"
    } else {
        "warn"
    }
}

fn init_tracing(verbose: bool, json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let timeout = cli.timeout.map(Duration::from_secs);
    let ctx = context::Context::load(config_path, timeout, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Add(args) => commands::add::run(args, &ctx).await,
        Commands::Remove(args) => commands::remove::run(args, &ctx).await,
        Commands::Update(args) => commands::update::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        // Rejected cart operations were already shown through the notifier.
        if e.downcast_ref::<commands::Rejected>().is_none() {
            ctx.output.error(&format!("{:#}", e));
        }
        std::process::exit(1);
    }

    Ok(())
}
