//! Bite CLI - Command line client for the Bite cart.
//!
//! Commands:
//! - `bite add` - Add one unit of a menu item
//! - `bite dec` - Remove one unit (or the whole line with `--all`)
//! - `bite remove` - Remove a whole line
//! - `bite clear` - Empty the cart
//! - `bite show` - Show lines and totals
//! - `bite checkout` - Print the checkout snapshot
//! - `bite config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{AddArgs, ClearArgs, ConfigArgs, DecArgs, RemoveArgs};
use config::LoggingConfig;

/// Bite CLI - Manage the food-delivery cart from the terminal
#[derive(Parser)]
#[command(name = "bite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a menu item
    Add(AddArgs),

    /// Remove one unit of an item
    Dec(DecArgs),

    /// Remove an item entirely
    Remove(RemoveArgs),

    /// Remove every item
    Clear(ClearArgs),

    /// Show the cart
    Show,

    /// Print the snapshot handed to order submission
    Checkout,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    init_tracing(&ctx.config.logging, cli.verbose);

    let result = match cli.command {
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Dec(args) => commands::cart::dec(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Clear(args) => commands::cart::clear(args, &ctx),
        Commands::Show => commands::cart::show(&ctx),
        Commands::Checkout => commands::cart::checkout(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_env("BITE_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("bite=debug,info")
        } else {
            EnvFilter::new(&logging.filter)
        }
    });

    let format = env::var("BITE_LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}
