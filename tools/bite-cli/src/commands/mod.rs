//! CLI command implementations.

pub mod cart;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Menu item ID.
    pub id: String,

    /// Item name shown in the cart.
    #[arg(short, long)]
    pub name: String,

    /// Unit price in major units (e.g., 18.90).
    #[arg(short, long)]
    pub price: String,

    /// Image URL.
    #[arg(short, long)]
    pub image: Option<String>,
}

/// Arguments for the dec command.
#[derive(Args)]
pub struct DecArgs {
    /// Menu item ID.
    pub id: String,

    /// Remove the whole line instead of one unit.
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Menu item ID.
    pub id: String,
}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
