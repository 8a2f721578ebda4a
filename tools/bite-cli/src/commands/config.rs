//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.info("[storage]");
    ctx.output
        .kv("dir", &ctx.storage_dir().display().to_string());
    match ctx.config.storage.quota_bytes {
        Some(quota) => ctx.output.kv("quota_bytes", &quota.to_string()),
        None => ctx.output.kv("quota_bytes", "unlimited"),
    }

    ctx.output.info("[cart]");
    ctx.output.kv("currency", ctx.config.cart.currency.code());

    ctx.output.info("[logging]");
    ctx.output.kv("filter", &ctx.config.logging.filter);
    ctx.output.kv("format", &ctx.config.logging.format);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    // JSON mode writes bite.json without the commented template.
    let config_path = if ctx.output.is_json() {
        ctx.cwd.join("bite.json")
    } else {
        ctx.cwd.join("bite.toml")
    };

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if ctx.output.is_json() {
        CliConfig::default().save(&config_path)?;
    } else {
        std::fs::write(&config_path, generate_default_config())?;
    }
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}
