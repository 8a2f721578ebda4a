//! CLI execution context.
//!
//! This is the composition root: it builds the store, repository and cart
//! aggregator from the configuration and hands them to commands.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bite_cart::{CartAggregator, StoreCartRepository};
use bite_store::FileStore;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched from the working directory upwards.
const CONFIG_NAMES: [&str; 3] = ["bite.toml", ".bite.toml", "bite.json"];

/// The cart aggregator as wired by the CLI.
pub type CliCart = CartAggregator<StoreCartRepository<FileStore>>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => match find_config(&cwd) {
                Some((_, Ok(config))) => config,
                Some((path, Err(e))) => {
                    output.warn(&format!(
                        "Ignoring unreadable config {}: {:#}",
                        path.display(),
                        e
                    ));
                    CliConfig::default()
                }
                None => CliConfig::default(),
            },
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Directory the cart store lives in.
    pub fn storage_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.dir)
    }

    /// Open the persisted cart.
    pub fn open_cart(&self) -> Result<CliCart> {
        let dir = self.storage_dir();
        let mut store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open cart storage at {}", dir.display()))?;
        if let Some(quota) = self.config.storage.quota_bytes {
            store = store.with_quota(quota);
        }

        Ok(CartAggregator::open(StoreCartRepository::new(
            store,
            self.config.cart.currency,
        )))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find the nearest config file in the directory tree and load it.
///
/// Runs before logging is set up, so a load error is handed back with the
/// path instead of being logged here.
fn find_config(start: &Path) -> Option<(PathBuf, Result<CliConfig>)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                let loaded = CliConfig::load(&config_path);
                return Some((config_path, loaded));
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
