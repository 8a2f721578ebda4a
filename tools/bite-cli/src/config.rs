//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use bite_cart::Currency;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Cart settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted values (default: .bite).
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Maximum size of one stored value in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<usize>,
}

fn default_storage_dir() -> String {
    ".bite".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            quota_bytes: None,
        }
    }
}

/// Cart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartConfig {
    /// Currency of menu prices (default: BRL).
    #[serde(default)]
    pub currency: Currency,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when BITE_LOG is unset.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Output format: "compact" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_filter() -> String {
    "bite=info,warn".to_string()
}

fn default_format() -> String {
    "compact".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: default_format(),
        }
    }
}

/// Generate a default bite.toml config file.
pub fn generate_default_config() -> String {
    r#"# Bite cart configuration

[storage]
dir = ".bite"
# quota_bytes = 5242880

[cart]
currency = "BRL"

[logging]
filter = "bite=info,warn"
format = "compact"
"#
    .to_string()
}
