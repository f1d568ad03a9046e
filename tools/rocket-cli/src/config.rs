//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use rocket_cart::StoreConfig;
use rocket_data::{CatalogConfig, TimeoutConfig};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `catalog.base_url`.
pub const CATALOG_URL_ENV: &str = "ROCKET_CATALOG_URL";

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["rocket.toml", ".rocket.toml", "rocket.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog API.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Durable cart storage.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Cart store behaviour.
    #[serde(default)]
    pub store: StoreConfig,
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
        let content = self.render(is_json(path))?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Serialize as TOML, or JSON when `json` is set.
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(toml::to_string_pretty(self)?)
        }
    }

    /// Apply environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_catalog_url(std::env::var(CATALOG_URL_ENV).ok())
    }

    fn with_catalog_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.catalog.base_url = url;
        }
        self
    }

    /// Replace the catalog timeouts with a single overall limit.
    pub fn with_timeout(mut self, total: Option<Duration>) -> Self {
        if let Some(total) = total {
            self.catalog.timeout = TimeoutConfig::from_total(total);
        }
        self
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Where the cart is kept on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for stored values, relative to the working directory.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".rocket".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}
