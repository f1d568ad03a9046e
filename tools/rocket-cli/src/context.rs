//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use rocket_cache::{Cache, FileBackend};
use rocket_cart::{CartStore, Notice};
use rocket_data::HttpCatalog;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// The store the CLI works with.
pub type Store = CartStore<HttpCatalog, FileBackend>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    ///
    /// `timeout` replaces the configured catalog timeouts when given.
    pub fn load(
        config_path: Option<&str>,
        timeout: Option<Duration>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd)? {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            tracing::debug!(path = %path.display(), "using config file");
        }

        Ok(Self {
            config: config.with_env_overrides().with_timeout(timeout),
            config_path,
            output,
            cwd,
        })
    }

    /// Directory holding the stored cart.
    pub fn storage_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.dir)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Open the cart store. Notices are printed as errors.
    pub fn open_store(&self) -> Result<Store> {
        let catalog = HttpCatalog::new(self.config.catalog.clone())
            .context("Failed to build catalog client")?;

        let dir = self.storage_dir();
        let backend = FileBackend::open(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;

        let output = self.output;
        let notifier = move |notice: &Notice| output.error(&notice.message);

        self.output.debug(&format!(
            "catalog {} / storage {}",
            self.config.catalog.base_url,
            dir.display()
        ));
        CartStore::open(
            catalog,
            Cache::new(backend),
            notifier,
            self.config.store.clone(),
        )
        .context("Failed to load cart")
    }
}

/// Find config file in directory tree.
///
/// A config file that exists but does not parse is an error rather than
/// being skipped.
fn find_config(start: &Path) -> Result<Option<(PathBuf, CliConfig)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                let config = CliConfig::load(&config_path)?;
                return Ok(Some((config_path, config)));
            }
        }

        if !current.pop() {
            return Ok(None);
        }
    }
}
