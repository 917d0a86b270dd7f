//! Configuration file handling for the ledger.
//!
//! The configuration file is stored at `$LEDGER_HOME/config.json`. It names the SQLite file that
//! holds the expenses and carries display settings for the chart.

use crate::db::Db;
use crate::utils;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_NAME: &str = "ledger";
const CONFIG_VERSION: u8 = 1;
const CHART_WIDTH: usize = 40;
const CONFIG_JSON: &str = "config.json";
const EXPENSES_SQLITE: &str = "expenses.sqlite";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$LEDGER_HOME` and from there it loads `$LEDGER_HOME/config.json`. Loading a
/// `Config` also makes sure the expense store exists, so a loaded `Config` is ready for use.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
    db: Db,
}

impl Config {
    /// Creates the data directory, an initial `config.json` with default settings, and the
    /// expense store.
    ///
    /// # Errors
    /// - Returns an error if `config.json` already exists.
    /// - Returns an error if any file operations fail.
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        // Create the directory if it does not exist
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the ledger home directory")?;
        let root = utils::canonicalize(&maybe_relative).await?;

        let config_path = root.join(CONFIG_JSON);
        if config_path.exists() {
            bail!("A config file already exists at '{}'", config_path.display())
        }
        let config_file = ConfigFile::default();
        config_file.save(&config_path).await?;

        let db = Db::ensure_store(config_file.resolve_sqlite_path(&root))
            .await
            .context("Unable to create SQLite DB")?;
        info!("Created the ledger in {}", root.display());

        Ok(Self {
            root,
            config_path,
            config_file,
            db,
        })
    }

    /// This will
    /// - validate that `ledger_home` exists and that the config file exists
    /// - load the config file
    /// - ensure the expense store exists, creating it if necessary
    /// - return the loaded configuration object
    pub async fn load(ledger_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = ledger_home.into();
        let root = utils::canonicalize(&maybe_relative)
            .await
            .context("Ledger Home is missing")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!("The config file is missing '{}'", config_path.display())
        }
        let config_file = ConfigFile::load(&config_path).await?;

        let db = Db::ensure_store(config_file.resolve_sqlite_path(&root))
            .await
            .context("Unable to load SQLite DB")?;

        Ok(Self {
            root,
            config_path,
            config_file,
            db,
        })
    }

    /// Loads the configuration at `ledger_home`, creating it first when there is no config file.
    pub async fn open(ledger_home: impl Into<PathBuf>) -> Result<Self> {
        let ledger_home = ledger_home.into();
        if ledger_home.join(CONFIG_JSON).is_file() {
            Self::load(ledger_home).await
        } else {
            debug!(
                "No config file in {}, creating one",
                ledger_home.to_string_lossy()
            );
            Self::create(ledger_home).await
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn sqlite_path(&self) -> &Path {
        self.db.path()
    }

    pub fn chart_width(&self) -> usize {
        self.config_file.chart_width
    }

    pub(crate) fn db(&self) -> &Db {
        &self.db
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "ledger",
///   "config_version": 1,
///   "chart_width": 40,
///   "sqlite_path": "expenses.sqlite"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "ledger"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Length, in characters, of the longest bar in the chart
    #[serde(default = "default_chart_width")]
    chart_width: usize,

    /// Path to the SQLite file (optional, relative to config.json or absolute)
    /// Defaults to $LEDGER_HOME/expenses.sqlite if not specified
    #[serde(skip_serializing_if = "Option::is_none")]
    sqlite_path: Option<PathBuf>,
}

fn default_chart_width() -> usize {
    CHART_WIDTH
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            chart_width: CHART_WIDTH,
            sqlite_path: None,
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if it belongs to another app.
    async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::deserialize(path)
            .await
            .with_context(|| format!("Failed to load config file at {}", path.display()))?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        anyhow::ensure!(
            config.config_version <= CONFIG_VERSION,
            "Config version {} is unsupported. Is a newer version of ledger available?",
            config.config_version
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }

    /// Gets the SQLite path, relative paths being resolved against `root`.
    fn resolve_sqlite_path(&self, root: &Path) -> PathBuf {
        let p = self
            .sqlite_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(EXPENSES_SQLITE));
        if p.is_absolute() {
            return p;
        }
        root.join(p)
    }
}
