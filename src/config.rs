// src/config.rs
//! Store configuration
//!
//! Settings come from, in increasing priority: built-in defaults, an optional
//! TOML file, and the `REZEPTE_DB` environment variable.
//!
//! ```toml
//! db_path = "/var/lib/rezepte/recipes.db"
//! busy_timeout_ms = 5000
//! search_limit = 25
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the database path
pub const DB_PATH_ENV: &str = "REZEPTE_DB";

/// Default number of search results
pub const DEFAULT_SEARCH_LIMIT: usize = 25;

/// Default location of the database file
///
/// `<data dir>/rezepte/recipes.db`, or `recipes.db` in the working
/// directory when the platform has no data directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("rezepte").join("recipes.db"))
        .unwrap_or_else(|| PathBuf::from("recipes.db"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// SQLite database file
    pub db_path: PathBuf,

    /// How long a writer waits for the lock before failing
    pub busy_timeout_ms: u64,

    /// Result cap when a search does not give its own limit
    pub search_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            busy_timeout_ms: 5000,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl Config {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config: {e}")))
    }

    /// Load from an optional file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a variable lookup such as `std::env::var`
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(db_path) = lookup(DB_PATH_ENV).filter(|v| !v.is_empty()) {
            self.db_path = PathBuf::from(db_path);
        }
        self
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}
