//! Browser configuration
//!
//! Loaded once at startup and shared read-only with every handler.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::pagination::DEFAULT_MAX_PER_PAGE;
use crate::schema::DatabaseDescriptor;
use crate::{Error, Result};

/// Top-level browser settings
///
/// ```toml
/// activate = true
///
/// [[databases]]
/// name = "default"
/// engine = "sqlite"
/// location = "./data/example.db"
/// url = "sqlite:./data/example.db?mode=rwc"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    /// Gate for every browser route; requests are refused with 403 while false
    #[serde(default)]
    pub activate: bool,

    /// Upper bound accepted for `per_page`
    #[serde(default = "default_max_per_page")]
    pub max_per_page: u64,

    /// Configured databases, in declaration order
    #[serde(default)]
    pub databases: Vec<DatabaseConfig>,
}

fn default_max_per_page() -> u64 {
    DEFAULT_MAX_PER_PAGE
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            activate: false,
            max_per_page: DEFAULT_MAX_PER_PAGE,
            databases: Vec::new(),
        }
    }
}

/// One configured database connection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    /// Logical name used in URLs
    pub name: String,

    /// Driver identifier, e.g. "postgres", "postgresql", "sqlite"
    pub engine: String,

    /// Physical connection target reported to clients
    pub location: String,

    /// sqlx connection URL
    pub url: String,
}

impl DatabaseConfig {
    /// Case-sensitive substring match, so "Postgres" does not count.
    pub fn is_postgres(&self) -> bool {
        self.engine.contains("postgres")
    }

    pub fn is_sqlite(&self) -> bool {
        self.engine.contains("sqlite")
    }

    pub fn descriptor(&self) -> DatabaseDescriptor {
        DatabaseDescriptor {
            logical_name: self.name.clone(),
            physical_name: self.location.clone(),
            is_postgres: self.is_postgres(),
        }
    }
}

impl BrowserConfig {
    /// Load and validate settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BrowserConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_per_page == 0 {
            return Err(Error::Config("max_per_page must be at least 1".into()));
        }

        let mut seen = HashSet::new();
        for database in &self.databases {
            if database.name.is_empty() {
                return Err(Error::Config("database name cannot be empty".into()));
            }
            if !seen.insert(database.name.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate database name '{}'",
                    database.name
                )));
            }
        }

        Ok(())
    }

    /// Descriptors for every configured database, in declaration order
    pub fn descriptors(&self) -> Vec<DatabaseDescriptor> {
        self.databases.iter().map(DatabaseConfig::descriptor).collect()
    }
}
