//! Connection registry
//!
//! Maps logical database names to their providers. Built once from the
//! configuration; pools connect lazily so an unreachable database never
//! blocks startup or the database listing.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{BrowserConfig, DatabaseConfig};
use crate::database::traits::{DatabaseError, DatabaseProvider};

#[cfg(feature = "postgres")]
use crate::database::postgres::PostgresProvider;

#[cfg(feature = "sqlite")]
use crate::database::sqlite::SqliteProvider;

#[derive(Default)]
pub struct ConnectionRegistry {
    providers: HashMap<String, Arc<dyn DatabaseProvider>>,
    /// Configured databases without a provider, keyed by name, valued by engine
    unsupported: HashMap<String, String>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lazily-connecting provider for every configured database
    ///
    /// Entries whose engine has no provider are kept aside; looking them up
    /// fails with [`DatabaseError::UnsupportedEngine`].
    pub fn from_config(config: &BrowserConfig) -> Result<Self, DatabaseError> {
        let mut registry = Self::new();

        for database in &config.databases {
            match Self::connect_lazy(database)? {
                Some(provider) => {
                    tracing::info!(
                        database = %database.name,
                        engine = %database.engine,
                        "registered database"
                    );
                    registry.providers.insert(database.name.clone(), provider);
                }
                None => {
                    tracing::warn!(
                        database = %database.name,
                        engine = %database.engine,
                        "no provider for database engine, table access disabled"
                    );
                    registry
                        .unsupported
                        .insert(database.name.clone(), database.engine.clone());
                }
            }
        }

        Ok(registry)
    }

    fn connect_lazy(
        database: &DatabaseConfig,
    ) -> Result<Option<Arc<dyn DatabaseProvider>>, DatabaseError> {
        if database.is_postgres() {
            Self::connect_postgres(database)
        } else if database.is_sqlite() {
            Self::connect_sqlite(database)
        } else {
            Ok(None)
        }
    }

    #[cfg(feature = "postgres")]
    fn connect_postgres(
        database: &DatabaseConfig,
    ) -> Result<Option<Arc<dyn DatabaseProvider>>, DatabaseError> {
        Ok(Some(Arc::new(PostgresProvider::connect_lazy(&database.url)?)))
    }

    #[cfg(not(feature = "postgres"))]
    fn connect_postgres(
        _database: &DatabaseConfig,
    ) -> Result<Option<Arc<dyn DatabaseProvider>>, DatabaseError> {
        Ok(None)
    }

    #[cfg(feature = "sqlite")]
    fn connect_sqlite(
        database: &DatabaseConfig,
    ) -> Result<Option<Arc<dyn DatabaseProvider>>, DatabaseError> {
        Ok(Some(Arc::new(SqliteProvider::connect_lazy(&database.url)?)))
    }

    #[cfg(not(feature = "sqlite"))]
    fn connect_sqlite(
        _database: &DatabaseConfig,
    ) -> Result<Option<Arc<dyn DatabaseProvider>>, DatabaseError> {
        Ok(None)
    }

    /// Register a provider under a logical name, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn DatabaseProvider>) {
        let name = name.into();
        self.unsupported.remove(&name);
        self.providers.insert(name, provider);
    }

    /// Look up the provider for a logical database name
    pub fn get(&self, name: &str) -> Result<Arc<dyn DatabaseProvider>, DatabaseError> {
        if let Some(provider) = self.providers.get(name) {
            return Ok(Arc::clone(provider));
        }

        match self.unsupported.get(name) {
            Some(engine) => Err(DatabaseError::UnsupportedEngine {
                database: name.to_string(),
                engine: engine.clone(),
            }),
            None => Err(DatabaseError::UnknownDatabase(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
