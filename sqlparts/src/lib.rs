/// This module contains the macros used in the crate.
#[macro_use]
mod macros;

/// Environment-driven configuration.
pub mod config;

/// This module contains the database-related functionality.
pub mod db;

/// Error and result types.
pub mod error;

/// This module contains the prelude for the crate.
pub mod prelude;

/// Values, payloads and predicate maps.
pub mod types;

pub use config::Config;
pub use error::{Error, Result};

pub type Connection = sqlx::Pool<sqlx::Any>;

/// Represents a database.
#[derive(Debug, Clone)]
pub struct Database {
    pub conn: Connection,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::connect(database_url, config::DEFAULT_MAX_CONNECTIONS).await
    }

    pub async fn from_config(config: &Config) -> Result<Self> {
        Self::connect(&config.database_url, config.max_connections).await
    }

    async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        sqlx::any::install_default_drivers();
        let conn = sqlx::any::AnyPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::debug!(max_connections, "database pool ready");
        Ok(Self { conn })
    }
}
