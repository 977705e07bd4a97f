//! Error types shared by the repository, the executor and configuration loading.
//!
//! The statement builder itself never fails: a half-configured builder renders
//! partial SQL and the database reports the problem when the statement runs.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The database rejected a statement or the pool could not be reached.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A lookup by key or by payload returned no rows.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A loosely typed input value has no `Value` counterpart.
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// Missing or malformed configuration.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
