//! Environment-driven configuration.
//!
//! `.env` files are honoured through `dotenv`. Recognised variables:
//!
//! * `DATABASE_URL` (required)
//! * `DEBUG`: `true` pretty-prints every executed statement
//! * `DEFAULT_LIMIT`: page size used when a find call asks for no limit
//! * `MAX_CONNECTIONS`: pool size

use crate::error::{Error, Result};

pub const DEFAULT_LIMIT: u64 = 100;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub debug: bool,
    pub default_limit: u64,
    pub max_connections: u32,
}

impl Config {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            debug: false,
            default_limit: DEFAULT_LIMIT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::Config("DATABASE_URL is not set".to_string()))?;

        let mut config = Self::new(database_url);
        config.debug = lookup("DEBUG").is_some_and(|v| v == "true");

        if let Some(limit) = lookup("DEFAULT_LIMIT") {
            config.default_limit = parse_var("DEFAULT_LIMIT", &limit)?;
        }
        if let Some(size) = lookup("MAX_CONNECTIONS") {
            config.max_connections = parse_var("MAX_CONNECTIONS", &size)?;
        }
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key} must be a non-negative integer, got '{raw}'")))
}
