//! Table-bound data access on top of [`QueryBuilder`] and an [`Executor`].
//!
//! # Example
//!
//! ```no_run
//! use sqlparts::prelude::*;
//!
//! #[derive(FromRow, Record, Debug)]
//! struct User {
//!     #[field(key = true)]
//!     id: Integer,
//!     name: String,
//! }
//!
//! # async fn run() -> sqlparts::Result<()> {
//! let database = Database::new("sqlite::memory:").await?;
//! let users = Repository::<User>::new(database, "users");
//! let joe = users.create(params!(name = "joe")).await?;
//! let adults = users.find(params!("id>" => 0), &FindParams::default()).await?;
//! users.update(params!(id = joe.id), params!(name = "joseph")).await?;
//! users.delete_by_id(joe.id).await?;
//! # let _ = adults;
//! # Ok(())
//! # }
//! ```

use std::marker::PhantomData;

use sqlx::any::AnyRow;
use sqlx::FromRow;

use super::query::{OrderBy, QueryBuilder};
use super::record::Record;
use super::{ExecResult, Executor};
use crate::config::{Config, DEFAULT_LIMIT};
use crate::error::{Error, Result};
use crate::types::{Params, Value};
use crate::Database;

/// Projection, pagination and ordering for [`Repository::find`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindParams {
    /// Columns to select; empty selects the record's own columns.
    pub fields: Vec<String>,
    pub skip: u64,
    /// Zero falls back to the repository's default limit.
    pub limit: u64,
    pub order: Vec<OrderBy>,
}

impl FindParams {
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn order(mut self, order: OrderBy) -> Self {
        self.order.push(order);
        self
    }
}

/// Repository-level settings, usually derived from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryOptions {
    /// Pretty-print every executed statement at `info` level.
    pub debug: bool,
    pub default_limit: u64,
}

impl Default for RepositoryOptions {
    fn default() -> Self {
        Self {
            debug: false,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl From<&Config> for RepositoryOptions {
    fn from(config: &Config) -> Self {
        Self {
            debug: config.debug,
            default_limit: config.default_limit,
        }
    }
}

/// Reads and writes records of type `T` stored in one table.
pub struct Repository<T, E = Database> {
    executor: E,
    source: String,
    options: RepositoryOptions,
    _record: PhantomData<fn() -> T>,
}

impl<T, E> Repository<T, E>
where
    T: Record + for<'r> FromRow<'r, AnyRow> + Send + Unpin,
    E: Executor,
{
    pub fn new(executor: E, source: impl Into<String>) -> Self {
        Self {
            executor,
            source: source.into(),
            options: RepositoryOptions::default(),
            _record: PhantomData,
        }
    }

    pub fn with_options(mut self, options: RepositoryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Inserts `payload` and reads the new row back.
    ///
    /// UUID columns of `T` are filled before the insert. The row is re-read by
    /// the key column when the payload carries it. Otherwise the INSERT asks
    /// for the generated key with `RETURNING`, which needs SQLite 3.35+,
    /// Postgres or MariaDB.
    pub async fn create(&self, mut payload: Params) -> Result<T> {
        for column in T::UUID_COLUMNS {
            payload.insert((*column).to_string(), Value::from(uuid::Uuid::new_v4()));
        }
        let key = T::key_column();
        let builder = self.executor.builder().insert(&self.source);

        if let Some(value) = payload.get(key).cloned() {
            let sql = builder.values(payload).build();
            self.exec("create", &sql).await?;
            return self.find_by_id(value).await;
        }

        let sql = builder.values(payload).return_id(key).build();
        self.log("create", &sql);
        let ids = self.executor.query_as::<(i64,)>(&sql).await?;
        match ids.into_iter().next() {
            Some((id,)) => self.find_by_id(id).await,
            None => Err(Error::not_found(format!(
                "{}: insert returned no '{key}'",
                self.source
            ))),
        }
    }

    /// Rows matching every predicate in `query`, possibly none.
    pub async fn find(&self, query: Params, params: &FindParams) -> Result<Vec<T>> {
        let fields = if params.fields.is_empty() {
            T::COLUMNS.iter().map(|c| (*c).to_string()).collect()
        } else {
            params.fields.clone()
        };
        let limit = if params.limit == 0 {
            self.options.default_limit
        } else {
            params.limit
        };

        let builder = params.order.iter().cloned().fold(
            self.executor
                .builder()
                .select(fields)
                .from(&self.source)
                .r#where(query)
                .limit(limit, params.skip),
            QueryBuilder::order,
        );
        let sql = builder.build();
        self.log("find", &sql);
        self.executor.query_as(&sql).await
    }

    /// The row whose key column equals `id`.
    pub async fn find_by_id(&self, id: impl Into<Value>) -> Result<T> {
        let id = id.into();
        let mut query = Params::new();
        query.insert(T::key_column().to_string(), id.clone());

        let rows = self.find(query, &FindParams::default().limit(1)).await?;
        rows.into_iter().next().ok_or_else(|| {
            Error::not_found(format!(
                "{}: no row with {}={id}",
                self.source,
                T::key_column()
            ))
        })
    }

    /// Applies `payload` to the rows matching `query`.
    ///
    /// The one-row limit requested here is not rendered for UPDATE, so every
    /// matching row is changed. Returns the number of affected rows.
    pub async fn update(&self, query: Params, payload: Params) -> Result<u64> {
        let sql = self
            .executor
            .builder()
            .update(&self.source)
            .set(payload)
            .r#where(query)
            .limit(1, 0)
            .build();
        Ok(self.exec("update", &sql).await?.rows_affected)
    }

    pub async fn delete(&self, query: Params) -> Result<u64> {
        let sql = self
            .executor
            .builder()
            .delete()
            .from(&self.source)
            .r#where(query)
            .build();
        Ok(self.exec("delete", &sql).await?.rows_affected)
    }

    pub async fn delete_by_id(&self, id: impl Into<Value>) -> Result<u64> {
        let mut query = Params::new();
        query.insert(T::key_column().to_string(), id.into());
        self.delete(query).await
    }

    async fn exec(&self, operation: &str, sql: &str) -> Result<ExecResult> {
        self.log(operation, sql);
        self.executor.exec(sql).await
    }

    fn log(&self, operation: &str, sql: &str) {
        tracing::debug!(target: "sqlparts::sql", source = %self.source, operation, sql);
        if self.options.debug {
            let formatted = sqlformat::format(
                sql,
                &sqlformat::QueryParams::None,
                &sqlformat::FormatOptions::default(),
            );
            tracing::info!(target: "sqlparts::sql", "{operation} SQL:\n{formatted}");
        }
    }
}
