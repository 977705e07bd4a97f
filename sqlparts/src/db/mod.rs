//! The `db` module provides functionality for interacting with the database.
//!
//! [`query`] renders SQL text, [`Executor`] runs it, and [`repository`] ties
//! both to a table described by a [`record::Record`].
use sqlx::any::AnyRow;
use sqlx::FromRow;

use crate::error::Result;
use crate::Database;

pub mod query;
pub mod record;
pub mod repository;

use query::QueryBuilder;

/// Outcome of a mutating statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub rows_affected: u64,
    /// Only MySQL fills this through the Any driver; SQLite and Postgres
    /// leave it `None`.
    pub last_insert_id: Option<i64>,
}

/// Runs SQL text produced by a [`QueryBuilder`].
#[async_trait::async_trait]
pub trait Executor: Send + Sync {
    /// Hands out a fresh builder for one statement.
    fn builder(&self) -> QueryBuilder {
        QueryBuilder::default()
    }

    /// Executes a mutating statement.
    async fn exec(&self, sql: &str) -> Result<ExecResult>;

    /// Runs a SELECT and decodes every row.
    async fn query_as<T>(&self, sql: &str) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, AnyRow> + Send + Unpin;
}

#[async_trait::async_trait]
impl Executor for Database {
    async fn exec(&self, sql: &str) -> Result<ExecResult> {
        let result = sqlx::query(sql)
            .execute(&self.conn)
            .await
            .inspect_err(|err| tracing::warn!(target: "sqlparts::sql", %err, sql, "exec failed"))?;
        Ok(ExecResult {
            rows_affected: result.rows_affected(),
            last_insert_id: result.last_insert_id(),
        })
    }

    async fn query_as<T>(&self, sql: &str) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, AnyRow> + Send + Unpin,
    {
        let rows = sqlx::query_as::<_, T>(sql)
            .fetch_all(&self.conn)
            .await
            .inspect_err(|err| tracing::warn!(target: "sqlparts::sql", %err, sql, "query failed"))?;
        Ok(rows)
    }
}
