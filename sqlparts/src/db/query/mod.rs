//! Fluent construction of SELECT, INSERT, UPDATE and DELETE statements.
//!
//! A `QueryBuilder` accumulates the parts of one statement and renders them
//! into SQL text with [`QueryBuilder::build`]. Each builder is meant for a
//! single statement; reusing one for an unrelated statement mixes their parts.
//!
//! ```
//! use sqlparts::db::query::QueryBuilder;
//! use sqlparts::params;
//!
//! let sql = QueryBuilder::default()
//!     .select(["id"])
//!     .from("users")
//!     .r#where(params!(id = 5))
//!     .limit(10, 0)
//!     .build();
//! assert_eq!(sql, "SELECT u.id FROM users as u WHERE u.id=5 LIMIT 10 OFFSET 0");
//! ```

pub mod alias;
pub mod builder;
pub mod condition;
pub mod statement;

pub use alias::{AliasRegistry, DEFAULT_ALIAS};
pub use statement::{Join, JoinType, OrderBy, StatementKind};

use crate::types::Params;

/// Everything configured for one statement.
#[derive(Debug, Clone, Default)]
pub struct StatementParts {
    pub table: String,
    /// Projected columns; empty means all columns.
    pub fields: Vec<String>,
    pub predicates: Params,
    pub joins: Vec<Join>,
    pub order: Vec<OrderBy>,
    /// Zero means unbounded.
    pub limit: u64,
    pub offset: u64,
    /// INSERT values, and the SET source of UPDATE.
    pub payload: Params,
    pub returning: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    kind: Option<StatementKind>,
    parts: StatementParts,
    sources: AliasRegistry,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a SELECT and appends `fields` to the projection.
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kind = Some(StatementKind::Select);
        self.parts.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn insert(mut self, table: impl Into<String>) -> Self {
        self.kind = Some(StatementKind::Insert);
        self.parts.table = table.into();
        self
    }

    pub fn update(mut self, table: impl Into<String>) -> Self {
        self.kind = Some(StatementKind::Update);
        self.parts.table = table.into();
        self.sources.register(self.parts.table.clone(), DEFAULT_ALIAS);
        self
    }

    /// Starts a DELETE. The table comes from [`QueryBuilder::from`].
    pub fn delete(mut self) -> Self {
        self.kind = Some(StatementKind::Delete);
        self
    }

    /// Column/value payload for INSERT and UPDATE.
    pub fn values(mut self, payload: Params) -> Self {
        self.parts.payload = payload;
        self
    }

    /// Same as [`QueryBuilder::values`].
    pub fn set(self, payload: Params) -> Self {
        self.values(payload)
    }

    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.parts.table = table.into();
        self.sources.register(self.parts.table.clone(), DEFAULT_ALIAS);
        self
    }

    /// Replaces the predicate map. Terms are ANDed together.
    pub fn r#where(mut self, predicates: Params) -> Self {
        self.parts.predicates = predicates;
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.sources.register(join.source.clone(), join.source.clone());
        self.parts.joins.push(join);
        self
    }

    pub fn order(mut self, order: OrderBy) -> Self {
        self.parts.order.push(order);
        self
    }

    /// Sets the pagination window. A `limit` of zero disables it.
    pub fn limit(mut self, limit: u64, offset: u64) -> Self {
        self.parts.limit = limit;
        self.parts.offset = offset;
        self
    }

    /// Asks INSERT to return `column`.
    pub fn return_id(mut self, column: impl Into<String>) -> Self {
        self.parts.returning = Some(column.into());
        self
    }

    pub fn kind(&self) -> Option<StatementKind> {
        self.kind
    }

    pub fn parts(&self) -> &StatementParts {
        &self.parts
    }

    /// Renders the statement, or an empty string when no statement kind was
    /// ever chosen.
    pub fn build(&self) -> String {
        match self.kind {
            Some(StatementKind::Select) => self.build_select(),
            Some(StatementKind::Insert) => self.build_insert(),
            Some(StatementKind::Update) => self.build_update(),
            Some(StatementKind::Delete) => self.build_delete(),
            None => String::new(),
        }
    }

    fn primary_alias(&self) -> &str {
        self.sources.alias_for(&self.parts.table)
    }
}
