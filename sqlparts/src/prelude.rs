pub use super::db::query::{Join, JoinType, OrderBy, QueryBuilder};
pub use super::db::record::Record;
pub use super::db::repository::{FindParams, Repository};
pub use super::db::{ExecResult, Executor};
pub use super::params;
pub use super::types::*;
pub use super::{Config, Connection, Database, Error};
pub use async_trait::async_trait;
pub use sqlx::FromRow;
pub use sqlparts_derive::Record;
