//! Per-statement renderers. Clauses are emitted in a fixed order:
//! fields, FROM, JOIN, WHERE, ORDER BY, LIMIT.

use super::condition::{to_string, to_where_clause};
use super::{QueryBuilder, StatementKind};

impl QueryBuilder {
    pub(crate) fn build_select(&self) -> String {
        let mut sql = StatementKind::Select.to_string();
        sql += &self.build_fields();
        sql += &self.build_from();
        sql += &self.build_join();
        sql += &to_where_clause(self.primary_alias(), &self.parts.predicates);
        sql += &self.build_order_by();
        sql += &self.build_limit();
        sql
    }

    pub(crate) fn build_insert(&self) -> String {
        let mut sql = format!("{} INTO {}", StatementKind::Insert, self.parts.table);
        sql += &self.build_values();
        if let Some(column) = self.parts.returning.as_deref().filter(|c| !c.is_empty()) {
            sql += &format!(" RETURNING {column}");
        }
        sql
    }

    /// UPDATE ignores the pagination window: no LIMIT is ever rendered.
    pub(crate) fn build_update(&self) -> String {
        let mut sql = StatementKind::Update.to_string();
        sql += &self.build_table();
        sql += &self.build_setter();
        sql += &to_where_clause(self.primary_alias(), &self.parts.predicates);
        sql
    }

    pub(crate) fn build_delete(&self) -> String {
        let mut sql = StatementKind::Delete.to_string();
        sql += &self.build_from();
        sql += &to_where_clause(self.primary_alias(), &self.parts.predicates);
        sql
    }

    fn build_table(&self) -> String {
        format!(" {} as {}", self.parts.table, self.primary_alias())
    }

    fn build_from(&self) -> String {
        format!(" FROM{}", self.build_table())
    }

    fn build_fields(&self) -> String {
        let alias = self.primary_alias();
        let mut fields = if self.parts.fields.is_empty() {
            vec![format!("{alias}.*")]
        } else {
            self.parts
                .fields
                .iter()
                .map(|field| format!("{alias}.{field}"))
                .collect()
        };
        for join in &self.parts.joins {
            fields.extend(join.fields.iter().map(|f| format!("{}.{f}", join.source)));
        }
        format!(" {}", fields.join(", "))
    }

    fn build_join(&self) -> String {
        let alias = self.primary_alias();
        self.parts
            .joins
            .iter()
            .map(|join| {
                format!(
                    " {kind} JOIN {source} AS {source} ON {source}.{join_key} = {alias}.{target_key}",
                    kind = join.kind,
                    source = join.source,
                    join_key = join.join_key,
                    target_key = join.target_key,
                )
            })
            .collect()
    }

    fn build_values(&self) -> String {
        let (columns, values): (Vec<&str>, Vec<String>) = self
            .parts
            .payload
            .iter()
            .map(|(column, value)| (column.as_str(), to_string(value)))
            .unzip();
        format!(" ({}) VALUES ({})", columns.join(","), values.join(","))
    }

    /// The SET clause is only emitted alongside a WHERE clause; an UPDATE
    /// without predicates renders as a bare `UPDATE <table> as <alias>`.
    fn build_setter(&self) -> String {
        if self.parts.predicates.is_empty() {
            return String::new();
        }
        let terms = self
            .parts
            .payload
            .iter()
            .map(|(column, value)| format!("{column} = {}", to_string(value)))
            .collect::<Vec<_>>();
        format!(" SET {}", terms.join(", "))
    }

    fn build_order_by(&self) -> String {
        if self.parts.order.is_empty() {
            return String::new();
        }
        let alias = self.primary_alias();
        let terms = self
            .parts
            .order
            .iter()
            .map(|order| {
                let mut item = if order.column.contains('.') {
                    order.column.clone()
                } else {
                    format!("{alias}.{}", order.column)
                };
                if order.ascending {
                    item += " ASC";
                }
                if order.descending {
                    item += " DESC";
                }
                item
            })
            .collect::<Vec<_>>();
        format!(" ORDER BY {}", terms.join(","))
    }

    fn build_limit(&self) -> String {
        if self.parts.limit == 0 {
            return String::new();
        }
        format!(" LIMIT {} OFFSET {}", self.parts.limit, self.parts.offset)
    }
}
