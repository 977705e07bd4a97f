//! Literal formatting and WHERE rendering.
//!
//! Values are spliced into the SQL text as literals. Nothing is escaped, so a
//! text value containing `'` breaks the statement (or worse). Only feed these
//! functions trusted input.

use crate::types::{Params, Value};

/// Characters that mark a predicate key as carrying its own operator.
const OPERATOR_CHARS: [char; 3] = ['=', '>', '<'];

/// Formats a value as an SQL literal.
///
/// Floats get eight decimals, integers plain digits. Everything else is
/// wrapped in single quotes around its display form, including booleans
/// (`'true'`) and lists (`'[1, 2]'`).
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Float(n) => format!("{n:.8}"),
        Value::Integer(n) => n.to_string(),
        Value::Text(_) | Value::Boolean(_) | Value::IntegerList(_) | Value::TextList(_) => {
            format!("'{value}'")
        }
    }
}

/// Renders a homogeneous list as the parenthesised body of an IN clause.
fn to_in_list(value: &Value) -> Option<String> {
    let items = match value {
        Value::IntegerList(items) => items.iter().map(i64::to_string).collect::<Vec<_>>(),
        Value::TextList(items) => items.iter().map(|s| format!("'{s}'")).collect(),
        _ => return None,
    };
    Some(format!("({})", items.join(",")))
}

/// Whether the key already embeds a comparison operator, e.g. `age>`.
pub fn has_operator(key: &str) -> bool {
    key.contains(OPERATOR_CHARS)
}

/// Renders one predicate qualified with `alias`.
///
/// Lists become `IN (...)`. Scalars get `=` unless the key carries its own
/// operator, in which case the key and the literal are simply concatenated.
pub fn to_predicate(alias: &str, key: &str, value: &Value) -> String {
    if let Some(list) = to_in_list(value) {
        return format!("{alias}.{key} IN {list}");
    }
    let sign = if has_operator(key) { "" } else { "=" };
    format!("{alias}.{key}{sign}{}", to_string(value))
}

/// Renders ` WHERE a AND b ...`, or nothing for an empty map.
pub fn to_where_clause(alias: &str, predicates: &Params) -> String {
    if predicates.is_empty() {
        return String::new();
    }
    let terms = predicates
        .iter()
        .map(|(key, value)| to_predicate(alias, key, value))
        .collect::<Vec<_>>();
    format!(" WHERE {}", terms.join(" AND "))
}
