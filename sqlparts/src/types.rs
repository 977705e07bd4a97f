use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

pub type Integer = i64;
pub type Text = String;
pub type Float = f64;
pub type Boolean = bool;

/// Predicate map and insert/update payload.
///
/// Iteration order is unspecified, so multi-entry maps render their terms in
/// no particular order.
pub type Params = HashMap<String, Value>;

/// A value that can appear in a predicate map or a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    IntegerList(Vec<i64>),
    TextList(Vec<String>),
}

impl Value {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::IntegerList(_) | Self::TextList(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::IntegerList(items) => {
                let items = items.iter().map(i64::to_string).collect::<Vec<_>>();
                write!(f, "[{}]", items.join(", "))
            }
            Value::TextList(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

// Only types that widen losslessly into `i64`.
impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<uuid::Uuid> for Value {
    fn from(value: uuid::Uuid) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Vec<i64>> for Value {
    fn from(value: Vec<i64>) -> Self {
        Value::IntegerList(value)
    }
}

impl From<Vec<i32>> for Value {
    fn from(value: Vec<i32>) -> Self {
        Value::IntegerList(value.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::TextList(value)
    }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self {
        Value::TextList(value.into_iter().map(str::to_owned).collect())
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;

        match value {
            Json::Bool(b) => Ok(Value::Boolean(b)),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::Integer(i)),
                None => n
                    .as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| Error::UnsupportedValue(n.to_string())),
            },
            Json::String(s) => Ok(Value::Text(s)),
            Json::Array(items) => list_from_json(items),
            other @ (Json::Null | Json::Object(_)) => {
                Err(Error::UnsupportedValue(other.to_string()))
            }
        }
    }
}

fn list_from_json(items: Vec<serde_json::Value>) -> Result<Value> {
    if items.iter().all(serde_json::Value::is_i64) {
        return Ok(Value::IntegerList(
            items.iter().filter_map(serde_json::Value::as_i64).collect(),
        ));
    }
    if items.iter().all(serde_json::Value::is_string) {
        return Ok(Value::TextList(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ));
    }
    Err(Error::UnsupportedValue(format!(
        "{} (lists must hold only integers or only strings)",
        serde_json::Value::Array(items)
    )))
}

/// Decodes a JSON object into a `Params` map, rejecting values without a
/// `Value` counterpart.
pub fn params_from_json(value: serde_json::Value) -> Result<Params> {
    match value {
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| Ok((key, Value::try_from(value)?)))
            .collect(),
        other => Err(Error::UnsupportedValue(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}
