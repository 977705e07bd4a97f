use std::str::FromStr;

use crate::error::Error;

/// The statement a builder renders, picked by the last of
/// `select`/`insert`/`update`/`delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        };
        std::write!(f, "{}", keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
    Full,
}

impl std::fmt::Display for JoinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join_type_name = match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::Full => "FULL",
        };
        std::write!(f, "{}", join_type_name)
    }
}

impl FromStr for JoinType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inner" | "" => Ok(JoinType::Inner),
            "left" => Ok(JoinType::Left),
            "right" => Ok(JoinType::Right),
            "full" => Ok(JoinType::Full),
            other => Err(Error::UnsupportedValue(format!("join type '{other}'"))),
        }
    }
}

/// A table joined onto the primary table.
///
/// `source` doubles as the alias of the joined table.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub source: String,
    /// Column on the joined table.
    pub join_key: String,
    /// Column on the primary table matched by `join_key`.
    pub target_key: String,
    pub kind: JoinType,
    /// Columns of the joined table projected next to the primary fields.
    pub fields: Vec<String>,
}

impl Join {
    pub fn new(
        kind: JoinType,
        source: impl Into<String>,
        join_key: impl Into<String>,
        target_key: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            join_key: join_key.into(),
            target_key: target_key.into(),
            kind,
            fields: Vec::new(),
        }
    }

    pub fn inner(
        source: impl Into<String>,
        join_key: impl Into<String>,
        target_key: impl Into<String>,
    ) -> Self {
        Self::new(JoinType::Inner, source, join_key, target_key)
    }

    pub fn left(
        source: impl Into<String>,
        join_key: impl Into<String>,
        target_key: impl Into<String>,
    ) -> Self {
        Self::new(JoinType::Left, source, join_key, target_key)
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }
}

/// One ORDER BY term. Both flags unset renders the bare column; both set
/// renders `ASC DESC`, which the database rejects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
    pub descending: bool,
}

impl OrderBy {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ..Default::default()
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            ascending: true,
            ..Self::new(column)
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            descending: true,
            ..Self::new(column)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_type_parse() {
        assert_eq!("left".parse::<JoinType>().unwrap(), JoinType::Left);
        assert_eq!("INNER".parse::<JoinType>().unwrap(), JoinType::Inner);
        assert_eq!(" Full ".parse::<JoinType>().unwrap(), JoinType::Full);
        assert!("sideways".parse::<JoinType>().is_err());
    }

    #[test]
    fn test_join_type_display_is_upper_case() {
        assert_eq!(JoinType::Right.to_string(), "RIGHT");
        assert_eq!(JoinType::Full.to_string(), "FULL");
    }

    #[test]
    fn test_join_type_rejects_cross() {
        // Every join renders an ON clause, which CROSS JOIN does not take.
        assert!("cross".parse::<JoinType>().is_err());
    }

    #[test]
    fn test_order_by_flags() {
        let asc = OrderBy::asc("name");
        assert!(asc.ascending && !asc.descending);
        let desc = OrderBy::desc("name");
        assert!(!desc.ascending && desc.descending);
        let bare = OrderBy::new("name");
        assert!(!bare.ascending && !bare.descending);
    }
}
