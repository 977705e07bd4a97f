use std::collections::HashMap;

/// Alias given to the primary table of SELECT, UPDATE and DELETE statements.
pub const DEFAULT_ALIAS: &str = "u";

/// Maps a table name to the text used to qualify its columns.
///
/// Joined tables are registered under their own name, so only the primary
/// table ever gets a real alias.
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    sources: HashMap<String, String>,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `table` under `alias`, overwriting any earlier entry.
    pub fn register(&mut self, table: impl Into<String>, alias: impl Into<String>) {
        self.sources.insert(table.into(), alias.into());
    }

    /// Returns the alias for `table`, or the table name itself when it was
    /// never registered.
    pub fn alias_for<'a>(&'a self, table: &'a str) -> &'a str {
        match self.sources.get(table) {
            Some(alias) if !alias.is_empty() => alias.as_str(),
            _ => table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_table_is_its_own_alias() {
        let registry = AliasRegistry::new();
        assert_eq!(registry.alias_for("users"), "users");
    }

    #[test]
    fn test_register_overwrites() {
        let mut registry = AliasRegistry::new();
        registry.register("users", DEFAULT_ALIAS);
        assert_eq!(registry.alias_for("users"), "u");

        registry.register("users", "people");
        assert_eq!(registry.alias_for("users"), "people");
    }

    #[test]
    fn test_empty_alias_falls_back_to_table() {
        let mut registry = AliasRegistry::new();
        registry.register("users", "");
        assert_eq!(registry.alias_for("users"), "users");
    }
}
