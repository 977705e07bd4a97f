/// Schema of a record type: which columns to select, which one identifies a
/// row, and which ones get a generated UUID on create.
///
/// Rows are decoded through the type's `sqlx::FromRow` implementation.
/// `#[derive(Record)]` fills the constants from `#[field(...)]` attributes,
/// but a hand-written impl works just as well.
///
/// # Example
///
/// ```
/// use sqlparts::db::record::Record;
///
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl Record for User {
///     const COLUMNS: &'static [&'static str] = &["id", "name"];
///     const KEY: Option<&'static str> = Some("id");
/// }
///
/// assert_eq!(User::key_column(), "id");
/// ```
pub trait Record {
    /// Columns selected when a find call does not name its own fields.
    const COLUMNS: &'static [&'static str];

    /// Primary key column.
    const KEY: Option<&'static str> = None;

    /// Columns filled with a fresh v4 UUID by `Repository::create`.
    const UUID_COLUMNS: &'static [&'static str] = &[];

    /// Column matched by `find_by_id` and `delete_by_id`.
    fn key_column() -> &'static str {
        Self::KEY.unwrap_or("id")
    }
}
