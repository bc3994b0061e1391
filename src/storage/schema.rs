//! Database schema definitions

/// Longest name the `names` table accepts
pub const MAX_NAME_LEN: usize = 255;

/// SQL to create the names table
///
/// SQLite ignores declared column lengths, so the CHECK carries the
/// VARCHAR(255) limit.
pub const CREATE_NAMES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS names (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(255) CHECK (length(name) <= 255)
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_NAMES_TABLE]
}
