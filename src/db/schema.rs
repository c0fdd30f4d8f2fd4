//! SQL DDL for the breached-password table.

/// Table holding one row per known-compromised password:
/// - `pwd` is the uppercase hex SHA-1 digest
/// - PRIMARY KEY gives the exact-match lookup its index
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS pwdlist (
    pwd TEXT NOT NULL PRIMARY KEY
);
"#;
