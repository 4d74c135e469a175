//! v001 -- Initial schema creation.
//!
//! Creates the `slots` table. Each row holds one whole collection (or the
//! settings object, or the session snapshot) as a JSON document.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS slots (
    key        TEXT PRIMARY KEY NOT NULL,   -- namespace prefix + slot name
    json       TEXT NOT NULL,               -- serialized collection / object
    updated_at TEXT NOT NULL                -- ISO-8601 / RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
