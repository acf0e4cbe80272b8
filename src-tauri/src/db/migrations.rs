// Schema setup
use anyhow::Result;
use rusqlite::Connection;

/// Create the course and credential tables if they are missing.
///
/// Safe to call any number of times; existing tables and rows are untouched.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS courses (
            id INTEGER PRIMARY KEY,
            course_name TEXT,
            course_code TEXT,
            min_cgpa REAL,
            credits INTEGER
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS admin_credentials (
            id INTEGER PRIMARY KEY,
            username TEXT,
            password_hash TEXT
        )",
        [],
    )?;

    Ok(())
}
