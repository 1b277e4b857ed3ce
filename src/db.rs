//! Database initialization for the application's SQLite file.

use rusqlite::Connection;

/// Create the tables for the transaction store and the fallback queue.
///
/// Safe to call on every start; existing tables are left untouched.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL
/// error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                value TEXT NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    // The store always lists by date.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    connection.execute(
        "CREATE TABLE IF NOT EXISTS pending_transaction (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                value TEXT NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}
