//! Implements a SQLite backed fallback queue.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    stores::{
        FallbackQueue, QueuedTransaction,
        sqlite::{format_date, map_transaction_row_with_offset},
    },
    transaction::Transaction,
};

/// Holds transactions that could not reach the transaction store in a
/// `pending_transaction` table.
///
/// Every failure is reported as [Error::QueueUnavailable] so the caller can
/// degrade to running without offline capability.
#[derive(Debug, Clone)]
pub struct SqliteFallbackQueue {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteFallbackQueue {
    /// Create a new queue for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl FallbackQueue for SqliteFallbackQueue {
    /// Retrieve every queued transaction, oldest enqueued first.
    ///
    /// # Panics
    /// Panics if the lock for the database connection has been poisoned.
    fn get_all(&self) -> Result<Vec<QueuedTransaction>, Error> {
        let connection = self.connection.lock().unwrap();

        connection
            .prepare("SELECT id, name, value, date FROM pending_transaction ORDER BY id ASC")
            .and_then(|mut stmt| {
                stmt.query_map([], |row| {
                    let id = row.get(0)?;
                    let transaction = map_transaction_row_with_offset(row, 1)?;
                    Ok(QueuedTransaction { id, transaction })
                })?
                .collect::<Result<Vec<_>, _>>()
            })
            .map_err(|error| Error::QueueUnavailable(error.to_string()))
    }

    /// Enqueue one transaction.
    ///
    /// # Panics
    /// Panics if the lock for the database connection has been poisoned.
    fn put(&mut self, transaction: &Transaction) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection
            .execute(
                "INSERT INTO pending_transaction (name, value, date) VALUES (?1, ?2, ?3)",
                (
                    &transaction.name,
                    transaction.value.to_string(),
                    format_date(transaction.date),
                ),
            )
            .map_err(|error| Error::QueueUnavailable(error.to_string()))?;

        Ok(())
    }

    /// Remove the queued transaction with the given id, if it is still
    /// present.
    ///
    /// # Panics
    /// Panics if the lock for the database connection has been poisoned.
    fn remove(&mut self, id: i64) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection
            .execute("DELETE FROM pending_transaction WHERE id = ?1", [id])
            .map_err(|error| Error::QueueUnavailable(error.to_string()))?;

        Ok(())
    }

    /// Remove every queued transaction.
    ///
    /// # Panics
    /// Panics if the lock for the database connection has been poisoned.
    fn clear(&mut self) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection
            .execute("DELETE FROM pending_transaction", ())
            .map_err(|error| Error::QueueUnavailable(error.to_string()))?;

        Ok(())
    }
}
