//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    stores::{
        TransactionStore,
        sqlite::{format_date, map_transaction_row},
    },
    transaction::Transaction,
};

/// Stores transactions in a SQLite database.
///
/// Amounts are stored as their canonical decimal strings and dates as
/// RFC 3339 text, so values round-trip exactly.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Persist one transaction in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::StoreUnavailable] if the database is locked, busy, or
    ///   cannot be opened,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection has been poisoned.
    fn create(&mut self, transaction: &Transaction) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO \"transaction\" (name, value, date) VALUES (?1, ?2, ?3)",
            (
                &transaction.name,
                transaction.value.to_string(),
                format_date(transaction.date),
            ),
        )?;

        Ok(())
    }

    /// Persist an ordered batch of transactions inside one SQL transaction.
    ///
    /// Either the whole batch is committed or nothing is.
    ///
    /// # Errors
    /// Returns the same errors as [SqliteTransactionStore::create].
    ///
    /// # Panics
    /// Panics if the lock for the database connection has been poisoned.
    fn create_many(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        let tx = connection.unchecked_transaction()?;

        {
            let mut stmt = tx
                .prepare("INSERT INTO \"transaction\" (name, value, date) VALUES (?1, ?2, ?3)")?;

            for transaction in transactions {
                stmt.execute((
                    &transaction.name,
                    transaction.value.to_string(),
                    format_date(transaction.date),
                ))?;
            }
        }

        tx.commit()?;

        Ok(())
    }

    /// Retrieve all transactions sorted by date, newest first.
    ///
    /// Rows inserted at the same timestamp come back in reverse insertion
    /// order, matching the ledger's newest-first convention.
    ///
    /// # Errors
    /// Returns the same errors as [SqliteTransactionStore::create].
    ///
    /// # Panics
    /// Panics if the lock for the database connection has been poisoned.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.connection.lock().unwrap();

        let transactions = connection
            .prepare("SELECT name, value, date FROM \"transaction\" ORDER BY date DESC, id DESC")?
            .query_map([], map_transaction_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(transactions)
    }
}
