//! Defines the transaction store trait.

use crate::{Error, transaction::Transaction};

/// Handles the persistence and retrieval of transactions.
///
/// Implementations signal a rejected payload with a validation error
/// ([Error::MissingInformation] or [Error::InvalidAmount]) and an
/// unreachable store with [Error::StoreUnavailable]. Callers use
/// [Error::is_validation] to decide between reporting the error and
/// falling back to the offline queue.
pub trait TransactionStore {
    /// Persist one transaction in the store.
    fn create(&mut self, transaction: &Transaction) -> Result<(), Error>;

    /// Persist an ordered batch of transactions in one call.
    ///
    /// Used by the startup reconciliation pass to drain the fallback queue
    /// efficiently. Implementers should persist either the whole batch or
    /// nothing.
    fn create_many(&mut self, transactions: &[Transaction]) -> Result<(), Error>;

    /// Retrieve all transactions sorted by date, newest first.
    ///
    /// Only the name, value, and date fields are exposed; storage-internal
    /// identifiers do not leak out of the store.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;
}
