//! Defines the offline fallback queue trait.

use crate::{Error, transaction::Transaction};

/// A transaction waiting in the fallback queue, tagged with its
/// queue-local id so it can be acknowledged individually.
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedTransaction {
    /// The queue-local id, meaningless outside the queue.
    pub id: i64,
    /// The transaction awaiting persistence.
    pub transaction: Transaction,
}

/// Holds transactions that could not reach the transaction store.
///
/// Membership is transient: an entry is removed once its submission to the
/// store has been confirmed. All operations must tolerate an empty queue.
///
/// Implementations signal failure with [Error::QueueUnavailable]; the app
/// then continues without offline capability rather than failing the
/// request.
pub trait FallbackQueue {
    /// Retrieve every queued transaction in the order it was enqueued.
    fn get_all(&self) -> Result<Vec<QueuedTransaction>, Error>;

    /// Enqueue one transaction.
    fn put(&mut self, transaction: &Transaction) -> Result<(), Error>;

    /// Remove the queued transaction with the given id.
    ///
    /// Called once that item's submission to the store has been confirmed.
    /// Removing an id that is no longer present is not an error.
    fn remove(&mut self, id: i64) -> Result<(), Error>;

    /// Remove every queued transaction.
    ///
    /// Called after a bulk submission of the whole queue has been
    /// confirmed.
    fn clear(&mut self) -> Result<(), Error>;
}
