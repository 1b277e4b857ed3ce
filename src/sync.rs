//! Reconciles the offline fallback queue with the transaction store.
//!
//! Run once at startup, before the app begins serving cumulative data, so
//! that entries recorded while the store was unreachable are forwarded
//! before the ledger is rebuilt.

use crate::{
    Error,
    stores::{FallbackQueue, TransactionStore},
};

/// Forward every queued transaction to the transaction store, removing an
/// item from the queue only once its submission has been confirmed.
///
/// The whole batch is first offered via [TransactionStore::create_many];
/// when that succeeds the queue is cleared, since the bulk call confirmed
/// every item. If the bulk call fails with a transport error, items are
/// submitted one at a time and acknowledged individually, so a failure
/// partway through leaves the unforwarded remainder queued for the next
/// pass. Items the store rejects as invalid can never succeed and are
/// dropped with a warning.
///
/// Returns the number of transactions forwarded to the store.
///
/// # Errors
/// Returns [Error::QueueUnavailable] if the fallback queue itself cannot
/// be read or updated.
pub fn reconcile_fallback_queue<T, Q>(store: &mut T, queue: &mut Q) -> Result<usize, Error>
where
    T: TransactionStore,
    Q: FallbackQueue,
{
    let queued = queue.get_all()?;

    if queued.is_empty() {
        return Ok(0);
    }

    let batch: Vec<_> = queued
        .iter()
        .map(|item| item.transaction.clone())
        .collect();

    match store.create_many(&batch) {
        Ok(()) => {
            queue.clear()?;
            return Ok(batch.len());
        }
        Err(error) => {
            tracing::warn!(
                "bulk forward of {} queued transactions failed, retrying one at a time: {error}",
                batch.len()
            );
        }
    }

    let mut forwarded = 0;

    for item in queued {
        match store.create(&item.transaction) {
            Ok(()) => {
                queue.remove(item.id)?;
                forwarded += 1;
            }
            Err(error) if error.is_validation() => {
                tracing::warn!(
                    "dropping queued transaction {:?} rejected by the store: {error}",
                    item.transaction.name
                );
                queue.remove(item.id)?;
            }
            Err(error) => {
                tracing::warn!("transaction store still unreachable, will retry on next start: {error}");
                break;
            }
        }
    }

    Ok(forwarded)
}
