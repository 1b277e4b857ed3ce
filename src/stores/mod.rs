//! Storage abstractions for transactions and the offline fallback queue.
//!
//! The traits are the unreliability boundary of the app: a
//! [TransactionStore] may reject a payload or be unreachable, and the
//! [FallbackQueue] absorbs entries until the store can be reached again.

mod fallback;
mod sqlite;
mod transaction;

#[cfg(test)]
pub(crate) mod test_fakes;

pub use fallback::{FallbackQueue, QueuedTransaction};
pub use sqlite::{SqliteFallbackQueue, SqliteTransactionStore};
pub use transaction::TransactionStore;
