//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;

use crate::{
    ledger::Ledger,
    stores::{FallbackQueue, TransactionStore},
};

/// The state of the server.
///
/// Owns the session ledger and the store handles; handlers receive the
/// slice of state they need via [FromRef].
#[derive(Debug, Clone)]
pub struct AppState<T, Q>
where
    T: TransactionStore + Clone + Send + Sync,
    Q: FallbackQueue + Clone + Send + Sync,
{
    /// The in-memory working set of transactions for the current session.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The store for persisting transactions.
    pub transaction_store: T,
    /// The queue holding transactions that could not reach the store.
    pub fallback_queue: Q,
}

impl<T, Q> AppState<T, Q>
where
    T: TransactionStore + Clone + Send + Sync,
    Q: FallbackQueue + Clone + Send + Sync,
{
    /// Create a new [AppState] with an empty ledger.
    pub fn new(transaction_store: T, fallback_queue: Q) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(Ledger::new())),
            transaction_store,
            fallback_queue,
        }
    }
}

/// The state needed for displaying the budget page.
#[derive(Debug, Clone)]
pub struct BudgetPageState<T>
where
    T: TransactionStore + Clone + Send + Sync,
{
    /// The in-memory working set of transactions for the current session.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The store for persisting transactions.
    pub transaction_store: T,
}

impl<T, Q> FromRef<AppState<T, Q>> for BudgetPageState<T>
where
    T: TransactionStore + Clone + Send + Sync,
    Q: FallbackQueue + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<T, Q>) -> Self {
        Self {
            ledger: state.ledger.clone(),
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// The state needed to record a new transaction.
#[derive(Debug, Clone)]
pub struct EntryState<T, Q>
where
    T: TransactionStore + Clone + Send + Sync,
    Q: FallbackQueue + Clone + Send + Sync,
{
    /// The in-memory working set of transactions for the current session.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The store for persisting transactions.
    pub transaction_store: T,
    /// The queue holding transactions that could not reach the store.
    pub fallback_queue: Q,
}

impl<T, Q> FromRef<AppState<T, Q>> for EntryState<T, Q>
where
    T: TransactionStore + Clone + Send + Sync,
    Q: FallbackQueue + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<T, Q>) -> Self {
        Self {
            ledger: state.ledger.clone(),
            transaction_store: state.transaction_store.clone(),
            fallback_queue: state.fallback_queue.clone(),
        }
    }
}
