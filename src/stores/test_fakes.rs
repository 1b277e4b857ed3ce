//! In-memory fake stores for exercising success and failure paths in
//! tests without a database.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    stores::{FallbackQueue, QueuedTransaction, TransactionStore},
    transaction::Transaction,
};

/// How a [FakeTransactionStore] responds to writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum StoreMode {
    /// Writes succeed.
    Working,
    /// Every call fails with [Error::StoreUnavailable].
    Unreachable,
    /// Every write is rejected with a validation error.
    Rejecting,
    /// The next `n` single writes succeed, then the store becomes
    /// unreachable. Batch writes fail outright.
    FailingAfter(usize),
}

/// An in-memory [TransactionStore] whose failure mode can be switched
/// mid-test.
#[derive(Debug, Clone)]
pub(crate) struct FakeTransactionStore {
    mode: Arc<Mutex<StoreMode>>,
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl FakeTransactionStore {
    pub(crate) fn working() -> Self {
        Self::with_mode(StoreMode::Working)
    }

    pub(crate) fn unreachable() -> Self {
        Self::with_mode(StoreMode::Unreachable)
    }

    pub(crate) fn rejecting() -> Self {
        Self::with_mode(StoreMode::Rejecting)
    }

    /// A store that accepts `successes` single writes and then loses its
    /// connection mid-stream.
    pub(crate) fn failing_after(successes: usize) -> Self {
        Self::with_mode(StoreMode::FailingAfter(successes))
    }

    fn with_mode(mode: StoreMode) -> Self {
        Self {
            mode: Arc::new(Mutex::new(mode)),
            transactions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn set_mode(&self, mode: StoreMode) {
        *self.mode.lock().unwrap() = mode;
    }

    /// The transactions the store has accepted, in insertion order.
    pub(crate) fn stored(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }
}

impl TransactionStore for FakeTransactionStore {
    fn create(&mut self, transaction: &Transaction) -> Result<(), Error> {
        let mut mode = self.mode.lock().unwrap();
        match *mode {
            StoreMode::Working => {
                self.transactions.lock().unwrap().push(transaction.clone());
                Ok(())
            }
            StoreMode::Unreachable | StoreMode::FailingAfter(0) => {
                Err(Error::StoreUnavailable("fake store is offline".to_owned()))
            }
            StoreMode::Rejecting => Err(Error::MissingInformation),
            StoreMode::FailingAfter(remaining) => {
                self.transactions.lock().unwrap().push(transaction.clone());
                *mode = StoreMode::FailingAfter(remaining - 1);
                Ok(())
            }
        }
    }

    fn create_many(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        match *self.mode.lock().unwrap() {
            StoreMode::Working => {
                self.transactions
                    .lock()
                    .unwrap()
                    .extend(transactions.iter().cloned());
                Ok(())
            }
            // A batch is all-or-nothing; a connection that would drop
            // partway through persists nothing.
            StoreMode::Unreachable | StoreMode::FailingAfter(_) => {
                Err(Error::StoreUnavailable("fake store is offline".to_owned()))
            }
            StoreMode::Rejecting => Err(Error::MissingInformation),
        }
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        if *self.mode.lock().unwrap() == StoreMode::Unreachable {
            return Err(Error::StoreUnavailable("fake store is offline".to_owned()));
        }

        let mut transactions = self.transactions.lock().unwrap().clone();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(transactions)
    }
}

/// An in-memory [FallbackQueue] that can be toggled unavailable.
#[derive(Debug, Clone)]
pub(crate) struct FakeFallbackQueue {
    available: Arc<Mutex<bool>>,
    next_id: Arc<Mutex<i64>>,
    items: Arc<Mutex<Vec<QueuedTransaction>>>,
}

impl FakeFallbackQueue {
    pub(crate) fn working() -> Self {
        Self {
            available: Arc::new(Mutex::new(true)),
            next_id: Arc::new(Mutex::new(1)),
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn unavailable() -> Self {
        let queue = Self::working();
        *queue.available.lock().unwrap() = false;
        queue
    }

    pub(crate) fn queued(&self) -> Vec<QueuedTransaction> {
        self.items.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), Error> {
        if *self.available.lock().unwrap() {
            Ok(())
        } else {
            Err(Error::QueueUnavailable(
                "fake queue is unavailable".to_owned(),
            ))
        }
    }
}

impl FallbackQueue for FakeFallbackQueue {
    fn get_all(&self) -> Result<Vec<QueuedTransaction>, Error> {
        self.check_available()?;

        Ok(self.items.lock().unwrap().clone())
    }

    fn put(&mut self, transaction: &Transaction) -> Result<(), Error> {
        self.check_available()?;

        let mut next_id = self.next_id.lock().unwrap();
        self.items.lock().unwrap().push(QueuedTransaction {
            id: *next_id,
            transaction: transaction.clone(),
        });
        *next_id += 1;

        Ok(())
    }

    fn remove(&mut self, id: i64) -> Result<(), Error> {
        self.check_available()?;

        self.items.lock().unwrap().retain(|item| item.id != id);

        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.check_available()?;

        self.items.lock().unwrap().clear();

        Ok(())
    }
}
