//! The in-memory working set of transactions for the current session.

use crate::transaction::Transaction;

/// The ordered sequence of transactions for the current session, newest
/// first.
///
/// The ledger is the source of truth for the derived views (total, table,
/// chart). It is rebuilt from the transaction store on every page load and
/// is never persisted itself.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ledger's contents with `transactions`.
    ///
    /// Used after the initial fetch from the transaction store. The caller
    /// is responsible for providing the transactions newest first.
    pub fn replace(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    /// Insert `transaction` at the head of the ledger.
    pub fn prepend(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    /// Remove and return the newest entry.
    ///
    /// Used only to roll back an optimistic insert after the store rejects
    /// the entry; the ledger otherwise supports no deletion.
    pub fn remove_newest(&mut self) -> Option<Transaction> {
        if self.transactions.is_empty() {
            None
        } else {
            Some(self.transactions.remove(0))
        }
    }

    /// The transactions in the ledger, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

#[cfg(test)]
mod ledger_tests {
    use rust_decimal_macros::dec;
    use time::OffsetDateTime;

    use crate::{ledger::Ledger, transaction::Transaction};

    fn transaction(name: &str) -> Transaction {
        Transaction::new(name, dec!(1.00), OffsetDateTime::now_utc()).unwrap()
    }

    #[test]
    fn prepend_puts_newest_first() {
        let mut ledger = Ledger::new();

        ledger.prepend(transaction("first"));
        ledger.prepend(transaction("second"));

        let names: Vec<&str> = ledger
            .transactions()
            .iter()
            .map(|transaction| transaction.name.as_str())
            .collect();
        assert_eq!(names, ["second", "first"]);
    }

    #[test]
    fn replace_overwrites_contents() {
        let mut ledger = Ledger::new();
        ledger.prepend(transaction("stale"));

        ledger.replace(vec![transaction("fresh")]);

        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.transactions()[0].name, "fresh");
    }

    #[test]
    fn remove_newest_undoes_prepend() {
        let mut ledger = Ledger::new();
        ledger.prepend(transaction("kept"));
        ledger.prepend(transaction("rolled back"));

        let removed = ledger.remove_newest().unwrap();

        assert_eq!(removed.name, "rolled back");
        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.transactions()[0].name, "kept");
    }

    #[test]
    fn remove_newest_on_empty_ledger_returns_none() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.remove_newest(), None);
    }
}
