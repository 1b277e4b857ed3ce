//! The budget page and its derived views.
//!
//! This module contains everything shown to the user:
//! - Pure functions deriving the running total and the cumulative balance
//!   series from the ledger
//! - The entry form, table, and chart fragments
//! - The page handler and the add/subtract entry endpoints

mod aggregation;
mod chart;
mod entry;
mod form;
mod page;
mod table;

pub use entry::{add_transaction_endpoint, subtract_transaction_endpoint};
pub use page::get_budget_page;
