//! Pocketledger is a web app for tracking a personal budget.
//!
//! Users record named deposits and withdrawals, and the app shows a running
//! total, a table of entries, and a line chart of the cumulative balance over
//! time. Entries are persisted to a transaction store; when the store is
//! unreachable they are held in a local fallback queue and forwarded the next
//! time the server starts.
//!
//! This library provides a server that directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod budget;
mod db;
mod endpoints;
mod html;
mod ledger;
mod routing;
mod stores;
mod sync;
mod transaction;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use ledger::Ledger;
pub use routing::build_router;
pub use stores::{
    FallbackQueue, QueuedTransaction, SqliteFallbackQueue, SqliteTransactionStore,
    TransactionStore,
};
pub use sync::reconcile_fallback_queue;
pub use transaction::Transaction;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user submitted an entry without a name or without an amount.
    ///
    /// The display text doubles as the inline message shown next to the
    /// entry form.
    #[error("Missing Information")]
    MissingInformation,

    /// The amount field could not be parsed as a dollar amount.
    #[error("\"{0}\" is not a valid dollar amount")]
    InvalidAmount(String),

    /// The transaction store could not be reached.
    ///
    /// This is the transport-failure signal that triggers the local
    /// fallback queue: the entry is not lost, merely deferred until the
    /// next reconciliation pass.
    #[error("the transaction store is unreachable: {0}")]
    StoreUnavailable(String),

    /// The local fallback queue itself is unavailable.
    ///
    /// The app keeps running without offline capability; the user is shown
    /// a prominent warning instead.
    #[error("the offline fallback queue is unavailable: {0}")]
    QueueUnavailable(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl Error {
    /// Whether this error means the payload was rejected, as opposed to the
    /// store being unreachable.
    ///
    /// Validation errors must not be queued for retry: resubmitting the same
    /// payload can never succeed.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::MissingInformation | Error::InvalidAmount(_))
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            rusqlite::Error::SqliteFailure(sql_error, ref desc)
                if matches!(
                    sql_error.code,
                    rusqlite::ErrorCode::DatabaseBusy
                        | rusqlite::ErrorCode::DatabaseLocked
                        | rusqlite::ErrorCode::CannotOpen
                ) =>
            {
                Error::StoreUnavailable(desc.clone().unwrap_or_else(|| sql_error.to_string()))
            }
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}
