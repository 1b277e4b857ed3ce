//! The transaction entry flow.
//!
//! Both triggers (add and subtract) drive the same flow with opposite
//! sign: validate the form, construct the transaction, prepend it to the
//! ledger optimistically, re-render the derived views, then attempt to
//! persist it, falling back to the offline queue when the store is
//! unreachable.

use std::str::FromStr;

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRequest;
use maud::{Markup, html};
use rust_decimal::Decimal;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    Error,
    app_state::EntryState,
    budget::{
        chart::chart_script,
        form::{amount_input, name_input},
        table::{total_view, transaction_rows},
    },
    endpoints,
    stores::{FallbackQueue, TransactionStore},
    transaction::Transaction,
};

/// Shown when an entry could be neither persisted nor queued; it survives
/// only in the session ledger.
const OFFLINE_STORAGE_WARNING: &str =
    "Offline storage is unavailable. This entry is shown for this session but could not be saved.";

/// The form data for recording a transaction.
#[derive(Debug, Deserialize)]
pub struct EntryForm {
    /// The display label for the entry.
    #[serde(default)]
    pub name: String,
    /// The dollar amount as typed, parsed server-side so an empty field
    /// can be told apart from an invalid one.
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Direction {
    Add,
    Subtract,
}

/// A route handler for recording money added to the budget.
pub async fn add_transaction_endpoint<T, Q>(
    HxRequest(is_htmx): HxRequest,
    State(state): State<EntryState<T, Q>>,
    Form(form): Form<EntryForm>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    Q: FallbackQueue + Clone + Send + Sync + 'static,
{
    let fragments = submit_transaction(&state, form, Direction::Add);

    respond(is_htmx, fragments)
}

/// A route handler for recording money taken from the budget.
pub async fn subtract_transaction_endpoint<T, Q>(
    HxRequest(is_htmx): HxRequest,
    State(state): State<EntryState<T, Q>>,
    Form(form): Form<EntryForm>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    Q: FallbackQueue + Clone + Send + Sync + 'static,
{
    let fragments = submit_transaction(&state, form, Direction::Subtract);

    respond(is_htmx, fragments)
}

/// htmx requests get the updated fragments; a plain form post falls back
/// to reloading the budget page.
fn respond(is_htmx: bool, fragments: Markup) -> Response {
    if is_htmx {
        fragments.into_response()
    } else {
        Redirect::to(endpoints::BUDGET_VIEW).into_response()
    }
}

/// Run the entry flow and render the resulting fragments.
///
/// The returned markup's top-level content lands in the inline error slot
/// (empty on success); everything else is swapped out-of-band.
fn submit_transaction<T, Q>(
    state: &EntryState<T, Q>,
    form: EntryForm,
    direction: Direction,
) -> Markup
where
    T: TransactionStore + Clone + Send + Sync,
    Q: FallbackQueue + Clone + Send + Sync,
{
    let value = match parse_amount(&form.amount) {
        Ok(value) => value,
        Err(error) => return error_fragment(&error),
    };

    let value = match direction {
        Direction::Add => value,
        Direction::Subtract => -value,
    };

    let transaction = match Transaction::new(&form.name, value, OffsetDateTime::now_utc()) {
        Ok(transaction) => transaction,
        Err(error) => return error_fragment(&error),
    };

    // Optimistic update: the views reflect the entry before the store has
    // confirmed it.
    state
        .ledger
        .lock()
        .expect("Could not acquire ledger lock")
        .prepend(transaction.clone());

    let mut store = state.transaction_store.clone();

    match store.create(&transaction) {
        Ok(()) => committed_fragments(state, None),
        Err(error) if error.is_validation() => {
            // The entry was never truly persisted, so it must not linger
            // in the ledger either.
            state
                .ledger
                .lock()
                .expect("Could not acquire ledger lock")
                .remove_newest();
            tracing::warn!(
                "the store rejected transaction {:?}: {error}",
                transaction.name
            );

            error_fragment(&error)
        }
        Err(error) => {
            tracing::warn!("transaction store unreachable, queueing entry locally: {error}");

            let mut queue = state.fallback_queue.clone();
            match queue.put(&transaction) {
                Ok(()) => committed_fragments(state, None),
                Err(queue_error) => {
                    tracing::error!(
                        "could not queue transaction for later delivery: {queue_error}"
                    );

                    committed_fragments(state, Some(OFFLINE_STORAGE_WARNING))
                }
            }
        }
    }
}

/// Parse the amount field into an exact two-decimal value.
fn parse_amount(raw: &str) -> Result<Decimal, Error> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(Error::MissingInformation);
    }

    Decimal::from_str(trimmed).map_err(|_| Error::InvalidAmount(raw.to_owned()))
}

/// The inline error text. Nothing else on the page changes.
fn error_fragment(error: &Error) -> Markup {
    html! { (error) }
}

/// The fragments for a committed entry: cleared error slot, updated total,
/// table, chart, and emptied form inputs.
fn committed_fragments<T, Q>(state: &EntryState<T, Q>, warning: Option<&str>) -> Markup
where
    T: TransactionStore + Clone + Send + Sync,
    Q: FallbackQueue + Clone + Send + Sync,
{
    let ledger = state.ledger.lock().expect("Could not acquire ledger lock");
    let transactions = ledger.transactions();

    html! {
        @if let Some(warning) = warning {
            (warning)
        }
        (total_view(transactions, true))
        (transaction_rows(transactions, true))
        div id="chart-script-slot" hx-swap-oob="true" { (chart_script(transactions)) }
        (name_input("", true))
        (amount_input("", true))
    }
}
