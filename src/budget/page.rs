//! Renders the budget page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    app_state::BudgetPageState,
    budget::{
        chart::{chart_script, chart_view},
        form::entry_form,
        table::{total_view, transaction_table},
    },
    html::{PAGE_CONTAINER_STYLE, base},
    stores::TransactionStore,
    transaction::Transaction,
};

/// Renders the budget page: the running total, the entry form, the
/// transaction table, and the cumulative balance chart.
///
/// The session ledger is rebuilt from the transaction store on every load.
/// When the store is unreachable the page still renders from whatever the
/// ledger currently holds, so the app stays usable offline.
///
/// # Panics
/// Panics if the ledger lock has been poisoned.
pub async fn get_budget_page<T>(State(state): State<BudgetPageState<T>>) -> Response
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    let transactions = match state.transaction_store.get_all() {
        Ok(transactions) => {
            let mut ledger = state.ledger.lock().expect("Could not acquire ledger lock");
            ledger.replace(transactions);
            ledger.transactions().to_vec()
        }
        Err(error) => {
            tracing::warn!(
                "could not load transactions from the store, showing the session ledger: {error}"
            );
            state
                .ledger
                .lock()
                .expect("Could not acquire ledger lock")
                .transactions()
                .to_vec()
        }
    };

    base("Budget", &budget_view(&transactions)).into_response()
}

fn budget_view(transactions: &[Transaction]) -> Markup {
    html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold mb-4" { "Budget Tracker" }

            p class="text-xl mb-6"
            {
                "Total: $"
                (total_view(transactions, false))
            }

            (entry_form())

            (transaction_table(transactions))

            (chart_view())
            div id="chart-script-slot" { (chart_script(transactions)) }
        }
    }
}
