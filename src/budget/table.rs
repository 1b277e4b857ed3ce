//! The running total figure and the transaction table.

use maud::{Markup, html};

use crate::{
    budget::aggregation::{format_amount, running_total},
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
    transaction::Transaction,
};

/// The running total figure.
///
/// With `oob` set, the fragment replaces the figure already on the page
/// via an htmx out-of-band swap.
pub(super) fn total_view(transactions: &[Transaction], oob: bool) -> Markup {
    html! {
        span id="total" hx-swap-oob=[oob.then_some("true")]
        {
            (format_amount(running_total(transactions)))
        }
    }
}

/// The table body, one row per transaction in ledger order (newest first).
pub(super) fn transaction_rows(transactions: &[Transaction], oob: bool) -> Markup {
    html! {
        tbody id="transaction-rows" hx-swap-oob=[oob.then_some("true")]
        {
            @for transaction in transactions {
                tr class=(TABLE_ROW_STYLE)
                {
                    td class=(TABLE_CELL_STYLE) { (transaction.name) }
                    td class=(TABLE_CELL_STYLE) { (format_amount(transaction.value)) }
                }
            }
        }
    }
}

/// The full transaction table.
pub(super) fn transaction_table(transactions: &[Transaction]) -> Markup {
    html! {
        table class="w-full max-w-md text-sm text-left mb-8"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th class=(TABLE_CELL_STYLE) { "Name" }
                    th class=(TABLE_CELL_STYLE) { "Value" }
                }
            }
            (transaction_rows(transactions, false))
        }
    }
}

#[cfg(test)]
mod table_tests {
    use rust_decimal_macros::dec;
    use scraper::{Html, Selector};
    use time::macros::datetime;

    use crate::{
        budget::table::{total_view, transaction_table},
        transaction::Transaction,
    };

    fn test_transactions() -> Vec<Transaction> {
        vec![
            Transaction::new("newest", dec!(5.00), datetime!(2025-06-03 09:00 UTC)).unwrap(),
            Transaction::new("oldest", dec!(-12.50), datetime!(2025-06-01 09:00 UTC)).unwrap(),
        ]
    }

    #[test]
    fn table_lists_rows_newest_first_with_two_decimal_values() {
        let html = Html::parse_fragment(&transaction_table(&test_transactions()).into_string());

        let cell_selector = Selector::parse("tbody td").unwrap();
        let cells: Vec<String> = html
            .select(&cell_selector)
            .map(|cell| cell.text().collect())
            .collect();
        assert_eq!(cells, ["newest", "5.00", "oldest", "-12.50"]);
    }

    #[test]
    fn table_with_no_transactions_has_zero_rows() {
        let html = Html::parse_fragment(&transaction_table(&[]).into_string());

        let row_selector = Selector::parse("tbody tr").unwrap();
        assert_eq!(html.select(&row_selector).count(), 0);
    }

    #[test]
    fn total_view_renders_two_decimal_total() {
        let markup = total_view(&test_transactions(), false).into_string();

        assert!(markup.contains("-7.50"), "got {markup}");
    }

    #[test]
    fn oob_fragment_carries_the_swap_attribute() {
        let markup = total_view(&[], true).into_string();

        assert!(markup.contains("hx-swap-oob"), "got {markup}");

        let markup = total_view(&[], false).into_string();
        assert!(!markup.contains("hx-swap-oob"), "got {markup}");
    }
}
