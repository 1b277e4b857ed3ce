//! Pure functions deriving view data from the ledger.
//!
//! Everything here is deterministic over the ledger's current contents and
//! is recomputed after every mutation, so the rendered total, table, and
//! chart are never stale relative to the in-memory ledger.

use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::transaction::Transaction;

/// The exact sum of all transaction values, rounded to two decimal places.
///
/// An empty ledger sums to zero.
pub(super) fn running_total(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .map(|transaction| transaction.value)
        .sum::<Decimal>()
        .round_dp(2)
}

/// The cumulative balance over time for the chart, oldest first.
///
/// The ledger stores transactions newest first, so the sequence is
/// explicitly reversed here; point `i` of the series is the sum of the
/// oldest `i + 1` values. Each point is paired with a `month/day/year`
/// label. An empty ledger yields an empty pair.
pub(super) fn cumulative_series(transactions: &[Transaction]) -> (Vec<String>, Vec<Decimal>) {
    let mut labels = Vec::with_capacity(transactions.len());
    let mut series = Vec::with_capacity(transactions.len());
    let mut sum = Decimal::ZERO;

    for transaction in transactions.iter().rev() {
        sum += transaction.value;
        labels.push(format_date_label(transaction.date));
        series.push(sum.round_dp(2));
    }

    (labels, series)
}

/// Format a date as `month/day/year` without zero padding, e.g. `6/1/2025`.
fn format_date_label(date: OffsetDateTime) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}

/// Render an amount with exactly two fraction digits.
pub(super) fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod aggregation_tests {
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    use crate::{
        budget::aggregation::{cumulative_series, format_amount, running_total},
        transaction::Transaction,
    };

    /// Build a newest-first ledger slice from oldest-first values.
    fn ledger_from_oldest_values(values: &[rust_decimal::Decimal]) -> Vec<Transaction> {
        values
            .iter()
            .enumerate()
            .map(|(day, value)| {
                let date = datetime!(2025-06-01 12:00 UTC) + time::Duration::days(day as i64);
                Transaction::new(&format!("entry {day}"), *value, date).unwrap()
            })
            .rev()
            .collect()
    }

    #[test]
    fn total_is_exact_decimal_sum() {
        let transactions = ledger_from_oldest_values(&[dec!(50.00), dec!(-12.50), dec!(3.33)]);

        assert_eq!(running_total(&transactions), dec!(40.83));
    }

    #[test]
    fn total_of_empty_ledger_is_zero() {
        assert_eq!(format_amount(running_total(&[])), "0.00");
    }

    #[test]
    fn total_does_not_drift_over_many_small_amounts() {
        // 0.10 summed a thousand times is exactly 100.00; binary floats
        // would accumulate error here.
        let values = vec![dec!(0.10); 1000];
        let transactions = ledger_from_oldest_values(&values);

        assert_eq!(running_total(&transactions), dec!(100.00));
    }

    #[test]
    fn cumulative_series_runs_oldest_first_with_mixed_signs() {
        let transactions = ledger_from_oldest_values(&[dec!(10.00), dec!(-3.00), dec!(5.00)]);

        let (labels, series) = cumulative_series(&transactions);

        assert_eq!(series, [dec!(10.00), dec!(7.00), dec!(12.00)]);
        assert_eq!(labels, ["6/1/2025", "6/2/2025", "6/3/2025"]);
    }

    #[test]
    fn cumulative_series_of_empty_ledger_is_empty() {
        let (labels, series) = cumulative_series(&[]);

        assert!(labels.is_empty());
        assert!(series.is_empty());
    }

    #[test]
    fn date_labels_are_not_zero_padded() {
        let transactions = vec![
            Transaction::new("new year", dec!(1.00), datetime!(2026-01-09 00:30 UTC)).unwrap(),
        ];

        let (labels, _) = cumulative_series(&transactions);

        assert_eq!(labels, ["1/9/2026"]);
    }

    #[test]
    fn format_amount_always_shows_two_fraction_digits() {
        assert_eq!(format_amount(dec!(5)), "5.00");
        assert_eq!(format_amount(dec!(-20.00)), "-20.00");
        assert_eq!(format_amount(dec!(3.33)), "3.33");
    }
}
