//! SQLite backed implementations of the store traits.

mod fallback;
mod transaction;

pub use fallback::SqliteFallbackQueue;
pub use transaction::SqliteTransactionStore;

use std::str::FromStr;

use rusqlite::{Row, types::Type};
use rust_decimal::Decimal;
use time::{
    OffsetDateTime, UtcOffset,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use crate::transaction::Transaction;

// Subseconds are padded to a fixed nine digits; `Rfc3339` trims trailing
// zeros, which makes lexicographic order diverge from chronological order
// within a second (e.g. "00.5Z" sorts after "00.52Z").
const DATE_STORAGE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]Z");

/// Format a transaction date for storage.
///
/// Dates are stored as RFC 3339 text in UTC with fixed-width subseconds, so
/// that `ORDER BY date` on the text column matches chronological order.
pub(super) fn format_date(date: OffsetDateTime) -> String {
    date.to_offset(UtcOffset::UTC)
        .format(DATE_STORAGE_FORMAT)
        .expect("fixed-width formatting of a UTC timestamp cannot fail")
}

/// Map a `name, value, date` row to a [Transaction].
pub(super) fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    map_transaction_row_with_offset(row, 0)
}

/// Map a row to a [Transaction] whose `name, value, date` columns start at
/// `offset`.
pub(super) fn map_transaction_row_with_offset(
    row: &Row,
    offset: usize,
) -> Result<Transaction, rusqlite::Error> {
    let name: String = row.get(offset)?;
    let value: String = row.get(offset + 1)?;
    let date: String = row.get(offset + 2)?;

    let value = Decimal::from_str(&value).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(offset + 1, Type::Text, Box::new(error))
    })?;
    let date = OffsetDateTime::parse(&date, &Rfc3339).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(offset + 2, Type::Text, Box::new(error))
    })?;

    Ok(Transaction { name, value, date })
}

#[cfg(test)]
mod date_storage_tests {
    use time::macros::datetime;

    use crate::stores::sqlite::format_date;

    #[test]
    fn format_date_pads_subseconds_to_fixed_width() {
        assert_eq!(
            format_date(datetime!(2025-06-01 12:00:00.5 UTC)),
            "2025-06-01T12:00:00.500000000Z"
        );
    }

    #[test]
    fn lexicographic_order_matches_chronological_order_within_a_second() {
        let earlier = format_date(datetime!(2025-06-01 12:00:00.5 UTC));
        let later = format_date(datetime!(2025-06-01 12:00:00.52 UTC));

        assert!(earlier < later, "{earlier} should sort before {later}");
    }
}
