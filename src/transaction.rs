//! Defines the core transaction model.

use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::Error;

/// A single budget entry: money that was either added to or taken from the
/// budget.
///
/// The sign of `value` encodes the direction (positive for additions,
/// negative for subtractions); the magnitude is always the amount the user
/// entered. Amounts are exact decimals rounded to two places so that
/// repeated totals cannot drift the way binary floats do.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The display label for the entry, e.g. "Rent" or "Pay day".
    pub name: String,
    /// The signed dollar amount, exact to two decimal places.
    pub value: Decimal,
    /// When the entry was recorded. The sole ordering key.
    pub date: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// `value` is rounded to two decimal places using banker's rounding.
    ///
    /// # Errors
    /// Returns [Error::MissingInformation] if `name` is empty or only
    /// whitespace.
    pub fn new(name: &str, value: Decimal, date: OffsetDateTime) -> Result<Self, Error> {
        if name.trim().is_empty() {
            return Err(Error::MissingInformation);
        }

        Ok(Self {
            name: name.to_owned(),
            value: value.round_dp(2),
            date,
        })
    }
}
