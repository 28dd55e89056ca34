//! The transaction model for the multi-currency transaction viewer.
//!
//! Transactions are owned by the application shell; this crate reads their
//! date and currency for conversion and import messaging, and their
//! description for filter matching.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, UtcOffset};

use crate::{Error, currency::CurrencyCode};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The amount of money spent or earned, in units of `currency`.
    pub amount: f64,
    /// When the transaction happened, in `YYYY-MM-DD` form on the wire.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The currency the transaction was made in.
    pub currency: CurrencyCode,
    /// A stable identifier for transactions that came from a statement import.
    pub import_id: Option<i64>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        amount: f64,
        date: Date,
        description: String,
        currency: CurrencyCode,
    ) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date,
            description,
            currency,
            import_id: None,
        }
    }
}

/// A builder for creating [Transaction] instances.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The monetary amount of the transaction.
    ///
    /// Positive values represent income, negative values represent expenses.
    pub amount: f64,
    /// The date when the transaction occurred. Must not be in the future.
    pub date: Date,
    /// A human-readable description of the transaction. For imported
    /// transactions this is the statement's description field.
    pub description: String,
    /// The currency the transaction was made in.
    pub currency: CurrencyCode,
    /// Optional unique identifier for imported transactions, used to keep
    /// re-imports of overlapping statements idempotent.
    pub import_id: Option<i64>,
}

impl TransactionBuilder {
    /// Set the import ID for the transaction.
    pub fn import_id(mut self, import_id: Option<i64>) -> Self {
        self.import_id = import_id;
        self
    }

    /// Build the final [Transaction] instance.
    ///
    /// `local_timezone` is used to check that `.date` is not a future date.
    ///
    /// # Errors
    /// This function will return an [Error::FutureDate] if `date` is a date in
    /// the future.
    pub fn finalize(self, local_timezone: UtcOffset) -> Result<Transaction, Error> {
        if self.date > OffsetDateTime::now_utc().to_offset(local_timezone).date() {
            return Err(Error::FutureDate(self.date));
        }

        Ok(Transaction {
            amount: self.amount,
            date: self.date,
            description: self.description,
            currency: self.currency,
            import_id: self.import_id,
        })
    }
}
