//! Ledgerlens is the conversion and import-messaging core of a multi-currency
//! personal transaction viewer.
//!
//! This library answers two questions for the application shell:
//! - What is an amount worth in the display currency on a given date, using
//!   the best-known exchange rate ([rate])?
//! - What message should the user see after a statement import, given the
//!   available rate history and the active table filters ([import])?
//!
//! Both are pure computations over caller-supplied data. Rate records and
//! transactions are fetched by the shell's data layer; indexes are built per
//! query and discarded.

#![warn(missing_docs)]

use time::Date;

pub mod csv_import;
pub mod currency;
pub mod display;
pub mod filter;
pub mod import;
pub mod rate;
pub mod timezone;
pub mod transaction;

pub use currency::{CurrencyCode, CurrencyPair};
pub use filter::TransactionFilter;
pub use import::{ImportOutcome, OutcomeKind, SUCCESS_AUTO_DISMISS, compose_outcome};
pub use rate::{ExchangeRate, RateCoverage, RateIndex, parse_rate_payload};
pub use transaction::{Transaction, TransactionBuilder};

/// The errors that may occur in the library.
///
/// All variants come from validating data at an ingestion boundary. The
/// lookup and message-composition paths never fail for valid inputs: a
/// missing rate degrades to an unconverted amount rather than an error.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A date in the future was used to create a transaction.
    ///
    /// Transactions record events that have already happened, therefore
    /// future dates are not allowed.
    #[error("{0} is a date in the future, which is not allowed")]
    FutureDate(Date),

    /// A currency code was not exactly three ASCII uppercase letters.
    #[error("\"{0}\" is not a valid three-letter currency code")]
    InvalidCurrencyCode(String),

    /// A date string was not a valid `YYYY-MM-DD` calendar date.
    #[error("\"{0}\" is not a valid YYYY-MM-DD date")]
    InvalidDate(String),

    /// The CSV had issues that prevented it from being parsed.
    #[error("Could not parse the CSV file: {0}")]
    InvalidCSV(String),

    /// The rate service payload could not be parsed as a list of rate
    /// records.
    #[error("Could not parse the exchange rate payload: {0}")]
    InvalidRatePayload(String),
}
