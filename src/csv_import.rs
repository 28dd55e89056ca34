//! Parses the multi-currency CSV statement export into transactions.
//!
//! The export has a `Date,Description,Currency,Amount` header with ISO dates.
//! Each row gets an import ID hashed from its raw content so that importing
//! the same statement twice stays idempotent downstream.

use csv::ReaderBuilder;
use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    currency::CurrencyCode,
    transaction::{Transaction, TransactionBuilder},
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// One row of the statement export, before validation.
#[derive(Debug, Deserialize)]
struct StatementRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Amount")]
    amount: f64,
}

/// Parses CSV data from the transaction statement export.
///
/// Expects `text` to start with a `Date,Description,Currency,Amount` header
/// line, with dates in `YYYY-MM-DD` form. Returns a builder per row; callers
/// finalize them against their local timezone.
///
/// # Errors
/// This function will return an:
/// - [Error::InvalidCSV] if the header is missing or a row cannot be read,
/// - [Error::InvalidDate] if a row's date is not a valid `YYYY-MM-DD` date,
/// - [Error::InvalidCurrencyCode] if a row's currency is not a three-letter
///   uppercase code.
pub fn parse_statement_csv(text: &str) -> Result<Vec<TransactionBuilder>, Error> {
    let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|error| Error::InvalidCSV(error.to_string()))?;

    let want_headers = ["Date", "Description", "Currency", "Amount"];
    if headers.iter().ne(want_headers) {
        return Err(Error::InvalidCSV(format!(
            "statement export must start with the header {}",
            want_headers.join(",")
        )));
    }

    let mut builders = Vec::new();

    for (line_number, row) in reader.deserialize::<StatementRow>().enumerate() {
        let row = row.map_err(|error| {
            tracing::debug!("could not read statement row {}: {error}", line_number + 1);
            Error::InvalidCSV(error.to_string())
        })?;

        let date = Date::parse(&row.date, DATE_FORMAT)
            .map_err(|_| Error::InvalidDate(row.date.clone()))?;
        let currency = CurrencyCode::new(&row.currency)?;
        let import_id = create_import_id(&row.date, &row.description, &row.currency, row.amount);

        builders.push(
            Transaction::build(row.amount, date, row.description, currency)
                .import_id(Some(import_id)),
        );
    }

    Ok(builders)
}

/// Derive a stable import ID from a row's content.
///
/// Rows with identical content hash to the same ID, which lets the transaction
/// store skip duplicates when overlapping statements are imported.
pub fn create_import_id(date: &str, description: &str, currency: &str, amount: f64) -> i64 {
    let hash_128 = md5::compute(format!("{date},{description},{currency},{amount}"));
    let mut hash_64 = [0; 8];
    hash_64.copy_from_slice(&hash_128[0..8]);
    i64::from_le_bytes(hash_64)
}

/// The earliest date among `builders`, or `None` for an empty import.
///
/// Feeds the rate-coverage comparison in [crate::import::compose_outcome].
pub fn earliest_date(builders: &[TransactionBuilder]) -> Option<Date> {
    builders.iter().map(|builder| builder.date).min()
}
