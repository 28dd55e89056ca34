//! Exchange-rate lookup for multi-currency display conversion.
//!
//! This module contains everything related to exchange rates:
//! - The `ExchangeRate` record as returned by the currency data service
//! - `RateIndex`, a per-pair date index answering exact and nearest-date
//!   rate queries and converting amounts between the pair's currencies
//! - `RateCoverage`, the earliest known rate per currency pair, used to warn
//!   when imported transactions predate the available rate history

use std::collections::{HashMap, hash_map::Entry};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    currency::{CurrencyCode, CurrencyPair},
};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// The exchange rate between two currencies on a single day.
///
/// One unit of `base_currency` was worth `rate` units of `target_currency` on
/// `date`. The currency data service reports at most one record per pair per
/// day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    /// The day the rate applies to, in `YYYY-MM-DD` form on the wire.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// The currency the rate is expressed relative to.
    pub base_currency: CurrencyCode,
    /// The currency one unit of `base_currency` is priced in.
    pub target_currency: CurrencyCode,
    /// Units of `target_currency` per one unit of `base_currency`.
    pub rate: f64,
}

impl ExchangeRate {
    /// The currency pair this rate is quoted in.
    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.base_currency.clone(), self.target_currency.clone())
    }
}

/// Parse the JSON rate payload returned by the currency data service.
///
/// # Errors
///
/// This function will return an [Error::InvalidRatePayload] if `text` is not a
/// JSON array of rate records with `date`, `baseCurrency`, `targetCurrency`,
/// and `rate` fields.
pub fn parse_rate_payload(text: &str) -> Result<Vec<ExchangeRate>, Error> {
    serde_json::from_str(text).map_err(|error| Error::InvalidRatePayload(error.to_string()))
}

/// A date index over the rate history of a single currency pair.
///
/// The index is query-scoped: build it from the current record set, answer
/// lookups against it, and discard it. It is rebuilt from scratch whenever the
/// record set changes; there is no incremental update.
#[derive(Debug, Clone, PartialEq)]
pub struct RateIndex {
    pair: CurrencyPair,
    by_date: HashMap<Date, ExchangeRate>,
}

impl RateIndex {
    /// Build an index over `records` for the given currency pair.
    ///
    /// Records quoted in any other pair are skipped, so the full multi-pair
    /// response from the rate service can be passed in directly. When two
    /// records share a date the later one in the sequence wins and the
    /// replacement is logged, which lets the service re-send a corrected rate
    /// for a day.
    ///
    /// Building never fails: an empty input yields an index that answers
    /// every query with "not found".
    pub fn build(pair: CurrencyPair, records: impl IntoIterator<Item = ExchangeRate>) -> Self {
        let mut by_date = HashMap::new();

        for record in records {
            if record.base_currency != pair.base || record.target_currency != pair.target {
                continue;
            }

            if let Some(previous) = by_date.insert(record.date, record) {
                tracing::debug!(
                    "replaced duplicate {} rate {} for {}",
                    pair,
                    previous.rate,
                    previous.date
                );
            }
        }

        Self { pair, by_date }
    }

    /// The currency pair this index covers.
    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }

    /// The number of distinct dates in the index.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Whether the index holds no rates at all.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Find the rate for `date`, or the rate whose date is closest to it.
    ///
    /// An exact match is found in constant time. Otherwise every date in the
    /// index is scanned for the smallest absolute distance in days, which is
    /// fine for daily rate history (thousands of keys); if the history ever
    /// grows well beyond that, a sorted array with a binary search for the
    /// two neighbouring dates gives the same results. When two dates are
    /// equally close the first one encountered wins.
    ///
    /// Returns `None` only when the index is empty.
    pub fn find_nearest(&self, date: Date) -> Option<&ExchangeRate> {
        if let Some(record) = self.by_date.get(&date) {
            return Some(record);
        }

        self.by_date
            .values()
            .min_by_key(|record| (record.date.to_julian_day() - date.to_julian_day()).abs())
    }

    /// Convert `amount` from one of the pair's currencies to the other using
    /// the rate closest to `date`.
    ///
    /// Conversion is fail-open: when `from` and `to` are the same currency, or
    /// when the index holds no rates at all, `amount` is returned unchanged.
    /// Displaying an unconverted amount beats blocking the transaction view.
    /// A nearest-date substitution is logged as informational.
    ///
    /// `from` is expected to be one of the pair's two currencies; converting
    /// out of the base multiplies by the rate and converting into the base
    /// divides by it. No rounding is applied, callers round for display.
    pub fn convert(&self, amount: f64, date: Date, from: &CurrencyCode, to: &CurrencyCode) -> f64 {
        if from == to {
            return amount;
        }

        let Some(record) = self.find_nearest(date) else {
            tracing::warn!(
                "no {} rate available for {date}, leaving amount unconverted",
                self.pair
            );
            return amount;
        };

        if record.date != date {
            tracing::debug!(
                "no {} rate for {date}, falling back to the rate from {}",
                self.pair,
                record.date
            );
        }

        if *from == self.pair.base {
            amount * record.rate
        } else {
            amount / record.rate
        }
    }
}

/// The earliest known rate for each currency pair seen in a record set.
///
/// Rebuilt per import event from the same record set the display indexes are
/// built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateCoverage {
    earliest_by_pair: HashMap<CurrencyPair, ExchangeRate>,
}

impl RateCoverage {
    /// Track the chronologically earliest record per pair over `records`.
    ///
    /// The input may interleave records for any number of currency pairs.
    /// Building never fails.
    pub fn build(records: impl IntoIterator<Item = ExchangeRate>) -> Self {
        let mut earliest_by_pair: HashMap<CurrencyPair, ExchangeRate> = HashMap::new();

        for record in records {
            match earliest_by_pair.entry(record.pair()) {
                Entry::Occupied(mut entry) => {
                    if record.date < entry.get().date {
                        entry.insert(record);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(record);
                }
            }
        }

        Self { earliest_by_pair }
    }

    /// The earliest known rate for `pair`, or `None` if no rate data exists
    /// for that pair.
    pub fn earliest_for(&self, pair: &CurrencyPair) -> Option<&ExchangeRate> {
        self.earliest_by_pair.get(pair)
    }
}
