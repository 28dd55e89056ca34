//! Composes the message shown after a statement import completes.
//!
//! Importing can succeed while still deserving a caveat: the imported rows may
//! be hidden by the active table filters, or they may predate the available
//! exchange-rate history, in which case their converted amounts silently use
//! the earliest known rate. This module decides between a plain success
//! message and a success-with-caveat warning and renders the text. Failed
//! imports are reported through [crate::Error] before any of this runs.

use std::time::Duration;

use time::Date;

use crate::{display::format_rate, rate::ExchangeRate};

/// How long the caller should display a [OutcomeKind::Success] outcome before
/// auto-hiding it.
///
/// Warnings are not auto-hidden: they affect how converted amounts should be
/// read, so they stay until the user dismisses them. The timer belongs to the
/// caller and should be cancelled if the hosting view goes away first.
pub const SUCCESS_AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Whether an import completed cleanly or with a data-coverage caveat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The import needs no acknowledgment; auto-hide after
    /// [SUCCESS_AUTO_DISMISS].
    Success,
    /// Converted amounts for some imported rows rely on a fallback rate; keep
    /// the message until the user dismisses it.
    Warning,
}

/// The user-facing result of a completed import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    /// Whether the message is a plain success or a warning.
    pub kind: OutcomeKind,
    /// The rendered message text, ready for display.
    pub text: String,
}

/// Decide the outcome message for a just-completed import.
///
/// `imported_dates` are the dates of the successfully imported rows and
/// `earliest_rate` is the earliest known rate for the batch's currency pair
/// (from [crate::rate::RateCoverage]), or `None` when no rate data exists for
/// that pair. `filters_active` should be true when an active search or date
/// filter might hide some of the imported rows from the table; the
/// caller-supplied `format_date` renders dates for display.
///
/// The outcome is a [OutcomeKind::Warning] exactly when the earliest imported
/// date is strictly before the earliest known rate date; converted amounts for
/// those rows use that earliest rate, and the message names it. No rate data
/// at all is not a warning: with nothing to convert against, amounts display
/// unconverted and there is no misleading figure to caveat.
///
/// The filter caveat follows `filters_active` alone, on either branch and
/// even for an empty import: the filters were active before the import ran,
/// so the reminder that rows can be hidden still applies.
///
/// Every combination of valid inputs yields an outcome; this never fails.
pub fn compose_outcome(
    imported_count: usize,
    imported_dates: &[Date],
    earliest_rate: Option<&ExchangeRate>,
    filters_active: bool,
    format_date: impl Fn(Date) -> String,
) -> ImportOutcome {
    let mut text = match imported_count {
        1 => "Imported 1 transaction.".to_owned(),
        count => format!("Imported {count} transactions."),
    };

    if filters_active {
        text.push_str(
            " Some imported transactions may be hidden by the active filters; \
            clear the search or date filters to see them.",
        );
    }

    let earliest_imported = imported_dates.iter().min().copied();

    let kind = match (imported_count, earliest_imported, earliest_rate) {
        (0, _, _) => OutcomeKind::Success,
        (_, Some(earliest_imported), Some(rate)) if earliest_imported < rate.date => {
            text.push_str(&format!(
                " Some transactions are dated before the earliest available {} rate; \
                their converted amounts use the rate {} from {}.",
                rate.pair(),
                format_rate(rate.rate),
                format_date(rate.date),
            ));

            OutcomeKind::Warning
        }
        _ => OutcomeKind::Success,
    };

    ImportOutcome { kind, text }
}

#[cfg(test)]
mod compose_outcome_tests {
    use time::macros::date;

    use crate::{
        currency::CurrencyCode,
        display::long_date,
        import::{OutcomeKind, compose_outcome},
        rate::ExchangeRate,
    };

    fn earliest_usd_jpy_rate() -> ExchangeRate {
        ExchangeRate {
            date: date!(2020 - 01 - 01),
            base_currency: CurrencyCode::new_unchecked("USD"),
            target_currency: CurrencyCode::new_unchecked("JPY"),
            rate: 109.5,
        }
    }

    #[test]
    fn zero_imported_rows_is_always_a_success() {
        let rate = earliest_usd_jpy_rate();

        let outcome = compose_outcome(0, &[], Some(&rate), false, long_date);

        assert_eq!(outcome.kind, OutcomeKind::Success);
        assert_eq!(outcome.text, "Imported 0 transactions.");
    }

    #[test]
    fn zero_imported_rows_with_active_filters_keeps_the_caveat() {
        let rate = earliest_usd_jpy_rate();

        let outcome = compose_outcome(0, &[], Some(&rate), true, long_date);

        assert_eq!(outcome.kind, OutcomeKind::Success);
        assert!(
            outcome.text.contains("hidden by the active filters"),
            "want filter caveat in text, got {:?}",
            outcome.text
        );
    }

    #[test]
    fn import_predating_rate_history_is_a_warning() {
        let rate = earliest_usd_jpy_rate();
        let dates = [
            date!(2019 - 05 - 01),
            date!(2019 - 06 - 01),
            date!(2019 - 07 - 01),
        ];

        let outcome = compose_outcome(3, &dates, Some(&rate), false, long_date);

        assert_eq!(outcome.kind, OutcomeKind::Warning);
        assert!(
            outcome.text.contains("Imported 3 transactions."),
            "want count in text, got {:?}",
            outcome.text
        );
        assert!(
            outcome.text.contains("109.5000"),
            "want 4-decimal rate in text, got {:?}",
            outcome.text
        );
        assert!(
            outcome.text.contains("January 1, 2020"),
            "want formatted fallback date in text, got {:?}",
            outcome.text
        );
        assert!(
            outcome.text.contains("USD/JPY"),
            "want currency pair in text, got {:?}",
            outcome.text
        );
    }

    #[test]
    fn import_within_rate_history_is_a_success() {
        let rate = earliest_usd_jpy_rate();
        let dates = [date!(2020 - 01 - 01), date!(2020 - 02 - 01)];

        let outcome = compose_outcome(2, &dates, Some(&rate), false, long_date);

        assert_eq!(outcome.kind, OutcomeKind::Success);
        assert_eq!(outcome.text, "Imported 2 transactions.");
    }

    #[test]
    fn missing_rate_data_is_a_success() {
        let dates = [date!(2019 - 05 - 01)];

        let outcome = compose_outcome(1, &dates, None, false, long_date);

        assert_eq!(outcome.kind, OutcomeKind::Success);
        assert_eq!(outcome.text, "Imported 1 transaction.");
    }

    #[test]
    fn filter_caveat_is_appended_exactly_when_filters_are_active() {
        let rate = earliest_usd_jpy_rate();
        let caveat = "hidden by the active filters";

        for (dates, want_kind) in [
            (vec![date!(2020 - 02 - 01)], OutcomeKind::Success),
            (vec![date!(2019 - 05 - 01)], OutcomeKind::Warning),
        ] {
            let with_filters = compose_outcome(1, &dates, Some(&rate), true, long_date);
            let without_filters = compose_outcome(1, &dates, Some(&rate), false, long_date);

            assert_eq!(with_filters.kind, want_kind);
            assert_eq!(without_filters.kind, want_kind);
            assert!(
                with_filters.text.contains(caveat),
                "want filter caveat in text, got {:?}",
                with_filters.text
            );
            assert!(
                !without_filters.text.contains(caveat),
                "want no filter caveat in text, got {:?}",
                without_filters.text
            );
        }
    }

    #[test]
    fn warning_uses_the_supplied_date_formatter() {
        let rate = earliest_usd_jpy_rate();

        let outcome = compose_outcome(
            1,
            &[date!(2019 - 05 - 01)],
            Some(&rate),
            false,
            |date| format!("<{date}>"),
        );

        assert!(
            outcome.text.contains("<2020-01-01>"),
            "want formatter output in text, got {:?}",
            outcome.text
        );
    }
}
