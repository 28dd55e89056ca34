//! Display formatting for rates, amounts, and dates.
//!
//! The lookup engine itself applies no rounding; these helpers are where
//! display precision lives.

use numfmt::{Formatter, Precision};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// Render an exchange rate with the fixed four-decimal display precision,
/// e.g. `109.5000`.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.4}")
}

/// Render a monetary amount with thousands separators and two decimals,
/// prefixed with `symbol`, e.g. `-$1,234.50`.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let formatter = Formatter::currency(symbol)
        .expect("currency prefix is a valid format")
        .precision(Precision::Decimals(2));

    let mut formatted_string = if amount == 0.0 {
        // numfmt renders zero as a bare "0"
        format!("{symbol}0.00")
    } else {
        formatter.fmt_string(amount.abs())
    };

    // numfmt drops the final trailing zero ("12.30" comes out as "12.3")
    // so it has to be restored by hand.
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    if amount < 0.0 {
        formatted_string = format!("-{formatted_string}");
    }

    formatted_string
}

/// Render a calendar date as long-form text, e.g. `January 1, 2020`.
///
/// This is the date formatter the application shell passes to
/// [crate::import::compose_outcome] by default; shells with their own locale
/// formatting supply their own.
pub fn long_date(date: Date) -> String {
    const LONG_DATE_FORMAT: &[BorrowedFormatItem] =
        format_description!("[month repr:long] [day padding:none], [year]");

    date.format(&LONG_DATE_FORMAT)
        .expect("date-only format cannot fail for a valid date")
}

#[cfg(test)]
mod format_rate_tests {
    use crate::display::format_rate;

    #[test]
    fn pads_to_four_decimals() {
        assert_eq!(format_rate(109.5), "109.5000");
    }

    #[test]
    fn rounds_to_four_decimals() {
        assert_eq!(format_rate(81.09134), "81.0913");
    }
}
