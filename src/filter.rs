//! Filtering of the transaction table by search text and date range.
//!
//! The filter state lives in the viewer; this module decides which
//! transactions a given filter keeps visible, and whether a just-imported
//! batch would be partially hidden by it. The latter feeds the
//! filter-visibility caveat in [crate::import::compose_outcome].

use std::ops::RangeInclusive;

use time::Date;

use crate::transaction::Transaction;

/// The currently active search and date filters for the transaction table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive search term matched against transaction descriptions.
    /// `None` or a blank string means no search filter.
    pub search: Option<String>,
    /// Include transactions within `date_range` (inclusive).
    pub date_range: Option<RangeInclusive<Date>>,
}

impl TransactionFilter {
    /// Whether any filter is set.
    ///
    /// A search term of only whitespace counts as unset, matching how the
    /// search box treats it.
    pub fn is_active(&self) -> bool {
        self.search_term().is_some() || self.date_range.is_some()
    }

    /// Whether `transaction` is visible under this filter.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(term) = self.search_term()
            && !transaction
                .description
                .to_lowercase()
                .contains(&term.to_lowercase())
        {
            return false;
        }

        if let Some(date_range) = &self.date_range
            && !date_range.contains(&transaction.date)
        {
            return false;
        }

        true
    }

    /// Whether at least one of `transactions` would not be visible under this
    /// filter.
    pub fn hides_any(&self, transactions: &[Transaction]) -> bool {
        self.is_active()
            && transactions
                .iter()
                .any(|transaction| !self.matches(transaction))
    }

    fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

#[cfg(test)]
mod transaction_filter_tests {
    use time::macros::date;

    use crate::{
        currency::CurrencyCode,
        filter::TransactionFilter,
        transaction::Transaction,
    };

    fn transaction(date: time::Date, description: &str) -> Transaction {
        Transaction {
            amount: -12.5,
            date,
            description: description.to_owned(),
            currency: CurrencyCode::new_unchecked("JPY"),
            import_id: None,
        }
    }

    #[test]
    fn default_filter_is_inactive_and_matches_everything() {
        let filter = TransactionFilter::default();

        assert!(!filter.is_active());
        assert!(filter.matches(&transaction(date!(2020 - 01 - 01), "Groceries")));
    }

    #[test]
    fn whitespace_search_counts_as_unset() {
        let filter = TransactionFilter {
            search: Some("   ".to_owned()),
            date_range: None,
        };

        assert!(!filter.is_active());
    }

    #[test]
    fn search_matches_description_case_insensitively() {
        let filter = TransactionFilter {
            search: Some("coffee".to_owned()),
            date_range: None,
        };

        assert!(filter.matches(&transaction(date!(2020 - 01 - 01), "Coffee shop")));
        assert!(!filter.matches(&transaction(date!(2020 - 01 - 01), "Groceries")));
    }

    #[test]
    fn date_range_is_inclusive() {
        let filter = TransactionFilter {
            search: None,
            date_range: Some(date!(2020 - 01 - 01)..=date!(2020 - 01 - 31)),
        };

        assert!(filter.matches(&transaction(date!(2020 - 01 - 01), "Groceries")));
        assert!(filter.matches(&transaction(date!(2020 - 01 - 31), "Groceries")));
        assert!(!filter.matches(&transaction(date!(2020 - 02 - 01), "Groceries")));
    }

    #[test]
    fn hides_any_is_false_when_inactive() {
        let filter = TransactionFilter::default();
        let transactions = vec![transaction(date!(2020 - 01 - 01), "Groceries")];

        assert!(!filter.hides_any(&transactions));
    }

    #[test]
    fn hides_any_detects_a_hidden_transaction() {
        let filter = TransactionFilter {
            search: None,
            date_range: Some(date!(2020 - 01 - 01)..=date!(2020 - 01 - 31)),
        };
        let transactions = vec![
            transaction(date!(2020 - 01 - 15), "Groceries"),
            transaction(date!(2020 - 03 - 02), "Rent"),
        ];

        assert!(filter.hides_any(&transactions));
    }

    #[test]
    fn hides_any_is_false_when_all_transactions_are_visible() {
        let filter = TransactionFilter {
            search: Some("e".to_owned()),
            date_range: None,
        };
        let transactions = vec![
            transaction(date!(2020 - 01 - 15), "Groceries"),
            transaction(date!(2020 - 03 - 02), "Rent"),
        ];

        assert!(!filter.hides_any(&transactions));
    }
}
