//! This file defines the `CurrencyCode` type and the `CurrencyPair` type used
//! to identify which currencies a rate table is quoted in.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A three-letter ISO 4217 currency code, e.g. `USD` or `JPY`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Create a currency code.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidCurrencyCode] if `code` is
    /// not exactly three ASCII uppercase letters.
    pub fn new(code: &str) -> Result<Self, Error> {
        let code = code.trim();

        if code.len() == 3 && code.bytes().all(|byte| byte.is_ascii_uppercase()) {
            Ok(Self(code.to_string()))
        } else {
            Err(Error::InvalidCurrencyCode(code.to_string()))
        }
    }

    /// Create a currency code without validation.
    ///
    /// The caller should ensure that the string is three ASCII uppercase
    /// letters.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because
    /// if the invariant is violated it will cause incorrect behaviour but not
    /// affect memory safety.
    pub fn new_unchecked(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::new(s)
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered pair of currencies a rate table is quoted in.
///
/// One unit of `base` is worth the table's rate in units of `target`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CurrencyPair {
    /// The currency the table's rates are expressed relative to.
    pub base: CurrencyCode,
    /// The currency one unit of `base` is priced in.
    pub target: CurrencyCode,
}

impl CurrencyPair {
    /// Create a currency pair from two validated codes.
    pub fn new(base: CurrencyCode, target: CurrencyCode) -> Self {
        Self { base, target }
    }
}

impl Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.target)
    }
}

#[cfg(test)]
mod currency_code_tests {
    use crate::{Error, currency::CurrencyCode};

    #[test]
    fn new_fails_on_empty_string() {
        let code = CurrencyCode::new("");

        assert_eq!(code, Err(Error::InvalidCurrencyCode("".to_string())));
    }

    #[test]
    fn new_fails_on_lowercase() {
        let code = CurrencyCode::new("usd");

        assert_eq!(code, Err(Error::InvalidCurrencyCode("usd".to_string())));
    }

    #[test]
    fn new_fails_on_wrong_length() {
        for input in ["US", "USDL"] {
            let code = CurrencyCode::new(input);

            assert_eq!(code, Err(Error::InvalidCurrencyCode(input.to_string())));
        }
    }

    #[test]
    fn new_fails_on_digits() {
        let code = CurrencyCode::new("U5D");

        assert_eq!(code, Err(Error::InvalidCurrencyCode("U5D".to_string())));
    }

    #[test]
    fn new_succeeds_on_valid_code() {
        let code = CurrencyCode::new("NZD").expect("Could not create currency code");

        assert_eq!(code.as_ref(), "NZD");
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        let code = CurrencyCode::new(" JPY\n").expect("Could not create currency code");

        assert_eq!(code.as_ref(), "JPY");
    }
}

#[cfg(test)]
mod currency_pair_tests {
    use crate::currency::{CurrencyCode, CurrencyPair};

    #[test]
    fn displays_as_slash_separated_codes() {
        let pair = CurrencyPair::new(
            CurrencyCode::new_unchecked("USD"),
            CurrencyCode::new_unchecked("JPY"),
        );

        assert_eq!(pair.to_string(), "USD/JPY");
    }
}
