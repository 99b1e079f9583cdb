//! Currency table and display formatting.
//!
//! Amounts are plain `f64` everywhere in the pipeline; rounding to cents
//! happens here and only here, at display time.

use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Currencies with a known display symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Cad];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
        }
    }

    /// Exact, case-sensitive lookup: `"EUR"` is known, `"eur"` is not.
    pub fn from_code(code: &str) -> Option<Currency> {
        Currency::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd | Currency::Cad => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a code is not in the currency table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency code: {0:?}")]
pub struct UnknownCurrency(pub String);

/// Lenient parse: surrounding whitespace and case are ignored. Symbol
/// lookups go through the exact [`Currency::from_code`] instead.
impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

/// Currency code as captured from the form.
///
/// Stored verbatim, so an unknown code survives into the invoice metadata
/// even though it is displayed with the fallback symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn known(&self) -> Option<Currency> {
        Currency::from_code(&self.0)
    }

    pub fn symbol(&self) -> &'static str {
        symbol_for(&self.0)
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(Currency::Usd.code().to_string())
    }
}

impl From<Currency> for CurrencyCode {
    fn from(value: Currency) -> Self {
        Self(value.code().to_string())
    }
}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display symbol for a currency code. Codes match exactly; unknown, empty
/// or differently cased codes get `$`.
pub fn symbol_for(code: &str) -> &'static str {
    Currency::from_code(code)
        .unwrap_or(Currency::Usd)
        .symbol()
}

/// `symbol + amount` with exactly two decimals.
///
/// Callers never pass negative amounts; the discount row adds its own minus
/// sign in front of the formatted value.
pub fn format(amount: f64, code: &str) -> String {
    format!("{}{}", symbol_for(code), format_amount(amount))
}

/// Amount with exactly two decimals and no symbol.
pub fn format_amount(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rendered = format!("{amount:.2}");
    // -0.001 rounds to "-0.00"
    if rendered.starts_with('-') && rendered[1..].bytes().all(|b| b == b'0' || b == b'.') {
        rendered[1..].to_string()
    } else {
        rendered
    }
}

/// Quantity as typed: `2`, `1.5`, `0.25`.
pub fn format_quantity(quantity: f64) -> String {
    format_plain(quantity)
}

/// Tax rate for the `Tax (10%)` label.
pub fn format_percent(rate: f64) -> String {
    format_plain(rate)
}

fn format_plain(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Long US date: `January 5, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_for_known_codes() {
        assert_eq!(symbol_for("USD"), "$");
        assert_eq!(symbol_for("EUR"), "€");
        assert_eq!(symbol_for("GBP"), "£");
        assert_eq!(symbol_for("CAD"), "$");
    }

    #[test]
    fn unknown_and_empty_codes_fall_back_to_dollar() {
        assert_eq!(symbol_for(""), "$");
        assert_eq!(symbol_for("JPY"), "$");
    }

    #[test]
    fn symbol_lookup_is_case_sensitive() {
        assert_eq!(symbol_for("eur"), "$");
        assert_eq!(symbol_for("Gbp"), "$");
        assert_eq!(CurrencyCode::new("eur").known(), None);
        assert_eq!(CurrencyCode::new("EUR").known(), Some(Currency::Eur));
        assert_eq!(format(16.5, "eur"), "$16.50");
    }

    #[test]
    fn unknown_code_is_kept_verbatim() {
        let code = CurrencyCode::new("JPY");
        assert_eq!(code.as_str(), "JPY");
        assert_eq!(code.known(), None);
        assert_eq!(code.symbol(), "$");
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(" eur ".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("EURO".parse::<Currency>().is_err());
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format(16.5, "USD"), "$16.50");
        assert_eq!(format(0.0, "GBP"), "£0.00");
        assert_eq!(format(1234.567, "EUR"), "€1234.57");
        assert_eq!(format(3.0, "XYZ"), "$3.00");
    }

    #[test]
    fn never_prints_negative_zero() {
        assert_eq!(format_amount(-0.0), "0.00");
        assert_eq!(format_amount(-0.001), "0.00");
        assert_eq!(format_amount(f64::NAN), "0.00");
    }

    #[test]
    fn plain_numbers_drop_trailing_zeros() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(1.5), "1.5");
        assert_eq!(format_percent(10.0), "10");
        assert_eq!(format_percent(7.25), "7.25");
    }

    #[test]
    fn long_us_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_date(date), "January 5, 2026");
    }
}
