//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are always displayed with exactly two decimal places followed by
//! the currency code as a literal suffix, e.g. `12.50 SAR`.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Highest unit price the store accepts.
///
/// Any price up to this bound survives a round trip through an `f64` (the
/// catalog store's `REAL` column) and cannot overflow a cart total, since a
/// line holds at most `u32::MAX` units.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Whether `amount` is a valid unit price: not negative and at most [`MAX_PRICE`].
#[must_use]
pub fn is_valid_price(amount: Decimal) -> bool {
    !amount.is_sign_negative() && amount <= MAX_PRICE
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., riyals, not halalas).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display (e.g., "35.99 SAR").
    #[must_use]
    pub fn display(&self) -> String {
        format_amount(self.amount, self.currency_code)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Format an amount as a fixed two-decimal currency string.
///
/// Rounds half away from zero, matching how shoppers expect `0.125` to read.
#[must_use]
pub fn format_amount(amount: Decimal, currency_code: CurrencyCode) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2} {}", currency_code.code())
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    SAR,
    AED,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// The three-letter ISO code, used as the display suffix.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SAR => "SAR",
            Self::AED => "AED",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SAR" => Ok(Self::SAR),
            "AED" => Ok(Self::AED),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_bounds() {
        assert_eq!(MAX_PRICE, Decimal::from(1_000_000_000));
        assert!(is_valid_price(Decimal::ZERO));
        assert!(is_valid_price(MAX_PRICE));
        assert!(!is_valid_price(Decimal::new(-1, 2)));
        assert!(!is_valid_price(MAX_PRICE + Decimal::new(1, 2)));
        assert!(!is_valid_price(Decimal::MAX));
    }

    #[test]
    fn test_format_pads_to_two_decimals() {
        assert_eq!(format_amount(Decimal::new(125, 1), CurrencyCode::SAR), "12.50 SAR");
        assert_eq!(format_amount(Decimal::from(22), CurrencyCode::SAR), "22.00 SAR");
        assert_eq!(format_amount(Decimal::ZERO, CurrencyCode::USD), "0.00 USD");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(1005, 3), CurrencyCode::SAR), "1.01 SAR");
        assert_eq!(format_amount(Decimal::new(35_994, 3), CurrencyCode::SAR), "35.99 SAR");
    }

    #[test]
    fn test_price_display() {
        let price = Price::new(Decimal::new(3599, 2), CurrencyCode::EUR);
        assert_eq!(price.to_string(), "35.99 EUR");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("sar".parse::<CurrencyCode>().unwrap(), CurrencyCode::SAR);
        assert_eq!(" USD ".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }
}
