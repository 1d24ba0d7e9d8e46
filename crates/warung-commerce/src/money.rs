//! Money type for representing monetary values.
//!
//! Uses integer minor units to avoid floating-point precision issues.
//! Rupiah is the storefront's home currency; it carries no decimal places,
//! so an amount of 25000 is the menu price "Rp25.000".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    IDR,
    USD,
    SGD,
    MYR,
}

impl Currency {
    /// Get the currency code (e.g., "IDR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::IDR => "IDR",
            Currency::USD => "USD",
            Currency::SGD => "SGD",
            Currency::MYR => "MYR",
        }
    }

    /// Get the currency symbol (e.g., "Rp").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::IDR => "Rp",
            Currency::USD => "$",
            Currency::SGD => "S$",
            Currency::MYR => "RM",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::IDR => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "IDR" => Some(Currency::IDR),
            "USD" => Some(Currency::USD),
            "SGD" => Some(Currency::SGD),
            "MYR" => Some(Currency::MYR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (whole Rupiah
/// for IDR, cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Try to add another Money value, returning None if currencies differ
    /// or the addition overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_add(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_sub(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a scalar, saturating at the numeric bounds.
    ///
    /// Used for derived display totals, which must stay total functions.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor), self.currency)
    }

    /// Sum an iterator of Money values, returning None if any value is in a
    /// different currency or the sum overflows.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut total = Money::zero(currency);
        for m in iter {
            total = total.try_add(m)?;
        }
        Some(total)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "Rp25.000" or "$12.50").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format the amount without the currency symbol.
    ///
    /// Zero-decimal currencies group thousands with dots, Indonesian style.
    pub fn display_amount(&self) -> String {
        if self.currency.decimal_places() == 0 {
            return group_thousands(self.amount);
        }
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group an integer's digits in threes with dot separators.
fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_new() {
        let m = Money::new(25_000, Currency::IDR);
        assert_eq!(m.amount, 25_000);
        assert_eq!(m.currency, Currency::IDR);
    }

    #[test]
    fn test_money_display_idr() {
        assert_eq!(Money::new(5_000, Currency::IDR).display(), "Rp5.000");
        assert_eq!(Money::new(25_000, Currency::IDR).display(), "Rp25.000");
        assert_eq!(Money::new(1_250_000, Currency::IDR).display(), "Rp1.250.000");
        assert_eq!(Money::new(999, Currency::IDR).display(), "Rp999");
    }

    #[test]
    fn test_money_display_decimal_currency() {
        let m = Money::new(1250, Currency::USD);
        assert_eq!(m.display(), "$12.50");
    }

    #[test]
    fn test_money_display_negative() {
        let m = Money::new(-25_000, Currency::IDR);
        assert_eq!(m.display(), "Rp-25.000");
    }

    #[test]
    fn test_money_try_add() {
        let a = Money::new(10_000, Currency::IDR);
        let b = Money::new(5_000, Currency::IDR);
        assert_eq!(a.try_add(&b), Some(Money::new(15_000, Currency::IDR)));
    }

    #[test]
    fn test_money_try_add_currency_mismatch() {
        let idr = Money::new(10_000, Currency::IDR);
        let usd = Money::new(10_000, Currency::USD);
        assert_eq!(idr.try_add(&usd), None);
    }

    #[test]
    fn test_money_try_subtract() {
        let a = Money::new(10_000, Currency::IDR);
        let b = Money::new(3_000, Currency::IDR);
        assert_eq!(a.try_subtract(&b), Some(Money::new(7_000, Currency::IDR)));
    }

    #[test]
    fn test_money_try_multiply() {
        let m = Money::new(25_000, Currency::IDR);
        assert_eq!(m.try_multiply(3), Some(Money::new(75_000, Currency::IDR)));
        assert_eq!(Money::new(i64::MAX, Currency::IDR).try_multiply(2), None);
    }

    #[test]
    fn test_money_saturating_multiply() {
        let m = Money::new(i64::MAX, Currency::IDR);
        assert_eq!(m.saturating_multiply(2).amount, i64::MAX);
    }

    #[test]
    fn test_money_try_sum() {
        let values = vec![
            Money::new(10_000, Currency::IDR),
            Money::new(5_000, Currency::IDR),
        ];
        let total = Money::try_sum(values.iter(), Currency::IDR);
        assert_eq!(total, Some(Money::new(15_000, Currency::IDR)));
    }

    #[test]
    fn test_money_try_sum_mismatch() {
        let values = vec![
            Money::new(10_000, Currency::IDR),
            Money::new(5_000, Currency::USD),
        ];
        assert_eq!(Money::try_sum(values.iter(), Currency::IDR), None);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("IDR"), Some(Currency::IDR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }

    #[test]
    fn test_currency_decimal_places() {
        assert_eq!(Currency::IDR.decimal_places(), 0);
        assert_eq!(Currency::USD.decimal_places(), 2);
    }
}
