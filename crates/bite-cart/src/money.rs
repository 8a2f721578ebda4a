//! Money type for representing menu prices and cart totals.
//!
//! Uses integer minor units (cents) so that totals such as
//! `18.90 + 2 × 32.90` come out exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "BRL" => Some(Currency::BRL),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., centavos
/// for BRL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Create a Money value from a decimal amount, rounding to minor units.
    ///
    /// ```
    /// use bite_cart::money::{Currency, Money};
    /// let price = Money::from_decimal(18.90, Currency::BRL);
    /// assert_eq!(price.amount_cents, 1890);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * currency.minor_per_major() as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Like [`Money::from_decimal`], but rejects NaN, infinities and amounts
    /// that don't fit in minor units.
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        let scaled = (amount * currency.minor_per_major() as f64).round();
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(scaled as i64, currency))
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_per_major() as f64
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "R$18.90").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "18.90").
    pub fn display_amount(&self) -> String {
        let unit = self.currency.minor_per_major();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let places = self.currency.decimal_places() as usize;
        format!(
            "{}{}.{:0places$}",
            sign,
            abs / unit as u64,
            abs % unit as u64
        )
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money::new(
            self.amount_cents.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }

    /// Sum an iterator of Money values, saturating at the numeric bounds.
    ///
    /// Values are expected to be in `currency`.
    pub fn sum(iter: impl Iterator<Item = Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc + m)
    }
}

/// Saturating addition.
///
/// Both operands must share a currency; callers such as `Cart` reject
/// mismatched prices before they get here. Use [`Money::try_add`] when the
/// currencies are not known to match.
impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        debug_assert_eq!(self.currency, other.currency, "currency mismatch in addition");
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.saturating_mul(quantity)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(18.90, Currency::BRL).amount_cents, 1890);
        assert_eq!(Money::from_decimal(32.90, Currency::BRL).amount_cents, 3290);
        assert_eq!(Money::from_decimal(0.0, Currency::BRL).amount_cents, 0);
    }

    #[test]
    fn test_try_from_decimal_rejects_non_finite() {
        assert!(Money::try_from_decimal(f64::NAN, Currency::BRL).is_none());
        assert!(Money::try_from_decimal(f64::INFINITY, Currency::BRL).is_none());
        assert!(Money::try_from_decimal(1e30, Currency::BRL).is_none());
        assert_eq!(
            Money::try_from_decimal(84.7, Currency::BRL),
            Some(Money::new(8470, Currency::BRL))
        );
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(1890, Currency::BRL);
        assert!((m.to_decimal() - 18.90).abs() < 1e-9);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(8470, Currency::BRL).display(), "R$84.70");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
        assert_eq!(Money::new(-150, Currency::EUR).display_amount(), "-1.50");
        assert_eq!(format!("{}", Money::zero(Currency::BRL)), "R$0.00");
    }

    #[test]
    fn test_money_arithmetic() {
        let burger = Money::new(1890, Currency::BRL);
        let pizza = Money::new(3290, Currency::BRL);
        assert_eq!((burger + pizza * 2).amount_cents, 8470);
        assert_eq!(burger.try_add(&pizza), Some(Money::new(5180, Currency::BRL)));
        assert_eq!(burger.try_add(&Money::new(1, Currency::USD)), None);
    }

    #[test]
    fn test_money_saturates() {
        let huge = Money::new(i64::MAX, Currency::BRL);
        assert_eq!(huge.saturating_mul(2).amount_cents, i64::MAX);
        assert_eq!((huge + huge).amount_cents, i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let prices = vec![Money::new(100, Currency::BRL), Money::new(250, Currency::BRL)];
        assert_eq!(
            Money::sum(prices.into_iter(), Currency::BRL),
            Money::new(350, Currency::BRL)
        );
        assert!(Money::sum(std::iter::empty(), Currency::BRL).is_zero());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("BRL"), Some(Currency::BRL));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("XYZ"), None);
        assert_eq!(Currency::default(), Currency::BRL);
    }
}
