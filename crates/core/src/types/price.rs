//! Menu prices using decimal arithmetic.
//!
//! Prices never go through floating point internally. They are normalized to
//! currency precision (two decimal places) when constructed, so a cart total
//! is an exact sum of exact line totals.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept for a price.
pub const CURRENCY_PRECISION: u32 = 2;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative amount in the restaurant's currency.
///
/// ## Examples
///
/// ```
/// use navegante_core::Price;
/// use rust_decimal::Decimal;
///
/// let paella = Price::new(Decimal::new(2499, 2)).unwrap();
/// assert_eq!(paella.display(), "$24.99");
/// assert_eq!(paella.times(2).display(), "$49.98");
///
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero, the total of an empty cart.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price, rounding to currency precision.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount.round_dp_with_strategy(
            CURRENCY_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )))
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// This price multiplied by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Format for display (e.g., "$24.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Serde adapter writing a [`Price`] as a JSON number (`24.99`) rather than a
/// string.
///
/// Use with `#[serde(with = "navegante_core::types::price::as_number")]` on
/// fields that page scripts read as numbers.
pub mod as_number {
    use rust_decimal::Decimal;
    use serde::{Deserializer, Serializer, de::Error as _};

    use super::Price;

    /// Serialize the price as a floating point number.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error.
    pub fn serialize<S: Serializer>(price: &Price, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&price.0, serializer)
    }

    /// Deserialize a price from a number.
    ///
    /// # Errors
    ///
    /// Fails on non-numeric input or a negative amount.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Price, D::Error> {
        let amount: Decimal = rust_decimal::serde::float::deserialize(deserializer)?;
        Price::new(amount).map_err(D::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Price {
        Price::new(Decimal::new(cents, 2)).unwrap()
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(
            Price::new(Decimal::new(-1, 2)),
            Err(PriceError::Negative(_))
        ));
    }

    #[test]
    fn test_new_accepts_zero() {
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_new_rounds_to_cents() {
        let p = Price::new(Decimal::new(12_995, 3)).unwrap();
        assert_eq!(p.amount(), Decimal::new(1300, 2));

        let p = Price::new(Decimal::new(12_994, 3)).unwrap();
        assert_eq!(p.amount(), Decimal::new(1299, 2));
    }

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::new(Decimal::from(20)).unwrap().display(), "$20.00");
        assert_eq!(price(699).to_string(), "6.99");
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [price(2499), price(699).times(2)].into_iter().sum();
        assert_eq!(total, price(3897));
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: Price = std::iter::empty().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let result: Result<Price, _> = serde_json::from_str("\"-3.00\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_as_number_writes_json_number() {
        #[derive(Serialize)]
        struct Line {
            #[serde(with = "as_number")]
            price: Price,
        }

        let json = serde_json::to_string(&Line { price: price(2499) }).unwrap();
        assert_eq!(json, r#"{"price":24.99}"#);
    }
}
