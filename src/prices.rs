//! Prices

use std::{fmt, iter::Sum, ops::Add};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A ticket price in whole currency units.
///
/// Prices are non-negative by construction: negative amounts are clamped to
/// zero at every boundary, including deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new price, clamping negative amounts to zero.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount.max(Decimal::ZERO))
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiplies the unit price by a quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl From<u64> for Price {
    fn from(units: u64) -> Self {
        Self(Decimal::from(units))
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

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <Decimal as Deserialize<'de>>::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_negative_to_zero() {
        let price = Price::new(Decimal::from(-50));

        assert_eq!(price, Price::ZERO);
    }

    #[test]
    fn from_whole_units() {
        let price = Price::from(299);

        assert_eq!(price.amount(), Decimal::from(299));
    }

    #[test]
    fn times_scales_by_quantity() {
        let price = Price::from(299);

        assert_eq!(price.times(5), Price::from(1495));
    }

    #[test]
    fn sum_of_prices() {
        let total: Price = [Price::from(299), Price::from(399)].into_iter().sum();

        assert_eq!(total, Price::from(698));
    }

    #[test]
    fn sum_of_no_prices_is_zero() {
        let total: Price = std::iter::empty().sum();

        assert_eq!(total, Price::ZERO);
    }
}
