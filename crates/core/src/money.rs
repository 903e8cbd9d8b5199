//! Monetary amounts and discount rates.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

const CENTS_PER_UNIT: u64 = 100;
const BASIS_POINTS_PER_UNIT: u32 = 10_000;

/// Non-negative amount in the smallest currency unit (cents).
///
/// There is no currency attached; all amounts in a store share one.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `Money::from_units(25)` is 25.00.
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(CENTS_PER_UNIT))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Amount after subtracting `rate` of it (the price a discounted buyer pays).
    pub fn discounted(self, rate: DiscountRate) -> Money {
        self.saturating_sub(rate.discount_on(self))
    }
}

impl ValueObject for Money {}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        self.saturating_add(rhs)
    }
}

impl core::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = self.saturating_add(rhs);
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / CENTS_PER_UNIT, self.0 % CENTS_PER_UNIT)
    }
}

/// Fraction of a price taken off at purchase time, in basis points.
///
/// `10_000` basis points is the whole price. Rates are not range-checked.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(u32);

impl DiscountRate {
    pub const NONE: DiscountRate = DiscountRate(0);

    pub const fn from_basis_points(bps: u32) -> Self {
        Self(bps)
    }

    /// Build a rate from a fraction such as `0.10`, rounded to the nearest
    /// basis point. Negative and NaN inputs become zero.
    pub fn from_fraction(fraction: f64) -> Self {
        // `as` saturates: NaN and negatives land on 0.
        Self((fraction * f64::from(BASIS_POINTS_PER_UNIT)).round() as u32)
    }

    pub const fn basis_points(self) -> u32 {
        self.0
    }

    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / f64::from(BASIS_POINTS_PER_UNIT)
    }

    /// Discount taken off `price`, rounded half up to the cent.
    pub fn discount_on(self, price: Money) -> Money {
        let scaled = u128::from(price.cents()) * u128::from(self.0);
        let half = u128::from(BASIS_POINTS_PER_UNIT / 2);
        let cents = (scaled + half) / u128::from(BASIS_POINTS_PER_UNIT);
        Money(u64::try_from(cents).unwrap_or(u64::MAX))
    }
}

impl ValueObject for DiscountRate {}

impl core::fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}
