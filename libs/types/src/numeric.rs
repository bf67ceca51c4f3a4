//! Fixed-point numeric types for prices and quantities
//!
//! Prices use rust_decimal for deterministic arithmetic (no floating-point
//! errors). Quantities are whole units of the traded instrument.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Price of one unit of the instrument.
///
/// Backed by `Decimal` so book ordering and trade values are exact.
/// Validation (strictly positive) happens at order submission, not here:
/// a `Price` is an arbitrary decimal until the book accepts it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Wrap a decimal value as a price.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a price from a whole number of currency units.
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parse a price from a decimal string (e.g. `"100.25"`).
    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Self(s.parse::<Decimal>()?))
    }

    /// Get the underlying decimal value.
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Whether the price is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity of instrument units.
///
/// Quantities are whole units; fractional sizes do not exist in this market
/// model. Zero is representable (an order drained by matching reaches zero
/// just before removal) but never rests in the book.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Wrap a unit count as a quantity.
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// The zero quantity.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the unit count.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Whether the quantity is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The smaller of two quantities.
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Self;

    /// # Panics
    /// Panics on underflow; callers subtract at most the available quantity.
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|q| q.0).sum())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
