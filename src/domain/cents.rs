use crate::utils::error::DemoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg};
use std::str::FromStr;

/// A monetary amount in minor units (cents).
///
/// Negative amounts are allowed and represent debt. Equality and ordering
/// follow the wrapped integer, so sorting a slice of `Cents` sorts by amount.
///
/// Arithmetic wraps on overflow in every build profile: `i64::MAX + 1`
/// yields `i64::MIN`, and negating `i64::MIN` yields `i64::MIN`. Use
/// [`Cents::checked_add`] when overflow must be detected.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(amount: i64) -> Self {
        Cents(amount)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Overwrites the stored amount in place.
    pub fn set_amount(&mut self, amount: i64) {
        self.0 = amount;
    }

    pub const fn is_non_zero(&self) -> bool {
        self.0 != 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Cents)
    }
}

impl From<i64> for Cents {
    fn from(amount: i64) -> Self {
        Cents(amount)
    }
}

impl From<Cents> for i64 {
    fn from(cents: Cents) -> Self {
        cents.0
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cents(self.0.wrapping_add(other.0))
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Neg for Cents {
    type Output = Self;

    fn neg(self) -> Self {
        Cents(self.0.wrapping_neg())
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Cents> for Cents {
    fn sum<I: Iterator<Item = &'a Cents>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Cents {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        token
            .parse::<i64>()
            .map(Cents)
            .map_err(|source| DemoError::InvalidAmount {
                token: token.to_string(),
                source,
            })
    }
}
