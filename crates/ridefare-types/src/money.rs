//! Fixed-point currency amount
//!
//! Amounts are held in minor units (paise) so that sums and splits are exact.
//! On the wire they appear as plain decimal numbers (`211.2`), which keeps
//! the TOML tariff files and the JSON stores readable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

const MINOR_PER_MAJOR: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Round a major-unit amount to the nearest minor unit (half away from zero)
    pub fn from_major(amount: f64) -> Self {
        Money((amount * MINOR_PER_MAJOR).round() as i64)
    }

    /// Like `from_major`, but `None` when the amount has no `i64` minor-unit value
    pub fn try_from_major(amount: f64) -> Option<Self> {
        let minor = (amount * MINOR_PER_MAJOR).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if minor.is_finite() && minor.abs() < i64::MAX as f64 {
            Some(Money(minor as i64))
        } else {
            None
        }
    }

    pub const fn minor(self) -> i64 {
        self.0
    }

    pub fn as_major(self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR
    }

    /// Split into `(share, remainder)`.
    ///
    /// The share is rounded to the nearest minor unit and the remainder takes
    /// whatever is left, so the two parts always add back to `self`.
    pub fn split(self, share: f64) -> (Money, Money) {
        let first = Money((self.0 as f64 * share).round() as i64);
        (first, self - first)
    }

    /// Divide evenly by a count, rounding to the nearest minor unit
    pub fn average(self, count: u64) -> Money {
        if count == 0 {
            return Money::ZERO;
        }
        Money((self.0 as f64 / count as f64).round() as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}₹{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("amount must be a finite number"));
        }
        Ok(Money::from_major(amount))
    }
}
