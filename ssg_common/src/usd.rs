use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};
use sqlx::Type;
use thiserror::Error;

pub const USD_CURRENCY_CODE: &str = "USD";
pub const USD_CURRENCY_CODE_LOWER: &str = "usd";

//--------------------------------------     UsdCents       ----------------------------------------------------------
/// A US dollar amount in minor currency units (cents). Payment providers want integer cents, so all provider-facing
/// arithmetic happens in this type rather than in floating point.
#[derive(Debug, Clone, Copy, Default, Type, Ord, PartialOrd, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct UsdCents(i64);

impl Add for UsdCents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for UsdCents {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for UsdCents {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for UsdCents {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<i64> for UsdCents {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::from(self.value() * rhs)
    }
}

impl Sum for UsdCents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in US cents: {0}")]
pub struct UsdConversionError(String);

impl From<i64> for UsdCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl PartialEq for UsdCents {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for UsdCents {}

impl TryFrom<u64> for UsdCents {
    type Error = UsdConversionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > i64::MAX as u64 {
            Err(UsdConversionError(format!("Value {} is too large to convert to UsdCents", value)))
        } else {
            #[allow(clippy::cast_possible_wrap)]
            Ok(Self(value as i64))
        }
    }
}

impl Display for UsdCents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.to_major_units())
    }
}

impl UsdCents {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Converts a floating-point dollar amount to cents, rounding to the nearest cent.
    /// Non-finite values and values outside the i64 cent range are rejected.
    pub fn try_from_dollars(dollars: f64) -> Result<Self, UsdConversionError> {
        if !dollars.is_finite() {
            return Err(UsdConversionError(format!("{dollars} is not a finite dollar amount")));
        }
        let cents = (dollars * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return Err(UsdConversionError(format!("{dollars} is out of range for a cent amount")));
        }
        #[allow(clippy::cast_possible_truncation)]
        Ok(Self(cents as i64))
    }

    /// Formats the amount in major units with exactly two decimal places, e.g. `1999` -> `"19.99"`.
    /// This is the format the wallet provider expects in its `amount.value` field.
    pub fn to_major_units(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        format!("{sign}{}.{:02}", cents / 100, cents % 100)
    }
}
