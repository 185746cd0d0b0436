//! Minor-unit money arithmetic.
//!
//! Amounts are stored as a signed count of minor units (cents) and all ledger
//! arithmetic is exact integer arithmetic. Decimal representations exist only
//! at the serialization boundary, so floating-point drift cannot compound
//! across reports.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value_object::ValueObject;

/// Tolerance for every "is balanced" comparison and for suppressing
/// near-zero balances from balance-consuming reports: one cent.
///
/// Note this is a *reporting* policy. The general ledger includes an account
/// iff it has at least one posted line, which is a structural rule with no
/// epsilon; the two must stay distinct.
pub const REPORTING_EPSILON: Amount = Amount::from_minor(1);

/// A monetary amount in minor units (cents).
///
/// Signed: report totals such as net income may legitimately be negative.
/// Journal lines themselves carry non-negative debit/credit columns, enforced
/// by the entry validator rather than by this type.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Construct from minor units (cents).
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Construct from whole currency units.
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Convert a decimal number at the boundary, rounding half away from zero
    /// to the nearest cent.
    ///
    /// Rejects non-finite input and values outside the representable range.
    pub fn try_from_f64(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        let minor = (value * 100.0).round();
        if minor < i64::MIN as f64 || minor > i64::MAX as f64 {
            return Err(AmountError::OutOfRange);
        }
        Ok(Self(minor as i64))
    }

    /// Decimal value for the serialization boundary.
    ///
    /// Exact for any amount a ledger will ever hold (f64 mantissa covers
    /// integers up to 2^53 minor units).
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn minor(self) -> i64 {
        self.0
    }

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl ValueObject for Amount {}

/// Boundary conversion failure (never produced by ledger arithmetic itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is not a finite number")]
    NotFinite,
    #[error("amount is out of range")]
    OutOfRange,
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        self.0 -= rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

// Wire form is a plain decimal number, matching the JSON the reports emit.
// Deserialization accepts anything serde_json parses as f64 (integers
// included) and rounds to the nearest cent.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Amount::try_from_f64(value).map_err(serde::de::Error::custom)
    }
}
