use crate::types::errors::MonetaryError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A non-negative, exact decimal amount of money.
///
/// The scale of the parsed value is preserved, so `"12.50"` is displayed and persisted as
/// `"12.50"` rather than `"12.5"`. Values always travel as strings (JSON and CSV alike) so no
/// binary floating point is ever involved.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Monetary(Decimal);

impl Monetary {
    /// Wraps a decimal, rejecting negative values.
    pub fn try_from_decimal(value: Decimal) -> Result<Self, MonetaryError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MonetaryError::Negative(value.to_string()));
        }

        let mut value = value;
        value.set_sign_positive(true);

        Ok(Monetary(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).map(Monetary)
    }

    /// Adds `rhs`, failing instead of losing precision or wrapping when the sum does not fit.
    pub fn try_add(self, rhs: Monetary) -> Result<Monetary, MonetaryError> {
        self.checked_add(rhs).ok_or(MonetaryError::Overflow)
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, formatter)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        if !value.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+')) {
            return Err(MonetaryError::InvalidFormat(format!("Value [{value}] is not a plain decimal number")));
        }

        let decimal = Decimal::from_str(value)?;
        let fraction_digits = value.split_once('.').map(|(_, fraction)| fraction.len()).unwrap_or_default();

        //NOTE: Decimal rounds anything past 28 fraction digits, which would silently change the amount
        if decimal.scale() as usize != fraction_digits {
            return Err(MonetaryError::InvalidFormat(format!("Value [{value}] has more precision than can be stored exactly")));
        }

        Monetary::try_from_decimal(decimal)
    }
}

impl From<Monetary> for Decimal {
    fn from(amount: Monetary) -> Self {
        amount.0
    }
}

impl Serialize for Monetary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Monetary::from_str(&value).map_err(de::Error::custom)
    }
}
