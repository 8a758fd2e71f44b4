use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Signed money amount represented as **integer cents**.
///
/// Every monetary value in the engine (record amounts, totals, breakdown
/// sums) is an `Amount`, so aggregation never accumulates floating-point
/// drift. Stored record amounts are strictly positive; direction is carried
/// by the record kind. The only negative values appear in a derived balance.
///
/// # Examples
///
/// ```rust
/// use engine::Amount;
///
/// let amount: Amount = "75.50".parse().unwrap();
/// assert_eq!(amount.cents(), 7550);
/// assert_eq!(amount.to_string(), "75.50");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

}

impl fmt::Display for Amount {
    /// Formats the amount with exactly two decimal places, no symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        self.0 -= rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts an optional leading `-` and at most two fractional digits
    /// (rejects `12.345`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidAmount(format!("invalid amount: {s:?}"));

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::InvalidAmount("empty amount".to_string()));
        }

        let (sign, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (-1i64, stripped),
            None => (1i64, trimmed),
        };

        let (units_str, frac_str) = match rest.split_once('.') {
            Some((units, frac)) => (units, frac),
            None => (rest, ""),
        };

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac_str.len() > 2 || !frac_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| invalid())?;
        let frac: i64 = match frac_str.len() {
            0 => 0,
            1 => frac_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac_str.parse().map_err(|_| invalid())?,
        };

        let cents = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(frac))
            .and_then(|v| v.checked_mul(sign))
            .ok_or_else(|| LedgerError::InvalidAmount("amount too large".to_string()))?;

        Ok(Amount(cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Amount::new(0).to_string(), "0.00");
        assert_eq!(Amount::new(5).to_string(), "0.05");
        assert_eq!(Amount::new(7550).to_string(), "75.50");
        assert_eq!(Amount::new(200_000).to_string(), "2000.00");
        assert_eq!(Amount::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn parse_round_trips_display() {
        for cents in [0, 5, 99, 100, 7550, 200_000] {
            let amount = Amount::new(cents);
            assert_eq!(amount.to_string().parse::<Amount>().unwrap(), amount);
        }
    }

    #[test]
    fn parse_accepts_partial_fractions() {
        assert_eq!("10".parse::<Amount>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Amount>().unwrap().cents(), 1050);
        assert_eq!(" 2.30 ".parse::<Amount>().unwrap().cents(), 230);
        assert_eq!("-0.01".parse::<Amount>().unwrap().cents(), -1);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Amount>().is_err());
        assert!("12.345".parse::<Amount>().is_err());
        assert!("1,5".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
        assert!(".".parse::<Amount>().is_err());
    }

    #[test]
    fn balance_arithmetic_is_exact() {
        let income = Amount::new(200_000);
        let expense = Amount::new(7550);
        assert_eq!((income - expense).cents(), 192_450);
    }
}
