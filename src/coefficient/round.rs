//! Two-decimal presentation rounding.

use crate::error::{BestcharError, Result};
use serde::{Deserialize, Serialize};

/// A value rounded to two decimal places, stored as whole hundredths.
///
/// Serializes as its display string (`"0.63"`), so reports carry exactly the
/// digits that were printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rounded {
    hundredths: i64,
}

impl Rounded {
    /// Round to two decimals, ties toward zero.
    ///
    /// Rounding works on the shortest decimal representation of `x`, so a
    /// value that prints as `0.125` is a tie and rounds to `0.12`, while
    /// `0.1251` rounds to `0.13`. The sign is kept; zero is never negative.
    ///
    /// ```
    /// use bestchar::coefficient::Rounded;
    ///
    /// assert_eq!(Rounded::half_down(0.125).unwrap().to_string(), "0.12");
    /// assert_eq!(Rounded::half_down(-0.6344).unwrap().to_string(), "-0.63");
    /// ```
    pub fn half_down(x: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(BestcharError::Numerical(format!(
                "cannot round non-finite value {}",
                x
            )));
        }

        let repr = format!("{}", x.abs());
        let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
        let frac = frac_part.as_bytes();

        let whole: i64 = int_part
            .parse()
            .map_err(|_| BestcharError::Numerical(format!("value {} out of range", x)))?;
        let digit = |i: usize| frac.get(i).map_or(0, |d| i64::from(d - b'0'));

        // Strictly above the half-way point rounds away from zero.
        let round_up = match frac.get(2..).and_then(|rest| rest.split_first()) {
            Some((&first, tail)) => first > b'5' || (first == b'5' && tail.iter().any(|&d| d != b'0')),
            None => false,
        };

        let magnitude = whole
            .checked_mul(100)
            .and_then(|m| m.checked_add(digit(0) * 10 + digit(1) + i64::from(round_up)))
            .ok_or_else(|| BestcharError::Numerical(format!("value {} out of range", x)))?;

        Ok(Self {
            hundredths: if x < 0.0 { -magnitude } else { magnitude },
        })
    }

    /// The same magnitude with the opposite sign.
    pub fn negated(self) -> Self {
        Self {
            hundredths: -self.hundredths,
        }
    }

    /// Whole hundredths.
    pub fn hundredths(&self) -> i64 {
        self.hundredths
    }

    /// Value as a float.
    pub fn value(&self) -> f64 {
        self.hundredths as f64 / 100.0
    }
}

impl std::fmt::Display for Rounded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.hundredths < 0 { "-" } else { "" };
        let abs = self.hundredths.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl From<Rounded> for String {
    fn from(r: Rounded) -> Self {
        r.to_string()
    }
}

impl TryFrom<String> for Rounded {
    type Error = BestcharError;

    fn try_from(s: String) -> Result<Self> {
        let invalid = || BestcharError::InvalidParameter(format!("not a two-decimal value: '{}'", s));
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.as_str()),
        };
        let (whole, frac) = body.split_once('.').ok_or_else(invalid)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if frac.len() != 2 || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }
        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = frac.parse().map_err(|_| invalid())?;
        let magnitude = whole * 100 + frac;
        Ok(Self {
            hundredths: if negative { -magnitude } else { magnitude },
        })
    }
}
