//! Monetary amounts as displayed by the banking UI.
//!
//! The UI renders currency-formatted text (`$25,430.00`, `+$500.00`). A
//! [`Money`] value carries two-fraction-digit precision: parsing strips the
//! symbol and thousands separators, formatting puts them back. The invariant
//! is that any displayed amount round-trips to the same numeric value within
//! half a cent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::error::{Error, Result};

/// Tolerance for comparing amounts recovered from display text.
pub const TOLERANCE: f64 = 0.005;

/// A decimal amount with two-fraction-digit display precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    value: f64,
}

impl Money {
    /// Create an amount, rounding to two decimal places.
    pub fn new(value: f64) -> Self {
        Self {
            value: (value * 100.0).round() / 100.0,
        }
    }

    /// Zero dollars.
    pub fn zero() -> Self {
        Self::new(0.0)
    }

    /// Parse currency-formatted display text.
    ///
    /// Accepts an optional leading sign, an optional `$`, and thousands
    /// separators: `$25,430.00`, `+$500.00`, `-$120.00`, `1000`.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let (sign, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1.0, rest),
            None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let cleaned: String = rest
            .chars()
            .filter(|c| *c != '$' && *c != ',')
            .collect();
        if cleaned.is_empty() {
            return Err(Error::MoneyParse {
                text: text.to_string(),
                reason: "no digits".to_string(),
            });
        }
        let value: f64 = cleaned.parse().map_err(|e| Error::MoneyParse {
            text: text.to_string(),
            reason: format!("{e}"),
        })?;
        Ok(Self::new(sign * value))
    }

    /// Numeric value, rounded to two decimals.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whole-cent representation.
    pub fn cents(&self) -> i64 {
        (self.value * 100.0).round() as i64
    }

    /// Equality within display tolerance (half a cent).
    pub fn approx_eq(&self, other: Money) -> bool {
        (self.value - other.value).abs() < TOLERANCE
    }

    /// The raw value the amount field expects, without symbol or separators.
    pub fn input_text(&self) -> String {
        format!("{:.2}", self.value)
    }

    /// Display text with an explicit sign, as transaction rows render it:
    /// `+$500.00` / `-$120.00`.
    pub fn signed_display(&self) -> String {
        if self.cents() < 0 {
            format!("{self}")
        } else {
            format!("+{self}")
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents();
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.abs();
        let whole = (abs / 100).to_string();
        let frac = abs % 100;

        // Insert thousands separators from the right.
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{sign}${grouped}.{frac:02}")
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::new(self.value + rhs.value)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money::new(self.value - rhs.value)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::new(-self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_currency_formatted_text() {
        let m = Money::parse("$25,430.00").unwrap();
        assert_eq!(m.cents(), 2_543_000);
    }

    #[test]
    fn parses_signed_amounts() {
        assert_eq!(Money::parse("+$500.00").unwrap().cents(), 50_000);
        assert_eq!(Money::parse("-$120.00").unwrap().cents(), -12_000);
    }

    #[test]
    fn parses_bare_numbers() {
        assert_eq!(Money::parse("1000").unwrap().cents(), 100_000);
        assert_eq!(Money::parse(" 0.01 ").unwrap().cents(), 1);
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("$").is_err());
        assert!(Money::parse("twelve dollars").is_err());
    }

    #[test]
    fn display_round_trips() {
        for value in [0.0, 0.01, 999.99, 25_430.0, 1_234_567.89, -120.0] {
            let m = Money::new(value);
            let shown = m.to_string();
            let back = Money::parse(&shown).unwrap();
            assert!(m.approx_eq(back), "{value} -> {shown} -> {}", back.value());
        }
    }

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Money::new(25_430.0).to_string(), "$25,430.00");
        assert_eq!(Money::new(1_234_567.89).to_string(), "$1,234,567.89");
        assert_eq!(Money::new(999.5).to_string(), "$999.50");
        assert_eq!(Money::new(-120.0).to_string(), "-$120.00");
    }

    #[test]
    fn signed_display_marks_credits() {
        assert_eq!(Money::new(500.0).signed_display(), "+$500.00");
        assert_eq!(Money::new(-120.0).signed_display(), "-$120.00");
    }

    #[test]
    fn approx_eq_within_half_cent() {
        let a = Money::new(750.50);
        assert!(a.approx_eq(Money::new(750.504)));
        assert!(!a.approx_eq(Money::new(750.51)));
    }

    #[test]
    fn arithmetic_stays_rounded() {
        let start = Money::new(25_430.0);
        let delta = Money::new(750.50);
        assert!(((start + delta) - delta).approx_eq(start));
    }
}
