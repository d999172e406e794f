use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::fmt;

/// A numeric value flowing through the calculator.
///
/// Typed operands and most results are exact decimals. Results that leave the
/// `Decimal` range, or that are too small to keep their significant digits in
/// 28 decimal places, are carried as `f64` instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Exact(Decimal),
    Approx(f64),
}

impl Number {
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Exact(value) => value.is_zero(),
            Number::Approx(value) => *value == 0.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Number::Exact(_) => true,
            Number::Approx(value) => value.is_finite(),
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Exact(value) => value.to_f64().unwrap_or(f64::NAN),
            Number::Approx(value) => *value,
        }
    }

    /// Whether the magnitude calls for exponential notation: at least `1e10`,
    /// or non-zero and below `1e-10`.
    pub fn needs_exponent(&self) -> bool {
        if self.is_zero() {
            return false;
        }
        match self {
            Number::Exact(value) => {
                let magnitude = value.abs();
                magnitude >= Decimal::new(10_000_000_000, 0) || magnitude < Decimal::new(1, 10)
            }
            Number::Approx(value) => {
                let magnitude = value.abs();
                magnitude >= 1e10 || magnitude < 1e-10
            }
        }
    }

    /// Sign, significant digits and decimal exponent of the value, so that
    /// `d.ddd × 10^exponent` reproduces it.
    pub(crate) fn scientific_parts(&self) -> (bool, String, i32) {
        match self {
            Number::Exact(value) => {
                let value = value.normalize();
                let digits = value.mantissa().unsigned_abs().to_string();
                let exponent = digits.len() as i32 - 1 - value.scale() as i32;
                (value.is_sign_negative(), digits, exponent)
            }
            Number::Approx(value) => {
                // `{:e}` prints the shortest digits that round-trip, e.g. `1.5e-32`.
                let shortest = format!("{:e}", value.abs());
                let (mantissa, exponent) = shortest.split_once('e').unwrap_or((shortest.as_str(), "0"));
                let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
                let exponent = exponent.parse().unwrap_or(0);
                (value.is_sign_negative(), digits, exponent)
            }
        }
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Exact(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Exact(value) => write!(f, "{value}"),
            Number::Approx(value) => write!(f, "{value:e}"),
        }
    }
}
