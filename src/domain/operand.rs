use super::number::Number;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// An operand as typed on the keypad.
///
/// The text is kept verbatim while the user is entering it (`"0."`, `"-12"`)
/// and only converted to a number at evaluation boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Operand(String);

impl Operand {
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Renders a computed or converted number as plain operand text.
    pub fn from_decimal(value: Decimal) -> Self {
        if value.is_zero() {
            return Self::zero();
        }
        Self(value.normalize().to_string())
    }

    pub(crate) fn from_formatted(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero_literal(&self) -> bool {
        self.0 == "0"
    }

    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// Number of `0`-`9` characters, ignoring sign, point and exponent marks.
    pub fn digit_count(&self) -> usize {
        self.0.chars().filter(char::is_ascii_digit).count()
    }

    pub fn push_digit(&mut self, digit: char) {
        if self.is_zero_literal() {
            self.0.clear();
        }
        self.0.push(digit);
    }

    pub fn push_decimal_point(&mut self) {
        self.0.push('.');
    }

    pub fn toggle_sign(&mut self) {
        match self.0.strip_prefix('-') {
            Some(rest) => self.0 = rest.to_string(),
            None => self.0.insert(0, '-'),
        }
    }

    pub fn is_exponential(&self) -> bool {
        self.0.contains(['e', 'E'])
    }

    /// Drops the last character, collapsing to `"0"` instead of leaving an
    /// empty or sign-only operand. Exponential results cannot be edited
    /// digit by digit and collapse as a whole.
    pub fn pop(&mut self) {
        let len = self.0.chars().count();
        if len <= 1 || (len == 2 && self.is_negative()) || self.is_exponential() {
            *self = Self::zero();
        } else {
            self.0.pop();
        }
    }

    /// Strict numeric conversion.
    ///
    /// Accepts an optional leading `-`, digits with at most one `.` (a
    /// trailing point is allowed, as in `"5."`), and an optional signed
    /// exponent as produced by the result formatter (`"1.00000e+11"`).
    /// Exponential text that a `Decimal` cannot hold exactly is read as `f64`.
    pub fn parse(&self) -> Option<Number> {
        let (mantissa, exponent) = match self.0.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (self.0.as_str(), None),
        };
        let value = parse_plain(mantissa)?;
        let Some(exponent) = exponent else {
            return Some(Number::Exact(value));
        };

        let exponent: i32 = exponent.parse().ok()?;
        if let Some(exact) = scale_by_exponent(value, exponent) {
            return Some(Number::Exact(exact));
        }
        self.0
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Number::Approx)
    }
}

fn parse_plain(text: &str) -> Option<Decimal> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };
    let well_formed = !int_part.is_empty()
        && int_part.chars().all(|c| c.is_ascii_digit())
        && frac_part.chars().all(|c| c.is_ascii_digit());
    if !well_formed {
        return None;
    }
    Decimal::from_str(text.strip_suffix('.').unwrap_or(text)).ok()
}

/// Shifts `value` by a power of ten, or `None` when the result does not fit a
/// `Decimal` without rounding.
fn scale_by_exponent(value: Decimal, exponent: i32) -> Option<Decimal> {
    let value = value.normalize();
    if exponent < 0 {
        let scale = value.scale().checked_add(exponent.unsigned_abs())?;
        if scale > MAX_SCALE {
            return None;
        }
        let mut shifted = value;
        shifted.set_scale(scale).ok()?;
        return Some(shifted);
    }

    if exponent.unsigned_abs() > MAX_SCALE {
        return None;
    }
    let mut shifted = value;
    for _ in 0..exponent {
        shifted = shifted.checked_mul(Decimal::TEN)?;
    }
    Some(shifted)
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
