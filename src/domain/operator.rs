use super::number::Number;
use crate::error::{CalcError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A binary operator the calculator can hold pending.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    /// The symbol shown on the keypad and in the history line.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Accepts both keypad symbols and their ASCII keyboard equivalents.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '×' | '*' | 'x' => Some(Operator::Multiply),
            '÷' | '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Applies the operator.
    ///
    /// Exact operands are combined as decimals. When that overflows, or a
    /// product or quotient of non-zero operands drops below `1e-18` (where
    /// 28 decimal places no longer hold its significant digits), the result
    /// is computed in `f64`. Only division by zero and non-finite results fail.
    pub fn apply(self, lhs: Number, rhs: Number) -> Result<Number> {
        if self == Operator::Divide && rhs.is_zero() {
            return Err(CalcError::DivisionByZero);
        }

        if let (Number::Exact(l), Number::Exact(r)) = (lhs, rhs)
            && let Some(result) = self.apply_exact(l, r)
        {
            return Ok(Number::Exact(result));
        }

        let result = Number::Approx(self.apply_f64(lhs.to_f64(), rhs.to_f64()));
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }

    fn apply_exact(self, lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
        let result = match self {
            Operator::Add => lhs.checked_add(rhs)?,
            Operator::Subtract => lhs.checked_sub(rhs)?,
            Operator::Multiply => lhs.checked_mul(rhs)?,
            Operator::Divide => lhs.checked_div(rhs)?,
        };
        let scales = matches!(self, Operator::Multiply | Operator::Divide);
        if scales && !lhs.is_zero() && !rhs.is_zero() && result.abs() < Decimal::new(1, 18) {
            return None;
        }
        Some(result)
    }

    fn apply_f64(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn exact(value: Decimal) -> Number {
        Number::Exact(value)
    }

    #[test]
    fn test_keyboard_aliases() {
        assert_eq!(Operator::from_symbol('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('='), None);
    }

    #[test]
    fn test_apply_arithmetic() {
        let apply = |op: Operator, l, r| op.apply(exact(l), exact(r)).unwrap();
        assert_eq!(apply(Operator::Add, dec!(7), dec!(5)), exact(dec!(12)));
        assert_eq!(apply(Operator::Subtract, dec!(7), dec!(5)), exact(dec!(2)));
        assert_eq!(apply(Operator::Multiply, dec!(2.5), dec!(4)), exact(dec!(10)));
        assert_eq!(apply(Operator::Divide, dec!(1), dec!(4)), exact(dec!(0.25)));
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(
            Operator::Divide.apply(exact(dec!(10)), exact(dec!(0))),
            Err(CalcError::DivisionByZero)
        ));
        assert!(matches!(
            Operator::Divide.apply(exact(dec!(10)), exact(dec!(-0.0))),
            Err(CalcError::DivisionByZero)
        ));
        assert!(matches!(
            Operator::Divide.apply(Number::Approx(1e30), Number::Approx(0.0)),
            Err(CalcError::DivisionByZero)
        ));
    }

    #[test]
    fn test_decimal_overflow_falls_back_to_float() {
        let result = Operator::Multiply.apply(exact(Decimal::MAX), exact(dec!(2))).unwrap();
        match result {
            Number::Approx(value) => assert!((value / 1.58456e29 - 1.0).abs() < 1e-5),
            other => panic!("expected a float result, got {other:?}"),
        }
    }

    #[test]
    fn test_vanishing_product_falls_back_to_float() {
        let tiny = exact(dec!(0.00000000000001));
        let result = Operator::Multiply.apply(tiny, tiny).unwrap();
        match result {
            Number::Approx(value) => assert!((value / 1e-28 - 1.0).abs() < 1e-9),
            other => panic!("expected a float result, got {other:?}"),
        }
    }

    #[test]
    fn test_sum_to_zero_stays_exact() {
        assert_eq!(
            Operator::Add.apply(exact(dec!(5)), exact(dec!(-5))).unwrap(),
            exact(dec!(0))
        );
    }

    #[test]
    fn test_non_finite_result_overflows() {
        assert!(matches!(
            Operator::Multiply.apply(Number::Approx(1e300), Number::Approx(1e300)),
            Err(CalcError::Overflow)
        ));
    }
}
