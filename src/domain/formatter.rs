//! Result and display formatting.
//!
//! `format_result` turns an evaluated number into the operand text installed
//! after `=`; `format_display` renders an operand for the screen.

use super::number::Number;
use super::operand::Operand;

/// Fractional digits used by the exponential form.
pub const EXPONENTIAL_PRECISION: usize = 5;

/// How operands are rendered on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayFormat {
    pub grouping_separator: char,
    pub display_width: Option<usize>,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            display_width: Some(10),
        }
    }
}

/// Formats an evaluation result.
///
/// Magnitudes of at least `1e10`, or non-zero magnitudes below `1e-10`, use
/// exponential notation; everything else is plain decimal with the fraction
/// truncated to `max_fraction_digits` and trailing zeros removed.
pub fn format_result(value: Number, max_fraction_digits: usize) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    if value.needs_exponent() {
        return to_exponential(&value);
    }

    match value {
        Number::Exact(value) => truncate_fraction(&value.to_string(), max_fraction_digits),
        // `f64` display never switches to exponent form.
        Number::Approx(value) => truncate_fraction(&value.to_string(), max_fraction_digits),
    }
}

/// Renders an operand with thousands separators.
///
/// Exponential operands are passed through. When the grouped text exceeds the
/// configured width, it is re-rendered in exponential form.
pub fn format_display(operand: &Operand, format: &DisplayFormat) -> String {
    let text = operand.as_str();
    if operand.is_exponential() {
        return text.to_string();
    }

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut rendered = format!("{sign}{}", group_thousands(digits, format.grouping_separator));
    if let Some(frac_part) = frac_part {
        rendered.push('.');
        rendered.push_str(frac_part);
    }

    if let Some(width) = format.display_width
        && rendered.chars().count() > width
        && let Some(value) = operand.parse()
        && !value.is_zero()
    {
        return to_exponential(&value);
    }

    rendered
}

/// `1.00000e+11` style notation with an always-signed exponent.
///
/// The mantissa is rounded on its decimal digits, ties away from zero, so
/// `12345650000` renders as `1.23457e+10`.
pub fn to_exponential(value: &Number) -> String {
    let (negative, digits, mut exponent) = value.scientific_parts();
    let significant = EXPONENTIAL_PRECISION + 1;

    let mut kept: Vec<u8> = digits.bytes().take(significant).collect();
    kept.resize(significant, b'0');
    if digits.as_bytes().get(significant).is_some_and(|digit| *digit >= b'5')
        && !increment_digits(&mut kept)
    {
        // 9.99999|5 carries into a new leading digit.
        kept[0] = b'1';
        exponent += 1;
    }

    let sign = if negative { "-" } else { "" };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    let (lead, fraction) = kept.split_at(1);
    format!(
        "{sign}{}.{}e{exponent_sign}{}",
        char::from(lead[0]),
        String::from_utf8_lossy(fraction),
        exponent.unsigned_abs()
    )
}

/// Adds one to the last digit, carrying leftwards. Returns `false` when the
/// carry runs off the front.
fn increment_digits(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

fn truncate_fraction(text: &str, max_fraction_digits: usize) -> String {
    let Some((int_part, frac_part)) = text.split_once('.') else {
        return text.to_string();
    };

    let kept: String = frac_part.chars().take(max_fraction_digits).collect();
    let kept = kept.trim_end_matches('0');
    if kept.is_empty() {
        // Truncation can leave a negative value with nothing but zeros.
        if int_part == "-0" {
            return "0".to_string();
        }
        return int_part.to_string();
    }

    format!("{int_part}.{kept}")
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
